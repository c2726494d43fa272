use eyre::{eyre, Report};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Task {
    Swaps,
    Deployments,
    Pairs,
}

impl FromStr for Task {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "swaps" => Ok(Task::Swaps),
            "deployments" => Ok(Task::Deployments),
            "pairs" => Ok(Task::Pairs),
            _ => Err(eyre!("Failed to parse task: {}", s)),
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::Swaps => write!(f, "swaps"),
            Task::Deployments => write!(f, "deployments"),
            Task::Pairs => write!(f, "pairs"),
        }
    }
}
