use alloy::primitives::BlockNumber;

use eyre::{eyre, Report};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlockId {
    Latest,
    BlockNumber(BlockNumber),
}

impl FromStr for BlockId {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("latest") {
            return Ok(BlockId::Latest);
        }

        let parsed = match s.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => s.parse::<u64>(),
        };

        parsed
            .map(BlockId::BlockNumber)
            .map_err(|_| eyre!("Failed to parse block id: {}", s))
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockId::Latest => write!(f, "latest"),
            BlockId::BlockNumber(block_number) => write!(f, "{}", block_number),
        }
    }
}
