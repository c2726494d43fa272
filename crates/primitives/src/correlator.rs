use crate::{chain::Receipt, events::TransferEvent};

use alloy::primitives::{Address, TxHash};

use eyre::{eyre, Report};
use std::{collections::BTreeMap, fmt::Display, str::FromStr};
use tracing::warn;

/// Rule for choosing among several transfers sent by the same address within one transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorrelationPolicy {
    /// Last matching transfer in log order.
    #[default]
    Last,
    /// First matching transfer in log order.
    First,
    /// Closest matching transfer logged before the swap.
    Preceding,
}

impl FromStr for CorrelationPolicy {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Ok(CorrelationPolicy::Last),
            "first" => Ok(CorrelationPolicy::First),
            "preceding" => Ok(CorrelationPolicy::Preceding),
            _ => Err(eyre!("Failed to parse correlation policy: {}", s)),
        }
    }
}

impl Display for CorrelationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationPolicy::Last => write!(f, "last"),
            CorrelationPolicy::First => write!(f, "first"),
            CorrelationPolicy::Preceding => write!(f, "preceding"),
        }
    }
}

/// Transfer logs of a single receipt keyed by their position in the receipt's log list.
pub struct TransferIndex {
    transaction_hash: TxHash,
    transfers: BTreeMap<usize, TransferEvent>,
}

impl TransferIndex {
    pub fn from_receipt(receipt: &Receipt) -> Self {
        let transfers = receipt
            .logs()
            .iter()
            .enumerate()
            .filter_map(|(position, log)| {
                TransferEvent::try_parse(log).map(|transfer| (position, transfer))
            })
            .collect();

        Self {
            transaction_hash: *receipt.transaction_hash(),
            transfers,
        }
    }

    /// Picks the transfer sent by `sender` for the swap logged at `swap_position`.
    pub fn correlate(
        &self,
        sender: &Address,
        swap_position: usize,
        policy: CorrelationPolicy,
    ) -> Option<&TransferEvent> {
        let candidates = self
            .transfers
            .iter()
            .filter(|(_, transfer)| transfer.from == *sender)
            .collect::<Vec<_>>();

        if candidates.len() > 1 {
            warn!(
                transaction_hash = self.transaction_hash.to_string(),
                candidates = candidates.len(),
                policy = policy.to_string(),
                "multiple transfers from sender"
            );
        }

        let selected = match policy {
            CorrelationPolicy::Last => candidates.last(),
            CorrelationPolicy::First => candidates.first(),
            CorrelationPolicy::Preceding => candidates
                .iter()
                .rev()
                .find(|(position, _)| **position < swap_position),
        };

        selected.map(|(_, transfer)| *transfer)
    }
}
