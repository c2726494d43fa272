use super::{topic_address, TRANSFER};
use crate::chain::LogEntry;

use alloy::primitives::Address;

/// A token movement read from the indexed topics of a Transfer log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferEvent {
    pub token_address: Address,
    pub from: Address,
    pub to: Address,
}

impl TransferEvent {
    // None for non Transfer logs and for Transfer logs missing the from/to topics
    pub fn try_parse(log: &LogEntry) -> Option<Self> {
        if !TRANSFER.matches(log) {
            return None;
        }

        match (topic_address(log, 1), topic_address(log, 2)) {
            (Some(from), Some(to)) => Some(Self {
                token_address: *log.address(),
                from,
                to,
            }),
            _ => None,
        }
    }
}
