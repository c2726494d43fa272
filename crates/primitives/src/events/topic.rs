use crate::chain::LogEntry;

use alloy::primitives::{Address, B256};

/// Reads an indexed address argument: the low 20 bytes of the topic, the upper 12 bytes are
/// zero padding.
pub fn address_from_topic(topic: &B256) -> Address {
    Address::from_slice(&topic[12..])
}

pub fn topic_address(log: &LogEntry, idx: usize) -> Option<Address> {
    log.topic(idx).map(address_from_topic)
}
