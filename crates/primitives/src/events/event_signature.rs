use crate::chain::LogEntry;

use alloy::primitives::{keccak256, B256};

use lazy_static::lazy_static;

/// The topic hash of a canonical event signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSignature {
    hash: B256,
}

impl EventSignature {
    pub fn new(signature: &str) -> Self {
        Self {
            hash: keccak256(signature.as_bytes()),
        }
    }

    pub fn hash(&self) -> &B256 {
        &self.hash
    }

    // logs without topics never match
    pub fn matches(&self, log: &LogEntry) -> bool {
        log.topic(0).is_some_and(|topic| *topic == self.hash)
    }
}

lazy_static! {
    pub static ref SWAP: EventSignature =
        EventSignature::new("Swap(address,address,int256,int256,uint160,uint128,int24)");
    pub static ref TRANSFER: EventSignature =
        EventSignature::new("Transfer(address,address,uint256)");
    pub static ref POOL_CREATED: EventSignature =
        EventSignature::new("PoolCreated(address,address,uint24,int24,address)");
    pub static ref MINT: EventSignature =
        EventSignature::new("Mint(address,uint256,uint256,uint256)");
}
