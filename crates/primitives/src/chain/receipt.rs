use super::LogEntry;

use alloy::primitives::{Address, TxHash};

/// The parts of a transaction receipt the scanners read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    transaction_hash: TxHash,
    contract_address: Option<Address>,
    logs: Vec<LogEntry>,
}

impl Receipt {
    pub fn new(transaction_hash: TxHash, logs: Vec<LogEntry>) -> Self {
        Self {
            transaction_hash,
            contract_address: None,
            logs,
        }
    }

    pub fn with_contract_address(mut self, contract_address: Address) -> Self {
        self.contract_address = Some(contract_address);
        self
    }

    pub fn transaction_hash(&self) -> &TxHash {
        &self.transaction_hash
    }

    pub fn contract_address(&self) -> Option<&Address> {
        self.contract_address.as_ref()
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }
}
