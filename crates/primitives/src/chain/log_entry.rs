use alloy::primitives::{Address, Bytes, B256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    address: Address,
    topics: Vec<B256>,
    data: Bytes,
    // block level index, absent for pending logs
    log_index: Option<u64>,
}

impl LogEntry {
    pub fn new(address: Address, topics: Vec<B256>, data: Bytes) -> Self {
        Self {
            address,
            topics,
            data,
            log_index: None,
        }
    }

    pub fn with_log_index(mut self, log_index: u64) -> Self {
        self.log_index = Some(log_index);
        self
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn topics(&self) -> &[B256] {
        &self.topics
    }

    pub fn topic(&self, idx: usize) -> Option<&B256> {
        self.topics.get(idx)
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn log_index(&self) -> Option<u64> {
        self.log_index
    }
}
