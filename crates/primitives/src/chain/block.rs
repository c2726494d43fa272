use alloy::primitives::{Address, BlockHash, BlockNumber, TxHash};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub hash: TxHash,
    pub from: Address,
    // None for contract creations
    pub to: Option<Address>,
}

impl Transaction {
    pub fn new(hash: TxHash, from: Address, to: Option<Address>) -> Self {
        Self { hash, from, to }
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

/// A mined block with its transactions in block order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    number: BlockNumber,
    hash: BlockHash,
    timestamp: u64,
    transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(
        number: BlockNumber,
        hash: BlockHash,
        timestamp: u64,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            number,
            hash,
            timestamp,
            transactions,
        }
    }

    pub fn number(&self) -> BlockNumber {
        self.number
    }

    pub fn hash(&self) -> &BlockHash {
        &self.hash
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
