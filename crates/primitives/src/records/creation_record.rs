use alloy::primitives::{Address, BlockHash, BlockNumber, TxHash};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCreation {
    #[serde(rename = "Token address")]
    pub token_address: Address,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Deployer")]
    pub deployer: Address,
    #[serde(rename = "Transaction hash")]
    pub transaction_hash: TxHash,
    #[serde(rename = "Block Number")]
    pub block_number: BlockNumber,
    #[serde(rename = "Block Hash")]
    pub block_hash: BlockHash,
    #[serde(rename = "Timestamp")]
    pub timestamp: u64,
}

/// A new pool, described from the perspective of token1 with token0 as the pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolCreation {
    #[serde(rename = "Token address")]
    pub token_address: Address,
    #[serde(rename = "Token name")]
    pub token_name: String,
    #[serde(rename = "Token symbol")]
    pub token_symbol: String,
    #[serde(rename = "Paired token")]
    pub paired_token: String,
    #[serde(rename = "Pool address")]
    pub pool_address: Address,
    #[serde(rename = "Fee")]
    pub fee: u32,
    #[serde(rename = "Tick spacing")]
    pub tick_spacing: i32,
    #[serde(rename = "Transaction hash")]
    pub transaction_hash: TxHash,
    #[serde(rename = "Block number")]
    pub block_number: BlockNumber,
    #[serde(rename = "Block hash")]
    pub block_hash: BlockHash,
    #[serde(rename = "Timestamp")]
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "Type")]
pub enum CreationRecord {
    #[serde(rename = "Token Creation")]
    Token(TokenCreation),
    #[serde(rename = "Pool Creation")]
    Pool(PoolCreation),
}

impl CreationRecord {
    pub fn transaction_hash(&self) -> &TxHash {
        match self {
            CreationRecord::Token(token) => &token.transaction_hash,
            CreationRecord::Pool(pool) => &pool.transaction_hash,
        }
    }
}
