use alloy::primitives::{Address, BlockHash, BlockNumber, TxHash};

use serde::Serialize;

/// A router swap attributed to the transaction sender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapRecord {
    #[serde(rename = "Block number")]
    pub block_number: BlockNumber,
    #[serde(rename = "Block hash")]
    pub block_hash: BlockHash,
    #[serde(rename = "Transaction hash")]
    pub transaction_hash: TxHash,
    #[serde(rename = "Trader address")]
    pub trader_address: Address,
    #[serde(rename = "Token name")]
    pub token_name: String,
    #[serde(rename = "Token address")]
    pub token_address: Address,
    #[serde(rename = "Amount token received")]
    pub amount_received: f64,
    #[serde(rename = "Pool address")]
    pub pool_address: Address,
    #[serde(rename = "Block timestamp")]
    pub block_timestamp: u64,
}

#[cfg(test)]
mod tests {
    use super::SwapRecord;

    use alloy::primitives::{address, b256};
    use eyre::Result;

    #[test]
    fn test_serialize() -> Result<()> {
        let record = SwapRecord {
            block_number: 182390428,
            block_hash: b256!("8f1ac71d4fb2c8bbb9e0b5e6a9e4c1a1d0c1f3d4a2b6a0b3c4d5e6f7a8b9c0d1"),
            transaction_hash: b256!(
                "5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060"
            ),
            trader_address: address!("7381C38985dA304eBA18fCef5E1f6e9fA0798b84"),
            token_name: "Arbitrum".to_string(),
            token_address: address!("912CE59144191C1204E64559FE8253a0e49E6548"),
            amount_received: 1.5,
            pool_address: address!("b1026b8e7276e7ac75410f1fcbbe21796e8f7526"),
            block_timestamp: 1710334640,
        };

        let json = serde_json::to_value(&record)?;

        assert_eq!(json["Block number"], 182390428);
        assert_eq!(json["Token name"], "Arbitrum");
        assert_eq!(json["Amount token received"], 1.5);
        assert_eq!(json["Block timestamp"], 1710334640);
        assert_eq!(json.as_object().map(|fields| fields.len()), Some(9));

        Ok(())
    }
}
