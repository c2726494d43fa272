use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiquidityPair {
    #[serde(rename = "Pair address")]
    pub pair_address: String,
    #[serde(rename = "DEX")]
    pub dex: String,
    #[serde(rename = "Chain")]
    pub chain: String,
}
