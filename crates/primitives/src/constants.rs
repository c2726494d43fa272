use alloy::primitives::{address, Address};

// Camelot router on Arbitrum
pub const CAMELOT_ROUTER_ADDRESS: Address = address!("1F721E2E82F6676FCE4eA07A5958cF098D339e18");

pub const DEXSCREENER_URL: &str = "https://api.dexscreener.com";
pub const MAX_CONCURRENT_REQUESTS: usize = 8;
