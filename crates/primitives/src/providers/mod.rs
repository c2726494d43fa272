pub use chain_reader::ChainReader;
pub use dexscreener::{DexPair, DexScreenerClient, DexToken, PairSource, DEFAULT_CHAIN_ID};
pub use rpc_provider::{new_http_provider, RpcProvider};
pub use token_provider::{TokenProvider, TOKEN_CACHE_SIZE};

mod chain_reader;
mod dexscreener;
mod rpc_provider;
mod token_provider;
