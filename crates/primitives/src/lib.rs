pub use amount::adjust_amount;
pub use block_id::BlockId;
pub use chain::{Block, LogEntry, Receipt, Transaction};
pub use correlator::{CorrelationPolicy, TransferIndex};
pub use events::{
    address_from_topic, topic_address, EventSignature, PoolCreatedEvent, SwapEvent,
    TransferEvent, MINT, POOL_CREATED, SWAP, TRANSFER,
};
pub use providers::{
    new_http_provider, ChainReader, DexPair, DexScreenerClient, DexToken, PairSource,
    RpcProvider, TokenProvider, DEFAULT_CHAIN_ID, TOKEN_CACHE_SIZE,
};
pub use records::{CreationRecord, LiquidityPair, PoolCreation, SwapRecord, TokenCreation};

mod amount;
mod block_id;
mod chain;
mod correlator;
mod events;
mod providers;
mod records;

pub mod abi;
pub mod constants;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
