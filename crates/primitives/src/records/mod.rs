pub use creation_record::{CreationRecord, PoolCreation, TokenCreation};
pub use liquidity_pair::LiquidityPair;
pub use swap_record::SwapRecord;

mod creation_record;
mod liquidity_pair;
mod swap_record;
