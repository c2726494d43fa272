pub use deployment_scanner::DeploymentScanner;
pub use liquidity_pairs::find_liquidity_pairs;
pub use swap_scanner::SwapScanner;

mod deployment_scanner;
mod liquidity_pairs;
mod swap_scanner;

use tianguis_primitives::{Block, BlockId, ChainReader, Receipt};

use alloy::primitives::BlockNumber;

use eyre::{eyre, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::ops::RangeInclusive;

/// Fetches every transaction receipt of `block`, at most `max_concurrent_requests` at a time.
/// Receipts are returned in block order.
pub async fn fetch_receipts<R: ChainReader>(
    chain_reader: &R,
    block: &Block,
    max_concurrent_requests: usize,
) -> Result<Vec<Receipt>> {
    stream::iter(block.transactions())
        .map(|transaction| chain_reader.transaction_receipt(transaction.hash))
        .buffered(max_concurrent_requests.max(1))
        .try_collect()
        .await
}

pub async fn resolve_block_range<R: ChainReader>(
    chain_reader: &R,
    start_block_id: BlockId,
    end_block_id: BlockId,
) -> Result<RangeInclusive<BlockNumber>> {
    let (start, end) = match (start_block_id, end_block_id) {
        (BlockId::BlockNumber(start), BlockId::BlockNumber(end)) => (start, end),
        (BlockId::BlockNumber(start), BlockId::Latest) => (start, chain_reader.block_number().await?),
        (BlockId::Latest, BlockId::BlockNumber(end)) => (chain_reader.block_number().await?, end),
        (BlockId::Latest, BlockId::Latest) => {
            let latest = chain_reader.block_number().await?;
            (latest, latest)
        }
    };

    if start > end {
        return Err(eyre!(
            "Invalid block range: start {} is after end {}",
            start,
            end
        ));
    }

    Ok(start..=end)
}
