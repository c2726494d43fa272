use tianguis_primitives::{LiquidityPair, PairSource};

use eyre::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{info, instrument};

const UNKNOWN_DEX_ID: &str = "Unknown DEX ID";

/// Pairs in which `token_address` is the base token, in the order the aggregator listed them.
#[instrument(skip(pair_source))]
pub async fn find_liquidity_pairs<S: PairSource>(
    pair_source: &S,
    token_address: &str,
    max_concurrent_requests: usize,
) -> Result<Vec<LiquidityPair>> {
    let listed_pairs = pair_source.token_pairs(token_address).await?;
    if listed_pairs.is_empty() {
        info!("no pairs listed for token");
        return Ok(Vec::new());
    }

    let pair_details: Vec<_> = stream::iter(listed_pairs.iter())
        .map(|pair| pair_source.pair(pair.chain_id(), &pair.pair_address))
        .buffered(max_concurrent_requests.max(1))
        .try_collect()
        .await?;

    let liquidity_pairs = listed_pairs
        .iter()
        .zip(pair_details)
        .filter(|(_, detail)| {
            detail
                .as_ref()
                .is_some_and(|detail| detail.has_base_token(token_address))
        })
        .map(|(pair, _)| LiquidityPair {
            pair_address: pair.pair_address.clone(),
            dex: pair
                .dex_id
                .clone()
                .unwrap_or_else(|| UNKNOWN_DEX_ID.to_string()),
            chain: pair.chain_id().to_string(),
        })
        .collect::<Vec<_>>();

    info!(
        listed = listed_pairs.len(),
        matched = liquidity_pairs.len(),
        "found liquidity pairs"
    );

    Ok(liquidity_pairs)
}
