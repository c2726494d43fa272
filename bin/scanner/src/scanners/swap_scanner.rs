use super::fetch_receipts;

use tianguis_primitives::{
    adjust_amount, topic_address, ChainReader, CorrelationPolicy, SwapEvent, SwapRecord,
    TokenProvider, TransferIndex, SWAP,
};

use alloy::primitives::{Address, BlockNumber};

use eyre::{Result, WrapErr};
use fnv::FnvHashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Emits one record per transaction that swapped through the router.
pub struct SwapScanner<R> {
    chain_reader: Arc<R>,
    token_provider: Arc<TokenProvider<R>>,
    router_address: Address,
    correlation_policy: CorrelationPolicy,
    max_concurrent_requests: usize,
}

impl<R: ChainReader> SwapScanner<R> {
    pub fn new(
        chain_reader: Arc<R>,
        token_provider: Arc<TokenProvider<R>>,
        router_address: Address,
        correlation_policy: CorrelationPolicy,
        max_concurrent_requests: usize,
    ) -> Self {
        Self {
            chain_reader,
            token_provider,
            router_address,
            correlation_policy,
            max_concurrent_requests,
        }
    }

    #[instrument(skip(self))]
    pub async fn scan_block(&self, block_number: BlockNumber) -> Result<Vec<SwapRecord>> {
        let block = self
            .chain_reader
            .block_with_transactions(block_number)
            .await?;
        let receipts =
            fetch_receipts(self.chain_reader.as_ref(), &block, self.max_concurrent_requests)
                .await?;

        let mut seen_transactions = FnvHashSet::default();
        let mut records = Vec::new();

        for (transaction, receipt) in block.transactions().iter().zip(receipts.iter()) {
            let transfers = TransferIndex::from_receipt(receipt);

            for (position, log) in receipt.logs().iter().enumerate() {
                if !SWAP.matches(log) || topic_address(log, 1) != Some(self.router_address) {
                    continue;
                }

                let swap = SwapEvent::try_from(log).wrap_err_with(|| {
                    format!("failed to decode swap in transaction {}", transaction.hash)
                })?;

                if seen_transactions.contains(&transaction.hash) {
                    debug!(
                        transaction_hash = transaction.hash.to_string(),
                        "transaction already recorded"
                    );
                    continue;
                }

                let Some(transfer) =
                    transfers.correlate(&transaction.from, position, self.correlation_policy)
                else {
                    warn!(
                        transaction_hash = transaction.hash.to_string(),
                        pool_address = swap.pool_address.to_string(),
                        "no transfer from sender for swap"
                    );
                    continue;
                };

                let decimals = self.token_provider.decimals(transfer.token_address).await?;
                let token_name = self.token_provider.name(transfer.token_address).await?;

                records.push(SwapRecord {
                    block_number: block.number(),
                    block_hash: *block.hash(),
                    transaction_hash: transaction.hash,
                    trader_address: transaction.from,
                    token_name,
                    token_address: transfer.token_address,
                    amount_received: adjust_amount(swap.received_amount(), decimals)?,
                    pool_address: transfer.to,
                    block_timestamp: block.timestamp(),
                });
                seen_transactions.insert(transaction.hash);
            }
        }

        if records.is_empty() {
            info!("no swaps in block");
        } else {
            info!(swaps = records.len(), "scanned block");
        }

        Ok(records)
    }
}
