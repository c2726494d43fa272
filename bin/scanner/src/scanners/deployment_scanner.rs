use super::fetch_receipts;

use tianguis_primitives::{
    Block, ChainReader, CreationRecord, PoolCreatedEvent, PoolCreation, Receipt, TokenCreation,
    TokenProvider, Transaction, MINT, POOL_CREATED,
};

use alloy::primitives::{Address, BlockNumber, TxHash};

use eyre::{Result, WrapErr};
use fnv::FnvHashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Emits token deployments and pool creations.
pub struct DeploymentScanner<R> {
    chain_reader: Arc<R>,
    token_provider: Arc<TokenProvider<R>>,
    pool_factory_address: Option<Address>,
    max_concurrent_requests: usize,
}

impl<R: ChainReader> DeploymentScanner<R> {
    pub fn new(
        chain_reader: Arc<R>,
        token_provider: Arc<TokenProvider<R>>,
        pool_factory_address: Option<Address>,
        max_concurrent_requests: usize,
    ) -> Self {
        Self {
            chain_reader,
            token_provider,
            pool_factory_address,
            max_concurrent_requests,
        }
    }

    #[instrument(skip(self))]
    pub async fn scan_block(&self, block_number: BlockNumber) -> Result<Vec<CreationRecord>> {
        let block = self
            .chain_reader
            .block_with_transactions(block_number)
            .await?;
        let receipts =
            fetch_receipts(self.chain_reader.as_ref(), &block, self.max_concurrent_requests)
                .await?;

        let mut seen_pool_logs: FnvHashSet<(TxHash, u64)> = FnvHashSet::default();
        let mut records = Vec::new();

        for (transaction, receipt) in block.transactions().iter().zip(receipts.iter()) {
            if transaction.is_contract_creation() {
                if let Some(token_creation) =
                    self.token_creation(&block, transaction, receipt).await
                {
                    records.push(CreationRecord::Token(token_creation));
                    continue;
                }
            }

            if receipt.logs().iter().any(|log| MINT.matches(log)) {
                debug!(
                    transaction_hash = transaction.hash.to_string(),
                    "skipping transaction with mint"
                );
                continue;
            }

            for (position, log) in receipt.logs().iter().enumerate() {
                if !POOL_CREATED.matches(log) {
                    continue;
                }

                if self
                    .pool_factory_address
                    .is_some_and(|factory_address| *log.address() != factory_address)
                {
                    continue;
                }

                // pending style receipts carry no log index, fall back to the receipt position
                let log_index = log.log_index().unwrap_or(position as u64);
                if !seen_pool_logs.insert((transaction.hash, log_index)) {
                    continue;
                }

                let pool_created = PoolCreatedEvent::try_from(log).wrap_err_with(|| {
                    format!(
                        "failed to decode pool creation in transaction {}",
                        transaction.hash
                    )
                })?;

                records.push(CreationRecord::Pool(
                    self.pool_creation(&block, transaction, pool_created).await?,
                ));
            }
        }

        info!(creations = records.len(), "scanned block");

        Ok(records)
    }

    async fn token_creation(
        &self,
        block: &Block,
        transaction: &Transaction,
        receipt: &Receipt,
    ) -> Option<TokenCreation> {
        let token_address = *receipt.contract_address()?;
        let (name, symbol) = self.token_provider.probe_erc20(token_address).await?;

        Some(TokenCreation {
            token_address,
            name,
            symbol,
            deployer: transaction.from,
            transaction_hash: transaction.hash,
            block_number: block.number(),
            block_hash: *block.hash(),
            timestamp: block.timestamp(),
        })
    }

    async fn pool_creation(
        &self,
        block: &Block,
        transaction: &Transaction,
        pool_created: PoolCreatedEvent,
    ) -> Result<PoolCreation> {
        let token_name = self.token_provider.name(pool_created.token1).await?;
        let token_symbol = self.token_provider.symbol(pool_created.token1).await?;
        let paired_token = self.token_provider.symbol(pool_created.token0).await?;

        Ok(PoolCreation {
            token_address: pool_created.token1,
            token_name,
            token_symbol,
            paired_token,
            pool_address: pool_created.pool_address,
            fee: pool_created.fee,
            tick_spacing: pool_created.tick_spacing,
            transaction_hash: transaction.hash,
            block_number: block.number(),
            block_hash: *block.hash(),
            timestamp: block.timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DeploymentScanner;

    use tianguis_primitives::{
        test_utils::{mint_log, pool_created_log, MockChain},
        Block, CreationRecord, LogEntry, Receipt, TokenProvider, Transaction,
    };

    use alloy::primitives::{address, b256, Address, TxHash};
    use eyre::Result;
    use std::sync::Arc;

    const BLOCK_NUMBER: u64 = 12_000_000;
    const DEPLOYER: Address = address!("7381C38985dA304eBA18fCef5E1f6e9fA0798b84");
    const FACTORY: Address = address!("33128a8fC17869897dcE68Ed026d694621f6FDfD");
    const WETH: Address = address!("4200000000000000000000000000000000000006");
    const TOKEN: Address = address!("532f27101965dd16442E59d40670FaF5eBB142E4");
    const POOL: Address = address!("b1026b8e7276e7ac75410f1fcbbe21796e8f7526");
    const TX_A: TxHash = b256!("5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060");
    const TX_B: TxHash = b256!("0b0b3e58a1d4e7ebc5a0e94d3c9a4b5f7e9d02d2dc4c1b2a3f4e5d6c7b8a9f01");

    fn pool_log(factory: Address, log_index: u64) -> LogEntry {
        pool_created_log(factory, WETH, TOKEN, 10000, 200, POOL).with_log_index(log_index)
    }

    fn scanner(
        transactions: Vec<(Transaction, Receipt)>,
        pool_factory_address: Option<Address>,
    ) -> (Arc<MockChain>, DeploymentScanner<MockChain>) {
        let block = Block::new(
            BLOCK_NUMBER,
            b256!("8f1ac71d4fb2c8bbb9e0b5e6a9e4c1a1d0c1f3d4a2b6a0b3c4d5e6f7a8b9c0d1"),
            1710334640,
            transactions.iter().map(|(transaction, _)| transaction.clone()).collect(),
        );

        let chain = Arc::new(
            MockChain::default()
                .with_block(
                    block,
                    transactions.into_iter().map(|(_, receipt)| receipt).collect(),
                )
                .with_erc20(WETH, "Wrapped Ether", "WETH", 18)
                .with_erc20(TOKEN, "Degen", "DEGEN", 18),
        );
        let token_provider = Arc::new(TokenProvider::new(Arc::clone(&chain)));

        (
            Arc::clone(&chain),
            DeploymentScanner::new(chain, token_provider, pool_factory_address, 4),
        )
    }

    fn factory_call(hash: TxHash, logs: Vec<LogEntry>) -> (Transaction, Receipt) {
        (
            Transaction::new(hash, DEPLOYER, Some(FACTORY)),
            Receipt::new(hash, logs),
        )
    }

    #[tokio::test]
    async fn test_token_creation() -> Result<()> {
        let (_, scanner) = scanner(
            vec![(
                Transaction::new(TX_A, DEPLOYER, None),
                Receipt::new(TX_A, vec![]).with_contract_address(TOKEN),
            )],
            None,
        );

        let records = scanner.scan_block(BLOCK_NUMBER).await?;

        assert_eq!(records.len(), 1);
        match &records[0] {
            CreationRecord::Token(token) => {
                assert_eq!(token.token_address, TOKEN);
                assert_eq!(token.name, "Degen");
                assert_eq!(token.symbol, "DEGEN");
                assert_eq!(token.deployer, DEPLOYER);
                assert_eq!(token.block_number, BLOCK_NUMBER);
            }
            other => panic!("unexpected record {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_non_erc20_deployment() -> Result<()> {
        let (_, scanner) = scanner(
            vec![(
                Transaction::new(TX_A, DEPLOYER, None),
                Receipt::new(TX_A, vec![])
                    .with_contract_address(address!("6666666666666666666666666666666666666666")),
            )],
            None,
        );

        assert!(scanner.scan_block(BLOCK_NUMBER).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_pool_creation() -> Result<()> {
        let (_, scanner) = scanner(vec![factory_call(TX_A, vec![pool_log(FACTORY, 3)])], None);

        let records = scanner.scan_block(BLOCK_NUMBER).await?;

        assert_eq!(records.len(), 1);
        match &records[0] {
            CreationRecord::Pool(pool) => {
                assert_eq!(pool.token_address, TOKEN);
                assert_eq!(pool.token_name, "Degen");
                assert_eq!(pool.token_symbol, "DEGEN");
                assert_eq!(pool.paired_token, "WETH");
                assert_eq!(pool.pool_address, POOL);
                assert_eq!(pool.fee, 10000);
                assert_eq!(pool.tick_spacing, 200);
                assert_eq!(pool.transaction_hash, TX_A);
            }
            other => panic!("unexpected record {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_skips_transactions_with_mint() -> Result<()> {
        let (_, scanner) = scanner(
            vec![factory_call(
                TX_A,
                vec![pool_log(FACTORY, 3), mint_log(POOL, DEPLOYER)],
            )],
            None,
        );

        assert!(scanner.scan_block(BLOCK_NUMBER).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_pool_logs_emitted_once() -> Result<()> {
        let (_, scanner) = scanner(
            vec![
                factory_call(TX_A, vec![pool_log(FACTORY, 3), pool_log(FACTORY, 3)]),
                factory_call(TX_B, vec![pool_log(FACTORY, 3)]),
            ],
            None,
        );

        let records = scanner.scan_block(BLOCK_NUMBER).await?;

        assert_eq!(
            records
                .iter()
                .map(|record| *record.transaction_hash())
                .collect::<Vec<_>>(),
            vec![TX_A, TX_B]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_factory_filter() -> Result<()> {
        let other_factory = address!("1F98431c8aD98523631AE4a59f267346ea31F984");
        let (_, scanner) = scanner(
            vec![factory_call(
                TX_A,
                vec![pool_log(other_factory, 1), pool_log(FACTORY, 2)],
            )],
            Some(FACTORY),
        );

        let records = scanner.scan_block(BLOCK_NUMBER).await?;

        assert_eq!(records.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_pool_token_metadata_failure_is_fatal() {
        let unknown = address!("6666666666666666666666666666666666666666");
        let (_, scanner) = scanner(
            vec![factory_call(
                TX_A,
                vec![pool_created_log(FACTORY, WETH, unknown, 3000, 60, POOL)],
            )],
            None,
        );

        assert!(scanner.scan_block(BLOCK_NUMBER).await.is_err());
    }

    #[tokio::test]
    async fn test_token_metadata_fetched_once() -> Result<()> {
        let (chain, scanner) = scanner(
            vec![
                factory_call(TX_A, vec![pool_log(FACTORY, 3)]),
                factory_call(TX_B, vec![pool_log(FACTORY, 8)]),
            ],
            None,
        );

        assert_eq!(scanner.scan_block(BLOCK_NUMBER).await?.len(), 2);
        // token name, token symbol, weth symbol
        assert_eq!(chain.call_count(), 3);

        Ok(())
    }
}
