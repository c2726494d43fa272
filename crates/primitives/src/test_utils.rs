//! In-memory fixtures for exercising scanners without a node or the aggregator.

use crate::{
    abi::{IAlgebraPool, IUniswapV3Factory, IERC20},
    chain::{Block, LogEntry, Receipt},
    events::{MINT, SWAP, TRANSFER},
    providers::{ChainReader, DexPair, DexToken, PairSource},
};

use alloy::{
    primitives::{Address, BlockNumber, Bytes, TxHash, B256, I256, U256},
    sol_types::{SolCall, SolEvent},
};

use eyre::{eyre, OptionExt, Result};
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

pub fn transfer_log(token: Address, from: Address, to: Address) -> LogEntry {
    LogEntry::new(
        token,
        vec![*TRANSFER.hash(), from.into_word(), to.into_word()],
        Bytes::from(U256::from(1_000).to_be_bytes_vec()),
    )
}

pub fn swap_log(
    pool: Address,
    sender: Address,
    recipient: Address,
    amount0: I256,
    amount1: I256,
) -> LogEntry {
    let swap = IAlgebraPool::Swap {
        sender,
        recipient,
        amount0,
        amount1,
        price: U256::from(1_u64 << 48),
        liquidity: 1_000_000,
        tick: -276_324,
    };

    LogEntry::new(
        pool,
        vec![*SWAP.hash(), sender.into_word(), recipient.into_word()],
        Bytes::from(swap.encode_data()),
    )
}

pub fn pool_created_log(
    factory: Address,
    token0: Address,
    token1: Address,
    fee: u32,
    tick_spacing: i32,
    pool: Address,
) -> LogEntry {
    let pool_created = IUniswapV3Factory::PoolCreated {
        token0,
        token1,
        fee,
        tickSpacing: tick_spacing,
        pool,
    };

    LogEntry::new(
        factory,
        vec![
            IUniswapV3Factory::PoolCreated::SIGNATURE_HASH,
            token0.into_word(),
            token1.into_word(),
            B256::from(U256::from(fee)),
        ],
        Bytes::from(pool_created.encode_data()),
    )
}

pub fn mint_log(pool: Address, sender: Address) -> LogEntry {
    LogEntry::new(
        pool,
        vec![*MINT.hash(), sender.into_word()],
        Bytes::from(vec![0_u8; 96]),
    )
}

/// A fixed chain: blocks, receipts and erc20 call results registered up front.
#[derive(Debug, Default)]
pub struct MockChain {
    latest_block_number: BlockNumber,
    blocks: HashMap<BlockNumber, Block>,
    receipts: HashMap<TxHash, Receipt>,
    call_returns: HashMap<(Address, Bytes), Bytes>,
    call_count: AtomicUsize,
    receipt_count: AtomicUsize,
}

impl MockChain {
    pub fn with_block(mut self, block: Block, receipts: Vec<Receipt>) -> Self {
        self.latest_block_number = self.latest_block_number.max(block.number());
        self.blocks.insert(block.number(), block);
        for receipt in receipts {
            self.receipts.insert(*receipt.transaction_hash(), receipt);
        }
        self
    }

    pub fn with_erc20(mut self, token: Address, name: &str, symbol: &str, decimals: u8) -> Self {
        self.call_returns.insert(
            (token, IERC20::nameCall {}.abi_encode().into()),
            IERC20::nameCall::abi_encode_returns(&(name.to_string(),)).into(),
        );
        self.call_returns.insert(
            (token, IERC20::symbolCall {}.abi_encode().into()),
            IERC20::symbolCall::abi_encode_returns(&(symbol.to_string(),)).into(),
        );
        self.call_returns.insert(
            (token, IERC20::decimalsCall {}.abi_encode().into()),
            IERC20::decimalsCall::abi_encode_returns(&(decimals,)).into(),
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn receipt_count(&self) -> usize {
        self.receipt_count.load(Ordering::SeqCst)
    }
}

impl ChainReader for MockChain {
    async fn block_number(&self) -> Result<BlockNumber> {
        Ok(self.latest_block_number)
    }

    async fn block_with_transactions(&self, block_number: BlockNumber) -> Result<Block> {
        self.blocks
            .get(&block_number)
            .cloned()
            .ok_or_eyre(format!("block {} not found", block_number))
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Receipt> {
        self.receipt_count.fetch_add(1, Ordering::SeqCst);
        self.receipts
            .get(&hash)
            .cloned()
            .ok_or_eyre(format!("receipt for {} not found", hash))
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.call_returns
            .get(&(to, input))
            .cloned()
            .ok_or_else(|| eyre!("execution reverted: {}", to))
    }
}

pub fn dex_token(address: &str) -> DexToken {
    DexToken {
        address: address.to_string(),
    }
}

pub fn dex_pair(
    chain_id: Option<&str>,
    dex_id: Option<&str>,
    pair_address: &str,
    base_token: &str,
    quote_token: &str,
) -> DexPair {
    DexPair {
        chain_id: chain_id.map(str::to_string),
        dex_id: dex_id.map(str::to_string),
        pair_address: pair_address.to_string(),
        base_token: Some(dex_token(base_token)),
        quote_token: Some(dex_token(quote_token)),
    }
}

/// Aggregator answers keyed by token address and by `(chain id, pair address)`.
#[derive(Debug, Default)]
pub struct FakePairSource {
    token_pairs: HashMap<String, Vec<DexPair>>,
    pairs: HashMap<(String, String), DexPair>,
    failing_pairs: Vec<String>,
    pair_lookups: AtomicUsize,
}

impl FakePairSource {
    pub fn with_token_pairs(mut self, token_address: &str, pairs: Vec<DexPair>) -> Self {
        self.token_pairs.insert(token_address.to_string(), pairs);
        self
    }

    pub fn with_pair(mut self, pair: DexPair) -> Self {
        self.pairs.insert(
            (pair.chain_id().to_string(), pair.pair_address.clone()),
            pair,
        );
        self
    }

    pub fn with_failing_pair(mut self, pair_address: &str) -> Self {
        self.failing_pairs.push(pair_address.to_string());
        self
    }

    pub fn pair_lookups(&self) -> usize {
        self.pair_lookups.load(Ordering::SeqCst)
    }
}

impl PairSource for FakePairSource {
    async fn token_pairs(&self, token_address: &str) -> Result<Vec<DexPair>> {
        Ok(self
            .token_pairs
            .get(token_address)
            .cloned()
            .unwrap_or_default())
    }

    async fn pair(&self, chain_id: &str, pair_address: &str) -> Result<Option<DexPair>> {
        self.pair_lookups.fetch_add(1, Ordering::SeqCst);

        if self.failing_pairs.iter().any(|failing| failing == pair_address) {
            return Err(eyre!("connection reset fetching {}", pair_address));
        }

        Ok(self
            .pairs
            .get(&(chain_id.to_string(), pair_address.to_string()))
            .cloned())
    }
}
