use super::ChainReader;
use crate::chain::{Block, LogEntry, Receipt, Transaction};

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, BlockNumber, Bytes, TxHash},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::eth::{
        Block as RpcBlock, BlockNumberOrTag, BlockTransactions, Log as RpcLog, TransactionReceipt,
        TransactionRequest,
    },
    transports::{http::Http, Transport},
};

use eyre::{eyre, OptionExt, Result, WrapErr};
use std::{marker::PhantomData, sync::Arc};
use tracing::instrument;

pub struct RpcProvider<T: Transport + Clone, P: Provider<T, Ethereum>> {
    inner: Arc<P>,
    _transport_marker: PhantomData<T>,
}

pub fn new_http_provider(
    rpc_url: url::Url,
) -> RpcProvider<Http<reqwest::Client>, RootProvider<Http<reqwest::Client>>> {
    RpcProvider::new(Arc::new(ProviderBuilder::new().on_http(rpc_url)))
}

impl<T, P> RpcProvider<T, P>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum>,
{
    pub fn new(inner: Arc<P>) -> Self {
        Self {
            inner,
            _transport_marker: PhantomData,
        }
    }
}

fn block_from_rpc(block: RpcBlock) -> Result<Block> {
    let number = block
        .header
        .number
        .ok_or_eyre("block is missing its number")?;
    let hash = block
        .header
        .hash
        .ok_or_eyre(format!("block {} is missing its hash", number))?;

    let transactions = match block.transactions {
        BlockTransactions::Full(transactions) => transactions
            .into_iter()
            .map(|transaction| Transaction::new(transaction.hash, transaction.from, transaction.to))
            .collect(),
        BlockTransactions::Hashes(hashes) if hashes.is_empty() => Vec::new(),
        _ => return Err(eyre!("block {} was returned without full transactions", number)),
    };

    Ok(Block::new(number, hash, block.header.timestamp, transactions))
}

fn log_from_rpc(log: &RpcLog) -> LogEntry {
    let log_entry = LogEntry::new(log.address(), log.topics().to_vec(), log.data().data.clone());

    match log.log_index {
        Some(log_index) => log_entry.with_log_index(log_index),
        None => log_entry,
    }
}

fn receipt_from_rpc(receipt: TransactionReceipt) -> Receipt {
    let logs = receipt.inner.logs().iter().map(log_from_rpc).collect();
    let converted = Receipt::new(receipt.transaction_hash, logs);

    match receipt.contract_address {
        Some(contract_address) => converted.with_contract_address(contract_address),
        None => converted,
    }
}

impl<T, P> ChainReader for RpcProvider<T, P>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum>,
{
    async fn block_number(&self) -> Result<BlockNumber> {
        self.inner
            .get_block_number()
            .await
            .wrap_err("get_block_number failed")
    }

    #[instrument(skip(self))]
    async fn block_with_transactions(&self, block_number: BlockNumber) -> Result<Block> {
        self.inner
            .get_block_by_number(BlockNumberOrTag::Number(block_number), true)
            .await
            .wrap_err_with(|| format!("get_block_by_number {} failed", block_number))?
            .ok_or_eyre(format!("block {} not found", block_number))
            .and_then(block_from_rpc)
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Receipt> {
        self.inner
            .get_transaction_receipt(hash)
            .await
            .wrap_err_with(|| format!("get_transaction_receipt {} failed", hash))?
            .ok_or_eyre(format!("receipt for {} not found", hash))
            .map(receipt_from_rpc)
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes> {
        let tx_request = TransactionRequest::default()
            .with_to(to)
            .with_input(input);

        self.inner
            .call(&tx_request)
            .await
            .wrap_err_with(|| format!("eth_call to {} failed", to))
    }
}
