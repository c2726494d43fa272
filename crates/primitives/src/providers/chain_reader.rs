use crate::chain::{Block, Receipt};

use alloy::primitives::{Address, BlockNumber, Bytes, TxHash};

use eyre::Result;

/// Read access to an EVM chain. Missing blocks and receipts are errors.
#[allow(async_fn_in_trait)]
pub trait ChainReader {
    async fn block_number(&self) -> Result<BlockNumber>;

    async fn block_with_transactions(&self, block_number: BlockNumber) -> Result<Block>;

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Receipt>;

    // eth_call against the latest block
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes>;
}
