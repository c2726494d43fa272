use super::SWAP;
use crate::{abi::IAlgebraPool, chain::LogEntry};

use alloy::{
    primitives::{Address, I256, U256},
    sol_types::SolEvent,
};

use eyre::{eyre, Result, WrapErr};
use std::cmp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapEvent {
    pub pool_address: Address,
    pub sender: Address,
    pub recipient: Address,
    pub amount0: I256,
    pub amount1: I256,
    pub price: U256,
    pub liquidity: u128,
    pub tick: i32,
}

impl SwapEvent {
    // Assumes the pool reports exactly one positive leg and that leg is what the trader
    // received.
    pub fn received_amount(&self) -> I256 {
        cmp::max(self.amount0, self.amount1)
    }
}

impl TryFrom<&LogEntry> for SwapEvent {
    type Error = eyre::Report;

    fn try_from(log: &LogEntry) -> Result<Self, Self::Error> {
        if !SWAP.matches(log) {
            return Err(eyre!("log is not a Swap event"));
        }

        let swap = IAlgebraPool::Swap::decode_raw_log(
            log.topics().iter().copied(),
            log.data().as_ref(),
            cfg!(debug_assertions),
        )
        .wrap_err("failed to abi decode Swap log")?;

        Ok(Self {
            pool_address: *log.address(),
            sender: swap.sender,
            recipient: swap.recipient,
            amount0: swap.amount0,
            amount1: swap.amount1,
            price: U256::from(swap.price),
            liquidity: swap.liquidity,
            tick: swap.tick,
        })
    }
}
