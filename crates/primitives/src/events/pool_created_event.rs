use super::POOL_CREATED;
use crate::{abi::IUniswapV3Factory, chain::LogEntry};

use alloy::{primitives::Address, sol_types::SolEvent};

use eyre::{eyre, Result, WrapErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCreatedEvent {
    pub factory_address: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
    pub pool_address: Address,
}

impl TryFrom<&LogEntry> for PoolCreatedEvent {
    type Error = eyre::Report;

    fn try_from(log: &LogEntry) -> Result<Self, Self::Error> {
        if !POOL_CREATED.matches(log) {
            return Err(eyre!("log is not a PoolCreated event"));
        }

        let pool_created = IUniswapV3Factory::PoolCreated::decode_raw_log(
            log.topics().iter().copied(),
            log.data().as_ref(),
            cfg!(debug_assertions),
        )
        .wrap_err("failed to abi decode PoolCreated log")?;

        Ok(Self {
            factory_address: *log.address(),
            token0: pool_created.token0,
            token1: pool_created.token1,
            fee: pool_created.fee,
            tick_spacing: pool_created.tickSpacing,
            pool_address: pool_created.pool,
        })
    }
}
