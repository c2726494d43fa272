use super::ChainReader;
use crate::abi::erc20;

use alloy::primitives::Address;

use eyre::{Result, WrapErr};
use lru::LruCache;
use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};
use tracing::debug;

pub const TOKEN_CACHE_SIZE: usize = 2500;

fn new_cache<V>() -> Mutex<LruCache<Address, V>> {
    Mutex::new(LruCache::new(
        NonZeroUsize::new(TOKEN_CACHE_SIZE).expect("TOKEN_CACHE_SIZE is non zero"),
    ))
}

fn cached<V: Clone>(cache: &Mutex<LruCache<Address, V>>, token_address: &Address) -> Option<V> {
    cache.lock().unwrap().get(token_address).cloned()
}

/// Memoized ERC-20 metadata lookups. Token metadata never changes, so entries are only ever
/// evicted by capacity.
pub struct TokenProvider<R> {
    chain_reader: Arc<R>,

    // caches
    names: Mutex<LruCache<Address, String>>,
    symbols: Mutex<LruCache<Address, String>>,
    decimals: Mutex<LruCache<Address, u8>>,
}

impl<R: ChainReader> TokenProvider<R> {
    pub fn new(chain_reader: Arc<R>) -> Self {
        Self {
            chain_reader,
            names: new_cache(),
            symbols: new_cache(),
            decimals: new_cache(),
        }
    }

    pub async fn name(&self, token_address: Address) -> Result<String> {
        if let Some(name) = cached(&self.names, &token_address) {
            return Ok(name);
        }

        let name = self
            .chain_reader
            .call(token_address, erc20::name_call_data())
            .await
            .and_then(|returns| erc20::decode_name_returns(&returns))
            .wrap_err_with(|| format!("failed to get name for token {}", token_address))?;

        self.names.lock().unwrap().put(token_address, name.clone());
        Ok(name)
    }

    pub async fn symbol(&self, token_address: Address) -> Result<String> {
        if let Some(symbol) = cached(&self.symbols, &token_address) {
            return Ok(symbol);
        }

        let symbol = self
            .chain_reader
            .call(token_address, erc20::symbol_call_data())
            .await
            .and_then(|returns| erc20::decode_symbol_returns(&returns))
            .wrap_err_with(|| format!("failed to get symbol for token {}", token_address))?;

        self.symbols.lock().unwrap().put(token_address, symbol.clone());
        Ok(symbol)
    }

    pub async fn decimals(&self, token_address: Address) -> Result<u8> {
        if let Some(decimals) = cached(&self.decimals, &token_address) {
            return Ok(decimals);
        }

        let decimals = self
            .chain_reader
            .call(token_address, erc20::decimals_call_data())
            .await
            .and_then(|returns| erc20::decode_decimals_returns(&returns))
            .wrap_err_with(|| format!("failed to get decimals for token {}", token_address))?;

        self.decimals.lock().unwrap().put(token_address, decimals);
        Ok(decimals)
    }

    /// Returns `(name, symbol)` when the contract answers both calls. Any failure classifies
    /// the contract as not an ERC-20.
    pub async fn probe_erc20(&self, contract_address: Address) -> Option<(String, String)> {
        let probe = async {
            let symbol = self.symbol(contract_address).await?;
            let name = self.name(contract_address).await?;
            Ok::<_, eyre::Report>((name, symbol))
        };

        match probe.await {
            Ok(metadata) => Some(metadata),
            Err(err) => {
                debug!(
                    contract_address = contract_address.to_string(),
                    "not an erc20: {:?}", err
                );
                None
            }
        }
    }
}
