use crate::task::Task;

use tianguis_primitives::{constants, BlockId, CorrelationPolicy};

use alloy::primitives::Address;

use eyre::{eyre, Result};
use lazy_static::lazy_static;
use std::{env, ffi::OsStr, fmt::Display, str::FromStr, sync::Once};
use tracing_subscriber::fmt::format::FmtSpan;

static DOTENV_INIT: Once = Once::new();

fn get_env_var<K: AsRef<OsStr>>(k: K) -> Result<String, env::VarError> {
    DOTENV_INIT.call_once(|| {
        // .env is optional
        let _ = dotenvy::dotenv();
    });

    env::var(k)
}

// Unset and empty variables are both None, unparseable values are errors
fn parse_env_var<T>(k: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match get_env_var(k) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| eyre!("Failed to parse {} from env: {}", k, err)),
        _ => Ok(None),
    }
}

lazy_static! {
    pub static ref RUST_LOG: String =
        get_env_var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    // unset and empty both mean stderr
    pub static ref LOG_DIR: Option<String> = parse_env_var("LOG_DIR").ok().flatten();
    pub static ref TRACING_SPAN_EVENTS: FmtSpan = if get_env_var("TRACING_SPAN_EVENTS")
        .unwrap_or_else(|_| "false".to_string())
        .parse()
        .unwrap_or(false)
    {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
}

#[derive(Debug, Clone)]
pub struct Config {
    pub task: Task,
    pub rpc_url: Option<url::Url>,
    pub start_block_id: BlockId,
    pub end_block_id: BlockId,
    pub router_address: Address,
    pub pool_factory_address: Option<Address>,
    pub token_address: Option<String>,
    pub dexscreener_url: String,
    pub correlation_policy: CorrelationPolicy,
    pub max_concurrent_requests: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let start_block_id = parse_env_var("START_BLOCK_ID")?.unwrap_or(BlockId::Latest);
        let end_block_id = parse_env_var("END_BLOCK_ID")?.unwrap_or(start_block_id);

        if let (BlockId::BlockNumber(start), BlockId::BlockNumber(end)) =
            (start_block_id, end_block_id)
        {
            if start > end {
                return Err(eyre!(
                    "Invalid block range: start {} is after end {}",
                    start,
                    end
                ));
            }
        }

        let max_concurrent_requests = parse_env_var("MAX_CONCURRENT_REQUESTS")?
            .unwrap_or(constants::MAX_CONCURRENT_REQUESTS);
        if max_concurrent_requests == 0 {
            return Err(eyre!("MAX_CONCURRENT_REQUESTS must be at least 1"));
        }

        Ok(Self {
            task: parse_env_var("TASK")?.unwrap_or(Task::Swaps),
            rpc_url: parse_env_var("RPC_URL")?,
            start_block_id,
            end_block_id,
            router_address: parse_env_var("ROUTER_ADDRESS")?
                .unwrap_or(constants::CAMELOT_ROUTER_ADDRESS),
            pool_factory_address: parse_env_var("POOL_FACTORY_ADDRESS")?,
            token_address: parse_env_var("TOKEN_ADDRESS")?,
            dexscreener_url: parse_env_var("DEXSCREENER_URL")?
                .unwrap_or_else(|| constants::DEXSCREENER_URL.to_string()),
            correlation_policy: parse_env_var("TRANSFER_MATCH")?.unwrap_or_default(),
            max_concurrent_requests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::parse_env_var;

    use tianguis_primitives::BlockId;

    use eyre::Result;
    use std::env;

    #[test]
    fn test_parse_env_var() -> Result<()> {
        env::set_var("TIANGUIS_TEST_BLOCK_ID", "0x10");
        env::set_var("TIANGUIS_TEST_EMPTY", "");
        env::set_var("TIANGUIS_TEST_INVALID", "soon");
        env::set_var("TIANGUIS_TEST_DIR", "  ");

        assert_eq!(
            parse_env_var::<BlockId>("TIANGUIS_TEST_BLOCK_ID")?,
            Some(BlockId::BlockNumber(16))
        );
        assert_eq!(parse_env_var::<BlockId>("TIANGUIS_TEST_EMPTY")?, None);
        assert_eq!(parse_env_var::<BlockId>("TIANGUIS_TEST_UNSET")?, None);
        assert!(parse_env_var::<BlockId>("TIANGUIS_TEST_INVALID").is_err());
        assert_eq!(parse_env_var::<String>("TIANGUIS_TEST_DIR")?, None);
        assert_eq!(parse_env_var::<String>("TIANGUIS_TEST_UNSET")?, None);

        Ok(())
    }
}
