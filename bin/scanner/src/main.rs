mod config;
mod output;
mod scanners;
mod task;

use config::Config;
use scanners::{find_liquidity_pairs, resolve_block_range, DeploymentScanner, SwapScanner};
use task::Task;

use tianguis_primitives::{new_http_provider, DexScreenerClient, TokenProvider};

use eyre::{OptionExt, Result};
use std::{str::FromStr, sync::Arc};
use tracing::{info, instrument};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

// Records own stdout, so logs go to stderr unless LOG_DIR is set
fn init_tracing() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::from_str(&config::RUST_LOG).unwrap_or_default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_span_events(config::TRACING_SPAN_EVENTS.clone());

    match config::LOG_DIR.as_ref() {
        Some(log_dir) => {
            let file_appender = tracing_appender::rolling::hourly(log_dir, "tianguis-scanner.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            subscriber.with_ansi(false).with_writer(non_blocking).init();
            Some(guard)
        }
        None => {
            subscriber.with_writer(std::io::stderr).init();
            None
        }
    }
}

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    let _guard = init_tracing();
    let config = Config::from_env()?;

    info!(
        rust_log = *config::RUST_LOG,
        task = config.task.to_string(),
        start_block_id = config.start_block_id.to_string(),
        end_block_id = config.end_block_id.to_string(),
        "start"
    );

    match config.task {
        Task::Swaps | Task::Deployments => scan_blocks(&config).await?,
        Task::Pairs => {
            let token_address = config
                .token_address
                .as_deref()
                .ok_or_eyre("TOKEN_ADDRESS is required for the pairs task")?;
            let dexscreener_client = DexScreenerClient::new(config.dexscreener_url.as_str());

            let pairs = find_liquidity_pairs(
                &dexscreener_client,
                token_address,
                config.max_concurrent_requests,
            )
            .await?;
            output::print_records(&pairs)?;
        }
    }

    info!("complete");

    Ok(())
}

async fn scan_blocks(config: &Config) -> Result<()> {
    let rpc_url = config
        .rpc_url
        .clone()
        .ok_or_eyre(format!("RPC_URL is required for the {} task", config.task))?;

    let rpc_provider = Arc::new(new_http_provider(rpc_url));
    let token_provider = Arc::new(TokenProvider::new(Arc::clone(&rpc_provider)));

    let block_range =
        resolve_block_range(rpc_provider.as_ref(), config.start_block_id, config.end_block_id)
            .await?;
    info!(
        start_block_number = block_range.start(),
        end_block_number = block_range.end(),
        "resolved block range"
    );

    if config.task == Task::Swaps {
        let scanner = SwapScanner::new(
            Arc::clone(&rpc_provider),
            Arc::clone(&token_provider),
            config.router_address,
            config.correlation_policy,
            config.max_concurrent_requests,
        );

        for block_number in block_range {
            output::print_records(&scanner.scan_block(block_number).await?)?;
        }
    } else {
        let scanner = DeploymentScanner::new(
            Arc::clone(&rpc_provider),
            Arc::clone(&token_provider),
            config.pool_factory_address,
            config.max_concurrent_requests,
        );

        for block_number in block_range {
            output::print_records(&scanner.scan_block(block_number).await?)?;
        }
    }

    Ok(())
}
