//! Entry point for mackerel-plugin-eth-balance.
//!
//! Address or connection problems abort here with a non-zero exit; a
//! failed query mid-cycle surfaces the same way, and the agent decides
//! what to do with the missed cycle.

use balance::monitor::BalanceMonitor;
use clap::Parser;
use eth_balance::EthBalancePlugin;
use plugin::PluginRunner;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "mackerel-plugin-eth-balance")]
#[command(about = "Mackerel plugin reporting Ethereum native-token balances")]
struct Cli {
    /// Metric key prefix
    #[arg(long, default_value = "ethereum")]
    metric_key_prefix: String,

    /// Ethereum rpc endpoint url
    #[arg(long, default_value = "")]
    rpc: String,

    /// Comma-separated address[:label] list
    #[arg(long, default_value = "0x0")]
    addresses: String,

    /// Temp file name
    #[arg(long, default_value = "")]
    tempfile: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Stdout carries the metric protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let addresses = config::parse_addresses(&cli.addresses)?;
    debug!("Monitoring {} addresses", addresses.len());

    let provider = client::connect(&cli.rpc).await?;
    let monitor = BalanceMonitor::new(provider);

    let reporter = EthBalancePlugin::new(cli.metric_key_prefix, addresses, monitor);
    let tempfile = (!cli.tempfile.is_empty()).then(|| PathBuf::from(&cli.tempfile));

    PluginRunner::new(reporter, tempfile).run().await
}
