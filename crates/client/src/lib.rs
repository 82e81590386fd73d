//! JSON-RPC provider construction for the balance plugin.
//!
//! The provider is built once at startup and reused for every query in
//! the process lifetime; there is no pooling and no reconnect.

use alloy_provider::{Provider, ProviderBuilder};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error connecting to the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Convenience function to create an ethereum rpc provider from url.
pub fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;
    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Create a provider and verify the endpoint is reachable.
///
/// Building an HTTP provider never touches the network, so a probe
/// (`eth_chainId`) is issued here to surface an unreachable endpoint at
/// startup instead of mid-cycle.
pub async fn connect(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let provider = create_provider(rpc_url)?;

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ClientError::Connection(format!("{}", e)))?;
    debug!("Connected to RPC endpoint: chain_id={}", chain_id);

    Ok(provider)
}
