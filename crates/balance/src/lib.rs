//! Balance monitoring for blockchain accounts.
//!
//! This crate provides the query seam used by the plugin: a [`Monitor`]
//! trait for fetching native-token balances at the latest block, the
//! provider-backed implementation, and the exact wei→ether conversion.

pub mod monitor;
pub mod units;

use alloy_primitives::{Address, U256};
use std::future::Future;

/// A native-token balance observed at the latest block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    /// The address holding the balance
    pub holder: Address,
    /// The balance amount in wei
    pub wei: U256,
}

impl Balance {
    /// The balance in ether, narrowed to `f64` for reporting.
    pub fn ether(&self) -> f64 {
        units::wei_to_ether(self.wei)
    }
}

/// Trait for querying native balances on a blockchain.
pub trait Monitor: Send + Sync {
    /// Query the native balance of `address` at the latest block.
    fn native_balance(
        &self,
        address: Address,
    ) -> impl Future<Output = eyre::Result<Balance>> + Send;
}
