//! Mock balance monitor shared across integration tests.
#![allow(dead_code)] // pulled in per test file via #[path]

use alloy_primitives::{Address, U256};
use balance::{Balance, Monitor};
use std::collections::HashMap;

pub const ALICE: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
pub const BOB: &str = "0x00000000219ab540356cBB839Cbe05303d7705Fa";

/// Monitor serving canned balances; unknown addresses fail the query.
pub struct MockMonitor {
    balances: HashMap<Address, U256>,
}

impl MockMonitor {
    pub fn new(balances: &[(Address, U256)]) -> Self {
        Self {
            balances: balances.iter().copied().collect(),
        }
    }
}

impl Monitor for MockMonitor {
    async fn native_balance(&self, address: Address) -> eyre::Result<Balance> {
        match self.balances.get(&address) {
            Some(&wei) => Ok(Balance {
                holder: address,
                wei,
            }),
            None => Err(eyre::eyre!("no response for {address}")),
        }
    }
}

pub fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

/// `n` ether in wei.
pub fn ether(n: u64) -> U256 {
    U256::from(n) * U256::from(10).pow(U256::from(18))
}
