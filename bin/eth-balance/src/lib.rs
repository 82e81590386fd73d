//! Mackerel plugin reporting Ethereum native-token balances.
//!
//! One metric per configured address, all under a single `balance` graph.

use balance::Monitor;
use config::LabeledAddress;
use plugin::{Graphs, Metric, Plugin, Unit};
use std::collections::HashMap;

/// The balance reporter handed to the plugin runner.
pub struct EthBalancePlugin<M> {
    prefix: String,
    addresses: Vec<LabeledAddress>,
    monitor: M,
}

impl<M> EthBalancePlugin<M> {
    pub const fn new(prefix: String, addresses: Vec<LabeledAddress>, monitor: M) -> Self {
        Self {
            prefix,
            addresses,
            monitor,
        }
    }
}

impl<M: Monitor> Plugin for EthBalancePlugin<M> {
    async fn fetch_metrics(&self) -> eyre::Result<HashMap<String, f64>> {
        let mut ret = HashMap::new();
        for target in &self.addresses {
            // First failure aborts the cycle; a partial mapping would be
            // submitted to the agent as if it were complete.
            let balance = self.monitor.native_balance(target.address).await?;
            ret.insert(target.name.clone(), balance.ether());
        }
        Ok(ret)
    }

    fn graph_definition(&self) -> HashMap<String, Graphs> {
        let metrics = self
            .addresses
            .iter()
            .map(|target| Metric::new(&target.name, &target.label))
            .collect();

        HashMap::from([(
            "balance".to_string(),
            Graphs {
                label: "Ether".to_string(),
                unit: Unit::Float,
                metrics,
            },
        )])
    }

    fn metric_key_prefix(&self) -> String {
        self.prefix.clone()
    }
}
