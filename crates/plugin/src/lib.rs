//! Plugin runtime for the mackerel agent metric protocol.
//!
//! This crate is the agent-side contract a metrics plugin fulfills:
//! - [`Plugin`], the trait a plugin implements (fetch, graph schema, prefix)
//! - [`Graphs`]/[`Metric`], the schema types printed for the agent
//! - [`PluginRunner`], which prints either the schema
//!   (`MACKEREL_AGENT_PLUGIN_META` set) or one cycle of tab-separated
//!   metric values, keeping previous-run state in a tempfile for
//!   differential metrics.

pub mod graph;
pub mod runner;

pub use graph::{Graphs, Metric, Unit};
pub use runner::PluginRunner;

use std::collections::HashMap;
use std::future::Future;

/// A metrics plugin with a namespaced key prefix.
pub trait Plugin: Send + Sync {
    /// Collect current metric values, keyed by metric name.
    ///
    /// An error fails the whole collection cycle; no values are emitted.
    fn fetch_metrics(&self) -> impl Future<Output = eyre::Result<HashMap<String, f64>>> + Send;

    /// Static description of how metrics are grouped and labeled,
    /// keyed by graph name.
    fn graph_definition(&self) -> HashMap<String, Graphs>;

    /// Namespace prefix applied to every emitted metric key.
    fn metric_key_prefix(&self) -> String;
}
