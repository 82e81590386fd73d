//! Graph schema types printed for the monitoring agent.

use serde::{Deserialize, Serialize};

/// Display unit of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Float,
    Integer,
    Percentage,
    Bytes,
    #[serde(rename = "bytes/sec")]
    BytesPerSec,
    Iops,
}

/// One metric series within a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric key within the graph
    pub name: String,
    /// Display label
    pub label: String,
    /// Report the per-minute rate against the previous run instead of
    /// the raw value. Not part of the schema sent to the agent.
    #[serde(skip)]
    pub diff: bool,
    /// Stack this series in the graph
    #[serde(default)]
    pub stacked: bool,
}

impl Metric {
    /// A plain gauge metric.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            diff: false,
            stacked: false,
        }
    }
}

/// One graph: a labeled, unit-annotated group of metric series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graphs {
    /// Graph display label
    pub label: String,
    /// Display unit
    pub unit: Unit,
    /// Metric series shown in this graph
    pub metrics: Vec<Metric>,
}
