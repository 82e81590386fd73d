//! One-shot plugin execution against the agent protocol.

use crate::{Graphs, Plugin};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Set by the agent when it wants the graph schema instead of values.
const PLUGIN_META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";
/// Directory for default state files.
const WORKDIR_ENV: &str = "MACKEREL_PLUGIN_WORKDIR";

/// Gaps longer than this between runs invalidate differential values.
const MAX_DIFF_GAP_SECS: u64 = 600;

/// Previous-run snapshot backing differential metrics.
#[derive(Debug, Default, Serialize, Deserialize)]
struct State {
    #[serde(rename = "_lastTime")]
    last_time: u64,
    #[serde(flatten)]
    values: HashMap<String, f64>,
}

/// Schema document printed for the agent.
#[derive(Serialize)]
struct GraphDef {
    graphs: HashMap<String, Graphs>,
}

/// Runs a [`Plugin`] once: schema output or one value-collection cycle.
pub struct PluginRunner<P> {
    plugin: P,
    tempfile: PathBuf,
}

impl<P: Plugin> PluginRunner<P> {
    /// `tempfile` overrides the state file path; the default lives in
    /// `$MACKEREL_PLUGIN_WORKDIR` (or the system temp dir) and is named
    /// after the plugin prefix.
    pub fn new(plugin: P, tempfile: Option<PathBuf>) -> Self {
        let tempfile = tempfile.unwrap_or_else(|| default_tempfile(&plugin.metric_key_prefix()));
        Self { plugin, tempfile }
    }

    /// Print the graph schema when the agent asks for it, otherwise run
    /// one collection cycle.
    pub async fn run(&self) -> eyre::Result<()> {
        let mut stdout = std::io::stdout().lock();
        if std::env::var(PLUGIN_META_ENV).is_ok_and(|v| !v.is_empty()) {
            self.output_definitions(&mut stdout)
        } else {
            self.output_values(&mut stdout).await
        }
    }

    /// Print the `# mackerel-agent-plugin` header and the JSON schema,
    /// with graph keys namespaced by the plugin prefix.
    pub fn output_definitions(&self, out: &mut impl Write) -> eyre::Result<()> {
        let prefix = self.plugin.metric_key_prefix();
        let graphs = self
            .plugin
            .graph_definition()
            .into_iter()
            .map(|(key, graph)| (graph_key(&prefix, &key), graph))
            .collect();

        writeln!(out, "# mackerel-agent-plugin")?;
        serde_json::to_writer(&mut *out, &GraphDef { graphs })?;
        writeln!(out)?;
        Ok(())
    }

    /// Fetch metrics once and print one `key\tvalue\tepoch` line per
    /// schema metric present in the mapping.
    ///
    /// A fetch error fails the cycle before anything is printed or the
    /// state file is touched.
    pub async fn output_values(&self, out: &mut impl Write) -> eyre::Result<()> {
        let now = epoch_secs();
        let values = self.plugin.fetch_metrics().await?;
        let prefix = self.plugin.metric_key_prefix();
        let previous = self.load_state();

        for (key, graph) in self.plugin.graph_definition() {
            for metric in &graph.metrics {
                let Some(&value) = values.get(&metric.name) else {
                    continue;
                };
                let emitted = if metric.diff {
                    previous.as_ref().and_then(|prev| {
                        rate_since(
                            value,
                            now,
                            prev.values.get(&metric.name).copied(),
                            prev.last_time,
                        )
                    })
                } else {
                    Some(value)
                };
                let Some(emitted) = emitted else { continue };

                let full_key = format!("{}.{}", graph_key(&prefix, &key), metric.name);
                if emitted.is_finite() {
                    writeln!(out, "{}\t{}\t{}", full_key, emitted, now)?;
                } else {
                    warn!("skipping non-finite value for {}", full_key);
                }
            }
        }

        self.save_state(&State {
            last_time: now,
            values,
        })?;
        Ok(())
    }

    fn load_state(&self) -> Option<State> {
        let bytes = std::fs::read(&self.tempfile).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(
                    "ignoring unreadable state file {}: {}",
                    self.tempfile.display(),
                    e
                );
                None
            }
        }
    }

    fn save_state(&self, state: &State) -> eyre::Result<()> {
        let file = std::fs::File::create(&self.tempfile)?;
        serde_json::to_writer(file, state)?;
        Ok(())
    }
}

/// Namespace a graph key with the plugin prefix.
fn graph_key(prefix: &str, key: &str) -> String {
    if key.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Per-minute rate of a differential metric, `None` when the previous
/// run cannot anchor one (missing value, counter reset, stale state).
fn rate_since(value: f64, now: u64, last_value: Option<f64>, last_time: u64) -> Option<f64> {
    let last_value = last_value?;
    let elapsed = now.saturating_sub(last_time);
    if elapsed == 0 || elapsed > MAX_DIFF_GAP_SECS {
        warn!("state is stale or from the same second, skipping differential value");
        return None;
    }
    if value < last_value {
        warn!("counter seems to have been reset, skipping differential value");
        return None;
    }
    Some((value - last_value) * 60.0 / elapsed as f64)
}

fn default_tempfile(name: &str) -> PathBuf {
    let dir = std::env::var_os(WORKDIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    dir.join(format!("mackerel-plugin-{name}"))
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
