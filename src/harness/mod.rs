//! Scenario harness.
//!
//! Builds a fresh trie per scenario, applies its inserts, and checks every
//! query against the expected answer. The first mismatch aborts the run.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ChildMapKind, LanaiConfig, ScenarioConfig};
use crate::data_structures::lanai_trie::{AsciiChildren, ChildMap, HashChildren, LanaiTrie};
use crate::error::harness::HarnessError;

/// Outcome of a scenario whose expectations all held.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Child-lookup strategy the trie used
    pub child_map: String,
    /// Number of insert calls
    pub inserted: usize,
    /// Number of expectations checked
    pub checked: usize,
    /// Nodes below the root after all inserts
    pub nodes: usize,
}

/// Runs one scenario against a trie using child map `C`.
pub fn run_scenario<C: ChildMap>(
    scenario: &ScenarioConfig,
    child_map: ChildMapKind,
) -> Result<ScenarioReport, HarnessError> {
    let mut trie = LanaiTrie::<C>::default();
    trie.extend(&scenario.insert);

    for expectation in &scenario.expect {
        let actual = trie.search(&expectation.query, expectation.allow_prefix);
        debug!(
            scenario = %scenario.name,
            query = %expectation.query,
            allow_prefix = expectation.allow_prefix,
            actual,
            "checked expectation"
        );
        if actual != expectation.result {
            return Err(HarnessError::ExpectationFailed {
                scenario: scenario.name.clone(),
                query: expectation.query.clone(),
                allow_prefix: expectation.allow_prefix,
                expected: expectation.result,
                actual,
            });
        }
    }

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        child_map: child_map.to_string(),
        inserted: scenario.insert.len(),
        checked: scenario.expect.len(),
        nodes: trie.node_count(),
    })
}

/// Runs every effective scenario of `config` with the configured child map.
pub fn run_all(config: &LanaiConfig) -> Result<Vec<ScenarioReport>, HarnessError> {
    let kind = config.trie.child_map;
    let scenarios = config.effective_scenarios();
    info!(count = scenarios.len(), child_map = %kind, "running scenarios");

    scenarios
        .iter()
        .map(|scenario| -> Result<ScenarioReport, HarnessError> {
            let report = match kind {
                ChildMapKind::Hash => run_scenario::<HashChildren>(scenario, kind),
                ChildMapKind::Ascii => run_scenario::<AsciiChildren>(scenario, kind),
            }?;
            info!(
                scenario = %report.name,
                checked = report.checked,
                nodes = report.nodes,
                "scenario passed"
            );
            Ok(report)
        })
        .collect()
}
