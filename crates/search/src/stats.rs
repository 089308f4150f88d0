use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Node counters for one top-level search.
///
/// `expanded` counts engine calls (pass calls included), `generated` counts
/// legal moves examined plus synthetic pass moves. `tested` counts the
/// boolean probes scout issues and stays zero for the other engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStats {
    pub expanded: u64,
    pub generated: u64,
    #[serde(default)]
    pub tested: u64,
}

impl NodeStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Every node the search touched: expansions, generated moves and probes.
    pub fn total(&self) -> u64 {
        self.expanded + self.generated + self.tested
    }

    pub fn generated_per_second(&self, elapsed: Duration) -> f64 {
        nodes_per_second(self.generated, elapsed)
    }
}

impl std::ops::Add for NodeStats {
    type Output = NodeStats;

    fn add(self, rhs: NodeStats) -> NodeStats {
        NodeStats {
            expanded: self.expanded + rhs.expanded,
            generated: self.generated + rhs.generated,
            tested: self.tested + rhs.tested,
        }
    }
}

/// Throughput, or 0.0 when no measurable time elapsed.
pub fn nodes_per_second(nodes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}
