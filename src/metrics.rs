/*!
# Metric Registry

The set of structural properties reported for every instance, each paired
with a computation function from [`crate::algo`] and its own time budget.

The registry is built once at startup and never mutated. Its order is
significant: it fixes the column order of the report, so adding a metric at
the end is safe while reordering breaks downstream consumers of existing
reports.
*/

use std::fmt::{self, Display};
use std::time::Duration;

use crate::{algo::*, graph::AdjArray};

/// A computed metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricValue {
    /// A counted quantity (set size, width, distance, ...)
    Count(u64),
    /// A yes/no property
    Flag(bool),
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(x) => write!(f, "{}", x),
            MetricValue::Flag(x) => write!(f, "{}", x),
        }
    }
}

/// Result of one metric computation; the error text only feeds diagnostics.
pub type MetricResult = Result<MetricValue, String>;

/// Signature of a metric computation.
///
/// A plain function pointer: stateless, freely shareable with the worker
/// thread that runs it, and unable to smuggle mutable state between metrics.
pub type MetricFn = fn(&AdjArray) -> MetricResult;

/// One named metric with its computation and deadline.
pub struct MetricDescriptor {
    /// Column name in the report
    pub name: &'static str,
    pub compute: MetricFn,
    /// Wall-clock budget; on expiry the metric is abandoned and its cell stays empty
    pub budget: Duration,
}

impl MetricDescriptor {
    const fn new(name: &'static str, compute: MetricFn, budget: Duration) -> Self {
        Self {
            name,
            compute,
            budget,
        }
    }
}

fn count(x: impl Into<u64>) -> MetricResult {
    Ok(MetricValue::Count(x.into()))
}

fn treewidth(g: &AdjArray) -> MetricResult {
    count(g.treewidth_min_degree())
}

fn planar(g: &AdjArray) -> MetricResult {
    Ok(MetricValue::Flag(g.is_planar()))
}

fn vertex_cover(g: &AdjArray) -> MetricResult {
    count(g.matching_vertex_cover_size())
}

fn node_connectivity(g: &AdjArray) -> MetricResult {
    count(g.node_connectivity())
}

fn degeneracy(g: &AdjArray) -> MetricResult {
    count(g.degeneracy())
}

fn dominating_set(g: &AdjArray) -> MetricResult {
    count(g.greedy_dominating_set_size())
}

fn independent_set(g: &AdjArray) -> MetricResult {
    count(g.greedy_independent_set_size())
}

fn chromatic_number(g: &AdjArray) -> MetricResult {
    count(g.greedy_number_of_colors())
}

fn clique_number(g: &AdjArray) -> MetricResult {
    count(g.greedy_clique_number())
}

fn feedback_edges(g: &AdjArray) -> MetricResult {
    count(g.number_of_feedback_edges())
}

fn diameter(g: &AdjArray) -> MetricResult {
    g.diameter()
        .map(|d| MetricValue::Count(d as u64))
        .ok_or_else(|| "diameter is undefined on empty or disconnected graphs".to_string())
}

const FAST: Duration = Duration::from_secs(10);
const SLOW: Duration = Duration::from_secs(60);

/// Builds the ordered metric registry.
///
/// New metrics go at the end: the order fixes the report columns and
/// existing reports are compared column-by-column.
pub fn registry() -> Vec<MetricDescriptor> {
    vec![
        MetricDescriptor::new("treewidth", treewidth, Duration::from_secs(30)),
        MetricDescriptor::new("planar", planar, FAST),
        MetricDescriptor::new("vertex_cover", vertex_cover, FAST),
        MetricDescriptor::new("node_connectivity", node_connectivity, SLOW),
        MetricDescriptor::new("degeneracy", degeneracy, FAST),
        MetricDescriptor::new("dominating_set", dominating_set, Duration::from_secs(30)),
        MetricDescriptor::new("independent_set", independent_set, FAST),
        MetricDescriptor::new("chromatic_number", chromatic_number, FAST),
        MetricDescriptor::new("clique_number", clique_number, FAST),
        MetricDescriptor::new("feedback_edges", feedback_edges, FAST),
        MetricDescriptor::new("diameter", diameter, SLOW),
    ]
}
