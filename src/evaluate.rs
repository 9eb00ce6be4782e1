/*!
# Instance Evaluator

Evaluates all registered metrics for a single instance file and assembles
the fixed-shape result record.

A record always carries the instance identifier, `n`, `m`, and exactly one
cell per registered metric, in registry order. Metrics that time out or fail
leave their cell empty; only a failure to *load* the instance is reported to
the caller.
*/

use std::io::Result;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::exec::{MetricOutcome, execute};
use crate::graph::{AdjArray, GraphOrder};
use crate::io::PaceRead;
use crate::metrics::{MetricDescriptor, MetricValue};
use crate::node::NumNodes;
use crate::edge::NumEdges;

/// One report row: identifier, graph size, and one cell per registered metric.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub instance: String,
    pub nodes: NumNodes,
    pub edges: NumEdges,
    /// Metric cells in registry order; `None` marks a missing value
    pub cells: Vec<Option<MetricValue>>,
}

/// Derives the instance identifier from its file name.
pub fn instance_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Loads the instance at `path` and evaluates every metric of `registry`
/// against it, in order.
///
/// # Errors
/// Returns an error only if the instance cannot be read or parsed. Metric
/// failures and timeouts are folded into empty cells instead.
pub fn evaluate(path: &Path, registry: &[MetricDescriptor]) -> Result<ResultRecord> {
    let graph = Arc::new(AdjArray::try_read_pace_file(path)?);
    let instance = instance_name(path);

    let cells = registry
        .iter()
        .map(|descriptor| {
            match execute(descriptor.compute, &graph, descriptor.budget) {
                MetricOutcome::Success(value) => Some(value),
                MetricOutcome::TimedOut => {
                    warn!(
                        instance = %instance,
                        metric = descriptor.name,
                        budget_ms = descriptor.budget.as_millis() as u64,
                        "metric timed out"
                    );
                    None
                }
                MetricOutcome::Failed(reason) => {
                    warn!(
                        instance = %instance,
                        metric = descriptor.name,
                        reason = %reason,
                        "metric failed"
                    );
                    None
                }
            }
        })
        .collect();

    Ok(ResultRecord {
        nodes: graph.number_of_nodes(),
        edges: graph.number_of_edges(),
        instance,
        cells,
    })
}
