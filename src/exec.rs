/*!
# Bounded Executor

Runs a single metric computation against a single graph under a wall-clock
budget and converts every possible ending into a [`MetricOutcome`].

The wrapped computations are ordinary tight-loop algorithms that never check
for cancellation, so the deadline has to be enforced preemptively: the
computation runs in its own worker thread and the supervisor blocks on a
result channel with [`std::sync::mpsc::Receiver::recv_timeout`]. When the
deadline fires the worker is abandoned (its handle dropped) and whatever it
eventually produces is discarded; an abandoned worker keeps its `Arc` clone
of the graph alive until it finishes, but can never touch the pipeline again.

Panics inside the computation are caught with
[`std::panic::catch_unwind`] and reported as [`MetricOutcome::Failed`], so a
single misbehaving metric cannot take down the evaluation of the remaining
metrics or instances.
*/

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::graph::AdjArray;
use crate::metrics::{MetricFn, MetricResult, MetricValue};

/// The three ways a bounded metric computation can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricOutcome {
    /// The computation finished within its budget
    Success(MetricValue),
    /// The budget expired; the worker was abandoned and no value is available
    TimedOut,
    /// The computation failed (panic or metric-level error) before the deadline
    Failed(String),
}

/// Extracts a printable reason from a panic payload.
fn panic_reason(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "metric worker panicked".to_string()
    }
}

/// Runs `compute` on `graph` and returns its outcome after at most
/// `budget` (plus scheduling overhead).
///
/// A zero budget always times out; everything else would race the worker
/// startup and make the outcome depend on the graph size.
pub fn execute(compute: MetricFn, graph: &Arc<AdjArray>, budget: Duration) -> MetricOutcome {
    if budget.is_zero() {
        return MetricOutcome::TimedOut;
    }

    let (tx, rx) = mpsc::channel::<Result<MetricResult, String>>();
    let worker_graph = Arc::clone(graph);

    let worker = thread::Builder::new()
        .name("metric-worker".to_string())
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| compute(&worker_graph)))
                .map_err(panic_reason);
            let _ = tx.send(result);
        });

    let worker = match worker {
        Ok(handle) => handle,
        Err(e) => return MetricOutcome::Failed(format!("failed to spawn metric worker: {e}")),
    };

    match rx.recv_timeout(budget) {
        Ok(result) => {
            let _ = worker.join();
            match result {
                Ok(Ok(value)) => MetricOutcome::Success(value),
                Ok(Err(reason)) | Err(reason) => MetricOutcome::Failed(reason),
            }
        }
        Err(RecvTimeoutError::Timeout) => MetricOutcome::TimedOut,
        Err(RecvTimeoutError::Disconnected) => {
            let _ = worker.join();
            MetricOutcome::Failed("metric worker exited without reporting a result".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use crate::metrics::MetricResult;
    use std::time::Instant;

    const GENEROUS: Duration = Duration::from_secs(30);
    const TINY: Duration = Duration::from_millis(50);

    fn count_edges(g: &AdjArray) -> MetricResult {
        use crate::graph::GraphOrder;
        Ok(MetricValue::Count(g.number_of_edges() as u64))
    }

    fn sleepy(_: &AdjArray) -> MetricResult {
        loop {
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn angry(_: &AdjArray) -> MetricResult {
        panic!("boom");
    }

    fn unusable(_: &AdjArray) -> MetricResult {
        Err("result does not fit the value domain".to_string())
    }

    fn cycle_graph() -> Arc<AdjArray> {
        let mut g = AdjArray::new(4);
        g.connect_cycle(0..4);
        Arc::new(g)
    }

    #[test]
    fn fast_metric_returns_its_exact_value() {
        let g = cycle_graph();
        assert_eq!(
            execute(count_edges, &g, GENEROUS),
            MetricOutcome::Success(MetricValue::Count(4))
        );
    }

    #[test]
    fn runaway_metric_times_out_within_budget() {
        let g = cycle_graph();
        let start = Instant::now();
        let outcome = execute(sleepy, &g, TINY);
        let elapsed = start.elapsed();

        assert_eq!(outcome, MetricOutcome::TimedOut);
        assert!(elapsed >= TINY);
        assert!(elapsed < TINY + Duration::from_secs(2));
    }

    #[test]
    fn zero_budget_always_times_out() {
        let g = cycle_graph();
        for _ in 0..16 {
            assert_eq!(
                execute(count_edges, &g, Duration::ZERO),
                MetricOutcome::TimedOut
            );
        }
    }

    #[test]
    fn panic_is_contained_and_reported() {
        let g = cycle_graph();
        match execute(angry, &g, GENEROUS) {
            MetricOutcome::Failed(reason) => assert!(reason.contains("boom")),
            outcome => panic!("unexpected outcome {outcome:?}"),
        }
    }

    #[test]
    fn metric_level_error_is_reported_as_failure() {
        let g = cycle_graph();
        match execute(unusable, &g, GENEROUS) {
            MetricOutcome::Failed(reason) => assert!(reason.contains("value domain")),
            outcome => panic!("unexpected outcome {outcome:?}"),
        }
    }

    #[test]
    fn executor_recovers_after_timeout_and_panic() {
        let g = cycle_graph();
        assert_eq!(execute(sleepy, &g, TINY), MetricOutcome::TimedOut);
        let _ = execute(angry, &g, GENEROUS);
        assert_eq!(
            execute(count_edges, &g, GENEROUS),
            MetricOutcome::Success(MetricValue::Count(4))
        );
    }
}
