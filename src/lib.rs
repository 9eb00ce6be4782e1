/*!
`grprops` computes a batch of structural graph properties (treewidth estimate,
planarity, vertex-cover estimate, degeneracy, ...) over a directory of
PACE-style `.gr` graph instances and aggregates them into one CSV row per
instance.

Some of the properties are expensive and can behave pathologically on
adversarial inputs, so every metric runs under its **own wall-clock budget**:
the computation is dispatched to a worker thread that is abandoned when the
deadline fires, and failures (panics, metric-level errors) are contained to
the single cell they belong to. A row is emitted for every instance that
loads, no matter how many of its metrics actually produced a value.

# Structure

- [`graph`] holds the adjacency-array representation instances are loaded into,
- [`io`] parses the PACE edge-list format (`.gr`),
- [`algo`] implements the individual property computations,
- [`metrics`] pairs them up with names and time budgets (registry order is
  report column order),
- [`exec`] is the bounded executor enforcing the per-metric deadlines,
- [`evaluate`] runs the full registry against one instance,
- [`report`] appends finished rows to the CSV report,
- [`driver`] walks an instance directory and ties everything together.

# Usage

```no_run
use grprops::{driver, metrics};

let registry = metrics::registry();
let summary = driver::run(std::path::Path::new("instances/exact"), &registry).unwrap();
println!("wrote {} rows to {}", summary.evaluated, summary.report.display());
```
*/

pub mod algo;
pub mod driver;
pub mod edge;
pub mod evaluate;
pub mod exec;
pub mod gens;
pub mod graph;
pub mod io;
pub mod metrics;
pub mod node;
pub mod report;

/// Includes definitions for nodes, edges, and the graph representation with
/// its access traits.
pub mod prelude {
    pub use super::{edge::*, graph::*, node::*};
}
