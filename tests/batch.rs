//! End-to-end tests of the batch driver: directory walking, per-instance
//! isolation, and the shape of the emitted report.

use std::fs;
use std::path::Path;
use std::time::Duration;

use grprops::driver;
use grprops::graph::{AdjArray, GraphOrder};
use grprops::metrics::{self, MetricDescriptor, MetricResult, MetricValue};

fn write_instance(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn setup_mixed_directory(dir: &Path) {
    // a 4-cycle, a path, and a file that does not parse
    write_instance(dir, "b_cycle.gr", "c toy cycle\np ds 4 4\n1 2\n2 3\n3 4\n4 1\n");
    write_instance(dir, "a_path.gr", "p ds 4 3\n1 2\n2 3\n3 4\n");
    write_instance(dir, "m_broken.gr", "p ds 2 1\nthis is not an edge\n");
    // not picked up: wrong suffix
    write_instance(dir, "ignored.txt", "p ds 1 0\n");
}

fn report_lines(report: &Path) -> Vec<String> {
    fs::read_to_string(report)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn batch_skips_broken_instances_and_keeps_sorted_order() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("instances");
    fs::create_dir(&dir).unwrap();
    setup_mixed_directory(&dir);

    let registry = metrics::registry();
    let summary = driver::run(&dir, &registry).unwrap();

    assert_eq!(summary.evaluated, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.report, tmp.path().join("instances.csv"));

    let lines = report_lines(&summary.report);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("instance,n,m,treewidth,planar,"));
    assert!(lines[1].starts_with("a_path,4,3,"));
    assert!(lines[2].starts_with("b_cycle,4,4,"));

    // every row is rectangular
    for line in &lines {
        assert_eq!(line.split(',').count(), registry.len() + 3);
    }

    // all metrics are fast on these toy instances: no empty cell anywhere
    assert!(!lines[1].contains(",,") && !lines[1].ends_with(','));
    assert!(!lines[2].contains(",,") && !lines[2].ends_with(','));
}

#[test]
fn four_cycle_row_has_the_expected_values() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("c4");
    fs::create_dir(&dir).unwrap();
    write_instance(&dir, "c4.gr", "p ds 4 4\n1 2\n2 3\n3 4\n4 1\n");

    let summary = driver::run(&dir, &metrics::registry()).unwrap();
    let lines = report_lines(&summary.report);

    assert_eq!(
        lines[1],
        "c4,4,4,2,true,4,2,2,2,2,2,2,1,2",
        "treewidth, planar, vertex_cover, node_connectivity, degeneracy, \
         dominating_set, independent_set, chromatic_number, clique_number, \
         feedback_edges, diameter"
    );
}

#[test]
fn rerunning_an_unchanged_directory_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("stable");
    fs::create_dir(&dir).unwrap();
    setup_mixed_directory(&dir);

    let registry = metrics::registry();
    let first = driver::run(&dir, &registry).unwrap();
    let first_bytes = fs::read(&first.report).unwrap();

    let second = driver::run(&dir, &registry).unwrap();
    let second_bytes = fs::read(&second.report).unwrap();

    assert_eq!(first.report, second.report);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn metric_failures_stay_inside_their_cell() {
    fn node_count(g: &AdjArray) -> MetricResult {
        Ok(MetricValue::Count(g.number_of_nodes() as u64))
    }
    fn panics_on_disconnected(g: &AdjArray) -> MetricResult {
        use grprops::algo::Connectivity;
        assert!(g.is_connected(), "disconnected graph");
        Ok(MetricValue::Flag(true))
    }
    fn starved(g: &AdjArray) -> MetricResult {
        node_count(g)
    }

    let registry = vec![
        MetricDescriptor {
            name: "nodes_again",
            compute: node_count,
            budget: Duration::from_secs(10),
        },
        MetricDescriptor {
            name: "connected_check",
            compute: panics_on_disconnected,
            budget: Duration::from_secs(10),
        },
        MetricDescriptor {
            name: "starved",
            compute: starved,
            budget: Duration::ZERO,
        },
    ];

    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("mixed");
    fs::create_dir(&dir).unwrap();
    write_instance(&dir, "a_connected.gr", "p ds 3 2\n1 2\n2 3\n");
    write_instance(&dir, "b_disconnected.gr", "p ds 4 1\n1 2\n");

    let summary = driver::run(&dir, &registry).unwrap();
    assert_eq!(summary.evaluated, 2);

    let lines = report_lines(&summary.report);
    assert_eq!(lines[0], "instance,n,m,nodes_again,connected_check,starved");
    // the panicking metric only affects its own cell on the instance it fails on
    assert_eq!(lines[1], "a_connected,3,2,3,true,");
    assert_eq!(lines[2], "b_disconnected,4,1,4,,");
}

#[test]
fn missing_directory_is_a_fatal_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("does_not_exist");

    let result = driver::run(&missing, &metrics::registry());
    assert!(matches!(result, Err(driver::BatchError::ListDir { .. })));
}

#[test]
fn empty_directory_produces_a_header_only_report() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("empty");
    fs::create_dir(&dir).unwrap();

    let summary = driver::run(&dir, &metrics::registry()).unwrap();
    assert_eq!(summary.evaluated, 0);

    let lines = report_lines(&summary.report);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("instance,n,m,"));
}
