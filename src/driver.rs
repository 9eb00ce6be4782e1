/*!
# Batch Driver

Walks a directory of `.gr` instance files in lexicographic filename order,
evaluates each instance, and streams the finished rows into the report.

An instance that fails to load is logged and skipped; the batch continues.
Only configuration errors (unreadable directory) and sink errors abort the
whole run, so a crash mid-batch still leaves a valid report containing every
row computed so far.
*/

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn};

use crate::evaluate;
use crate::metrics::MetricDescriptor;
use crate::report::ReportWriter;

/// File suffix of instance files
const INSTANCE_EXTENSION: &str = "gr";

/// Fatal batch errors; everything else is contained per instance or per metric.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to list instance directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write report {}: {source}", path.display())]
    Sink {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Counters of a finished batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows written to the report
    pub evaluated: usize,
    /// Instances skipped due to load errors
    pub skipped: usize,
    /// Location of the report
    pub report: PathBuf,
}

/// Derives the report location from the instance directory: `<dir>.csv`
/// next to the directory itself.
pub fn report_path(dir: &Path) -> PathBuf {
    match dir.file_name() {
        Some(name) => {
            let mut name = name.to_os_string();
            name.push(".csv");
            dir.with_file_name(name)
        }
        // no usable directory name (e.g. `/` or `..`), keep the report inside
        None => dir.join("report.csv"),
    }
}

/// Lists all instance files of `dir` in lexicographic filename order.
fn instance_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = std::fs::read_dir(dir).map_err(|source| BatchError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BatchError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == INSTANCE_EXTENSION) {
            files.push(path);
        }
    }

    files.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
    Ok(files)
}

/// Evaluates every instance of `dir` and streams the rows into the report.
///
/// Re-running over an unchanged directory rewrites the identical report.
pub fn run(dir: &Path, registry: &[MetricDescriptor]) -> Result<BatchSummary, BatchError> {
    let files = instance_files(dir)?;
    let report = report_path(dir);

    let as_sink_error = |source| BatchError::Sink {
        path: report.clone(),
        source,
    };
    let mut writer = ReportWriter::create(&report, registry).map_err(as_sink_error)?;

    let mut summary = BatchSummary {
        evaluated: 0,
        skipped: 0,
        report: report.clone(),
    };

    info!(instances = files.len(), report = %report.display(), "starting batch");
    for path in &files {
        let started = Instant::now();
        match evaluate::evaluate(path, registry) {
            Ok(record) => {
                writer.append(&record).map_err(as_sink_error)?;
                summary.evaluated += 1;
                info!(
                    instance = %record.instance,
                    n = record.nodes,
                    m = record.edges,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "instance evaluated"
                );
            }
            Err(e) => {
                summary.skipped += 1;
                warn!(path = %path.display(), error = %e, "skipping unreadable instance");
            }
        }
    }

    info!(
        evaluated = summary.evaluated,
        skipped = summary.skipped,
        "batch finished"
    );
    Ok(summary)
}
