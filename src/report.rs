/*!
# Report Sink

Streams result records into a CSV table.

The header row is `instance,n,m,` followed by one column per registered
metric in registry order. Every row is formatted in memory first and then
written and flushed as a whole, so a crash between rows never leaves a
partially written line behind. Missing cells render as empty fields.
*/

use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;

use itertools::Itertools;

use crate::evaluate::ResultRecord;
use crate::metrics::MetricDescriptor;

/// A CSV writer for result records, generic over the output for testability.
pub struct ReportWriter<W> {
    out: W,
}

impl ReportWriter<BufWriter<File>> {
    /// Creates (truncating) the report file at `path` and writes the header.
    pub fn create(path: &Path, registry: &[MetricDescriptor]) -> Result<Self> {
        Self::new(BufWriter::new(File::create(path)?), registry)
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wraps `out` and immediately writes the header row.
    pub fn new(mut out: W, registry: &[MetricDescriptor]) -> Result<Self> {
        let header = std::iter::once("instance")
            .chain(["n", "m"])
            .chain(registry.iter().map(|d| d.name))
            .join(",");
        writeln!(out, "{header}")?;
        out.flush()?;

        Ok(Self { out })
    }

    /// Appends one record as a single row and flushes it.
    pub fn append(&mut self, record: &ResultRecord) -> Result<()> {
        let cells = record
            .cells
            .iter()
            .map(|cell| match cell {
                Some(value) => value.to_string(),
                None => String::new(),
            })
            .join(",");

        let row = format!(
            "{},{},{},{}\n",
            record.instance, record.nodes, record.edges, cells
        );
        self.out.write_all(row.as_bytes())?;
        self.out.flush()
    }
}
