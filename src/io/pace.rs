/*!
# PACE Edge Lists

Reader for the **PACE edge-list format** used by the challenge instance sets
(`.gr` files):

- The first non-comment line is the header `p <problem> <n> <m>`, where `n` is
  the number of nodes and `m` the number of edges.
- Each of the following `m` non-comment lines contains one edge `u v` with
  **1-indexed** endpoints.
- Lines starting with a configurable **comment identifier** (default: `"c"`)
  are skipped.

Nodes are shifted to `0..n` internally. Instances are expected to be simple
graphs: self-loops are rejected, duplicate edges are collapsed.

# Example

```
use grprops::graph::*;
use grprops::io::*;
use std::io::Cursor;

let data = b"c a toy instance\np vc 3 2\n1 2\n2 3\n";
let g: AdjArray = PaceReader::new().try_read_graph(Cursor::new(&data[..])).unwrap();

assert_eq!(g.number_of_nodes(), 3);
assert_eq!(g.number_of_edges(), 2);
```
*/

use std::io::{BufRead, ErrorKind, Lines};

use super::*;
use crate::{graph::AdjArray, node::*};

/// A configurable reader for the **PACE edge-list format**.
///
/// Parses the `p <problem> <n> <m>` header and the edge section,
/// while skipping comment lines starting with a given identifier (default: `"c"`).
#[derive(Debug, Clone)]
pub struct PaceReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for PaceReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl PaceReader {
    /// Creates a new [`PaceReader`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier, consuming and returning `self` for chaining.
    pub fn comment_identifier<S>(mut self, c: S) -> Self
    where
        S: Into<String>,
    {
        self.comment_identifier = c.into();
        self
    }

    /// Returns the next non-comment-line if it exists or propagates an error
    fn next_non_comment_line<R: BufRead>(&self, lines: &mut Lines<R>) -> Result<Option<String>> {
        loop {
            match lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with(&self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Parses the header line `p <problem> <n> <m>`.
    fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut parts = line.split(' ').filter(|t| !t.is_empty());

        raise_error_unless!(
            parts.next() == Some("p"),
            ErrorKind::InvalidData,
            "Invalid header found"
        );
        raise_error_unless!(
            parts.next().is_some(),
            ErrorKind::InvalidData,
            "Header is missing the problem descriptor"
        );

        let number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        let number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        Ok((number_of_nodes, number_of_edges))
    }

    /// Parses an edge line `u v` with 1-indexed endpoints in `1..=n`.
    fn parse_edge_line(&self, line: &str, n: NumNodes) -> Result<(Node, Node)> {
        let mut parts = line.split(' ').filter(|t| !t.is_empty());

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");

        raise_error_unless!(
            (1..=n).contains(&from) && (1..=n).contains(&dest),
            ErrorKind::InvalidData,
            format!("Edge endpoint out of range: {} {}", from, dest)
        );
        raise_error_unless!(
            from != dest,
            ErrorKind::InvalidData,
            format!("Self-loop found at node {}", from)
        );

        Ok((from - 1, dest - 1))
    }
}

impl GraphReader<AdjArray> for PaceReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<AdjArray> {
        let mut lines = reader.lines();

        let header = self
            .next_non_comment_line(&mut lines)?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let (n, m) = self.parse_header(&header)?;

        let mut graph = AdjArray::new(n);
        for _ in 0..m {
            let line = self.next_non_comment_line(&mut lines)?.ok_or(io_error!(
                ErrorKind::InvalidData,
                "Premature end of file in edge section"
            ))?;

            let (u, v) = self.parse_edge_line(&line, n)?;
            graph.try_add_edge(u, v);
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from the **PACE edge-list format**.
///
/// Shorthand for reading graphs using the default [`PaceReader`] settings.
pub trait PaceRead: Sized {
    /// Tries to read a graph from a given buffered reader.
    fn try_read_pace<R>(reader: R) -> Result<Self>
    where
        R: BufRead;

    /// Tries to read a graph from a file on disk.
    fn try_read_pace_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_pace(BufReader::new(File::open(path)?))
    }
}

impl<G> PaceRead for G
where
    PaceReader: GraphReader<G>,
{
    fn try_read_pace<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        PaceReader::default().try_read_graph(reader)
    }
}
