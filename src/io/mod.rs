/*!
# IO

Utilities for reading graph instances from disk.

Currently the only supported input format is the **PACE edge-list format**
(`.gr` files) implemented in [`pace`]. The [`GraphReader`] trait keeps the
reader configurable and testable against in-memory buffers.
*/

pub mod pace;

use std::{
    fs::File,
    io::{BufRead, BufReader, Result},
    path::Path,
};

pub use pace::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
