//! Problem loading and schedule writing.
//!
//! The text formats at the edges of a run: a problem file in, a schedule
//! file out.

mod loader;
mod writer;

pub use loader::{parse_problem, read_problem};
pub use writer::{save_schedule, write_schedule};

use thiserror::Error;

/// Failure to read a problem.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read problem: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended before the problem was complete.
    #[error("unexpected end of input after line {line}")]
    UnexpectedEof { line: usize },
    /// A field is not a valid integer of the expected type.
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
    /// A line has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// An order lists a product type outside the catalog.
    #[error("line {line}: product type {product} out of range (catalog has {product_count})")]
    UnknownProduct {
        line: usize,
        product: usize,
        product_count: usize,
    },
}
