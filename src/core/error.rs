use thiserror::Error;

/// Faults raised by the I/O collaborator while a program runs.
///
/// Stack underflow and arithmetic edge cases never surface here; the machine absorbs them.
#[derive(Debug, Error)]
pub enum PietError {
    #[error("input exhausted while reading {expected}")]
    InputExhausted { expected: &'static str },
    #[error("expected an integer on input, found {found:?}")]
    InvalidInteger { found: String },
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have a positive size (got {width}x{height})")]
    EmptyDimension { width: i32, height: i32 },
    #[error("row {row} has {actual} codels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{cells} codels do not fill a {width}x{height} grid")]
    CellCountMismatch { width: i32, height: i32, cells: usize },
}
