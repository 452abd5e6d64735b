use thiserror::Error;

/// Errors raised by grid edits, pattern stamping and pattern lookup.
/// All of them are recoverable: the rejected operation leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("pattern '{pattern}' places cell ({row}, {col}) outside the {rows}x{cols} grid")]
    PatternOutOfBounds {
        pattern: &'static str,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
