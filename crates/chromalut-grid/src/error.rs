use crate::grid::GridSize;

/// An error type for lookup table construction and processing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LutError {
    /// Error when an argument is outside of its valid range.
    #[error("{0}")]
    Config(String),

    /// Error when the table length does not match the grid shape.
    #[error("Table length ({0}) does not match the grid shape ({1})")]
    ShapeMismatch(usize, usize),

    /// Error when an operation receives a table with the wrong number of channels.
    #[error("Can transform only 3-channel cubes, got {0} channels")]
    ChannelMismatch(usize),

    /// Error when cubic interpolation is requested on a too small table.
    #[error("Cubic interpolation requires a table of size 4 in all dimensions, got {0}")]
    UnsupportedSize(GridSize),

    /// Error when the parallel execution could not be set up.
    #[error("Failed to execute in parallel: {0}")]
    Execution(String),
}
