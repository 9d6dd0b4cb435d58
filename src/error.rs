/// Error type for the percolation model and experiment driver.
///
/// Every variant is a caller contract violation; nothing in this crate
/// retries or degrades on it.
#[derive(Debug, Clone, PartialEq)]
pub enum PercolationError {
    /// A size, coordinate, or parameter is outside its valid range.
    InvalidArgument(String),
}

impl std::fmt::Display for PercolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PercolationError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for PercolationError {}
