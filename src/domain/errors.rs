/// Error taxonomy for the chart screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Transport-level failure or non-2xx response from the data source.
    Network(String),
    /// Response body could not be decoded into bars.
    Decode(String),
    /// Payload violates a documented assumption (e.g. bar ordering).
    Validation(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::Network(msg) => write!(f, "Network Error: {}", msg),
            ChartError::Decode(msg) => write!(f, "Decode Error: {}", msg),
            ChartError::Validation(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

pub type FetchResult<T> = Result<T, ChartError>;
