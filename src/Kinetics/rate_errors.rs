use thiserror::Error;

/// error types of rate law construction and configuration loading.
/// Evaluation of an already built rate law never fails.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Missing required key '{0}' in rate coefficients")]
    MissingKey(String),
    #[error("PLOG breakpoint {index} has non-positive pressure {pressure}")]
    NonPositivePressure { index: usize, pressure: f64 },
    #[error("PLOG breakpoint {index} has non-finite {field}: {value}")]
    NonFiniteValue {
        index: usize,
        field: &'static str,
        value: f64,
    },
    #[error("PLOG breakpoints share the same pressure {0}")]
    DuplicatePressure(f64),
    #[error("Unknown reaction rate type: {0}")]
    UnknownRateType(String),
    #[error("Malformed ArrheniusData row '{0}': expected (p A beta Ta)")]
    MalformedRow(String),
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File '{0}' does not exist")]
    FileNotFound(String),
    #[error("No 'KINETICS' or 'REACTIONS' header found in file '{0}'")]
    NoKineticsHeader(String),
}
