use thiserror::Error;

/// Rejected input or result of a strict calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{parameter} = {value} is outside the correlation range ({expected})")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Live fluid requires a positive {parameter}")]
    MissingLiveParameter { parameter: &'static str },

    #[error("{quantity} evaluated to a non-finite value")]
    NonFiniteResult { quantity: &'static str },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --params-json: {source}")]
    ParseParamsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Option --{option} does not apply to {fluid}")]
    InapplicableOption {
        option: &'static str,
        fluid: crate::models::FluidKind,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
