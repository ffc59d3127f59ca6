//! Network configuration error types.

use crate::domain::InvalidStopKey;

/// Errors detected while loading configuration or building a network.
///
/// All of these are fatal at startup; none can occur once a network has
/// been built.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A line lists no stops
    #[error("line {line} has no stops")]
    EmptyLine { line: String },

    /// Two lines share a name
    #[error("line {line} is declared more than once")]
    DuplicateLine { line: String },

    /// A stop name is blank once normalized
    #[error("line {line}: {reason}")]
    EmptyStopName {
        line: String,
        reason: InvalidStopKey,
    },

    /// A line visits the same stop twice in a row
    #[error("line {line} lists stop {stop} twice in a row")]
    RepeatedStop { line: String, stop: String },

    /// An interchange names a stop no line serves
    #[error("interchange refers to unknown stop {stop}")]
    UnknownInterchangeStop { stop: String },

    /// A same-stop interchange where only one line calls
    #[error("stop {stop} is declared as an interchange but only one line serves it")]
    NotAnInterchange { stop: String },

    /// The same pair of stops is declared twice
    #[error("interchange between {a} and {b} is declared more than once")]
    DuplicateInterchange { a: String, b: String },

    /// Configuration file could not be read
    #[error("failed to read network configuration {path}: {error}")]
    Read { path: String, error: std::io::Error },

    /// The configuration path variable is not valid Unicode
    #[error("METRO_NETWORK_CONFIG is not valid Unicode: {path}")]
    NonUnicodePath { path: String },

    /// Configuration is not valid JSON for the expected shape
    #[error("failed to parse network configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
