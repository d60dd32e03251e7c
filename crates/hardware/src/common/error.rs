//! Simulator error definitions.
//!
//! The core model itself never fails: unrecognized encodings decode to an explicit
//! variant and a degenerate throughput metric is reported as "no data". Errors only
//! arise at the edges of the model:
//! 1. **Image Loading:** Reading and parsing instruction/data images.
//! 2. **Configuration:** Parsing and validating JSON configuration.
//! 3. **Reporting:** Serializing run reports.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of a text image is not a valid hexadecimal word or address directive.
    #[error("invalid image line {line}: '{text}'")]
    ImageParse {
        /// One-based line number.
        line: usize,
        /// Offending text, trimmed.
        text: String,
    },

    /// An image does not fit in the target memory.
    #[error("image needs {words} words but memory holds {capacity}")]
    ImageTooLarge {
        /// Highest word index required plus one.
        words: usize,
        /// Capacity of the target memory in words.
        capacity: usize,
    },

    /// JSON could not be parsed or produced.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but holds values the core cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results produced by the simulator setup paths.
pub type SimResult<T> = Result<T, SimError>;
