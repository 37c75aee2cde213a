//! Generation failure taxonomy.
//!
//! Fatal conditions abort the run with no partial output; soft conflicts and
//! per-record derivation failures are logged at the point of recovery and
//! never reach this type.

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No namespace prefix configured and none detectable from the graph.
    #[error("could not detect prefix, please set explicitly")]
    MissingPrefix,

    /// No display name configured and none derivable from the output path.
    #[error("could not detect name, please set explicitly")]
    MissingName,

    /// Two records formatted to the same constant name.
    #[error("constant {0} is defined twice")]
    DuplicateConstant(String),

    /// Two terms mapped to the same record key under the fail-fast policy.
    #[error("conflicting keys: {key} maps to both {kept} and {discarded}")]
    KeyConflict {
        key: String,
        kept: String,
        discarded: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
