//! Error types for the phonemic normalizer and the paradigm predictor.

use thiserror::Error;

/// Violations found while validating or repairing a phonemic transcription.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhonemicError {
    /// A character (or glide unit) outside the phoneme inventory.
    #[error("Unexpected character: {character}, position {position}")]
    InvalidCharacter { character: String, position: usize },

    /// A CCC run or a VV pair that does not start with [i].
    #[error("{0}")]
    IllegalCluster(String),
}

/// Seed forms or roots that cannot produce a paradigm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParadigmError {
    #[error("Seed form \"{form}\" is shorter than its {required}-character suffix")]
    InvalidSeedForm { form: String, required: usize },

    #[error("Root \"{root}\" is too short for this rule: {needed}")]
    UnderspecifiedRoot { root: String, needed: String },
}
