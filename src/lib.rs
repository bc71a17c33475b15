// src/lib.rs

pub mod comparison;
pub mod config;
pub mod core;
pub mod corpus;
pub mod display;
pub mod logging;
pub mod persistence;

pub use crate::comparison::{compare, compare_batch, BatchReport};
pub use crate::core::converter::{normalize, Normalized, OrthographyEngine};
pub use crate::core::engine::PredictedVerb;
pub use crate::core::error::{ParadigmError, PhonemicError};
pub use crate::core::root::extract_root;
pub use crate::core::types::{ConjugationSlot, ErrorReport, Paradigm, VerbRecord};
