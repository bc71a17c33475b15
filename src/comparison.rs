// File: src/comparison.rs
use crate::core::engine::PredictedVerb;
use crate::core::error::ParadigmError;
use crate::core::types::{ConjugationSlot, ErrorReport, Paradigm, VerbRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sometimes entered after future 2s/2p forms; not part of the verb.
const FUTURE_IG_SUFFIX: &str = " ig";

/// Compares a predicted paradigm against an elicited one, slot by slot.
pub fn compare(predicted: &PredictedVerb, actual: &VerbRecord) -> ErrorReport {
    let mut report = ErrorReport::default();
    for slot in ConjugationSlot::ALL {
        let mut observed = actual.paradigm.get(slot);
        if matches!(slot, ConjugationSlot::Future2s | ConjugationSlot::Future2p) {
            observed = observed.strip_suffix(FUTURE_IG_SUFFIX).unwrap_or(observed);
        }
        let expected = predicted.get(slot);
        if observed != expected {
            report.insert(slot, observed.to_string(), expected.to_string());
        }
    }
    report
}

/// What happened to one elicited verb in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Compared {
        predicted: Paradigm,
        errors: ErrorReport,
    },
    /// The record's seed forms could not produce a paradigm.
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbOutcome {
    pub english: String,
    pub remote_past_1s: String,
    pub recent_past_1s: String,
    pub outcome: Outcome,
}

impl VerbOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(&self.outcome, Outcome::Compared { errors, .. } if errors.is_empty())
    }
}

/// Prediction accuracy over a set of elicited verbs, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub verbs: Vec<VerbOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.verbs.len()
    }

    /// Verbs whose every slot was predicted correctly.
    pub fn correct(&self) -> usize {
        self.verbs.iter().filter(|v| v.is_correct()).count()
    }

    pub fn rejected(&self) -> usize {
        self.verbs
            .iter()
            .filter(|v| matches!(v.outcome, Outcome::Rejected(_)))
            .count()
    }

    pub fn accuracy(&self) -> f64 {
        if self.verbs.is_empty() {
            return 0.0;
        }
        self.correct() as f64 / self.total() as f64
    }
}

fn predict_record(record: &VerbRecord) -> Result<PredictedVerb, ParadigmError> {
    PredictedVerb::new(
        record.paradigm.get(ConjugationSlot::RemotePast1s),
        record.paradigm.get(ConjugationSlot::RecentPast1s),
        Some(&record.english),
    )
}

/// Predicts every record from its own seed forms and compares.
pub fn compare_batch(records: &[VerbRecord]) -> BatchReport {
    let verbs = records
        .par_iter()
        .map(|record| {
            let outcome = match predict_record(record) {
                Ok(predicted) => Outcome::Compared {
                    errors: compare(&predicted, record),
                    predicted: predicted.paradigm().clone(),
                },
                Err(error) => {
                    warn!(english = %record.english, %error, "verb rejected");
                    Outcome::Rejected(error.to_string())
                }
            };
            VerbOutcome {
                english: record.english.clone(),
                remote_past_1s: record.paradigm.get(ConjugationSlot::RemotePast1s).to_string(),
                recent_past_1s: record.paradigm.get(ConjugationSlot::RecentPast1s).to_string(),
                outcome,
            }
        })
        .collect();
    BatchReport { verbs }
}
