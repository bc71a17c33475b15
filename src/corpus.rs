// File: src/corpus.rs
//! Grouping elicited corpus rows into [`VerbRecord`]s.

use crate::core::types::{Actor, ConjugationSlot, Tense, VerbRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One elicited form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElicitedRow {
    pub actor: String,
    #[serde(default)]
    pub tense: String,
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "kov")]
    pub form: String,
    #[serde(rename = "eng")]
    pub english: String,
    #[serde(default)]
    pub tpi: String,
    #[serde(default)]
    pub author: String,
}

fn apply_row(record: &mut VerbRecord, row: &ElicitedRow) {
    if record.tpi.is_empty() && !row.tpi.is_empty() {
        record.tpi = row.tpi.clone();
    }
    if record.author.is_empty() && !row.author.is_empty() {
        record.author = row.author.clone();
    }

    if let (Some(tense), Some(actor)) = (Tense::parse(&row.tense), Actor::parse(&row.actor)) {
        record
            .paradigm
            .set(ConjugationSlot::tensed(tense, actor), row.form.clone());
    } else if row.mode.is_empty() {
        debug!(english = %row.english, tense = %row.tense, actor = %row.actor, "row fits no slot");
    }
}

fn apply_mode_row(record: &mut VerbRecord, row: &ElicitedRow) {
    match Actor::parse(&row.actor) {
        Some(Actor::Second) => record
            .paradigm
            .set(ConjugationSlot::SingularImperative, row.form.clone()),
        Some(Actor::SecondPlural) => record
            .paradigm
            .set(ConjugationSlot::PluralImperative, row.form.clone()),
        _ if row.mode.trim().eq_ignore_ascii_case("short") => record.short = row.form.clone(),
        _ => debug!(english = %row.english, mode = %row.mode, "mode row fits no slot"),
    }
}

/// Groups rows sharing an English gloss into one record each, in order of
/// first appearance. Tensed rows are applied before mode rows.
pub fn group_rows(rows: &[ElicitedRow]) -> Vec<VerbRecord> {
    let mut glosses: Vec<&str> = Vec::new();
    for row in rows {
        if !glosses.contains(&row.english.as_str()) {
            glosses.push(&row.english);
        }
    }

    glosses
        .into_iter()
        .map(|english| {
            let mut record = VerbRecord::new(english);
            let group = rows.iter().filter(|r| r.english == english);
            for row in group.clone() {
                apply_row(&mut record, row);
            }
            for row in group.filter(|r| !r.mode.is_empty()) {
                apply_mode_row(&mut record, row);
            }
            record
        })
        .collect()
}

/// Reads a JSON array of rows and groups them.
pub fn load_corpus(path: &Path) -> Result<Vec<VerbRecord>, CorpusError> {
    let reader = BufReader::new(File::open(path)?);
    let rows: Vec<ElicitedRow> = serde_json::from_reader(reader)?;
    Ok(group_rows(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(actor: &str, tense: &str, mode: &str, form: &str, english: &str) -> ElicitedRow {
        ElicitedRow {
            actor: actor.to_string(),
            tense: tense.to_string(),
            mode: mode.to_string(),
            form: form.to_string(),
            english: english.to_string(),
            ..ElicitedRow::default()
        }
    }

    #[test]
    fn rows_group_by_gloss_in_first_seen_order() {
        let rows = vec![
            row("1s", "Remote Past", "", "sam", "go"),
            row("1S", "recent past", "", "dɛgam", "sit"),
            row("1s", "recent past", "", "sagam", "go"),
            row("3p", "future", "", "sis", "go"),
        ];
        let records = group_rows(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].english, "go");
        assert_eq!(records[0].paradigm.get(ConjugationSlot::RemotePast1s), "sam");
        assert_eq!(records[0].paradigm.get(ConjugationSlot::RecentPast1s), "sagam");
        assert_eq!(records[0].paradigm.get(ConjugationSlot::Future3p), "sis");
        assert_eq!(records[1].paradigm.get(ConjugationSlot::RecentPast1s), "dɛgam");
    }

    #[test]
    fn mode_rows_fill_imperatives_and_short_form() {
        let rows = vec![
            row("2s", "", "imperative", "se", "go"),
            row("2P", "", "imperative", "sas", "go"),
            row("", "", "Short", "sa", "go"),
        ];
        let records = group_rows(&rows);
        assert_eq!(records[0].paradigm.get(ConjugationSlot::SingularImperative), "se");
        assert_eq!(records[0].paradigm.get(ConjugationSlot::PluralImperative), "sas");
        assert_eq!(records[0].short, "sa");
    }

    #[test]
    fn rows_deserialize_from_corpus_columns() {
        let json = r#"[{"actor": "1s", "tense": "future", "mode": "", "kov": "sanim", "eng": "go"}]"#;
        let rows: Vec<ElicitedRow> = serde_json::from_str(json).unwrap();
        let records = group_rows(&rows);
        assert_eq!(records[0].kovol(), "sanim");
        assert!(records[0].tpi.is_empty());
    }
}
