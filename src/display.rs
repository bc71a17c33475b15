// File: src/display.rs
//! reStructuredText-style paradigm tables for terminal output.

use crate::core::types::{Actor, ConjugationSlot, Paradigm, Tense, VerbRecord};

const HEADERS: [&str; 5] = [
    "",
    "Remote past tense",
    "Recent past tense",
    "Future tense",
    "Imperative",
];

fn paradigm_rows(paradigm: &Paradigm) -> Vec<[String; 5]> {
    Actor::ALL
        .into_iter()
        .map(|actor| {
            let imperative = match actor {
                Actor::Second => paradigm.get(ConjugationSlot::SingularImperative),
                Actor::SecondPlural => paradigm.get(ConjugationSlot::PluralImperative),
                _ => "",
            };
            [
                actor.label().to_string(),
                paradigm.get(ConjugationSlot::tensed(Tense::RemotePast, actor)).to_string(),
                paradigm.get(ConjugationSlot::tensed(Tense::RecentPast, actor)).to_string(),
                paradigm.get(ConjugationSlot::tensed(Tense::Future, actor)).to_string(),
                imperative.to_string(),
            ]
        })
        .collect()
}

fn rst_table(headers: &[&str; 5], rows: &[[String; 5]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = widths
        .iter()
        .map(|w| "=".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");
    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!("{cell}{}", " ".repeat(w - cell.chars().count())))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![rule.clone(), line(headers.to_vec()), rule.clone()];
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.push(rule);
    out.join("\n")
}

/// The paradigm table headed by the citation form and gloss.
pub fn paradigm_table(english: &str, paradigm: &Paradigm, short: &str) -> String {
    format!(
        " {}, \"{}\"\n{}\nShort form: {}",
        paradigm.get(ConjugationSlot::Future1s),
        english,
        rst_table(&HEADERS, &paradigm_rows(paradigm)),
        short
    )
}

pub fn record_table(record: &VerbRecord) -> String {
    paradigm_table(&record.english, &record.paradigm, &record.short)
}

/// Elicited and predicted paradigms, one above the other.
pub fn comparison_table(actual: &VerbRecord, predicted: &Paradigm) -> String {
    format!(
        "Actual verb:\n{}\n\nPredicted verb:\n{}",
        record_table(actual),
        paradigm_table(&actual.english, predicted, "")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::PredictedVerb;

    #[test]
    fn table_lists_every_actor_row() {
        let verb = PredictedVerb::new("sam", "sagam", Some("go")).unwrap();
        let table = paradigm_table(verb.english(), verb.paradigm(), "");
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], " sanim, \"go\"");
        assert!(lines[1].starts_with("=="));
        assert!(lines[2].contains("Remote past tense"));
        assert!(lines[4].starts_with("1s  sam"));
        assert!(lines[5].ends_with("se"));
        assert!(lines[8].ends_with("sas"));
        assert_eq!(lines.last().copied(), Some("Short form: "));
    }

    #[test]
    fn columns_align_on_character_width() {
        let verb = PredictedVerb::new("sam", "sagam", Some("go")).unwrap();
        let table = paradigm_table(verb.english(), verb.paradigm(), "");
        let rule = table.lines().nth(1).unwrap();
        let header = table.lines().nth(2).unwrap();
        let second_column = rule.find("  ").unwrap() + 2;
        assert_eq!(&header[second_column..second_column + 6], "Remote");
    }

    #[test]
    fn comparison_shows_actual_above_prediction() {
        let verb = PredictedVerb::new("sam", "sagam", Some("go")).unwrap();
        let mut actual = verb.to_record();
        actual.paradigm.set(ConjugationSlot::Future1s, "sɛnim");
        let table = comparison_table(&actual, verb.paradigm());
        let (elicited, predicted) = table.split_once("\n\nPredicted verb:\n").unwrap();
        assert!(elicited.starts_with("Actual verb:\n sɛnim, \"go\""));
        assert!(predicted.starts_with(" sanim, \"go\""));
    }
}
