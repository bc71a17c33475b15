// File: src/core/converter.rs
use crate::core::error::PhonemicError;
use crate::core::inventory::is_vowel;
use crate::core::validator::{check_phonetic_inventory, find_ccc, strip_brackets};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Analytical decisions from the phonemic write-up, applied in order.
const ANALYSIS_RULES: [(&str, &str); 4] = [("r", "l"), ("k", "ʔ"), ("ɔ", "o"), ("ɪ", "i")];

/// Phonemic to orthographic spelling, applied in order. The `nng` and `ngg`
/// rules collapse clusters produced by expanding ŋ next to n or g.
const ORTHOGRAPHY_RULES: [(&str, &str); 9] = [
    ("ɑ", "a"),
    ("ⁱ", "i"),
    ("ɛ", "ə"),
    ("β", "v"),
    ("ʔ", "k"),
    ("ŋ", "ng"),
    ("nng", "ng"),
    ("ngg", "ng"),
    ("j", "y"),
];

const VV_NOT_I: &str = "VV cluster not starting with [i] found.";

/// Glide, its semivowel spelling and the vowel used to break any CCC it creates.
const GLIDE_REPAIRS: [(&str, &str, char); 2] = [("eⁱ", "ej", 'i'), ("oᵘ", "ow", 'u')];

/// Output of the normalizer: the orthographic text plus every violation
/// collected along the way (always empty in hard-fail mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    pub orthography: String,
    pub errors: Vec<String>,
}

/// Phonemic transcription to orthography converter.
pub struct OrthographyEngine {
    hard_fail: bool,
}

impl OrthographyEngine {
    pub fn new(hard_fail: bool) -> Self {
        Self { hard_fail }
    }

    /// Runs validation, cluster resolution, analysis and orthography mapping.
    pub fn normalize(&self, text: &str) -> Result<Normalized, PhonemicError> {
        let text = strip_brackets(text);
        let mut errors = check_phonetic_inventory(text, self.hard_fail)?;
        let interpreted = resolve_clusters(text, self.hard_fail, &mut errors)?;
        let orthography = to_orthography(&analyse(&interpreted));
        Ok(Normalized { orthography, errors })
    }
}

/// Shorthand for `OrthographyEngine::new(hard_fail).normalize(text)`.
pub fn normalize(text: &str, hard_fail: bool) -> Result<Normalized, PhonemicError> {
    OrthographyEngine::new(hard_fail).normalize(text)
}

fn find_vv(chars: &[char]) -> Option<usize> {
    chars.windows(2).position(|w| is_vowel(w[0]) && is_vowel(w[1]))
}

/// Rewrites iV sequences as jV, then spells glides as semivowels and breaks
/// any CCC cluster that creates with an epenthetic vowel.
///
/// A VV pair whose first vowel is not `i` is an error in hard-fail mode;
/// otherwise it is recorded in `errors` and rewritten anyway.
pub fn resolve_clusters(
    text: &str,
    hard_fail: bool,
    errors: &mut Vec<String>,
) -> Result<String, PhonemicError> {
    let mut chars: Vec<char> = text.chars().collect();
    while let Some(pos) = find_vv(&chars) {
        if chars[pos] != 'i' {
            let err = PhonemicError::IllegalCluster(VV_NOT_I.to_string());
            if hard_fail {
                return Err(err);
            }
            errors.push(err.to_string());
        }
        chars[pos] = 'j';
    }

    let mut interpreted: String = chars.into_iter().collect();
    for (glide, semivowel, epenthetic) in GLIDE_REPAIRS {
        if interpreted.contains(glide) {
            interpreted = interpreted.replace(glide, semivowel);
            interpreted = break_ccc(&interpreted, epenthetic);
        }
    }
    Ok(interpreted)
}

/// Inserts `vowel` after the first consonant of each CCC cluster until none remain.
fn break_ccc(text: &str, vowel: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    while let Some(start) = find_ccc(&chars) {
        debug!(position = start, %vowel, "epenthesis inside CCC cluster");
        chars.insert(start + 1, vowel);
    }
    chars.into_iter().collect()
}

fn replace_characters(rules: &[(&str, &str)], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Applies the analytical decisions to an interpreted phonetic string.
pub fn analyse(text: &str) -> String {
    replace_characters(&ANALYSIS_RULES, text)
}

/// Changes phonemic text into orthographic.
pub fn to_orthography(text: &str) -> String {
    replace_characters(&ORTHOGRAPHY_RULES, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(text: &str) -> String {
        let mut errors = Vec::new();
        let out = resolve_clusters(text, true, &mut errors).unwrap();
        assert!(errors.is_empty());
        out
    }

    #[test]
    fn iv_becomes_jv() {
        assert_eq!(resolve("sia"), "sja");
        assert_eq!(resolve("tiɔ"), "tjɔ");
    }

    #[test]
    fn non_i_vv_is_fatal_in_hard_fail_mode() {
        let mut errors = Vec::new();
        let err = resolve_clusters("kau", true, &mut errors).unwrap_err();
        assert!(matches!(err, PhonemicError::IllegalCluster(_)));
    }

    #[test]
    fn non_i_vv_is_reported_and_rewritten_otherwise() {
        let mut errors = Vec::new();
        let out = resolve_clusters("kau", false, &mut errors).unwrap();
        assert_eq!(out, "kju");
        assert_eq!(errors, vec!["VV cluster not starting with [i] found."]);
    }

    #[test]
    fn glides_become_semivowels() {
        assert_eq!(resolve("seⁱ"), "sej");
        assert_eq!(resolve("soᵘ"), "sow");
    }

    #[test]
    fn glide_ccc_gets_epenthetic_vowel() {
        assert_eq!(resolve("eⁱmba"), "ejimba");
        assert_eq!(resolve("oᵘmba"), "owumba");
    }

    #[test]
    fn analysis_rules_chain() {
        assert_eq!(analyse("kɔra"), "ʔola");
        assert_eq!(analyse("bɪr"), "bil");
    }

    #[test]
    fn orthography_collapses_velar_nasal_clusters() {
        assert_eq!(to_orthography("aŋ"), "ang");
        assert_eq!(to_orthography("anŋa"), "anga");
        assert_eq!(to_orthography("aŋga"), "anga");
        assert_eq!(to_orthography("jɛβɑʔ"), "yəvak");
    }

    #[test]
    fn engine_runs_every_stage() {
        let engine = OrthographyEngine::new(true);
        let out = engine.normalize("[kɔra]").unwrap();
        assert_eq!(out.orthography, "kola");
        assert!(out.errors.is_empty());
    }
}
