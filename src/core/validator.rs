// File: src/core/validator.rs
use crate::core::error::PhonemicError;
use crate::core::inventory::{is_consonant, is_glide_modifier, is_valid_unit};

/// Removes the square brackets phonetic transcriptions are usually wrapped in.
pub fn strip_brackets(text: &str) -> &str {
    text.trim_start_matches('[').trim_end_matches(']')
}

/// Index of the first window of three consecutive consonants.
pub(crate) fn find_ccc(chars: &[char]) -> Option<usize> {
    chars
        .windows(3)
        .position(|w| w.iter().all(|&c| is_consonant(c)))
}

/// Every inventory violation in `text`, ordered by position.
///
/// A glide modifier is checked together with the character before it, so
/// `eⁱ` is one unit while `uⁱ` is reported as unexpected. Each maximal run of
/// three or more consonants is reported once.
pub fn find_violations(text: &str) -> Vec<PhonemicError> {
    let chars: Vec<char> = text.chars().collect();
    let mut found: Vec<(usize, PhonemicError)> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        let unit: String = if is_glide_modifier(c) && i > 0 {
            [chars[i - 1], c].iter().collect()
        } else {
            c.to_string()
        };
        if !is_valid_unit(&unit) {
            found.push((
                i,
                PhonemicError::InvalidCharacter {
                    character: unit,
                    position: i + 1,
                },
            ));
        }
    }

    let mut run_start = 0;
    for i in 0..=chars.len() {
        if i < chars.len() && is_consonant(chars[i]) {
            continue;
        }
        if i - run_start >= 3 {
            let run: String = chars[run_start..i].iter().collect();
            found.push((
                run_start,
                PhonemicError::IllegalCluster(format!("CCC cluster was found: {run}")),
            ));
        }
        run_start = i + 1;
    }

    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, err)| err).collect()
}

/// Checks that no unexpected characters or clusters are fed into the normalizer.
///
/// With `hard_fail` the first violation is returned as an error. Otherwise
/// every violation is rendered into the returned message list.
pub fn check_phonetic_inventory(text: &str, hard_fail: bool) -> Result<Vec<String>, PhonemicError> {
    let violations = find_violations(text);
    if hard_fail {
        if let Some(first) = violations.into_iter().next() {
            return Err(first);
        }
        return Ok(Vec::new());
    }
    Ok(violations.iter().map(ToString::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn brackets_are_stripped() {
        assert_eq!(strip_brackets("[kɔra]"), "kɔra");
        assert_eq!(strip_brackets("kɔra"), "kɔra");
    }

    #[test]
    fn unexpected_characters_report_one_based_positions() {
        let errors = check_phonetic_inventory("xyz", false).unwrap();
        assert_eq!(
            errors,
            vec![
                "Unexpected character: x, position 1",
                "Unexpected character: y, position 2",
                "Unexpected character: z, position 3",
            ]
        );
    }

    #[test]
    fn ccc_run_reported_once() {
        let errors = check_phonetic_inventory("asmbla", false).unwrap();
        assert_eq!(errors, vec!["CCC cluster was found: smbl"]);
    }

    #[test]
    fn hard_fail_returns_first_violation() {
        let err = check_phonetic_inventory("kɔxq", true).unwrap_err();
        assert_eq!(
            err,
            PhonemicError::InvalidCharacter {
                character: "x".to_string(),
                position: 3
            }
        );
    }

    #[test]
    fn glide_modifier_binds_to_previous_vowel() {
        assert!(find_violations("seⁱ").is_empty());
        let errors = find_violations("suⁱ");
        assert_eq!(
            errors,
            vec![PhonemicError::InvalidCharacter {
                character: "uⁱ".to_string(),
                position: 3
            }]
        );
    }

    #[test]
    fn violations_are_ordered_by_position() {
        let errors = find_violations("ptkax");
        assert!(matches!(errors[0], PhonemicError::IllegalCluster(_)));
        assert!(matches!(errors[1], PhonemicError::InvalidCharacter { position: 5, .. }));
    }

    #[test]
    fn find_ccc_locates_first_window() {
        let chars: Vec<char> = "aptka".chars().collect();
        assert_eq!(find_ccc(&chars), Some(1));
        let chars: Vec<char> = "apta".chars().collect();
        assert_eq!(find_ccc(&chars), None);
    }
}
