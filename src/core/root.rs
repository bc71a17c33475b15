// File: src/core/root.rs
use crate::core::error::ParadigmError;
use crate::core::inventory::is_root_vowel;

/// Length of the invariant 1s remote-past suffix (-ɔm and its assimilated variants).
pub const REMOTE_PAST_1S_SUFFIX_LEN: usize = 2;
/// Length of the invariant 1s recent-past suffix (-gɔm and its assimilated variants).
pub const RECENT_PAST_1S_SUFFIX_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootEnding {
    Vowel,
    Consonant,
}

fn strip_suffix(form: &str, len: usize) -> Result<String, ParadigmError> {
    let count = form.chars().count();
    if count < len {
        return Err(ParadigmError::InvalidSeedForm {
            form: form.to_string(),
            required: len,
        });
    }
    Ok(form.chars().take(count - len).collect())
}

/// Finds the verb root by stripping the 1s suffixes off both seed forms.
/// The longer candidate wins; ties go to the remote-past candidate.
pub fn extract_root(remote_past_1s: &str, recent_past_1s: &str) -> Result<String, ParadigmError> {
    let remote = strip_suffix(remote_past_1s, REMOTE_PAST_1S_SUFFIX_LEN)?;
    let recent = strip_suffix(recent_past_1s, RECENT_PAST_1S_SUFFIX_LEN)?;
    if recent.chars().count() > remote.chars().count() {
        Ok(recent)
    } else {
        Ok(remote)
    }
}

/// A verb root held as characters so rules can index from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    chars: Vec<char>,
}

impl Root {
    pub fn new(root: &str) -> Self {
        Self {
            chars: root.chars().collect(),
        }
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    fn underspecified(&self, needed: impl Into<String>) -> ParadigmError {
        ParadigmError::UnderspecifiedRoot {
            root: self.as_string(),
            needed: needed.into(),
        }
    }

    pub fn last(&self) -> Result<char, ParadigmError> {
        self.chars
            .last()
            .copied()
            .ok_or_else(|| self.underspecified("a final character"))
    }

    pub fn ends_with(&self, c: char) -> Result<bool, ParadigmError> {
        Ok(self.last()? == c)
    }

    pub fn ending(&self) -> Result<RootEnding, ParadigmError> {
        if is_root_vowel(self.last()?) {
            Ok(RootEnding::Vowel)
        } else {
            Ok(RootEnding::Consonant)
        }
    }

    /// The root's vowels, in order.
    pub fn verb_vowels(&self) -> Vec<char> {
        self.chars.iter().copied().filter(|&c| is_root_vowel(c)).collect()
    }

    pub fn last_vowel(&self) -> Result<char, ParadigmError> {
        self.verb_vowels()
            .last()
            .copied()
            .ok_or_else(|| self.underspecified("at least one vowel"))
    }

    /// The root without its final `n` characters.
    pub fn drop_last(&self, n: usize) -> Result<String, ParadigmError> {
        if self.chars.len() < n {
            return Err(self.underspecified(format!("{n} characters to reduce")));
        }
        Ok(self.chars[..self.chars.len() - n].iter().collect())
    }

    pub fn replace(&self, from: char, to: char) -> Self {
        Self {
            chars: self
                .chars
                .iter()
                .map(|&c| if c == from { to } else { c })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn longer_candidate_wins() {
        // remote "sɔm" -> "s", recent "sɔŋgɔm" -> "sɔŋ"
        assert_eq!(extract_root("sɔm", "sɔŋgɔm").unwrap(), "sɔŋ");
        assert_eq!(extract_root("dɛlam", "dɛgam").unwrap(), "dɛl");
    }

    #[test]
    fn tie_goes_to_remote_past() {
        assert_eq!(extract_root("abam", "xygɔm").unwrap(), "ab");
    }

    #[test]
    fn short_seeds_are_rejected() {
        assert_eq!(
            extract_root("m", "sagam"),
            Err(ParadigmError::InvalidSeedForm {
                form: "m".to_string(),
                required: 2
            })
        );
        assert_eq!(
            extract_root("sam", "am"),
            Err(ParadigmError::InvalidSeedForm {
                form: "am".to_string(),
                required: 3
            })
        );
    }

    #[test]
    fn suffix_lengths_count_characters_not_bytes() {
        // ŋ and ɔ are multi-byte
        assert_eq!(extract_root("ŋɔŋɔm", "ŋɔgɔm").unwrap(), "ŋɔŋ");
    }

    #[test]
    fn endings_and_vowels() {
        let root = Root::new("hɔtal");
        assert_eq!(root.ending().unwrap(), RootEnding::Consonant);
        assert_eq!(root.verb_vowels(), vec!['ɔ', 'a']);
        assert_eq!(root.last_vowel().unwrap(), 'a');
        assert_eq!(Root::new("sa").ending().unwrap(), RootEnding::Vowel);
    }

    #[test]
    fn empty_root_is_underspecified() {
        let root = Root::new("");
        assert!(matches!(root.last(), Err(ParadigmError::UnderspecifiedRoot { .. })));
        assert!(matches!(root.drop_last(1), Err(ParadigmError::UnderspecifiedRoot { .. })));
    }

    #[test]
    fn drop_last_reduces_by_characters() {
        let root = Root::new("dɛl");
        assert_eq!(root.drop_last(2).unwrap(), "d");
        assert_eq!(root.drop_last(0).unwrap(), "dɛl");
    }
}
