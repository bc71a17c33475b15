// File: src/core/inventory.rs

/// Consonant phonemes of the transcription inventory.
pub const CONSONANTS: [char; 16] = [
    'p', 't', 'k', 'ʔ', 'b', 'd', 'g', 'm', 'n', 'ŋ', 'β', 's', 'r', 'l', 'w', 'j',
];

/// Vowel phonemes. Both ɑ and a are listed to catch spelling inconsistencies.
pub const VOWELS: [char; 9] = ['i', 'ɪ', 'e', 'ɛ', 'u', 'o', 'ɔ', 'ɑ', 'a'];

/// Vowel + superscript modifier digraphs.
pub const GLIDES: [&str; 4] = ["ɑⁱ", "aⁱ", "eⁱ", "oᵘ"];

pub const GLIDE_MODIFIERS: [char; 2] = ['ⁱ', 'ᵘ'];

pub const OTHER_VALID: [char; 1] = [' '];

/// Vowels used when analysing verb roots. Roots are written in the
/// phonemic orthography of the verb corpus, so this set carries ə and
/// leaves out the purely phonetic ɪ and ɑ.
pub const ROOT_VOWELS: [char; 8] = ['i', 'e', 'ɛ', 'a', 'ə', 'u', 'o', 'ɔ'];

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_root_vowel(c: char) -> bool {
    ROOT_VOWELS.contains(&c)
}

pub fn is_glide_modifier(c: char) -> bool {
    GLIDE_MODIFIERS.contains(&c)
}

/// Checks a single character or a glide unit (base + modifier) against the inventory.
pub fn is_valid_unit(unit: &str) -> bool {
    let mut chars = unit.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => {
            is_consonant(c) || is_vowel(c) || OTHER_VALID.contains(&c)
        }
        (Some(_), Some(_), None) => GLIDES.contains(&unit),
        _ => false,
    }
}
