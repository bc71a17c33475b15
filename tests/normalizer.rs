//! End-to-end tests for the phonemic normalizer.

use kovol_core::{normalize, PhonemicError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("kɔra", "kola")]
#[case("[sɪβɛ]", "sivə")]
#[case("ŋɑⁱ", "ngai")]
#[case("tia", "tya")]
#[case("meⁱmbo", "meyimbo")]
#[case("aŋgɔ", "ango")]
#[case("bɪr ɔk", "bil ok")]
fn valid_transcriptions(#[case] input: &str, #[case] expected: &str) {
    let out = normalize(input, true).unwrap();
    assert_eq!(out.orthography, expected);
    assert!(out.errors.is_empty());
}

#[test]
fn brackets_do_not_change_the_result() {
    assert_eq!(normalize("[kɔra]", true).unwrap(), normalize("kɔra", true).unwrap());
}

#[test]
fn unknown_characters_are_reported_and_left_alone() {
    let out = normalize("xyz", false).unwrap();
    assert_eq!(out.orthography, "xyz");
    assert_eq!(
        out.errors,
        vec![
            "Unexpected character: x, position 1",
            "Unexpected character: y, position 2",
            "Unexpected character: z, position 3",
        ]
    );
}

#[test]
fn unknown_character_is_fatal_in_hard_fail_mode() {
    assert_eq!(
        normalize("xyz", true),
        Err(PhonemicError::InvalidCharacter {
            character: "x".to_string(),
            position: 1
        })
    );
}

#[test]
fn ccc_cluster_is_fatal_in_hard_fail_mode() {
    let err = normalize("soᵘmbra", true).unwrap_err();
    assert_eq!(err, PhonemicError::IllegalCluster("CCC cluster was found: mbr".to_string()));
}

#[test]
fn accumulate_mode_still_repairs_clusters() {
    let out = normalize("soᵘmbra", false).unwrap();
    assert_eq!(out.orthography, "sowumubla");
    assert_eq!(out.errors, vec!["CCC cluster was found: mbr"]);
}

#[test]
fn non_i_vowel_pair_in_accumulate_mode() {
    let out = normalize("kau", false).unwrap();
    assert_eq!(out.orthography, "kyu");
    assert_eq!(out.errors.len(), 1);
    assert!(normalize("kau", true).is_err());
}

#[rstest]
#[case("kɔra")]
#[case("bɪr ɔk")]
#[case("aŋgɔ")]
#[case("pɔtu")]
fn orthography_is_a_fixed_point(#[case] input: &str) {
    let once = normalize(input, true).unwrap().orthography;
    let twice = normalize(&once, true).unwrap().orthography;
    assert_eq!(twice, once);
}
