//! Ratio and score behavior through the public API.

use setsift::fuzzy::{partial_ratio, ratio, sorted_tokens, token_sort_ratio};
use setsift::{base_score, score, DEFAULT_THRESHOLD};

#[test]
fn test_ratio_counts_characters_not_bytes() {
    // Two of three syllables shared: 2·2 / (2 + 3)
    assert_eq!(ratio("건국", "건국대"), 80);
    // 2·2 / (3 + 3) = 66.67
    assert_eq!(ratio("가나다", "가나라"), 67);
}

#[test]
fn test_ratio_single_substitution() {
    // LCS 3 of 4 + 4
    assert_eq!(ratio("abcd", "abce"), 75);
}

#[test]
fn test_ratio_empty_inputs() {
    assert_eq!(ratio("", ""), 100);
    assert_eq!(ratio("abc", ""), 0);
    assert_eq!(ratio("", "abc"), 0);
}

#[test]
fn test_partial_ratio_finds_embedded_phrase() {
    assert_eq!(partial_ratio("abc", "xxabcxx"), 100);
    assert_eq!(partial_ratio("xxabcxx", "abc"), 100);
    assert_eq!(partial_ratio("", ""), 100);
    assert_eq!(partial_ratio("", "abc"), 0);
}

#[test]
fn test_token_sort_ignores_order_case_and_punctuation() {
    assert_eq!(token_sort_ratio("University Konkuk", "konkuk university"), 100);
    assert_eq!(token_sort_ratio("Konkuk Univ.", "konkuk, univ"), 100);
    assert_eq!(sorted_tokens("B a,  C"), "a b c");
}

#[test]
fn test_base_score_dominates_each_ratio() {
    let pairs = [
        ("Apple", "Apple Inc"),
        ("Yonsei University", "University of Yonsei"),
        ("KAIST", "POSTECH"),
        ("건국대학교", "건국대학원"),
    ];
    for (a, b) in pairs {
        let base = base_score(a, b);
        assert!(base >= ratio(a, b), "{} vs {}", a, b);
        assert!(base >= partial_ratio(a, b), "{} vs {}", a, b);
        assert!(base >= token_sort_ratio(a, b), "{} vs {}", a, b);
    }
}

#[test]
fn test_score_bridges_korean_to_english_name() {
    let direct = base_score("건국대학교", "Konkuk University");
    let bridged = score("건국대학교", "Konkuk University", 60);
    assert!(direct < 60);
    assert!(bridged >= 80, "bridged score was {}", bridged);
    assert_eq!(bridged, score("Konkuk University", "건국대학교", 60));
}

#[test]
fn test_score_different_institutions_sharing_a_noun() {
    for (ko, en) in [
        ("삼성전자", "LG Electronics"),
        ("서울대학교", "Yonsei University"),
        ("삼성병원", "Asan Hospital"),
        ("건국대학교", "Korea University"),
    ] {
        let s = score(ko, en, DEFAULT_THRESHOLD);
        assert!(s < DEFAULT_THRESHOLD, "{} vs {} scored {}", ko, en, s);
    }
}

#[test]
fn test_score_same_institution_with_noun() {
    assert!(score("삼성전자", "Samsung Electronics", DEFAULT_THRESHOLD) >= DEFAULT_THRESHOLD);
}

#[test]
fn test_score_short_circuits_at_zero_threshold() {
    assert_eq!(
        score("건국대학교", "Konkuk University", 0),
        base_score("건국대학교", "Konkuk University")
    );
}

#[test]
fn test_score_falls_back_when_romanization_fails() {
    assert_eq!(
        score("ㄱ건국", "Konkuk", 100),
        base_score("ㄱ건국", "Konkuk")
    );
}
