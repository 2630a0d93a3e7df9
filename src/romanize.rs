// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hangul → Latin, close enough to match what people actually type.
//!
//! Revised Romanization of Korean, done algorithmically: every precomposed
//! syllable in U+AC00..=U+D7A3 is `0xAC00 + (initial * 21 + medial) * 28 + final`,
//! so three table lookups give the Latin spelling. The only pronunciation rules
//! applied are the ones that change how a name is commonly written:
//!
//! - **Liaison**: a final consonant before a silent-ㅇ syllable moves over
//!   (한국어 → hangugeo, not hanguk-eo).
//! - **Lateralisation**: ㄴ and ㄹ meeting across a syllable boundary, in
//!   either order, are written `ll` (신라 → silla, 설날 → seollal, 물론 → mullon).
//!
//! Anything that isn't Hangul passes through untouched. Standalone jamo that
//! can't be composed into a syllable are rejected: there's no sensible
//! pronunciation for a lone ㄱ, and callers treat the error as "don't bridge".
//!
//! Romanizing alone rarely bridges an institution name, because the Latin
//! spelling translates the common noun ("건국대학교" is written "Konkuk
//! University", not "Geongukdaehakgyo"). `gloss` splits such a name into its
//! romanized proper part and the English form of each organisational noun, so
//! a scorer can compare the proper parts on their own. The translation says
//! nothing about identity: 삼성전자 and "LG Electronics" share only the noun.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::error::RomanizationError;

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const MEDIALS: u32 = 21;
const FINALS: u32 = 28;

/// Initial consonant index of silent ㅇ.
const SILENT_INITIAL: usize = 11;
const NIEUN_INITIAL: usize = 2;
const RIEUL_INITIAL: usize = 5;
const NIEUN_FINAL: usize = 4;
const RIEUL_FINAL: usize = 8;

const INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t", "p",
    "h",
];

const VOWELS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo", "we",
    "wi", "yu", "eu", "ui", "i",
];

/// Final consonant before another consonant or at the end of a word.
const CODAS: [&str; 28] = [
    "", "k", "k", "k", "n", "n", "n", "t", "l", "k", "m", "l", "l", "l", "p", "l", "m", "p", "p",
    "t", "t", "ng", "t", "t", "k", "t", "p", "t",
];

/// Final consonant carried onto a following silent-ㅇ syllable.
const LIAISONS: [&str; 28] = [
    "", "g", "kk", "ks", "n", "nj", "n", "d", "r", "lg", "lm", "lb", "ls", "lt", "lp", "r", "m",
    "b", "ps", "s", "ss", "ng", "j", "ch", "k", "t", "p", "",
];

/// Organisational nouns whose Latin spelling is a translation, longest first.
const GLOSSES: &[(&str, &str)] = &[
    ("초등학교", "elementary school"),
    ("고등학교", "high school"),
    ("주식회사", "co ltd"),
    ("중학교", "middle school"),
    ("대학교", "university"),
    ("대학원", "graduate school"),
    ("연구소", "institute"),
    ("연구원", "institute"),
    ("자동차", "motors"),
    ("대학", "college"),
    ("학교", "school"),
    ("병원", "hospital"),
    ("은행", "bank"),
    ("전자", "electronics"),
    ("증권", "securities"),
    ("보험", "insurance"),
    ("건설", "construction"),
    ("화학", "chemical"),
    ("통신", "telecom"),
    ("항공", "airlines"),
    ("그룹", "group"),
    ("재단", "foundation"),
    ("협회", "association"),
    ("센터", "center"),
    ("시청", "city hall"),
];

/// Does `text` contain at least one precomposed Hangul syllable?
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_syllable)
}

fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Jamo blocks: conjoining, compatibility, extended-A, extended-B.
fn is_jamo(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{11FF}' |
        '\u{3131}'..='\u{318E}' |
        '\u{A960}'..='\u{A97F}' |
        '\u{D7B0}'..='\u{D7FF}'
    )
}

/// Split a syllable into (initial, medial, final) table indices.
fn decompose(c: char) -> Option<(usize, usize, usize)> {
    if !is_syllable(c) {
        return None;
    }
    let index = c as u32 - SYLLABLE_BASE;
    Some((
        (index / (MEDIALS * FINALS)) as usize,
        ((index % (MEDIALS * FINALS)) / FINALS) as usize,
        (index % FINALS) as usize,
    ))
}

#[cfg(feature = "unicode-normalization")]
fn compose(text: &str) -> Vec<char> {
    text.nfc().collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn compose(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Romanize the Hangul in `text` (Revised Romanization, lowercase Latin).
///
/// ```ignore
/// assert_eq!(romanize("건국대학교")?, "geongukdaehakgyo");
/// assert_eq!(romanize("서울 Station")?, "seoul Station");
/// ```
pub fn romanize(text: &str) -> Result<String, RomanizationError> {
    let chars = compose(text);
    let mut out = String::with_capacity(chars.len() * 3);

    for (offset, &c) in chars.iter().enumerate() {
        let Some((initial, medial, fin)) = decompose(c) else {
            if is_jamo(c) {
                return Err(RomanizationError::UnsupportedJamo { ch: c, offset });
            }
            out.push(c);
            continue;
        };

        let prev = offset.checked_sub(1).and_then(|i| decompose(chars[i]));
        let next = chars.get(offset + 1).and_then(|&n| decompose(n));

        let lateral = match (initial, prev) {
            (RIEUL_INITIAL, Some((_, _, NIEUN_FINAL | RIEUL_FINAL))) => true,
            (NIEUN_INITIAL, Some((_, _, RIEUL_FINAL))) => true,
            _ => false,
        };
        if lateral {
            out.push('l');
        } else {
            out.push_str(INITIALS[initial]);
        }

        out.push_str(VOWELS[medial]);

        let coda = match next {
            Some((SILENT_INITIAL, _, _)) => LIAISONS[fin],
            Some((RIEUL_INITIAL, _, _)) if fin == NIEUN_FINAL => "l",
            _ => CODAS[fin],
        };
        out.push_str(coda);
    }

    Ok(out)
}

/// A Korean name split around its organisational nouns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gloss {
    /// Romanized text outside the nouns (`geonguk` for 건국대학교).
    pub name: String,
    /// English form of each noun, in order of appearance.
    pub nouns: Vec<&'static str>,
    /// Romanized name with the nouns translated in place (`geonguk university`).
    pub rendering: String,
}

/// Split `text` around known organisational nouns, or `None` if none occur.
pub fn gloss(text: &str) -> Result<Option<Gloss>, RomanizationError> {
    let mut names: Vec<String> = Vec::new();
    let mut pieces: Vec<String> = Vec::new();
    let mut nouns = Vec::new();
    let mut pending = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some((korean, english)) = GLOSSES.iter().find(|(k, _)| rest.starts_with(k)) {
            if !pending.is_empty() {
                let latin = romanize(&pending)?;
                names.push(latin.clone());
                pieces.push(latin);
                pending.clear();
            }
            pieces.push((*english).to_string());
            nouns.push(*english);
            rest = &rest[korean.len()..];
        } else {
            pending.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    if nouns.is_empty() {
        return Ok(None);
    }
    if !pending.is_empty() {
        let latin = romanize(&pending)?;
        names.push(latin.clone());
        pieces.push(latin);
    }

    Ok(Some(Gloss {
        name: squash(&names.join(" ")),
        nouns,
        rendering: squash(&pieces.join(" ")),
    }))
}

fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
