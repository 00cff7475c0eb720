//! Stem derivation, one function per inflection class.
//!
//! Every function works on NFC-composed text so that a long vowel is a
//! single `char` and suffix slicing never splits a letter from its macron.

use unicode_normalization::UnicodeNormalization;

use crate::error::MorphError;
use crate::normalize::{normalize, strip_homograph_digits};

/// Trims, drops homograph digits and composes the citation form.
pub fn citation(form: &str) -> String {
    strip_homograph_digits(form).nfc().collect()
}

/// The genitive column may list further forms (`brevis, breve`); only the
/// first one is the genitive.
pub fn genitive(column: &str) -> String {
    citation(column.split(',').next().unwrap_or_default())
}

/// Strips the first matching suffix; suffixes are tried in order.
fn strip_any<'a>(word: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes.iter().find_map(|suffix| word.strip_suffix(suffix))
}

/// Drops the final `n` characters (not bytes).
fn drop_chars(word: &str, n: usize) -> &str {
    match word.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &word[..idx],
        _ if n == 0 => word,
        _ => "",
    }
}

/// `rosa` → `ros`; pluralia tantum are cited in the plural (`dīvitiae`).
pub fn first_declension_stem(lemma: &str) -> &str {
    strip_any(lemma, &["a", "ae"]).unwrap_or(lemma)
}

/// Shape of a second-declension noun, read off its nominative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondDeclension<'a> {
    /// `dominus` → `domin`
    Us(&'a str),
    /// `bellum` → `bell`
    Um(&'a str),
    /// `puer, puerī` → `puer`; `ager, agrī` → `agr`. The stem comes from the
    /// genitive because the nominative may hide it.
    R(&'a str),
}

pub fn second_declension<'a>(lemma: &'a str, genitive: &'a str) -> Option<SecondDeclension<'a>> {
    if let Some(stem) = lemma.strip_suffix("us") {
        return Some(SecondDeclension::Us(stem));
    }
    if let Some(stem) = lemma.strip_suffix("um") {
        return Some(SecondDeclension::Um(stem));
    }
    if lemma.ends_with('r') {
        let stem = strip_any(genitive, &["ī", "i"]).filter(|s| !s.is_empty()).unwrap_or(lemma);
        return Some(SecondDeclension::R(stem));
    }
    // Plural citation forms: `castra, castrōrum`, `līberī, līberōrum`.
    let stem = strip_any(genitive, &["ōrum", "orum"]).filter(|s| !s.is_empty())?;
    if lemma.ends_with('a') {
        Some(SecondDeclension::Um(stem))
    } else if lemma.ends_with(['ī', 'i']) {
        Some(SecondDeclension::Us(stem))
    } else {
        None
    }
}

/// `rēgis` → `rēg`.
pub fn third_declension_stem(genitive: &str) -> &str {
    genitive.strip_suffix("is").unwrap_or(genitive)
}

/// Fourth-declension stem and whether the noun is a `-ū` neuter.
pub fn fourth_declension(lemma: &str) -> Option<(&str, bool)> {
    if let Some(stem) = lemma.strip_suffix("us") {
        return Some((stem, false));
    }
    strip_any(lemma, &["ū", "u"]).map(|stem| (stem, true))
}

/// `rēs` → `r`, `diēs` → `di`.
pub fn fifth_declension_stem(lemma: &str) -> &str {
    strip_any(lemma, &["ēs", "es"]).unwrap_or(lemma)
}

/// Counts vowel groups, the same measure used to sort third-declension nouns
/// into parisyllabic and imparisyllabic.
pub fn syllable_count(word: &str) -> usize {
    let mut count = 0;
    let mut previous_vowel = false;
    for c in normalize(word).to_lowercase().chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }
    count.max(1)
}

/// `cīvis, cīvis` → true; `rēx, rēgis` → false.
pub fn is_parisyllabic(lemma: &str, genitive: &str) -> bool {
    syllable_count(lemma) == syllable_count(genitive)
}

/// The first, second and fourth parts of a regular adjective share this stem:
/// `bonus` → `bon`, `pulcher, pulchrī` → `pulchr`, `līber, līberī` → `līber`.
pub fn first_second_adjective_stem<'a>(lemma: &'a str, genitive: &'a str) -> &'a str {
    if let Some(stem) = lemma.strip_suffix("us") {
        return stem;
    }
    if lemma.ends_with('r') {
        return strip_any(genitive, &["ī", "i"]).filter(|s| !s.is_empty()).unwrap_or(lemma);
    }
    lemma
}

/// A verb's principal parts: `amō, amāre, amāvī, amātum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalParts {
    pub first: String,
    pub infinitive: String,
    pub perfect: String,
    /// Supine or perfect passive participle, absent for many intransitives.
    pub supine: Option<String>,
}

impl PrincipalParts {
    pub fn parse(parts: &str) -> Result<Self, MorphError> {
        let parts: Vec<String> = parts
            .split(',')
            .map(citation)
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [first, infinitive, perfect, rest @ ..] => Ok(Self {
                first: first.clone(),
                infinitive: infinitive.clone(),
                perfect: perfect.clone(),
                supine: rest.first().cloned(),
            }),
            _ => Err(MorphError::InsufficientPrincipalParts { found: parts.len() }),
        }
    }

    /// Infinitive minus theme vowel and `-re`: `amāre` → `am`,
    /// `regere` → `reg`, `audīre` → `aud`.
    pub fn present_stem(&self) -> &str {
        drop_chars(&self.infinitive, 3)
    }

    /// Perfect minus `-ī`: `amāvī` → `amāv`.
    pub fn perfect_stem(&self) -> &str {
        strip_any(&self.perfect, &["ī", "i"]).unwrap_or(&self.perfect)
    }

    /// Supine minus `-um` (or `-us` when the participle is given):
    /// `amātum` → `amāt`. A future participle in fourth place (`sum, esse,
    /// fuī, futūrus`) loses its whole `-ūrus`.
    pub fn supine_stem(&self) -> Option<&str> {
        self.supine
            .as_deref()
            .map(|supine| strip_any(supine, &["ūrus", "um", "us"]).unwrap_or(supine))
    }

    /// Base for the imperfect subjunctive: the infinitive without its final
    /// `e` (`amāre` → `amār`, `esse` → `ess`).
    pub fn infinitive_base(&self) -> &str {
        self.infinitive.strip_suffix('e').unwrap_or(&self.infinitive)
    }

    /// Third-conjugation verbs whose first part ends in `-iō` (`capiō`).
    pub fn is_io_verb(&self) -> bool {
        strip_any(&self.first, &["iō", "io"]).is_some()
    }
}
