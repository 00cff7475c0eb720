use rkyv::{Archive, Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::str::FromStr;

use crate::error::ProtocolError;
use crate::ids::LemmaId;
use crate::morphology::{Category, Gender, Number};
use crate::tag::{GrammaticalTag, TagKind};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Sentinel stored for forms suppressed by a tantum flag.
pub const UNATTESTED: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Declension {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Declension {
    pub const fn code(self) -> &'static str {
        match self {
            Declension::First => "1",
            Declension::Second => "2",
            Declension::Third => "3",
            Declension::Fourth => "4",
            Declension::Fifth => "5",
        }
    }
}

impl FromStr for Declension {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Declension::First),
            "2" => Ok(Declension::Second),
            "3" => Ok(Declension::Third),
            "4" => Ok(Declension::Fourth),
            "5" => Ok(Declension::Fifth),
            other => Err(ProtocolError::UnrecognizedClass {
                code: other.to_string(),
                category: Category::Noun.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjugation {
    First,
    Second,
    Third,
    Fourth,
    Irregular,
}

impl Conjugation {
    pub const fn code(self) -> &'static str {
        match self {
            Conjugation::First => "1",
            Conjugation::Second => "2",
            Conjugation::Third => "3",
            Conjugation::Fourth => "4",
            Conjugation::Irregular => "irregular",
        }
    }
}

impl FromStr for Conjugation {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(Conjugation::First),
            "2" => Ok(Conjugation::Second),
            // `-iō` verbs are told apart by their first principal part.
            "3" | "3io" | "3-io" => Ok(Conjugation::Third),
            "4" => Ok(Conjugation::Fourth),
            "irregular" | "irr" => Ok(Conjugation::Irregular),
            other => Err(ProtocolError::UnrecognizedClass {
                code: other.to_string(),
                category: Category::Verb.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InflectionClass {
    Declension(Declension),
    Conjugation(Conjugation),
}

impl InflectionClass {
    /// Parses a stored class code for an entry of `category`.
    ///
    /// Adjectives of the first and second declension are stored as `"1/2"`
    /// (or `"1-2"`); they map onto `Declension::Second`.
    pub fn parse(category: Category, code: &str) -> Result<Self, ProtocolError> {
        match category {
            Category::Verb => code.parse().map(InflectionClass::Conjugation),
            Category::Adjective => match code.trim() {
                "1/2" | "1-2" | "12" | "1" | "2" => Ok(InflectionClass::Declension(Declension::Second)),
                "3" => Ok(InflectionClass::Declension(Declension::Third)),
                other => Err(ProtocolError::UnrecognizedClass {
                    code: other.to_string(),
                    category: category.to_string(),
                }),
            },
            Category::Noun | Category::Pronoun => code.parse().map(InflectionClass::Declension),
        }
    }

    pub const fn declension(self) -> Option<Declension> {
        match self {
            InflectionClass::Declension(d) => Some(d),
            InflectionClass::Conjugation(_) => None,
        }
    }

    pub const fn conjugation(self) -> Option<Conjugation> {
        match self {
            InflectionClass::Conjugation(c) => Some(c),
            InflectionClass::Declension(_) => None,
        }
    }
}

/// Number restriction of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tantum {
    #[default]
    Normal,
    /// Attested only in the plural (*castra*, *dīvitiae*).
    PluraleTantum,
    /// Attested only in the singular (*aurum*, *plēbs*).
    SingulareTantum,
}

impl Tantum {
    pub fn from_flags(plurale: bool, singulare: bool) -> Result<Self, ProtocolError> {
        match (plurale, singulare) {
            (false, false) => Ok(Tantum::Normal),
            (true, false) => Ok(Tantum::PluraleTantum),
            (false, true) => Ok(Tantum::SingulareTantum),
            (true, true) => Err(ProtocolError::ConflictingTantum),
        }
    }

    /// The number whose forms are replaced by the sentinel.
    pub const fn suppressed(self) -> Option<Number> {
        match self {
            Tantum::Normal => None,
            Tantum::PluraleTantum => Some(Number::Singular),
            Tantum::SingulareTantum => Some(Number::Plural),
        }
    }
}

/// The engine's output: every generated form keyed by its tag.
///
/// Values are never empty: a form is either a surface string or
/// [`UNATTESTED`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParadigmTable {
    forms: BTreeMap<GrammaticalTag, String>,
}

impl ParadigmTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `form` under `tag`, replacing any previous value.
    /// Empty forms are refused; returns whether the form was stored.
    pub fn insert(&mut self, tag: GrammaticalTag, form: impl Into<String>) -> bool {
        let form = form.into();
        if form.trim().is_empty() {
            return false;
        }
        self.forms.insert(tag, form);
        true
    }

    pub fn get(&self, tag: &GrammaticalTag) -> Option<&str> {
        self.forms.get(tag).map(String::as_str)
    }

    /// Lookup by string key (`"gen_pl"`). Unknown keys simply miss.
    pub fn form(&self, key: &str) -> Option<&str> {
        key.parse::<GrammaticalTag>().ok().and_then(|tag| self.get(&tag))
    }

    pub fn contains(&self, tag: &GrammaticalTag) -> bool {
        self.forms.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, GrammaticalTag, String> {
        self.forms.iter()
    }

    pub fn tags(&self) -> impl Iterator<Item = &GrammaticalTag> {
        self.forms.keys()
    }

    /// Replaces every form of `number` with [`UNATTESTED`].
    pub fn suppress(&mut self, number: Number) {
        for (tag, form) in self.forms.iter_mut() {
            if tag.number() == Some(number) {
                *form = UNATTESTED.to_string();
            }
        }
    }

    /// Moves every entry of `other` into this table, qualifying nominal tags
    /// with `gender`.
    pub fn merge_gendered(&mut self, other: ParadigmTable, gender: Gender) {
        for (tag, form) in other.forms {
            self.forms.insert(tag.with_gender(gender), form);
        }
    }
}

impl IntoIterator for ParadigmTable {
    type Item = (GrammaticalTag, String);
    type IntoIter = btree_map::IntoIter<GrammaticalTag, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParadigmTable {
    type Item = (&'a GrammaticalTag, &'a String);
    type IntoIter = btree_map::Iter<'a, GrammaticalTag, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}

impl<S: Into<String>> FromIterator<(GrammaticalTag, S)> for ParadigmTable {
    fn from_iter<I: IntoIterator<Item = (GrammaticalTag, S)>>(iter: I) -> Self {
        let mut table = ParadigmTable::new();
        for (tag, form) in iter {
            table.insert(tag, form);
        }
        table
    }
}

/// Irregular forms supplied by the caller. Keys are validated against the
/// tag vocabulary of the entry's category when parsed from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Overrides {
    forms: BTreeMap<GrammaticalTag, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: GrammaticalTag, form: impl Into<String>) {
        self.forms.insert(tag, form.into());
    }

    pub fn get(&self, tag: &GrammaticalTag) -> Option<&str> {
        self.forms.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, GrammaticalTag, String> {
        self.forms.iter()
    }

    /// The subset whose tags are of one of `kinds`.
    pub fn restricted_to(&self, kinds: &[TagKind]) -> Overrides {
        self.forms
            .iter()
            .filter(|(tag, _)| kinds.contains(&tag.kind()))
            .map(|(tag, form)| (*tag, form.clone()))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(GrammaticalTag, S)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (GrammaticalTag, S)>>(iter: I) -> Self {
        let mut overrides = Overrides::new();
        for (tag, form) in iter {
            overrides.insert(tag, form);
        }
        overrides
    }
}

/// A dictionary entry as the engine sees it. Built by the caller, only ever
/// borrowed by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalDescriptor {
    /// Citation form, macrons preserved.
    pub lemma: String,
    pub category: Category,
    /// `None` for pronouns and invariable words.
    pub class: Option<InflectionClass>,
    /// The genitive singular for nominals, the comma-joined principal parts
    /// for verbs.
    pub stem_source: String,
    pub gender: Option<Gender>,
    pub parisyllabic: Option<bool>,
    pub tantum: Tantum,
    pub overrides: Overrides,
    /// Indeclinable words keep only their citation form.
    pub invariable: bool,
}

impl LexicalDescriptor {
    fn bare(lemma: &str, category: Category) -> Self {
        Self {
            lemma: lemma.to_string(),
            category,
            class: None,
            stem_source: String::new(),
            gender: None,
            parisyllabic: None,
            tantum: Tantum::Normal,
            overrides: Overrides::new(),
            invariable: false,
        }
    }

    pub fn noun(lemma: &str, declension: Declension, gender: Gender, genitive: &str) -> Self {
        Self {
            class: Some(InflectionClass::Declension(declension)),
            stem_source: genitive.to_string(),
            gender: Some(gender),
            ..Self::bare(lemma, Category::Noun)
        }
    }

    pub fn adjective(lemma: &str, declension: Declension, genitive: &str) -> Self {
        Self {
            class: Some(InflectionClass::Declension(declension)),
            stem_source: genitive.to_string(),
            ..Self::bare(lemma, Category::Adjective)
        }
    }

    pub fn pronoun(lemma: &str) -> Self {
        Self::bare(lemma, Category::Pronoun)
    }

    pub fn verb(lemma: &str, conjugation: Conjugation, principal_parts: &str) -> Self {
        Self {
            class: Some(InflectionClass::Conjugation(conjugation)),
            stem_source: principal_parts.to_string(),
            ..Self::bare(lemma, Category::Verb)
        }
    }

    pub fn invariable(lemma: &str, category: Category) -> Self {
        Self {
            invariable: true,
            ..Self::bare(lemma, category)
        }
    }

    pub fn with_parisyllabic(mut self, parisyllabic: bool) -> Self {
        self.parisyllabic = Some(parisyllabic);
        self
    }

    pub fn with_tantum(mut self, tantum: Tantum) -> Self {
        self.tantum = tantum;
        self
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Headword of a compiled lexicon.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LemmaRecord {
    pub id: LemmaId,
    pub lemma: String,
    /// [`Category`] key (`"noun"`, `"verb"`...).
    pub category: String,
    pub invariable: bool,
}

/// One generated surface form.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct FormRecord {
    pub lemma: LemmaId,
    pub form: String,
    /// The form after macron stripping and lowercasing; the lookup key.
    pub normalized: String,
    /// Tag string key (`"gen_sg"`).
    pub tag: String,
    /// [`crate::MorphFlags`] bits of the tag.
    pub flags: u32,
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CompiledLexicon {
    pub version: u32,
    pub lemmas: Vec<LemmaRecord>,
    /// Sorted by `normalized`.
    pub forms: Vec<FormRecord>,
}
