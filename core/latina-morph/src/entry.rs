//! Stored lexicon entries and their validation into descriptors.

use latina_protocol::{
    Category, Declension, Gender, InflectionClass, LexicalDescriptor, ProtocolError, Tantum,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EntryError, OverrideError};
use crate::overrides::parse_overrides;
use crate::pronoun::{accepts_override, decline_pronoun};

/// A word as stored in the lexicon JSON.
///
/// Class codes may be written as strings (`"1/2"`, `"irregular"`) or bare
/// numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconEntry {
    pub latin: String,
    pub part_of_speech: String,
    #[serde(deserialize_with = "class_code")]
    pub declension: Option<String>,
    #[serde(deserialize_with = "class_code")]
    pub conjugation: Option<String>,
    pub genitive: Option<String>,
    pub principal_parts: Option<String>,
    pub gender: Option<String>,
    pub parisyllabic: Option<bool>,
    pub is_plurale_tantum: bool,
    pub is_singulare_tantum: bool,
    pub is_invariable: bool,
    /// JSON object of tag key → form, kept as text the way it is stored.
    pub irregular_forms: Option<String>,
}

fn class_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Code>::deserialize(deserializer)?.map(|code| match code {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
    }))
}

/// Trimmed, non-blank value of an optional text column.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl LexiconEntry {
    fn require<'a>(&self, value: &'a Option<String>, field: &'static str) -> Result<&'a str, EntryError> {
        present(value).ok_or_else(|| EntryError::Missing {
            lemma: self.latin.clone(),
            field,
        })
    }

    pub fn category(&self) -> Result<Category, ProtocolError> {
        Category::from_label(&self.part_of_speech)
            .ok_or_else(|| ProtocolError::UnknownCategory(self.part_of_speech.clone()))
    }

    fn declension(&self, category: Category) -> Result<Declension, EntryError> {
        let code = self.require(&self.declension, "declension")?;
        InflectionClass::parse(category, code)?
            .declension()
            .ok_or_else(|| {
                ProtocolError::UnrecognizedClass {
                    code: code.to_string(),
                    category: category.to_string(),
                }
                .into()
            })
    }

    /// Validates the entry into a descriptor the engine can inflect.
    ///
    /// Invariable entries still need a known part of speech here; indexing
    /// them does not (see the form index).
    pub fn to_descriptor(&self) -> Result<LexicalDescriptor, EntryError> {
        let lemma = self.latin.trim().to_string();
        if lemma.is_empty() {
            return Err(EntryError::Missing { lemma, field: "latin" });
        }
        let category = self.category()?;
        if self.is_invariable {
            return Ok(LexicalDescriptor::invariable(&lemma, category));
        }

        let tantum = Tantum::from_flags(self.is_plurale_tantum, self.is_singulare_tantum)?;
        let gender = present(&self.gender)
            .map(|label| Gender::from_label(label).ok_or_else(|| ProtocolError::UnknownGender(label.to_string())))
            .transpose()?;
        let overrides = parse_overrides(present(&self.irregular_forms).unwrap_or_default(), category)
            .map_err(|source| EntryError::Override {
                lemma: lemma.clone(),
                source,
            })?;

        let descriptor = match category {
            Category::Noun => {
                let declension = self.declension(category)?;
                let genitive = self.require(&self.genitive, "genitive")?;
                LexicalDescriptor {
                    gender,
                    parisyllabic: self.parisyllabic,
                    ..LexicalDescriptor::noun(&lemma, declension, gender.unwrap_or(Gender::Masculine), genitive)
                }
            }
            Category::Adjective => {
                let declension = self.declension(category)?;
                let genitive = present(&self.genitive).unwrap_or_default();
                LexicalDescriptor::adjective(&lemma, declension, genitive)
            }
            Category::Pronoun => {
                let table = decline_pronoun(&lemma);
                if let Some((tag, _)) = overrides.iter().find(|(tag, _)| !accepts_override(&table, tag)) {
                    return Err(EntryError::Override {
                        lemma,
                        source: OverrideError::UnknownTag {
                            tag: tag.to_string(),
                            category,
                        },
                    });
                }
                LexicalDescriptor::pronoun(&lemma)
            }
            Category::Verb => {
                let code = self.require(&self.conjugation, "conjugation")?;
                let conjugation = InflectionClass::parse(category, code)?
                    .conjugation()
                    .ok_or_else(|| ProtocolError::UnrecognizedClass {
                        code: code.to_string(),
                        category: category.to_string(),
                    })?;
                let parts = self.require(&self.principal_parts, "principal parts")?;
                LexicalDescriptor::verb(&lemma, conjugation, parts)
            }
        };

        Ok(descriptor.with_tantum(tantum).with_overrides(overrides))
    }
}
