use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Gives a fieldless enum its stable short key (the fragment used inside tag
/// strings such as `gen_pl` or `pres_subj_1sg`).
macro_rules! keyed {
    ($name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    Nominative = 0,
    Genitive = 1,
    Dative = 2,
    Accusative = 3,
    Ablative = 4,
    Vocative = 5,
}

keyed!(Case {
    Nominative => "nom",
    Genitive => "gen",
    Dative => "dat",
    Accusative => "acc",
    Ablative => "abl",
    Vocative => "voc",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Masculine = 0,
    Feminine = 1,
    Neuter = 2,
}

keyed!(Gender {
    Masculine => "m",
    Feminine => "f",
    Neuter => "n",
});

impl Gender {
    /// Accepts the short keys as well as the spelled-out labels found in
    /// lexicon data (`"masculine"`, `"femenino"`, `"neutro"`...).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        if let Some(gender) = Self::from_key(&label) {
            return Some(gender);
        }
        match label.as_str() {
            "masc" | "masculine" | "masculino" => Some(Gender::Masculine),
            "fem" | "feminine" | "femenino" => Some(Gender::Feminine),
            "neut" | "neuter" | "neutro" => Some(Gender::Neuter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Number {
    Singular = 0,
    Plural = 1,
}

keyed!(Number {
    Singular => "sg",
    Plural => "pl",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    First = 1,
    Second = 2,
    Third = 3,
}

keyed!(Person {
    First => "1",
    Second => "2",
    Third => "3",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Voice {
    Active = 0,
    Passive = 1,
}

keyed!(Voice {
    Active => "act",
    Passive => "pass",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Tense {
    Present = 0,
    Imperfect = 1,
    Future = 2,
    Perfect = 3,
    Pluperfect = 4,
    FuturePerfect = 5,
}

keyed!(Tense {
    Present => "pres",
    Imperfect => "imp",
    Future => "fut",
    Perfect => "perf",
    Pluperfect => "plup",
    FuturePerfect => "futperf",
});

impl Tense {
    /// Perfect-system tenses are built on the perfect stem (active) or
    /// periphrastically (passive).
    pub const fn is_perfect_system(self) -> bool {
        matches!(self, Tense::Perfect | Tense::Pluperfect | Tense::FuturePerfect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Mood {
    Indicative = 0,
    Subjunctive = 1,
    Imperative = 2,
}

keyed!(Mood {
    Indicative => "ind",
    Subjunctive => "subj",
    Imperative => "imv",
});

impl Mood {
    /// The subjunctive has no future or future-perfect tense.
    pub const fn has_tense(self, tense: Tense) -> bool {
        match self {
            Mood::Indicative => true,
            Mood::Subjunctive => !matches!(tense, Tense::Future | Tense::FuturePerfect),
            Mood::Imperative => matches!(tense, Tense::Present),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Category {
    Noun = 0,
    Adjective = 1,
    Pronoun = 2,
    Verb = 3,
}

keyed!(Category {
    Noun => "noun",
    Adjective => "adjective",
    Pronoun => "pronoun",
    Verb => "verb",
});

impl Category {
    /// Accepts the keys plus the abbreviations and Spanish labels found in
    /// stored lexicons.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        if let Some(category) = Self::from_key(&label) {
            return Some(category);
        }
        match label.as_str() {
            "n" | "sustantivo" => Some(Category::Noun),
            "adj" | "adjetivo" => Some(Category::Adjective),
            "pron" | "pronombre" => Some(Category::Pronoun),
            "v" | "verbo" => Some(Category::Verb),
            _ => None,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Case (Bits 0-5)
        const NOMINATIVE = 1;
        const GENITIVE = 1 << 1;
        const DATIVE = 1 << 2;
        const ACCUSATIVE = 1 << 3;
        const ABLATIVE = 1 << 4;
        const VOCATIVE = 1 << 5;

        // Gender (Bits 6-8)
        const MASCULINE = 1 << 6;
        const FEMININE = 1 << 7;
        const NEUTER = 1 << 8;

        // Number (Bits 9-10)
        const SINGULAR = 1 << 9;
        const PLURAL = 1 << 10;

        // Person (Bits 11-13)
        const FIRST_PERSON = 1 << 11;
        const SECOND_PERSON = 1 << 12;
        const THIRD_PERSON = 1 << 13;

        // Voice (Bits 14-15)
        const ACTIVE = 1 << 14;
        const PASSIVE = 1 << 15;

        // Tense (Bits 16-21)
        const PRESENT = 1 << 16;
        const IMPERFECT = 1 << 17;
        const FUTURE = 1 << 18;
        const PERFECT = 1 << 19;
        const PLUPERFECT = 1 << 20;
        const FUTURE_PERFECT = 1 << 21;

        // Mood and non-finite forms (Bits 22-26)
        const INDICATIVE = 1 << 22;
        const SUBJUNCTIVE = 1 << 23;
        const IMPERATIVE = 1 << 24;
        const PARTICIPLE = 1 << 25;
        const INFINITIVE = 1 << 26;
    }
}

impl From<Case> for MorphFlags {
    fn from(case: Case) -> Self {
        match case {
            Case::Nominative => MorphFlags::NOMINATIVE,
            Case::Genitive => MorphFlags::GENITIVE,
            Case::Dative => MorphFlags::DATIVE,
            Case::Accusative => MorphFlags::ACCUSATIVE,
            Case::Ablative => MorphFlags::ABLATIVE,
            Case::Vocative => MorphFlags::VOCATIVE,
        }
    }
}

impl From<Gender> for MorphFlags {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Masculine => MorphFlags::MASCULINE,
            Gender::Feminine => MorphFlags::FEMININE,
            Gender::Neuter => MorphFlags::NEUTER,
        }
    }
}

impl From<Number> for MorphFlags {
    fn from(number: Number) -> Self {
        match number {
            Number::Singular => MorphFlags::SINGULAR,
            Number::Plural => MorphFlags::PLURAL,
        }
    }
}

impl From<Person> for MorphFlags {
    fn from(person: Person) -> Self {
        match person {
            Person::First => MorphFlags::FIRST_PERSON,
            Person::Second => MorphFlags::SECOND_PERSON,
            Person::Third => MorphFlags::THIRD_PERSON,
        }
    }
}

impl From<Voice> for MorphFlags {
    fn from(voice: Voice) -> Self {
        match voice {
            Voice::Active => MorphFlags::ACTIVE,
            Voice::Passive => MorphFlags::PASSIVE,
        }
    }
}

impl From<Tense> for MorphFlags {
    fn from(tense: Tense) -> Self {
        match tense {
            Tense::Present => MorphFlags::PRESENT,
            Tense::Imperfect => MorphFlags::IMPERFECT,
            Tense::Future => MorphFlags::FUTURE,
            Tense::Perfect => MorphFlags::PERFECT,
            Tense::Pluperfect => MorphFlags::PLUPERFECT,
            Tense::FuturePerfect => MorphFlags::FUTURE_PERFECT,
        }
    }
}

impl From<Mood> for MorphFlags {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Indicative => MorphFlags::INDICATIVE,
            Mood::Subjunctive => MorphFlags::SUBJUNCTIVE,
            Mood::Imperative => MorphFlags::IMPERATIVE,
        }
    }
}
