//! Structured grammatical tags.
//!
//! A tag is a closed value, never a free string. The string keys
//! (`nom_sg`, `gen_pl_f`, `pres_subj_pass_3pl`, `imv_2sg`, `fut_act`,
//! `inf_perf_pass`) exist only at the storage boundary and are produced and
//! consumed by the single `Display` / `FromStr` pair below.

use core::fmt;
use core::str::FromStr;

use crate::error::ProtocolError;
use crate::morphology::{Case, Category, Gender, Mood, MorphFlags, Number, Person, Tense, Voice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParticipleKind {
    PresentActive,
    PerfectPassive,
    FutureActive,
    /// The gerundive.
    FuturePassive,
}

impl ParticipleKind {
    pub const ALL: &'static [ParticipleKind] = &[
        ParticipleKind::PresentActive,
        ParticipleKind::PerfectPassive,
        ParticipleKind::FutureActive,
        ParticipleKind::FuturePassive,
    ];

    pub const fn tense(self) -> Tense {
        match self {
            ParticipleKind::PresentActive => Tense::Present,
            ParticipleKind::PerfectPassive => Tense::Perfect,
            ParticipleKind::FutureActive | ParticipleKind::FuturePassive => Tense::Future,
        }
    }

    pub const fn voice(self) -> Voice {
        match self {
            ParticipleKind::PresentActive | ParticipleKind::FutureActive => Voice::Active,
            ParticipleKind::PerfectPassive | ParticipleKind::FuturePassive => Voice::Passive,
        }
    }

    fn from_parts(tense: Tense, voice: Voice) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.tense() == tense && kind.voice() == voice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InfinitiveKind {
    PresentActive,
    PresentPassive,
    PerfectActive,
    PerfectPassive,
    FutureActive,
}

impl InfinitiveKind {
    pub const ALL: &'static [InfinitiveKind] = &[
        InfinitiveKind::PresentActive,
        InfinitiveKind::PresentPassive,
        InfinitiveKind::PerfectActive,
        InfinitiveKind::PerfectPassive,
        InfinitiveKind::FutureActive,
    ];

    pub const fn tense(self) -> Tense {
        match self {
            InfinitiveKind::PresentActive | InfinitiveKind::PresentPassive => Tense::Present,
            InfinitiveKind::PerfectActive | InfinitiveKind::PerfectPassive => Tense::Perfect,
            InfinitiveKind::FutureActive => Tense::Future,
        }
    }

    pub const fn voice(self) -> Voice {
        match self {
            InfinitiveKind::PresentActive
            | InfinitiveKind::PerfectActive
            | InfinitiveKind::FutureActive => Voice::Active,
            InfinitiveKind::PresentPassive | InfinitiveKind::PerfectPassive => Voice::Passive,
        }
    }

    fn from_parts(tense: Tense, voice: Voice) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.tense() == tense && kind.voice() == voice)
    }
}

/// Coarse grouping of tags, used to route overrides to the generator that
/// owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Nominal,
    Finite,
    Imperative,
    Participle,
    Infinitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrammaticalTag {
    /// Declined form. `gender` is set for adjective and demonstrative tables.
    Nominal {
        case: Case,
        number: Number,
        gender: Option<Gender>,
    },
    /// Indicative or subjunctive verb form.
    Finite {
        tense: Tense,
        mood: Mood,
        voice: Voice,
        person: Person,
        number: Number,
    },
    /// Second-person present imperative.
    Imperative { voice: Voice, number: Number },
    Participle(ParticipleKind),
    Infinitive(InfinitiveKind),
}

impl GrammaticalTag {
    pub const fn nominal(case: Case, number: Number) -> Self {
        GrammaticalTag::Nominal { case, number, gender: None }
    }

    pub const fn gendered(case: Case, number: Number, gender: Gender) -> Self {
        GrammaticalTag::Nominal { case, number, gender: Some(gender) }
    }

    pub const fn finite(tense: Tense, mood: Mood, voice: Voice, person: Person, number: Number) -> Self {
        GrammaticalTag::Finite { tense, mood, voice, person, number }
    }

    pub const fn kind(&self) -> TagKind {
        match self {
            GrammaticalTag::Nominal { .. } => TagKind::Nominal,
            GrammaticalTag::Finite { .. } => TagKind::Finite,
            GrammaticalTag::Imperative { .. } => TagKind::Imperative,
            GrammaticalTag::Participle(_) => TagKind::Participle,
            GrammaticalTag::Infinitive(_) => TagKind::Infinitive,
        }
    }

    pub const fn number(&self) -> Option<Number> {
        match self {
            GrammaticalTag::Nominal { number, .. }
            | GrammaticalTag::Finite { number, .. }
            | GrammaticalTag::Imperative { number, .. } => Some(*number),
            GrammaticalTag::Participle(_) | GrammaticalTag::Infinitive(_) => None,
        }
    }

    /// Returns the same tag qualified with `gender` (nominal tags only).
    pub fn with_gender(self, gender: Gender) -> Self {
        match self {
            GrammaticalTag::Nominal { case, number, .. } => GrammaticalTag::gendered(case, number, gender),
            other => other,
        }
    }

    /// Finite tags are representable for every mood/tense pair, but only
    /// indicative and subjunctive forms of the tenses the mood has exist.
    pub const fn is_well_formed(&self) -> bool {
        match self {
            GrammaticalTag::Finite { mood, tense, .. } => {
                matches!(mood, Mood::Indicative | Mood::Subjunctive) && mood.has_tense(*tense)
            }
            _ => true,
        }
    }

    /// Whether a table generated for `category` can carry this tag.
    pub const fn belongs_to(&self, category: Category) -> bool {
        if !self.is_well_formed() {
            return false;
        }
        match (category, self) {
            (Category::Noun, GrammaticalTag::Nominal { gender: None, .. }) => true,
            (Category::Adjective, GrammaticalTag::Nominal { gender: Some(_), .. }) => true,
            (Category::Pronoun, GrammaticalTag::Nominal { .. }) => true,
            (Category::Verb, GrammaticalTag::Nominal { .. }) => false,
            (Category::Verb, _) => true,
            _ => false,
        }
    }

    /// Every tag a table of `category` may contain.
    pub fn vocabulary(category: Category) -> Vec<GrammaticalTag> {
        let mut tags = Vec::new();
        match category {
            Category::Noun => tags.extend(nominal_tags(None)),
            Category::Adjective => {
                for &gender in Gender::ALL {
                    tags.extend(nominal_tags(Some(gender)));
                }
            }
            Category::Pronoun => {
                tags.extend(nominal_tags(None));
                for &gender in Gender::ALL {
                    tags.extend(nominal_tags(Some(gender)));
                }
            }
            Category::Verb => {
                for &mood in &[Mood::Indicative, Mood::Subjunctive] {
                    for &tense in Tense::ALL.iter().filter(|t| mood.has_tense(**t)) {
                        for &voice in Voice::ALL {
                            for &number in Number::ALL {
                                for &person in Person::ALL {
                                    tags.push(GrammaticalTag::finite(tense, mood, voice, person, number));
                                }
                            }
                        }
                    }
                }
                for &voice in Voice::ALL {
                    for &number in Number::ALL {
                        tags.push(GrammaticalTag::Imperative { voice, number });
                    }
                }
                tags.extend(ParticipleKind::ALL.iter().map(|k| GrammaticalTag::Participle(*k)));
                tags.extend(InfinitiveKind::ALL.iter().map(|k| GrammaticalTag::Infinitive(*k)));
            }
        }
        tags
    }

    /// Bitflag view of the tag, for filtering analyses by feature.
    pub fn flags(&self) -> MorphFlags {
        match *self {
            GrammaticalTag::Nominal { case, number, gender } => {
                let mut flags = MorphFlags::from(case) | MorphFlags::from(number);
                if let Some(gender) = gender {
                    flags |= MorphFlags::from(gender);
                }
                flags
            }
            GrammaticalTag::Finite { tense, mood, voice, person, number } => {
                MorphFlags::from(tense)
                    | MorphFlags::from(mood)
                    | MorphFlags::from(voice)
                    | MorphFlags::from(person)
                    | MorphFlags::from(number)
            }
            GrammaticalTag::Imperative { voice, number } => {
                MorphFlags::IMPERATIVE
                    | MorphFlags::PRESENT
                    | MorphFlags::SECOND_PERSON
                    | MorphFlags::from(voice)
                    | MorphFlags::from(number)
            }
            GrammaticalTag::Participle(kind) => {
                MorphFlags::PARTICIPLE | MorphFlags::from(kind.tense()) | MorphFlags::from(kind.voice())
            }
            GrammaticalTag::Infinitive(kind) => {
                MorphFlags::INFINITIVE | MorphFlags::from(kind.tense()) | MorphFlags::from(kind.voice())
            }
        }
    }
}

fn nominal_tags(gender: Option<Gender>) -> impl Iterator<Item = GrammaticalTag> {
    Number::ALL.iter().flat_map(move |&number| {
        Case::ALL
            .iter()
            .map(move |&case| GrammaticalTag::Nominal { case, number, gender })
    })
}

impl fmt::Display for GrammaticalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammaticalTag::Nominal { case, number, gender } => {
                write!(f, "{}_{}", case, number)?;
                if let Some(gender) = gender {
                    write!(f, "_{}", gender)?;
                }
                Ok(())
            }
            GrammaticalTag::Finite { tense, mood, voice, person, number } => {
                f.write_str(tense.key())?;
                if *mood == Mood::Subjunctive {
                    f.write_str("_subj")?;
                }
                if *voice == Voice::Passive {
                    f.write_str("_pass")?;
                }
                write!(f, "_{}{}", person, number)
            }
            GrammaticalTag::Imperative { voice, number } => {
                f.write_str("imv")?;
                if *voice == Voice::Passive {
                    f.write_str("_pass")?;
                }
                write!(f, "_2{}", number)
            }
            GrammaticalTag::Participle(kind) => write!(f, "{}_{}", kind.tense(), kind.voice()),
            GrammaticalTag::Infinitive(kind) => write!(f, "inf_{}_{}", kind.tense(), kind.voice()),
        }
    }
}

fn person_number(key: &str) -> Option<(Person, Number)> {
    let person = Person::from_key(key.get(..1)?)?;
    let number = Number::from_key(key.get(1..)?)?;
    Some((person, number))
}

impl FromStr for GrammaticalTag {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProtocolError::InvalidTag(s.to_string());
        let parts: Vec<&str> = s.trim().split('_').collect();

        if let Some(case) = Case::from_key(parts[0]) {
            let (number, gender) = match parts[1..] {
                [number] => (number, None),
                [number, gender] => (number, Some(Gender::from_key(gender).ok_or_else(invalid)?)),
                _ => return Err(invalid()),
            };
            let number = Number::from_key(number).ok_or_else(invalid)?;
            return Ok(GrammaticalTag::Nominal { case, number, gender });
        }

        let tag = match parts.as_slice() {
            ["imv", "pass", pn] | ["imv", pn] => {
                let (person, number) = person_number(pn).ok_or_else(invalid)?;
                if person != Person::Second {
                    return Err(invalid());
                }
                let voice = if parts.len() == 3 { Voice::Passive } else { Voice::Active };
                GrammaticalTag::Imperative { voice, number }
            }
            ["inf", tense, voice] => {
                let tense = Tense::from_key(tense).ok_or_else(invalid)?;
                let voice = Voice::from_key(voice).ok_or_else(invalid)?;
                GrammaticalTag::Infinitive(InfinitiveKind::from_parts(tense, voice).ok_or_else(invalid)?)
            }
            [tense, voice] if Voice::from_key(voice).is_some() => {
                let tense = Tense::from_key(tense).ok_or_else(invalid)?;
                let voice = Voice::from_key(voice).ok_or_else(invalid)?;
                GrammaticalTag::Participle(ParticipleKind::from_parts(tense, voice).ok_or_else(invalid)?)
            }
            [tense, middle @ .., pn] => {
                let tense = Tense::from_key(tense).ok_or_else(invalid)?;
                let (mood, voice) = match middle {
                    [] => (Mood::Indicative, Voice::Active),
                    ["subj"] => (Mood::Subjunctive, Voice::Active),
                    ["pass"] => (Mood::Indicative, Voice::Passive),
                    ["subj", "pass"] => (Mood::Subjunctive, Voice::Passive),
                    _ => return Err(invalid()),
                };
                let (person, number) = person_number(pn).ok_or_else(invalid)?;
                GrammaticalTag::finite(tense, mood, voice, person, number)
            }
            _ => return Err(invalid()),
        };

        if tag.is_well_formed() {
            Ok(tag)
        } else {
            Err(invalid())
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GrammaticalTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GrammaticalTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
