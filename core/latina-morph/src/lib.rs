//! Rule engine that turns a lexical descriptor into every tagged surface
//! form of the word.

pub mod adjective;
pub mod entry;
pub mod error;
pub mod normalize;
pub mod noun;
pub mod overrides;
pub mod participle;
pub mod pronoun;
pub mod stems;
pub mod tables;
pub mod verb;

pub use adjective::{decline_adjective, decline_adjective_entry};
pub use entry::LexiconEntry;
pub use error::{EntryError, MorphError, OverrideError};
pub use normalize::{clean_input, forms_match, normalize, strip_homograph_digits};
pub use noun::{decline, decline_noun};
pub use overrides::{apply_overrides, parse_overrides};
pub use participle::{infinitives, participles, verb_infinitives, verb_participles};
pub use pronoun::{decline_pronoun, decline_pronoun_entry};
pub use verb::{conjugate, conjugate_verb};

use latina_protocol::{Category, GrammaticalTag, LexicalDescriptor, ParadigmTable, UNATTESTED};
use serde::Serialize;
use tracing::debug;

/// Everything the engine produces for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inflection {
    pub lemma: String,
    pub category: Category,
    /// Indeclinable words have no table; their only form is `lemma`.
    pub invariable: bool,
    pub forms: ParadigmTable,
}

impl Inflection {
    /// Tagged forms, without the tantum placeholders.
    pub fn attested(&self) -> impl Iterator<Item = (&GrammaticalTag, &str)> {
        self.forms
            .iter()
            .map(|(tag, form)| (tag, form.as_str()))
            .filter(|(_, form)| *form != UNATTESTED)
    }
}

/// Runs every generator that applies to the entry's category. Verbs get
/// their finite, imperative, participle and infinitive forms in one table.
pub fn inflect(entry: &LexicalDescriptor) -> Inflection {
    let lemma = stems::citation(&entry.lemma);
    let forms = if entry.invariable {
        ParadigmTable::new()
    } else {
        match entry.category {
            Category::Noun => decline_noun(entry),
            Category::Adjective => decline_adjective_entry(entry),
            Category::Pronoun => decline_pronoun_entry(entry),
            Category::Verb => conjugate_verb(entry)
                .into_iter()
                .chain(verb_participles(entry))
                .chain(verb_infinitives(entry))
                .collect(),
        }
    };
    debug!(%lemma, category = %entry.category, forms = forms.len(), "inflected entry");

    Inflection {
        lemma,
        category: entry.category,
        invariable: entry.invariable,
        forms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latina_protocol::{Conjugation, Declension, Gender, Tantum, TagKind};

    #[test]
    fn test_verb_inflection_merges_generators() {
        let entry = LexicalDescriptor::verb("amō", Conjugation::First, "amō, amāre, amāvī, amātum");
        let inflection = inflect(&entry);
        assert_eq!(inflection.category, Category::Verb);
        assert_eq!(inflection.forms.form("pres_1sg"), Some("amō"));
        assert_eq!(inflection.forms.form("fut_pass"), Some("amandus, amanda, amandum"));
        assert_eq!(inflection.forms.form("inf_perf_act"), Some("amāvisse"));
        // 120 finite forms, 4 imperatives, 4 participles, 5 infinitives
        assert_eq!(inflection.forms.len(), 133);
        assert!(inflection.forms.tags().any(|tag| tag.kind() == TagKind::Imperative));
    }

    #[test]
    fn test_attested_skips_placeholders() {
        let entry = LexicalDescriptor::noun("castra", Declension::Second, Gender::Neuter, "castrōrum")
            .with_tantum(Tantum::PluraleTantum);
        let inflection = inflect(&entry);
        assert_eq!(inflection.forms.len(), 12);
        assert_eq!(inflection.attested().count(), 6);
    }

    #[test]
    fn test_invariable_words_have_no_table() {
        let inflection = inflect(&LexicalDescriptor::invariable("quattuor", Category::Adjective));
        assert!(inflection.invariable);
        assert!(inflection.forms.is_empty());
        assert_eq!(inflection.lemma, "quattuor");
    }
}
