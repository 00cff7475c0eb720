//! Adjective declension: three gendered nominal tables merged into one.

use latina_protocol::{Declension, Gender, LexicalDescriptor, Overrides, ParadigmTable};
use tracing::{debug, warn};

use crate::noun::from_endings;
use crate::overrides::apply_overrides;
use crate::stems;
use crate::tables;

/// Citation forms of the three genders of a third-declension adjective.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ThirdTerminations {
    masculine: String,
    feminine: String,
    neuter: String,
    stem: String,
}

fn third_terminations(lemma: &str, genitive: &str) -> Option<ThirdTerminations> {
    // omnis, omne: the lemma already shows the stem
    if let Some(base) = lemma.strip_suffix("is").filter(|base| !base.is_empty()) {
        return Some(ThirdTerminations {
            masculine: lemma.to_string(),
            feminine: lemma.to_string(),
            neuter: format!("{}e", base),
            stem: base.to_string(),
        });
    }

    let stem = genitive.strip_suffix("is").filter(|stem| !stem.is_empty())?.to_string();
    let (feminine, neuter) = if lemma.ends_with("er") {
        // ācer, ācris, ācre
        (genitive.to_string(), format!("{}e", stem))
    } else {
        // ingēns
        (lemma.to_string(), lemma.to_string())
    };

    Some(ThirdTerminations {
        masculine: lemma.to_string(),
        feminine,
        neuter,
        stem,
    })
}

fn first_second(lemma: &str, genitive: &str) -> ParadigmTable {
    let stem = stems::first_second_adjective_stem(lemma, genitive);
    let masculine_endings = if lemma.ends_with("us") { &tables::SECOND_US } else { &tables::SECOND_R };

    let mut table = ParadigmTable::new();
    table.merge_gendered(from_endings(lemma, stem, masculine_endings), Gender::Masculine);
    table.merge_gendered(from_endings(&format!("{}a", stem), stem, &tables::FIRST), Gender::Feminine);
    table.merge_gendered(from_endings(&format!("{}um", stem), stem, &tables::SECOND_UM), Gender::Neuter);
    table
}

fn third(lemma: &str, genitive: &str) -> ParadigmTable {
    let Some(forms) = third_terminations(lemma, genitive) else {
        warn!(%lemma, %genitive, "third-declension adjective has no usable genitive");
        return ParadigmTable::new();
    };
    let stem = forms.stem.as_str();

    let mut table = ParadigmTable::new();
    table.merge_gendered(
        from_endings(&forms.masculine, stem, &tables::THIRD_COMMON_PARISYLLABIC),
        Gender::Masculine,
    );
    table.merge_gendered(
        from_endings(&forms.feminine, stem, &tables::THIRD_COMMON_PARISYLLABIC),
        Gender::Feminine,
    );
    table.merge_gendered(
        from_endings(&forms.neuter, stem, &tables::THIRD_ADJECTIVE_NEUTER),
        Gender::Neuter,
    );
    table
}

/// Declines an adjective into `nom_sg_m`-style gendered tags.
///
/// `Declension::First` and `Declension::Second` both mean a first/second
/// declension adjective; only those and the third declension are declinable.
pub fn decline_adjective(
    lemma: &str,
    declension: Declension,
    genitive: &str,
    overrides: Option<&Overrides>,
) -> ParadigmTable {
    let lemma = stems::citation(lemma);
    let genitive = stems::genitive(genitive);

    let mut table = match declension {
        Declension::First | Declension::Second => first_second(&lemma, &genitive),
        Declension::Third => third(&lemma, &genitive),
        Declension::Fourth | Declension::Fifth => {
            warn!(%lemma, declension = declension.code(), "no adjectives in this declension");
            ParadigmTable::new()
        }
    };
    if let Some(overrides) = overrides {
        table = apply_overrides(&table, overrides);
    }
    debug!(%lemma, forms = table.len(), "declined adjective");
    table
}

pub fn decline_adjective_entry(entry: &LexicalDescriptor) -> ParadigmTable {
    match entry.class.and_then(|class| class.declension()) {
        Some(declension) => decline_adjective(&entry.lemma, declension, &entry.stem_source, Some(&entry.overrides)),
        None => {
            warn!(lemma = %entry.lemma, class = ?entry.class, "not a declinable adjective");
            ParadigmTable::new()
        }
    }
}
