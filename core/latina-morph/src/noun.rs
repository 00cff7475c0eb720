//! Nominal declension engine.

use latina_protocol::{
    Case, Declension, Gender, GrammaticalTag, LexicalDescriptor, Number, Overrides, ParadigmTable, Tantum,
};
use tracing::{debug, warn};

use crate::overrides::apply_overrides;
use crate::stems::{self, SecondDeclension};
use crate::tables::{self, EndingSet};

/// Fills a table from `stem` + endings, using `lemma` for the citation slots.
pub(crate) fn from_endings(lemma: &str, stem: &str, endings: &EndingSet) -> ParadigmTable {
    let mut table = ParadigmTable::new();
    for (number, row) in [(Number::Singular, &endings.singular), (Number::Plural, &endings.plural)] {
        for (&case, ending) in Case::ALL.iter().zip(row.iter()) {
            let form = if number == Number::Singular && endings.citation.contains(&case) {
                lemma.to_string()
            } else {
                format!("{}{}", stem, ending)
            };
            table.insert(GrammaticalTag::nominal(case, number), form);
        }
    }
    table
}

/// Rule-generated forms only: no overrides, no tantum.
pub(crate) fn base_forms(
    lemma: &str,
    declension: Declension,
    gender: Gender,
    genitive: &str,
    parisyllabic: Option<bool>,
) -> ParadigmTable {
    let lemma = stems::citation(lemma);
    let genitive = stems::genitive(genitive);

    match declension {
        Declension::First => from_endings(&lemma, stems::first_declension_stem(&lemma), &tables::FIRST),
        Declension::Second => match stems::second_declension(&lemma, &genitive) {
            Some(SecondDeclension::Us(stem)) => from_endings(&lemma, stem, &tables::SECOND_US),
            Some(SecondDeclension::Um(stem)) => from_endings(&lemma, stem, &tables::SECOND_UM),
            Some(SecondDeclension::R(stem)) => from_endings(&lemma, stem, &tables::SECOND_R),
            None => {
                warn!(%lemma, "second-declension noun has no recognizable ending");
                ParadigmTable::new()
            }
        },
        Declension::Third => {
            let parisyllabic = parisyllabic.unwrap_or_else(|| {
                let detected = stems::is_parisyllabic(&lemma, &genitive);
                debug!(%lemma, %genitive, detected, "parisyllabic flag inferred from syllable counts");
                detected
            });
            let endings = match (gender == Gender::Neuter, parisyllabic) {
                (true, true) => &tables::THIRD_NEUTER_PARISYLLABIC,
                (true, false) => &tables::THIRD_NEUTER,
                (false, true) => &tables::THIRD_COMMON_PARISYLLABIC,
                (false, false) => &tables::THIRD_COMMON,
            };
            from_endings(&lemma, stems::third_declension_stem(&genitive), endings)
        }
        Declension::Fourth => match stems::fourth_declension(&lemma) {
            Some((stem, false)) => from_endings(&lemma, stem, &tables::FOURTH),
            Some((stem, true)) => from_endings(&lemma, stem, &tables::FOURTH_NEUTER),
            None => {
                warn!(%lemma, "fourth-declension noun has no recognizable ending");
                ParadigmTable::new()
            }
        },
        Declension::Fifth => from_endings(&lemma, stems::fifth_declension_stem(&lemma), &tables::FIFTH),
    }
}

/// Declines a noun: rules, then `overrides`, then tantum suppression.
pub fn decline(
    lemma: &str,
    declension: Declension,
    gender: Gender,
    genitive: &str,
    parisyllabic: Option<bool>,
    overrides: Option<&Overrides>,
    tantum: Tantum,
) -> ParadigmTable {
    let mut table = base_forms(lemma, declension, gender, genitive, parisyllabic);
    if let Some(overrides) = overrides {
        table = apply_overrides(&table, overrides);
    }
    if let Some(number) = tantum.suppressed() {
        table.suppress(number);
    }
    debug!(lemma, declension = declension.code(), forms = table.len(), "declined noun");
    table
}

/// Declines the noun described by `entry`. Entries that are not
/// declension-class nouns yield an empty table.
pub fn decline_noun(entry: &LexicalDescriptor) -> ParadigmTable {
    let Some(declension) = entry.class.and_then(|class| class.declension()) else {
        warn!(lemma = %entry.lemma, class = ?entry.class, "not a declinable noun");
        return ParadigmTable::new();
    };
    // Without a recorded gender the noun declines as common gender.
    let gender = entry.gender.unwrap_or(Gender::Masculine);
    decline(
        &entry.lemma,
        declension,
        gender,
        &entry.stem_source,
        entry.parisyllabic,
        Some(&entry.overrides),
        entry.tantum,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use latina_protocol::UNATTESTED;

    fn forms(table: &ParadigmTable, keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| table.form(k).unwrap_or("?").to_string()).collect()
    }

    #[test]
    fn test_first_declension() {
        let table = decline("puella", Declension::First, Gender::Feminine, "puellae", None, None, Tantum::Normal);
        assert_eq!(table.len(), 12);
        assert_eq!(
            forms(&table, &["nom_sg", "gen_sg", "acc_sg", "abl_sg", "gen_pl", "dat_pl", "acc_pl"]),
            ["puella", "puellae", "puellam", "puellā", "puellārum", "puellīs", "puellās"]
        );
    }

    #[test]
    fn test_second_declension_shapes() {
        let dominus = decline("dominus", Declension::Second, Gender::Masculine, "dominī", None, None, Tantum::Normal);
        assert_eq!(forms(&dominus, &["voc_sg", "gen_pl", "acc_pl"]), ["domine", "dominōrum", "dominōs"]);

        let bellum = decline("bellum", Declension::Second, Gender::Neuter, "bellī", None, None, Tantum::Normal);
        assert_eq!(forms(&bellum, &["nom_sg", "acc_sg", "voc_sg"]), ["bellum", "bellum", "bellum"]);
        assert_eq!(forms(&bellum, &["nom_pl", "acc_pl", "voc_pl"]), ["bella", "bella", "bella"]);

        let ager = decline("ager", Declension::Second, Gender::Masculine, "agrī", None, None, Tantum::Normal);
        assert_eq!(forms(&ager, &["nom_sg", "voc_sg", "gen_sg", "acc_sg", "nom_pl"]), ["ager", "ager", "agrī", "agrum", "agrī"]);

        let puer = decline("puer", Declension::Second, Gender::Masculine, "puerī", None, None, Tantum::Normal);
        assert_eq!(puer.form("dat_pl"), Some("puerīs"));
    }

    #[test]
    fn test_third_declension_variants() {
        let rex = decline("rēx", Declension::Third, Gender::Masculine, "rēgis", Some(false), None, Tantum::Normal);
        assert_eq!(forms(&rex, &["nom_sg", "gen_sg", "acc_sg", "abl_sg", "gen_pl"]), ["rēx", "rēgis", "rēgem", "rēge", "rēgum"]);

        let civis = decline("cīvis", Declension::Third, Gender::Masculine, "cīvis", Some(true), None, Tantum::Normal);
        assert_eq!(forms(&civis, &["abl_sg", "gen_pl", "acc_pl"]), ["cīvī", "cīvium", "cīvēs"]);

        let nomen = decline("nōmen", Declension::Third, Gender::Neuter, "nōminis", None, None, Tantum::Normal);
        assert_eq!(forms(&nomen, &["nom_sg", "acc_sg", "voc_sg"]), ["nōmen", "nōmen", "nōmen"]);
        assert_eq!(forms(&nomen, &["abl_sg", "nom_pl", "gen_pl"]), ["nōmine", "nōmina", "nōminum"]);

        let mare = decline("mare", Declension::Third, Gender::Neuter, "maris", Some(true), None, Tantum::Normal);
        assert_eq!(forms(&mare, &["acc_sg", "abl_sg", "nom_pl", "gen_pl"]), ["mare", "mare", "maria", "marium"]);
    }

    #[test]
    fn test_parisyllabic_inferred_when_unset() {
        let navis = decline("nāvis", Declension::Third, Gender::Feminine, "nāvis", None, None, Tantum::Normal);
        assert_eq!(navis.form("gen_pl"), Some("nāvium"));
        let rex = decline("rēx", Declension::Third, Gender::Masculine, "rēgis", None, None, Tantum::Normal);
        assert_eq!(rex.form("gen_pl"), Some("rēgum"));
    }

    #[test]
    fn test_fourth_and_fifth_declensions() {
        let manus = decline("manus", Declension::Fourth, Gender::Feminine, "manūs", None, None, Tantum::Normal);
        assert_eq!(forms(&manus, &["gen_sg", "dat_sg", "gen_pl", "dat_pl"]), ["manūs", "manuī", "manuum", "manibus"]);

        let cornu = decline("cornū", Declension::Fourth, Gender::Neuter, "cornūs", None, None, Tantum::Normal);
        assert_eq!(forms(&cornu, &["nom_sg", "dat_sg", "nom_pl"]), ["cornū", "cornū", "cornua"]);

        let res = decline("rēs", Declension::Fifth, Gender::Feminine, "reī", None, None, Tantum::Normal);
        assert_eq!(forms(&res, &["gen_sg", "acc_sg", "gen_pl", "dat_pl"]), ["reī", "rem", "rērum", "rēbus"]);
    }

    #[test]
    fn test_homograph_digits_are_ignored() {
        let table = decline("līber2", Declension::Second, Gender::Masculine, "librī", None, None, Tantum::Normal);
        assert_eq!(table.form("nom_sg"), Some("līber"));
        assert_eq!(table.form("gen_pl"), Some("librōrum"));
    }

    #[test]
    fn test_override_precedence() {
        let overrides: Overrides = [("dat_pl", "filiābus"), ("abl_pl", "filiābus")]
            .into_iter()
            .map(|(k, v)| (k.parse::<GrammaticalTag>().unwrap(), v))
            .collect();
        let table = decline("filia", Declension::First, Gender::Feminine, "filiae", None, Some(&overrides), Tantum::Normal);
        assert_eq!(table.form("dat_pl"), Some("filiābus"));
        assert_eq!(table.form("abl_pl"), Some("filiābus"));
        assert_eq!(table.form("gen_pl"), Some("filiārum"));
    }

    #[test]
    fn test_tantum_suppression() {
        let castra = decline("castrum", Declension::Second, Gender::Neuter, "castrī", None, None, Tantum::PluraleTantum);
        for (tag, form) in &castra {
            match tag.number() {
                Some(Number::Singular) => assert_eq!(form, UNATTESTED),
                _ => assert_ne!(form, UNATTESTED),
            }
        }
        assert_eq!(castra.form("nom_pl"), Some("castra"));

        let aurum = decline("aurum", Declension::Second, Gender::Neuter, "aurī", None, None, Tantum::SingulareTantum);
        assert_eq!(aurum.form("nom_sg"), Some("aurum"));
        assert_eq!(aurum.form("nom_pl"), Some(UNATTESTED));
    }

    #[test]
    fn test_plural_citation_forms() {
        let castra = decline("castra", Declension::Second, Gender::Neuter, "castrōrum", None, None, Tantum::PluraleTantum);
        assert_eq!(castra.form("nom_pl"), Some("castra"));
        assert_eq!(castra.form("abl_pl"), Some("castrīs"));

        let liberi = decline("līberī", Declension::Second, Gender::Masculine, "līberōrum", None, None, Tantum::PluraleTantum);
        assert_eq!(liberi.form("acc_pl"), Some("līberōs"));
    }

    #[test]
    fn test_tantum_applies_after_overrides() {
        let overrides: Overrides = [("nom_sg".parse::<GrammaticalTag>().unwrap(), "castrum")].into_iter().collect();
        let table = decline("castra", Declension::First, Gender::Neuter, "castrōrum", None, Some(&overrides), Tantum::PluraleTantum);
        assert_eq!(table.form("nom_sg"), Some(UNATTESTED));
    }

    #[test]
    fn test_descriptor_entry_point() {
        let entry = LexicalDescriptor::noun("rēx", Declension::Third, Gender::Masculine, "rēgis").with_parisyllabic(false);
        assert_eq!(decline_noun(&entry).form("dat_pl"), Some("rēgibus"));

        let verb = LexicalDescriptor::verb("amō", latina_protocol::Conjugation::First, "amō, amāre, amāvī, amātum");
        assert!(decline_noun(&verb).is_empty());
    }

    #[test]
    fn test_unrecognized_shape_is_empty() {
        let table = decline("cornū", Declension::Second, Gender::Neuter, "cornūs", None, None, Tantum::Normal);
        assert!(table.is_empty());
    }
}
