//! Closed pronoun tables.

use latina_protocol::{Case, Gender, GrammaticalTag, LexicalDescriptor, Number, Overrides, ParadigmTable};
use tracing::{debug, warn};

use crate::normalize::{clean_input, strip_homograph_digits};
use crate::overrides::apply_overrides;

/// nom, gen, dat, acc, abl
type Cases = [&'static str; 5];

/// Singular and plural of one gender.
type Numbers = [Cases; 2];

const EGO: Numbers = [
    ["ego", "meī", "mihi", "mē", "mē"],
    ["nōs", "nostrum", "nōbīs", "nōs", "nōbīs"],
];

const TU: Numbers = [
    ["tū", "tuī", "tibi", "tē", "tē"],
    ["vōs", "vestrum", "vōbīs", "vōs", "vōbīs"],
];

/// Masculine, feminine, neuter.
type Gendered = [Numbers; 3];

const IS: Gendered = [
    [["is", "eius", "eī", "eum", "eō"], ["eī", "eōrum", "eīs", "eōs", "eīs"]],
    [["ea", "eius", "eī", "eam", "eā"], ["eae", "eārum", "eīs", "eās", "eīs"]],
    [["id", "eius", "eī", "id", "eō"], ["ea", "eōrum", "eīs", "ea", "eīs"]],
];

const HIC: Gendered = [
    [["hic", "huius", "huic", "hunc", "hōc"], ["hī", "hōrum", "hīs", "hōs", "hīs"]],
    [["haec", "huius", "huic", "hanc", "hāc"], ["hae", "hārum", "hīs", "hās", "hīs"]],
    [["hoc", "huius", "huic", "hoc", "hōc"], ["haec", "hōrum", "hīs", "haec", "hīs"]],
];

const QUI_PLURAL: [Cases; 3] = [
    ["quī", "quōrum", "quibus", "quōs", "quibus"],
    ["quae", "quārum", "quibus", "quās", "quibus"],
    ["quae", "quōrum", "quibus", "quae", "quibus"],
];

const QUI: Gendered = [
    [["quī", "cuius", "cui", "quem", "quō"], QUI_PLURAL[0]],
    [["quae", "cuius", "cui", "quam", "quā"], QUI_PLURAL[1]],
    [["quod", "cuius", "cui", "quod", "quō"], QUI_PLURAL[2]],
];

const QUIS: Gendered = [
    [["quis", "cuius", "cui", "quem", "quō"], QUI_PLURAL[0]],
    [["quis", "cuius", "cui", "quem", "quō"], QUI_PLURAL[1]],
    [["quid", "cuius", "cui", "quid", "quō"], QUI_PLURAL[2]],
];

const CASES: [Case; 5] = [Case::Nominative, Case::Genitive, Case::Dative, Case::Accusative, Case::Ablative];

/// Personal pronouns have no gender and no vocative.
fn personal(numbers: &Numbers) -> ParadigmTable {
    let mut table = ParadigmTable::new();
    for (&number, cases) in Number::ALL.iter().zip(numbers) {
        for (&case, form) in CASES.iter().zip(cases) {
            table.insert(GrammaticalTag::nominal(case, number), *form);
        }
    }
    table
}

/// Gendered tables repeat the nominative as vocative.
fn gendered(forms: &Gendered) -> ParadigmTable {
    let mut table = ParadigmTable::new();
    for (&gender, numbers) in Gender::ALL.iter().zip(forms) {
        for (&number, cases) in Number::ALL.iter().zip(numbers) {
            for (&case, form) in CASES.iter().zip(cases) {
                table.insert(GrammaticalTag::gendered(case, number, gender), *form);
            }
            table.insert(GrammaticalTag::gendered(Case::Vocative, number, gender), cases[0]);
        }
    }
    table
}

/// The `-īus` / `-ī` demonstratives built on `stem`: *ille*, *iste*, *ipse*.
/// Only the neuter nominative differs between them (`illud`, `ipsum`).
fn pronominal(stem: &str, neuter: &str) -> ParadigmTable {
    let owned = |ending: &str| format!("{}{}", stem, ending);
    let rows: [[[String; 5]; 2]; 3] = [
        [
            ["e", "īus", "ī", "um", "ō"].map(owned),
            ["ī", "ōrum", "īs", "ōs", "īs"].map(owned),
        ],
        [
            ["a", "īus", "ī", "am", "ā"].map(owned),
            ["ae", "ārum", "īs", "ās", "īs"].map(owned),
        ],
        [
            [neuter, "īus", "ī", neuter, "ō"].map(owned),
            ["a", "ōrum", "īs", "a", "īs"].map(owned),
        ],
    ];

    let mut table = ParadigmTable::new();
    for (&gender, numbers) in Gender::ALL.iter().zip(&rows) {
        for (&number, cases) in Number::ALL.iter().zip(numbers) {
            for (&case, form) in CASES.iter().zip(cases) {
                table.insert(GrammaticalTag::gendered(case, number, gender), form.as_str());
            }
            table.insert(GrammaticalTag::gendered(Case::Vocative, number, gender), cases[0].as_str());
        }
    }
    table
}

/// Looks up the table of a pronoun by its citation form (`"hic, haec, hoc"`,
/// `"quī"`, `"ego"`). Unknown pronouns yield an empty table.
pub fn decline_pronoun(lemma: &str) -> ParadigmTable {
    let head = lemma.split(',').next().unwrap_or_default();
    let key = clean_input(strip_homograph_digits(head));

    let table = match key.as_str() {
        "ego" | "nos" => personal(&EGO),
        "tu" | "vos" => personal(&TU),
        "is" => gendered(&IS),
        "hic" => gendered(&HIC),
        "qui" => gendered(&QUI),
        "quis" => gendered(&QUIS),
        "ille" => pronominal("ill", "ud"),
        "iste" => pronominal("ist", "ud"),
        "ipse" => pronominal("ips", "um"),
        _ => {
            warn!(%lemma, "unrecognized pronoun");
            return ParadigmTable::new();
        }
    };
    debug!(%lemma, forms = table.len(), "declined pronoun");
    table
}

/// Whether an override for `tag` fits the shape of `table`: ego and tū have
/// no gender and no vocative, the others are gendered. A pronoun without a
/// table takes any nominal tag.
pub(crate) fn accepts_override(table: &ParadigmTable, tag: &GrammaticalTag) -> bool {
    table.is_empty() || table.contains(tag)
}

/// [`decline_pronoun`] plus the entry's overrides. Overrides that do not fit
/// the pronoun's table are dropped.
pub fn decline_pronoun_entry(entry: &LexicalDescriptor) -> ParadigmTable {
    let table = decline_pronoun(&entry.lemma);
    if entry.overrides.is_empty() {
        return table;
    }

    let overrides: Overrides = entry
        .overrides
        .iter()
        .filter(|(tag, _)| {
            let fits = accepts_override(&table, tag);
            if !fits {
                warn!(lemma = %entry.lemma, %tag, "override does not fit this pronoun");
            }
            fits
        })
        .map(|(tag, form)| (*tag, form.clone()))
        .collect();
    apply_overrides(&table, &overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_pronouns() {
        let ego = decline_pronoun("ego");
        assert_eq!(ego.len(), 10);
        assert_eq!(ego.form("dat_sg"), Some("mihi"));
        assert_eq!(ego.form("gen_pl"), Some("nostrum"));
        assert_eq!(ego.form("voc_sg"), None);
        assert_eq!(decline_pronoun("nōs"), ego);

        let tu = decline_pronoun("tū");
        assert_eq!(tu.form("acc_sg"), Some("tē"));
        assert_eq!(tu.form("abl_pl"), Some("vōbīs"));
    }

    #[test]
    fn test_demonstratives() {
        let hic = decline_pronoun("hic, haec, hoc");
        assert_eq!(hic.len(), 36);
        assert_eq!(hic.form("nom_sg_m"), Some("hic"));
        assert_eq!(hic.form("acc_sg_f"), Some("hanc"));
        assert_eq!(hic.form("nom_pl_n"), Some("haec"));
        assert_eq!(hic.form("voc_pl_f"), Some("hae"));

        let ille = decline_pronoun("ille");
        assert_eq!(ille.len(), 36);
        assert_eq!(ille.form("gen_sg_f"), Some("illīus"));
        assert_eq!(ille.form("nom_sg_n"), Some("illud"));
        assert_eq!(ille.form("acc_pl_m"), Some("illōs"));

        let ipse = decline_pronoun("ipse");
        assert_eq!(ipse.form("nom_sg_n"), Some("ipsum"));
        assert_eq!(ipse.form("dat_pl_f"), Some("ipsīs"));

        assert_eq!(decline_pronoun("is").form("gen_sg_n"), Some("eius"));
        assert_eq!(decline_pronoun("iste").form("abl_sg_f"), Some("istā"));
    }

    #[test]
    fn test_relative_and_interrogative() {
        let qui = decline_pronoun("quī, quae, quod");
        assert_eq!(qui.len(), 36);
        assert_eq!(qui.form("acc_sg_f"), Some("quam"));
        assert_eq!(qui.form("dat_pl_n"), Some("quibus"));

        let quis = decline_pronoun("quis");
        assert_eq!(quis.form("nom_sg_n"), Some("quid"));
        assert_eq!(quis.form("gen_pl_m"), Some("quōrum"));
    }

    #[test]
    fn test_lookup_is_normalized() {
        assert_eq!(decline_pronoun("  QUĪ ").len(), 36);
        assert_eq!(decline_pronoun("Quī2").len(), 36);
        assert!(decline_pronoun("aliquis").is_empty());
    }

    #[test]
    fn test_entry_overrides() {
        let overrides = [("gen_sg_m".parse::<GrammaticalTag>().unwrap(), "hūius")].into_iter().collect();
        let entry = LexicalDescriptor::pronoun("hic").with_overrides(overrides);
        assert_eq!(decline_pronoun_entry(&entry).form("gen_sg_m"), Some("hūius"));
    }

    #[test]
    fn test_misshapen_overrides_are_dropped() {
        let tag = |key: &str| key.parse::<GrammaticalTag>().unwrap();

        let overrides = [(tag("nom_sg"), "x"), (tag("voc_sg"), "y")].into_iter().collect();
        let hic = decline_pronoun_entry(&LexicalDescriptor::pronoun("hic").with_overrides(overrides));
        assert_eq!(hic.len(), 36);
        assert_eq!(hic.form("nom_sg"), None);

        let overrides = [(tag("voc_sg"), "x"), (tag("dat_sg_m"), "y"), (tag("dat_sg"), "mihī")]
            .into_iter()
            .collect();
        let ego = decline_pronoun_entry(&LexicalDescriptor::pronoun("ego").with_overrides(overrides));
        assert_eq!(ego.len(), 10);
        assert_eq!(ego.form("dat_sg"), Some("mihī"));

        let table = decline_pronoun("ego");
        assert!(accepts_override(&table, &tag("gen_pl")));
        assert!(!accepts_override(&table, &tag("gen_pl_f")));
        assert!(accepts_override(&ParadigmTable::new(), &tag("nom_sg_m")));
    }
}
