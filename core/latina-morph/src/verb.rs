//! Finite and imperative forms of verbs.

use latina_protocol::{
    Conjugation, GrammaticalTag, LexicalDescriptor, Mood, Number, Overrides, ParadigmTable, Person, TagKind,
    Tense, Voice,
};
use tracing::{debug, warn};

use crate::normalize::clean_input;
use crate::overrides::apply_overrides;
use crate::stems::PrincipalParts;
use crate::tables::{self, ConjugationPattern, Row};

/// Person/number slots in row order: 1sg, 2sg, 3sg, 1pl, 2pl, 3pl.
fn slots() -> impl Iterator<Item = (Person, Number)> {
    Number::ALL
        .iter()
        .flat_map(|&number| Person::ALL.iter().map(move |&person| (person, number)))
}

fn fill(table: &mut ParadigmTable, tense: Tense, mood: Mood, voice: Voice, prefix: &str, endings: &Row) {
    for ((person, number), ending) in slots().zip(endings) {
        table.insert(
            GrammaticalTag::finite(tense, mood, voice, person, number),
            format!("{}{}", prefix, ending),
        );
    }
}

/// The present-system pattern of a regular verb.
pub(crate) fn pattern(conjugation: Conjugation, parts: &PrincipalParts) -> Option<&'static ConjugationPattern> {
    match conjugation {
        Conjugation::First => Some(&tables::FIRST_CONJUGATION),
        Conjugation::Second => Some(&tables::SECOND_CONJUGATION),
        Conjugation::Third if parts.is_io_verb() => Some(&tables::THIRD_IO_CONJUGATION),
        Conjugation::Third => Some(&tables::THIRD_CONJUGATION),
        Conjugation::Fourth => Some(&tables::FOURTH_CONJUGATION),
        Conjugation::Irregular => None,
    }
}

/// Irregular verbs with a closed present system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SumVerb {
    /// `sum` itself or a compound that prefixes it (`absum`). `prō-` takes
    /// a `d` before a vowel: `prōsum`, `prōdest`.
    Sum { prefix: String },
    /// `possum`: `pos-` before `s`, `pot-` before a vowel.
    Possum,
}

impl SumVerb {
    pub(crate) fn detect(parts: &PrincipalParts) -> Option<Self> {
        let key = clean_input(&parts.first);
        if key == "possum" {
            return Some(SumVerb::Possum);
        }
        if !key.ends_with("sum") {
            return None;
        }
        let prefix = parts.first.strip_suffix("sum")?;
        Some(SumVerb::Sum { prefix: prefix.to_string() })
    }

    fn prefixed(&self, form: &str) -> String {
        match self {
            SumVerb::Sum { prefix } if form.starts_with('e') && clean_input(prefix) == "pro" => {
                format!("{}d{}", prefix, form)
            }
            SumVerb::Sum { prefix } => format!("{}{}", prefix, form),
            SumVerb::Possum if form.starts_with('s') => format!("pos{}", form),
            SumVerb::Possum => format!("pot{}", form),
        }
    }

    fn fill(&self, table: &mut ParadigmTable, tense: Tense, mood: Mood, row: &Row) {
        for ((person, number), form) in slots().zip(row) {
            table.insert(
                GrammaticalTag::finite(tense, mood, Voice::Active, person, number),
                self.prefixed(form),
            );
        }
    }
}

fn present_system(table: &mut ParadigmTable, parts: &PrincipalParts, pattern: &ConjugationPattern) {
    use Mood::*;
    use Tense::*;
    use Voice::*;

    let stem = parts.present_stem();
    let imperfect = format!("{}{}", stem, pattern.imperfect_theme);
    let future = format!("{}{}", stem, pattern.future_theme);
    let subjunctive = format!("{}{}", stem, pattern.subjunctive_theme);

    fill(table, Present, Indicative, Active, stem, &pattern.present_active);
    // amō, not am + ō, for verbs whose first part is not fully regular.
    table.insert(
        GrammaticalTag::finite(Present, Indicative, Active, Person::First, Number::Singular),
        parts.first.as_str(),
    );
    fill(table, Present, Indicative, Passive, stem, &pattern.present_passive);
    fill(table, Imperfect, Indicative, Active, &imperfect, &tables::IMPERFECT_ACTIVE);
    fill(table, Imperfect, Indicative, Passive, &imperfect, &tables::IMPERFECT_PASSIVE);
    fill(table, Future, Indicative, Active, &future, &pattern.future_active);
    fill(table, Future, Indicative, Passive, &future, &pattern.future_passive);

    fill(table, Present, Subjunctive, Active, &subjunctive, &pattern.subjunctive_active);
    fill(table, Present, Subjunctive, Passive, &subjunctive, &pattern.subjunctive_passive);
    fill(table, Imperfect, Subjunctive, Active, parts.infinitive_base(), &tables::E_ACTIVE);
    fill(table, Imperfect, Subjunctive, Passive, parts.infinitive_base(), &tables::E_PASSIVE);

    for (voice, endings) in [(Active, &pattern.imperative_active), (Passive, &pattern.imperative_passive)] {
        for (&number, ending) in Number::ALL.iter().zip(endings) {
            table.insert(GrammaticalTag::Imperative { voice, number }, format!("{}{}", stem, ending));
        }
    }
}

fn irregular_present_system(table: &mut ParadigmTable, parts: &PrincipalParts, verb: &SumVerb) {
    verb.fill(table, Tense::Present, Mood::Indicative, &tables::SUM_PRESENT);
    verb.fill(table, Tense::Imperfect, Mood::Indicative, &tables::SUM_IMPERFECT);
    verb.fill(table, Tense::Future, Mood::Indicative, &tables::SUM_FUTURE);
    verb.fill(table, Tense::Present, Mood::Subjunctive, &tables::SUM_PRESENT_SUBJUNCTIVE);
    fill(
        table,
        Tense::Imperfect,
        Mood::Subjunctive,
        Voice::Active,
        parts.infinitive_base(),
        &tables::E_ACTIVE,
    );

    if let SumVerb::Sum { .. } = verb {
        for (&number, form) in Number::ALL.iter().zip(["es", "este"]) {
            table.insert(GrammaticalTag::Imperative { voice: Voice::Active, number }, verb.prefixed(form));
        }
    }
}

/// Perfect, pluperfect and future perfect on the perfect stem, shared by
/// every conjugation.
fn perfect_active(table: &mut ParadigmTable, parts: &PrincipalParts) {
    let stem = parts.perfect_stem();
    fill(table, Tense::Perfect, Mood::Indicative, Voice::Active, stem, &tables::PERFECT_ACTIVE);
    fill(table, Tense::Pluperfect, Mood::Indicative, Voice::Active, stem, &tables::PLUPERFECT_ACTIVE);
    fill(table, Tense::FuturePerfect, Mood::Indicative, Voice::Active, stem, &tables::FUTURE_PERFECT_ACTIVE);
    fill(table, Tense::Perfect, Mood::Subjunctive, Voice::Active, stem, &tables::PERFECT_SUBJUNCTIVE_ACTIVE);
    fill(table, Tense::Pluperfect, Mood::Subjunctive, Voice::Active, stem, &tables::PLUPERFECT_SUBJUNCTIVE_ACTIVE);
}

/// `amātum sum`, `amāta sumus`: participle plus a form of *sum*.
fn perfect_passive(table: &mut ParadigmTable, parts: &PrincipalParts) {
    let (Some(supine), Some(stem)) = (parts.supine.as_deref(), parts.supine_stem()) else {
        return;
    };
    let plural = format!("{}a", stem);

    let auxiliaries = [
        (Tense::Perfect, Mood::Indicative, &tables::SUM_PRESENT),
        (Tense::Pluperfect, Mood::Indicative, &tables::SUM_IMPERFECT),
        (Tense::FuturePerfect, Mood::Indicative, &tables::SUM_FUTURE),
        (Tense::Perfect, Mood::Subjunctive, &tables::SUM_PRESENT_SUBJUNCTIVE),
        (Tense::Pluperfect, Mood::Subjunctive, &tables::SUM_IMPERFECT_SUBJUNCTIVE),
    ];
    for (tense, mood, row) in auxiliaries {
        for ((person, number), auxiliary) in slots().zip(row) {
            let participle = match number {
                Number::Singular => supine,
                Number::Plural => plural.as_str(),
            };
            table.insert(
                GrammaticalTag::finite(tense, mood, Voice::Passive, person, number),
                format!("{} {}", participle, auxiliary),
            );
        }
    }
}

/// Conjugates a verb from its principal parts.
///
/// Fewer than three principal parts yield an empty table. Irregular verbs
/// other than *sum*, its compounds and *possum* only carry their overrides.
pub fn conjugate(
    lemma: &str,
    conjugation: Conjugation,
    principal_parts: &str,
    overrides: Option<&Overrides>,
) -> ParadigmTable {
    let parts = match PrincipalParts::parse(principal_parts) {
        Ok(parts) => parts,
        Err(err) => {
            warn!(%lemma, %principal_parts, error = %err, "cannot conjugate");
            return ParadigmTable::new();
        }
    };

    let mut table = ParadigmTable::new();
    match (pattern(conjugation, &parts), SumVerb::detect(&parts)) {
        (Some(pattern), _) => {
            present_system(&mut table, &parts, pattern);
            perfect_active(&mut table, &parts);
            perfect_passive(&mut table, &parts);
        }
        (None, Some(verb)) => {
            irregular_present_system(&mut table, &parts, &verb);
            perfect_active(&mut table, &parts);
        }
        (None, None) => {
            debug!(%lemma, "irregular verb without a closed table; overrides only");
        }
    }

    if let Some(overrides) = overrides {
        table = apply_overrides(&table, overrides);
    }
    debug!(%lemma, conjugation = conjugation.code(), forms = table.len(), "conjugated verb");
    table
}

/// Conjugates the verb described by `entry`, applying its finite and
/// imperative overrides.
pub fn conjugate_verb(entry: &LexicalDescriptor) -> ParadigmTable {
    let Some(conjugation) = entry.class.and_then(|class| class.conjugation()) else {
        warn!(lemma = %entry.lemma, class = ?entry.class, "not a conjugable verb");
        return ParadigmTable::new();
    };
    let overrides = entry.overrides.restricted_to(&[TagKind::Finite, TagKind::Imperative]);
    conjugate(&entry.lemma, conjugation, &entry.stem_source, Some(&overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMO: &str = "amō, amāre, amāvī, amātum";

    fn row(table: &ParadigmTable, prefix: &str) -> Vec<String> {
        ["1sg", "2sg", "3sg", "1pl", "2pl", "3pl"]
            .iter()
            .map(|pn| table.form(&format!("{}_{}", prefix, pn)).unwrap_or("?").to_string())
            .collect()
    }

    #[test]
    fn test_first_conjugation() {
        let table = conjugate("amō", Conjugation::First, AMO, None);
        assert_eq!(row(&table, "pres"), ["amō", "amās", "amat", "amāmus", "amātis", "amant"]);
        assert_eq!(row(&table, "pres_pass"), ["amor", "amāris", "amātur", "amāmur", "amāminī", "amantur"]);
        assert_eq!(row(&table, "imp"), ["amābam", "amābās", "amābat", "amābāmus", "amābātis", "amābant"]);
        assert_eq!(table.form("fut_1sg"), Some("amābō"));
        assert_eq!(table.form("fut_pass_2sg"), Some("amāberis"));
        assert_eq!(row(&table, "pres_subj"), ["amem", "amēs", "amet", "amēmus", "amētis", "ament"]);
        assert_eq!(table.form("imp_subj_1sg"), Some("amārem"));
        assert_eq!(table.form("imp_subj_2sg"), Some("amārēs"));
        assert_eq!(table.form("imp_subj_pass_3pl"), Some("amārentur"));
        assert_eq!(table.form("imv_2sg"), Some("amā"));
        assert_eq!(table.form("imv_pass_2pl"), Some("amāminī"));
    }

    #[test]
    fn test_perfect_system() {
        let table = conjugate("amō", Conjugation::First, AMO, None);
        assert_eq!(row(&table, "perf"), ["amāvī", "amāvistī", "amāvit", "amāvimus", "amāvistis", "amāvērunt"]);
        assert_eq!(table.form("plup_3sg"), Some("amāverat"));
        assert_eq!(table.form("futperf_3pl"), Some("amāverint"));
        assert_eq!(table.form("perf_subj_1sg"), Some("amāverim"));
        assert_eq!(table.form("plup_subj_3sg"), Some("amāvisset"));

        assert_eq!(table.form("perf_pass_1sg"), Some("amātum sum"));
        assert_eq!(table.form("perf_pass_1pl"), Some("amāta sumus"));
        assert_eq!(table.form("plup_pass_3sg"), Some("amātum erat"));
        assert_eq!(table.form("futperf_pass_3pl"), Some("amāta erunt"));
        assert_eq!(table.form("perf_subj_pass_2sg"), Some("amātum sīs"));
        assert_eq!(table.form("plup_subj_pass_1pl"), Some("amāta essēmus"));
    }

    #[test]
    fn test_other_conjugations() {
        let moneo = conjugate("moneō", Conjugation::Second, "moneō, monēre, monuī, monitum", None);
        assert_eq!(row(&moneo, "pres"), ["moneō", "monēs", "monet", "monēmus", "monētis", "monent"]);
        assert_eq!(moneo.form("pres_subj_1sg"), Some("moneam"));
        assert_eq!(moneo.form("fut_3pl"), Some("monēbunt"));

        let rego = conjugate("regō", Conjugation::Third, "regō, regere, rēxī, rēctum", None);
        assert_eq!(row(&rego, "pres"), ["regō", "regis", "regit", "regimus", "regitis", "regunt"]);
        assert_eq!(row(&rego, "fut"), ["regam", "regēs", "reget", "regēmus", "regētis", "regent"]);
        assert_eq!(rego.form("imp_1sg"), Some("regēbam"));
        assert_eq!(rego.form("pres_pass_2sg"), Some("regeris"));
        assert_eq!(rego.form("imv_2sg"), Some("rege"));
        assert_eq!(rego.form("imp_subj_1sg"), Some("regerem"));

        let capio = conjugate("capiō", Conjugation::Third, "capiō, capere, cēpī, captum", None);
        assert_eq!(row(&capio, "pres"), ["capiō", "capis", "capit", "capimus", "capitis", "capiunt"]);
        assert_eq!(capio.form("imp_1sg"), Some("capiēbam"));
        assert_eq!(capio.form("fut_1sg"), Some("capiam"));
        assert_eq!(capio.form("pres_subj_3sg"), Some("capiat"));

        let audio = conjugate("audiō", Conjugation::Fourth, "audiō, audīre, audīvī, audītum", None);
        assert_eq!(row(&audio, "pres"), ["audiō", "audīs", "audit", "audīmus", "audītis", "audiunt"]);
        assert_eq!(audio.form("imp_3pl"), Some("audiēbant"));
        assert_eq!(audio.form("fut_2sg"), Some("audiēs"));
        assert_eq!(audio.form("imv_2pl"), Some("audīte"));
    }

    #[test]
    fn test_missing_supine_omits_passive_perfect() {
        let table = conjugate("veniō", Conjugation::Fourth, "veniō, venīre, vēnī", None);
        assert_eq!(table.form("perf_3sg"), Some("vēnit"));
        assert!(table.form("perf_pass_3sg").is_none());
        assert!(table.tags().all(|tag| !matches!(tag,
            GrammaticalTag::Finite { tense, voice: Voice::Passive, .. } if tense.is_perfect_system())));
    }

    #[test]
    fn test_irregular_sum_family() {
        let sum = conjugate("sum", Conjugation::Irregular, "sum, esse, fuī, futūrus", None);
        assert_eq!(row(&sum, "pres"), ["sum", "es", "est", "sumus", "estis", "sunt"]);
        assert_eq!(sum.form("imp_subj_1sg"), Some("essem"));
        assert_eq!(sum.form("perf_1sg"), Some("fuī"));
        assert_eq!(sum.form("imv_2pl"), Some("este"));
        assert!(sum.form("pres_pass_3sg").is_none());

        let possum = conjugate("possum", Conjugation::Irregular, "possum, posse, potuī", None);
        assert_eq!(row(&possum, "pres"), ["possum", "potes", "potest", "possumus", "potestis", "possunt"]);
        assert_eq!(possum.form("imp_1sg"), Some("poteram"));
        assert_eq!(possum.form("pres_subj_3pl"), Some("possint"));
        assert_eq!(possum.form("imp_subj_1sg"), Some("possem"));
        assert!(possum.form("imv_2sg").is_none());

        let absum = conjugate("absum", Conjugation::Irregular, "absum, abesse, āfuī, āfutūrus", None);
        assert_eq!(absum.form("pres_3sg"), Some("abest"));
        assert_eq!(absum.form("perf_1sg"), Some("āfuī"));
    }

    #[test]
    fn test_prosum_inserts_d_before_vowels() {
        let prosum = conjugate("prōsum", Conjugation::Irregular, "prōsum, prōdesse, prōfuī", None);
        assert_eq!(
            row(&prosum, "pres"),
            ["prōsum", "prōdes", "prōdest", "prōsumus", "prōdestis", "prōsunt"]
        );
        assert_eq!(prosum.form("imp_1sg"), Some("prōderam"));
        assert_eq!(prosum.form("fut_3pl"), Some("prōderunt"));
        assert_eq!(prosum.form("pres_subj_1sg"), Some("prōsim"));
        assert_eq!(prosum.form("imp_subj_1sg"), Some("prōdessem"));
        assert_eq!(prosum.form("imv_2sg"), Some("prōdes"));
        assert_eq!(prosum.form("imv_2pl"), Some("prōdeste"));
        assert_eq!(prosum.form("perf_1sg"), Some("prōfuī"));
    }

    #[test]
    fn test_other_irregulars_carry_overrides_only() {
        let overrides: Overrides = [("pres_1sg".parse::<GrammaticalTag>().unwrap(), "volō")].into_iter().collect();
        let table = conjugate("volō", Conjugation::Irregular, "volō, velle, voluī", Some(&overrides));
        assert_eq!(table.len(), 1);
        assert_eq!(table.form("pres_1sg"), Some("volō"));
    }

    #[test]
    fn test_insufficient_parts() {
        assert!(conjugate("amō", Conjugation::First, "amō, amāre", None).is_empty());
    }

    #[test]
    fn test_descriptor_routes_overrides() {
        let overrides: Overrides = [("imv_2sg", "dīc"), ("perf_pass", "dictus, dicta, dictum")]
            .into_iter()
            .map(|(key, form)| (key.parse::<GrammaticalTag>().unwrap(), form))
            .collect();
        let entry = LexicalDescriptor::verb("dīcō", Conjugation::Third, "dīcō, dīcere, dīxī, dictum").with_overrides(overrides);
        let table = conjugate_verb(&entry);
        assert_eq!(table.form("imv_2sg"), Some("dīc"));
        assert!(table.form("perf_pass").is_none());
    }
}
