use latina_morph::*;
use latina_protocol::{
    Case, Category, Conjugation, Declension, Gender, GrammaticalTag, LexicalDescriptor, Number, Overrides,
    ParadigmTable, Tantum, UNATTESTED,
};
use proptest::prelude::*;

const AMO: &str = "amō, amāre, amāvī, amātum";

fn assert_well_formed(table: &ParadigmTable) {
    for (tag, form) in table {
        assert!(!form.trim().is_empty(), "{} is empty", tag);
        if form.contains('—') {
            assert_eq!(form, UNATTESTED, "{} mixes the placeholder into a form", tag);
        }
    }
}

#[test]
fn normalization_strips_macrons() {
    assert_eq!(normalize("puellā"), "puella");
    assert_eq!(normalize("puella"), "puella");
    assert_eq!(normalize(&normalize("puellā")), normalize("puellā"));
}

#[test]
fn overrides_take_precedence() {
    let overrides = parse_overrides(r#"{"dat_pl": "filiābus", "abl_pl": "filiābus"}"#, Category::Noun).unwrap();
    let plain = decline("filia", Declension::First, Gender::Feminine, "filiae", None, None, Tantum::Normal);
    assert_eq!(plain.form("dat_pl"), Some("filiīs"));

    let table = decline("filia", Declension::First, Gender::Feminine, "filiae", None, Some(&overrides), Tantum::Normal);
    assert_eq!(table.form("dat_pl"), Some("filiābus"));
    assert_eq!(table.form("abl_pl"), Some("filiābus"));
}

#[test]
fn neuter_syncretism() {
    let table = decline("nōmen", Declension::Third, Gender::Neuter, "nōminis", None, None, Tantum::Normal);
    for key in ["nom_sg", "acc_sg", "voc_sg"] {
        assert_eq!(table.form(key), Some("nōmen"));
    }
}

#[test]
fn parisyllabic_genitive_plural() {
    let civis = decline("cīvis", Declension::Third, Gender::Masculine, "cīvis", Some(true), None, Tantum::Normal);
    assert_eq!(civis.form("gen_pl"), Some("cīvium"));
    let rex = decline("rēx", Declension::Third, Gender::Masculine, "rēgis", Some(false), None, Tantum::Normal);
    assert_eq!(rex.form("gen_pl"), Some("rēgum"));
}

#[test]
fn first_conjugation_landmarks() {
    let table = conjugate("amō", Conjugation::First, AMO, None);
    assert_eq!(table.form("pres_1sg"), Some("amō"));
    assert_eq!(table.form("fut_1sg"), Some("amābō"));
    assert_eq!(table.form("perf_pass_1sg"), Some("amātum sum"));
    assert_well_formed(&table);
}

#[test]
fn demonstrative_is_complete() {
    let table = decline_pronoun("hic");
    let expected: Vec<GrammaticalTag> = GrammaticalTag::vocabulary(Category::Adjective);
    assert_eq!(table.len(), 36);
    assert!(expected.iter().all(|tag| table.contains(tag)));
    assert_eq!(table.form("nom_sg_m"), Some("hic"));
    assert_eq!(table.form("nom_sg_f"), Some("haec"));
    assert_eq!(table.form("nom_sg_n"), Some("hoc"));
}

#[test]
fn plurale_tantum_suppresses_singular() {
    let table = decline("dīvitiae", Declension::First, Gender::Feminine, "dīvitiārum", None, None, Tantum::PluraleTantum);
    assert_eq!(table.len(), 12);
    for (tag, form) in &table {
        match tag.number() {
            Some(Number::Singular) => assert_eq!(form, UNATTESTED),
            _ => assert_ne!(form, UNATTESTED),
        }
    }
    assert_eq!(table.form("nom_pl"), Some("dīvitiae"));
}

#[test]
fn lexicon_entry_to_table() {
    let entry: LexiconEntry = serde_json::from_str(
        r#"{"latin": "fīlius", "part_of_speech": "noun", "declension": "2", "genitive": "fīliī",
            "gender": "m", "irregular_forms": "{\"voc_sg\": \"fīlī\"}"}"#,
    )
    .unwrap();
    let inflection = inflect(&entry.to_descriptor().unwrap());
    assert_eq!(inflection.forms.form("voc_sg"), Some("fīlī"));
    assert_eq!(inflection.forms.form("gen_sg"), Some("fīliī"));
    assert_eq!(
        inflection.forms.get(&GrammaticalTag::nominal(Case::Dative, Number::Plural)),
        Some("fīliīs")
    );
}

#[test]
fn tables_stay_inside_the_vocabulary() {
    let entries = [
        LexicalDescriptor::noun("rosa", Declension::First, Gender::Feminine, "rosae"),
        LexicalDescriptor::adjective("bonus", Declension::Second, "bonī"),
        LexicalDescriptor::pronoun("ille"),
        LexicalDescriptor::verb("audiō", Conjugation::Fourth, "audiō, audīre, audīvī, audītum"),
    ];
    for entry in &entries {
        let vocabulary = GrammaticalTag::vocabulary(entry.category);
        let inflection = inflect(entry);
        assert!(!inflection.forms.is_empty());
        assert!(inflection.forms.tags().all(|tag| vocabulary.contains(tag)), "{}", entry.lemma);
    }
}

fn declension() -> impl Strategy<Value = Declension> {
    prop_oneof![
        Just(Declension::First),
        Just(Declension::Second),
        Just(Declension::Third),
        Just(Declension::Fourth),
        Just(Declension::Fifth),
    ]
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Masculine), Just(Gender::Feminine), Just(Gender::Neuter)]
}

fn tantum() -> impl Strategy<Value = Tantum> {
    prop_oneof![Just(Tantum::Normal), Just(Tantum::PluraleTantum), Just(Tantum::SingulareTantum)]
}

fn conjugation() -> impl Strategy<Value = Conjugation> {
    prop_oneof![
        Just(Conjugation::First),
        Just(Conjugation::Second),
        Just(Conjugation::Third),
        Just(Conjugation::Fourth),
        Just(Conjugation::Irregular),
    ]
}

proptest! {
    #[test]
    fn nominal_tables_hold_their_invariants(
        lemma in "[a-zāēīōū]{1,8}(a|us|um|er|is|ū|ēs|x)",
        genitive in "[a-zāēīōū]{0,10}",
        declension in declension(),
        gender in gender(),
        parisyllabic in proptest::option::of(any::<bool>()),
        tantum in tantum(),
    ) {
        let table = decline(&lemma, declension, gender, &genitive, parisyllabic, None, tantum);
        prop_assert!(table.len() == 0 || table.len() == 12);
        for (tag, form) in &table {
            prop_assert!(!form.is_empty());
            prop_assert!(tag.belongs_to(Category::Noun));
        }
    }

    #[test]
    fn verb_tables_hold_their_invariants(
        stem in "[a-z]{1,6}",
        conjugation in conjugation(),
        overrides_json in prop_oneof![Just(""), Just(r#"{"pres_1sg": "x"}"#)],
    ) {
        let parts = format!("{stem}ō, {stem}āre, {stem}āvī, {stem}ātum");
        let overrides: Overrides = parse_overrides(overrides_json, Category::Verb).unwrap();
        let table = conjugate(&stem, conjugation, &parts, Some(&overrides));
        for (tag, form) in &table {
            prop_assert!(!form.trim().is_empty());
            prop_assert!(tag.belongs_to(Category::Verb));
        }
        for (tag, form) in overrides.iter() {
            prop_assert_eq!(table.get(tag), Some(form.as_str()));
        }
    }
}
