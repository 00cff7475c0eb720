//! Static ending tables.
//!
//! Nominal rows follow `Case::ALL` order (nom, gen, dat, acc, abl, voc);
//! verbal rows run 1sg, 2sg, 3sg, 1pl, 2pl, 3pl.

use latina_protocol::Case;

/// Endings of one nominal paradigm.
#[derive(Debug)]
pub struct EndingSet {
    pub singular: [&'static str; 6],
    pub plural: [&'static str; 6],
    /// Singular cases that repeat the citation form instead of stem + ending.
    pub citation: &'static [Case],
}

pub const FIRST: EndingSet = EndingSet {
    singular: ["a", "ae", "ae", "am", "ā", "a"],
    plural: ["ae", "ārum", "īs", "ās", "īs", "ae"],
    citation: &[],
};

pub const SECOND_US: EndingSet = EndingSet {
    singular: ["us", "ī", "ō", "um", "ō", "e"],
    plural: ["ī", "ōrum", "īs", "ōs", "īs", "ī"],
    citation: &[],
};

pub const SECOND_UM: EndingSet = EndingSet {
    singular: ["um", "ī", "ō", "um", "ō", "um"],
    plural: ["a", "ōrum", "īs", "a", "īs", "a"],
    citation: &[],
};

pub const SECOND_R: EndingSet = EndingSet {
    singular: ["", "ī", "ō", "um", "ō", ""],
    plural: ["ī", "ōrum", "īs", "ōs", "īs", "ī"],
    citation: &[Case::Nominative, Case::Vocative],
};

pub const THIRD_COMMON: EndingSet = EndingSet {
    singular: ["", "is", "ī", "em", "e", ""],
    plural: ["ēs", "um", "ibus", "ēs", "ibus", "ēs"],
    citation: &[Case::Nominative, Case::Vocative],
};

pub const THIRD_COMMON_PARISYLLABIC: EndingSet = EndingSet {
    singular: ["", "is", "ī", "em", "ī", ""],
    plural: ["ēs", "ium", "ibus", "ēs", "ibus", "ēs"],
    citation: &[Case::Nominative, Case::Vocative],
};

pub const THIRD_NEUTER: EndingSet = EndingSet {
    singular: ["", "is", "ī", "", "e", ""],
    plural: ["a", "um", "ibus", "a", "ibus", "a"],
    citation: &[Case::Nominative, Case::Accusative, Case::Vocative],
};

pub const THIRD_NEUTER_PARISYLLABIC: EndingSet = EndingSet {
    singular: ["", "is", "ī", "", "e", ""],
    plural: ["ia", "ium", "ibus", "ia", "ibus", "ia"],
    citation: &[Case::Nominative, Case::Accusative, Case::Vocative],
};

pub const FOURTH: EndingSet = EndingSet {
    singular: ["us", "ūs", "uī", "um", "ū", "us"],
    plural: ["ūs", "uum", "ibus", "ūs", "ibus", "ūs"],
    citation: &[],
};

pub const FOURTH_NEUTER: EndingSet = EndingSet {
    singular: ["ū", "ūs", "ū", "ū", "ū", "ū"],
    plural: ["ua", "uum", "ibus", "ua", "ibus", "ua"],
    citation: &[],
};

pub const FIFTH: EndingSet = EndingSet {
    singular: ["ēs", "eī", "eī", "em", "ē", "ēs"],
    plural: ["ēs", "ērum", "ēbus", "ēs", "ēbus", "ēs"],
    citation: &[],
};

pub type Row = [&'static str; 6];

// Perfect system, shared by every conjugation.
pub const PERFECT_ACTIVE: Row = ["ī", "istī", "it", "imus", "istis", "ērunt"];
pub const PLUPERFECT_ACTIVE: Row = SUM_IMPERFECT;
pub const FUTURE_PERFECT_ACTIVE: Row = ["erō", "eris", "erit", "erimus", "eritis", "erint"];
pub const PERFECT_SUBJUNCTIVE_ACTIVE: Row = ["erim", "eris", "erit", "erimus", "eritis", "erint"];
pub const PLUPERFECT_SUBJUNCTIVE_ACTIVE: Row = ["issem", "issēs", "isset", "issēmus", "issētis", "issent"];

// The auxiliary of the periphrastic passive.
pub const SUM_PRESENT: Row = ["sum", "es", "est", "sumus", "estis", "sunt"];
pub const SUM_IMPERFECT: Row = ["eram", "erās", "erat", "erāmus", "erātis", "erant"];
pub const SUM_FUTURE: Row = ["erō", "eris", "erit", "erimus", "eritis", "erunt"];
pub const SUM_PRESENT_SUBJUNCTIVE: Row = ["sim", "sīs", "sit", "sīmus", "sītis", "sint"];
pub const SUM_IMPERFECT_SUBJUNCTIVE: Row = ["essem", "essēs", "esset", "essēmus", "essētis", "essent"];

// Present-system building blocks appended after a theme vowel.
pub const IMPERFECT_ACTIVE: Row = ["bam", "bās", "bat", "bāmus", "bātis", "bant"];
pub const IMPERFECT_PASSIVE: Row = ["bar", "bāris", "bātur", "bāmur", "bāminī", "bantur"];
pub const FUTURE_B_ACTIVE: Row = ["bō", "bis", "bit", "bimus", "bitis", "bunt"];
pub const FUTURE_B_PASSIVE: Row = ["bor", "beris", "bitur", "bimur", "biminī", "buntur"];
pub const FUTURE_E_ACTIVE: Row = ["am", "ēs", "et", "ēmus", "ētis", "ent"];
pub const FUTURE_E_PASSIVE: Row = ["ar", "ēris", "ētur", "ēmur", "ēminī", "entur"];
pub const A_ACTIVE: Row = ["am", "ās", "at", "āmus", "ātis", "ant"];
pub const A_PASSIVE: Row = ["ar", "āris", "ātur", "āmur", "āminī", "antur"];
/// ē-vowel personal endings: first-conjugation present subjunctive and
/// every imperfect subjunctive.
pub const E_ACTIVE: Row = ["em", "ēs", "et", "ēmus", "ētis", "ent"];
pub const E_PASSIVE: Row = ["er", "ēris", "ētur", "ēmur", "ēminī", "entur"];

/// Everything that varies by conjugation class in the present system.
#[derive(Debug)]
pub struct ConjugationPattern {
    pub present_active: Row,
    pub present_passive: Row,
    pub imperfect_theme: &'static str,
    pub future_theme: &'static str,
    pub future_active: Row,
    pub future_passive: Row,
    pub subjunctive_theme: &'static str,
    pub subjunctive_active: Row,
    pub subjunctive_passive: Row,
    /// 2sg, 2pl
    pub imperative_active: [&'static str; 2],
    pub imperative_passive: [&'static str; 2],
    /// Long and short theme of the present participle (`amāns, amantis`)
    /// and gerundive (`amandus`).
    pub participle_long: &'static str,
    pub participle_short: &'static str,
    pub present_passive_infinitive: &'static str,
}

pub const FIRST_CONJUGATION: ConjugationPattern = ConjugationPattern {
    present_active: ["ō", "ās", "at", "āmus", "ātis", "ant"],
    present_passive: ["or", "āris", "ātur", "āmur", "āminī", "antur"],
    imperfect_theme: "ā",
    future_theme: "ā",
    future_active: FUTURE_B_ACTIVE,
    future_passive: FUTURE_B_PASSIVE,
    subjunctive_theme: "",
    subjunctive_active: E_ACTIVE,
    subjunctive_passive: E_PASSIVE,
    imperative_active: ["ā", "āte"],
    imperative_passive: ["āre", "āminī"],
    participle_long: "ā",
    participle_short: "a",
    present_passive_infinitive: "ārī",
};

pub const SECOND_CONJUGATION: ConjugationPattern = ConjugationPattern {
    present_active: ["eō", "ēs", "et", "ēmus", "ētis", "ent"],
    present_passive: ["eor", "ēris", "ētur", "ēmur", "ēminī", "entur"],
    imperfect_theme: "ē",
    future_theme: "ē",
    future_active: FUTURE_B_ACTIVE,
    future_passive: FUTURE_B_PASSIVE,
    subjunctive_theme: "e",
    subjunctive_active: A_ACTIVE,
    subjunctive_passive: A_PASSIVE,
    imperative_active: ["ē", "ēte"],
    imperative_passive: ["ēre", "ēminī"],
    participle_long: "ē",
    participle_short: "e",
    present_passive_infinitive: "ērī",
};

pub const THIRD_CONJUGATION: ConjugationPattern = ConjugationPattern {
    present_active: ["ō", "is", "it", "imus", "itis", "unt"],
    present_passive: ["or", "eris", "itur", "imur", "iminī", "untur"],
    imperfect_theme: "ē",
    future_theme: "",
    future_active: FUTURE_E_ACTIVE,
    future_passive: FUTURE_E_PASSIVE,
    subjunctive_theme: "",
    subjunctive_active: A_ACTIVE,
    subjunctive_passive: A_PASSIVE,
    imperative_active: ["e", "ite"],
    imperative_passive: ["ere", "iminī"],
    participle_long: "ē",
    participle_short: "e",
    present_passive_infinitive: "ī",
};

/// Third conjugation `-iō` verbs (`capiō`): an `i` surfaces wherever the
/// fourth conjugation has one.
pub const THIRD_IO_CONJUGATION: ConjugationPattern = ConjugationPattern {
    present_active: ["iō", "is", "it", "imus", "itis", "iunt"],
    present_passive: ["ior", "eris", "itur", "imur", "iminī", "iuntur"],
    imperfect_theme: "iē",
    future_theme: "i",
    future_active: FUTURE_E_ACTIVE,
    future_passive: FUTURE_E_PASSIVE,
    subjunctive_theme: "i",
    subjunctive_active: A_ACTIVE,
    subjunctive_passive: A_PASSIVE,
    imperative_active: ["e", "ite"],
    imperative_passive: ["ere", "iminī"],
    participle_long: "iē",
    participle_short: "ie",
    present_passive_infinitive: "ī",
};

pub const FOURTH_CONJUGATION: ConjugationPattern = ConjugationPattern {
    present_active: ["iō", "īs", "it", "īmus", "ītis", "iunt"],
    present_passive: ["ior", "īris", "ītur", "īmur", "īminī", "iuntur"],
    imperfect_theme: "iē",
    future_theme: "i",
    future_active: FUTURE_E_ACTIVE,
    future_passive: FUTURE_E_PASSIVE,
    subjunctive_theme: "i",
    subjunctive_active: A_ACTIVE,
    subjunctive_passive: A_PASSIVE,
    imperative_active: ["ī", "īte"],
    imperative_passive: ["īre", "īminī"],
    participle_long: "iē",
    participle_short: "ie",
    present_passive_infinitive: "īrī",
};

/// Neuter of third-declension adjectives: like the parisyllabic noun set but
/// with ablative `-ī` (`omnī`).
pub const THIRD_ADJECTIVE_NEUTER: EndingSet = EndingSet {
    singular: ["", "is", "ī", "", "ī", ""],
    plural: ["ia", "ium", "ibus", "ia", "ibus", "ia"],
    citation: &[Case::Nominative, Case::Accusative, Case::Vocative],
};
