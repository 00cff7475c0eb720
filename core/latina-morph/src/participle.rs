//! Participles and infinitives.
//!
//! Participles are stored as their citation string (`amāns, amantis`;
//! `amātus, amāta, amātum`); declining them is left to the adjective engine.

use latina_protocol::{
    Conjugation, GrammaticalTag, InfinitiveKind, LexicalDescriptor, Overrides, ParadigmTable, ParticipleKind,
    TagKind,
};
use tracing::{debug, warn};

use crate::overrides::apply_overrides;
use crate::stems::PrincipalParts;
use crate::verb::{pattern, SumVerb};

fn parse_parts(lemma: &str, principal_parts: &str) -> Option<PrincipalParts> {
    match PrincipalParts::parse(principal_parts) {
        Ok(parts) => Some(parts),
        Err(err) => {
            warn!(%lemma, %principal_parts, error = %err, "no verbal nouns without principal parts");
            None
        }
    }
}

/// `pres_act`, `perf_pass`, `fut_act` and `fut_pass` (the gerundive).
/// Forms built on the supine are omitted when the fourth part is absent.
pub fn participles(lemma: &str, conjugation: Conjugation, principal_parts: &str) -> ParadigmTable {
    let Some(parts) = parse_parts(lemma, principal_parts) else {
        return ParadigmTable::new();
    };
    let mut table = ParadigmTable::new();

    if let Some(pattern) = pattern(conjugation, &parts) {
        let stem = parts.present_stem();
        table.insert(
            GrammaticalTag::Participle(ParticipleKind::PresentActive),
            format!("{stem}{long}ns, {stem}{short}ntis", long = pattern.participle_long, short = pattern.participle_short),
        );
        table.insert(
            GrammaticalTag::Participle(ParticipleKind::FuturePassive),
            format!("{stem}{short}ndus, {stem}{short}nda, {stem}{short}ndum", short = pattern.participle_short),
        );
        if let Some(supine) = parts.supine_stem() {
            table.insert(
                GrammaticalTag::Participle(ParticipleKind::PerfectPassive),
                format!("{supine}us, {supine}a, {supine}um"),
            );
        }
    }
    if let Some(supine) = parts.supine_stem() {
        table.insert(
            GrammaticalTag::Participle(ParticipleKind::FutureActive),
            format!("{supine}ūrus, {supine}ūra, {supine}ūrum"),
        );
    }

    debug!(%lemma, forms = table.len(), "generated participles");
    table
}

/// The five infinitives. Irregular verbs get only the forms their principal
/// parts give away.
pub fn infinitives(lemma: &str, conjugation: Conjugation, principal_parts: &str) -> ParadigmTable {
    let Some(parts) = parse_parts(lemma, principal_parts) else {
        return ParadigmTable::new();
    };
    let mut table = ParadigmTable::new();
    let regular = pattern(conjugation, &parts);

    if regular.is_some() || SumVerb::detect(&parts).is_some() {
        table.insert(GrammaticalTag::Infinitive(InfinitiveKind::PresentActive), parts.infinitive.as_str());
        table.insert(
            GrammaticalTag::Infinitive(InfinitiveKind::PerfectActive),
            format!("{}isse", parts.perfect_stem()),
        );
    }
    if let Some(pattern) = regular {
        table.insert(
            GrammaticalTag::Infinitive(InfinitiveKind::PresentPassive),
            format!("{}{}", parts.present_stem(), pattern.present_passive_infinitive),
        );
    }
    if let Some(supine) = parts.supine_stem() {
        if regular.is_some() {
            table.insert(
                GrammaticalTag::Infinitive(InfinitiveKind::PerfectPassive),
                format!("{supine}us esse"),
            );
        }
        table.insert(
            GrammaticalTag::Infinitive(InfinitiveKind::FutureActive),
            format!("{supine}ūrus esse"),
        );
    }

    debug!(%lemma, forms = table.len(), "generated infinitives");
    table
}

fn with_overrides(table: ParadigmTable, overrides: &Overrides) -> ParadigmTable {
    if overrides.is_empty() {
        table
    } else {
        apply_overrides(&table, overrides)
    }
}

fn verb_class(entry: &LexicalDescriptor) -> Option<Conjugation> {
    let conjugation = entry.class.and_then(|class| class.conjugation());
    if conjugation.is_none() {
        warn!(lemma = %entry.lemma, class = ?entry.class, "not a verb");
    }
    conjugation
}

/// [`participles`] for a descriptor, with its participle overrides.
pub fn verb_participles(entry: &LexicalDescriptor) -> ParadigmTable {
    let Some(conjugation) = verb_class(entry) else {
        return ParadigmTable::new();
    };
    with_overrides(
        participles(&entry.lemma, conjugation, &entry.stem_source),
        &entry.overrides.restricted_to(&[TagKind::Participle]),
    )
}

/// [`infinitives`] for a descriptor, with its infinitive overrides.
pub fn verb_infinitives(entry: &LexicalDescriptor) -> ParadigmTable {
    let Some(conjugation) = verb_class(entry) else {
        return ParadigmTable::new();
    };
    with_overrides(
        infinitives(&entry.lemma, conjugation, &entry.stem_source),
        &entry.overrides.restricted_to(&[TagKind::Infinitive]),
    )
}
