use latina_morph::clean_input;
use latina_protocol::{ArchivedCompiledLexicon, ArchivedLemmaRecord, GrammaticalTag, LemmaId, MorphFlags};
use serde::Serialize;

/// Confidence of a match against an invariable headword rather than a
/// generated form.
pub const INVARIABLE_CONFIDENCE: f32 = 0.9;

/// One reading of a surface form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub lemma_id: LemmaId,
    pub lemma: String,
    pub category: String,
    /// The indexed form, macrons included.
    pub form: String,
    /// `None` for invariable words.
    pub tag: Option<GrammaticalTag>,
    pub flags: MorphFlags,
    pub confidence: f32,
}

fn lemma_record(lexicon: &ArchivedCompiledLexicon, id: u32) -> Option<&ArchivedLemmaRecord> {
    // Ids are assigned sequentially from 1; fall back to a scan otherwise.
    lexicon
        .lemmas
        .get((id as usize).wrapping_sub(1))
        .filter(|lemma| lemma.id.0 == id)
        .or_else(|| lexicon.lemmas.iter().find(|lemma| lemma.id.0 == id))
}

/// Every reading of `text`: all generated forms whose normalized spelling
/// matches, or failing that, matching invariable headwords.
pub fn resolve(lexicon: &ArchivedCompiledLexicon, text: &str) -> Vec<Analysis> {
    let key = clean_input(text);
    if key.is_empty() {
        return Vec::new();
    }

    let forms = lexicon.forms.as_slice();
    let start = forms.partition_point(|record| record.normalized.as_str() < key.as_str());
    let analyses: Vec<Analysis> = forms[start..]
        .iter()
        .take_while(|record| record.normalized.as_str() == key)
        .filter_map(|record| {
            let lemma = lemma_record(lexicon, record.lemma.0)?;
            Some(Analysis {
                lemma_id: LemmaId(record.lemma.0),
                lemma: lemma.lemma.as_str().to_string(),
                category: lemma.category.as_str().to_string(),
                form: record.form.as_str().to_string(),
                tag: record.tag.as_str().parse().ok(),
                flags: MorphFlags::from_bits_truncate(record.flags),
                confidence: 1.0,
            })
        })
        .collect();
    if !analyses.is_empty() {
        return analyses;
    }

    lexicon
        .lemmas
        .iter()
        .filter(|lemma| lemma.invariable && clean_input(lemma.lemma.as_str()) == key)
        .map(|lemma| Analysis {
            lemma_id: LemmaId(lemma.id.0),
            lemma: lemma.lemma.as_str().to_string(),
            category: lemma.category.as_str().to_string(),
            form: lemma.lemma.as_str().to_string(),
            tag: None,
            flags: MorphFlags::empty(),
            confidence: INVARIABLE_CONFIDENCE,
        })
        .collect()
}
