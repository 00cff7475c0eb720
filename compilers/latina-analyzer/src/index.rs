//! Compiles lexicon entries into the searchable form index.

use latina_morph::{clean_input, inflect, stems, EntryError, LexiconEntry};
use latina_protocol::{Category, CompiledLexicon, FormRecord, LemmaId, LemmaRecord, TagKind};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Bumped whenever the archived layout or the tag keys change.
pub const LEXICON_VERSION: u32 = 1;

/// An entry that could not be indexed.
#[derive(Debug, Error)]
#[error("entry {position} (`{lemma}`): {source}")]
pub struct EntryIssue {
    /// Position in the input list.
    pub position: usize,
    pub lemma: String,
    #[source]
    pub source: EntryError,
}

/// Generates every form of every entry and sorts the result by normalized
/// form. Bad entries are skipped and returned alongside the index.
///
/// Invariable words only get a lemma record; the analyzer falls back to
/// those when no inflected form matches.
pub fn compile_lexicon(entries: &[LexiconEntry]) -> (CompiledLexicon, Vec<EntryIssue>) {
    let mut lemmas = Vec::with_capacity(entries.len());
    let mut forms = Vec::new();
    let mut issues = Vec::new();

    for (position, entry) in entries.iter().enumerate() {
        let id = LemmaId::new(lemmas.len() as u32 + 1);

        if entry.is_invariable {
            let category = Category::from_label(&entry.part_of_speech)
                .map(|category| category.key().to_string())
                .unwrap_or_else(|| entry.part_of_speech.trim().to_lowercase());
            lemmas.push(LemmaRecord {
                id,
                lemma: stems::citation(&entry.latin),
                category,
                invariable: true,
            });
            continue;
        }

        let descriptor = match entry.to_descriptor() {
            Ok(descriptor) => descriptor,
            Err(source) => {
                warn!(position, lemma = %entry.latin, error = %source, "skipping lexicon entry");
                issues.push(EntryIssue {
                    position,
                    lemma: entry.latin.clone(),
                    source,
                });
                continue;
            }
        };

        let inflection = inflect(&descriptor);
        if inflection.forms.is_empty() {
            warn!(lemma = %inflection.lemma, "entry produced no forms");
        }

        let before = forms.len();
        for (tag, form) in inflection.attested() {
            // Participles are stored as their citation string; index each part.
            let pieces: Vec<&str> = if tag.kind() == TagKind::Participle {
                form.split(',').map(str::trim).filter(|p| !p.is_empty()).collect()
            } else {
                vec![form]
            };
            for piece in pieces {
                forms.push(FormRecord {
                    lemma: id,
                    form: piece.to_string(),
                    normalized: clean_input(piece),
                    tag: tag.to_string(),
                    flags: tag.flags().bits(),
                });
            }
        }
        debug!(lemma = %inflection.lemma, forms = forms.len() - before, "indexed entry");

        lemmas.push(LemmaRecord {
            id,
            lemma: inflection.lemma,
            category: inflection.category.key().to_string(),
            invariable: false,
        });
    }

    forms.sort_by(|a, b| a.normalized.cmp(&b.normalized).then(a.lemma.cmp(&b.lemma)));
    info!(
        lemmas = lemmas.len(),
        forms = forms.len(),
        skipped = issues.len(),
        "compiled lexicon"
    );

    let lexicon = CompiledLexicon {
        version: LEXICON_VERSION,
        lemmas,
        forms,
    };
    (lexicon, issues)
}
