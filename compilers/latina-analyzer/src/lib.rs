pub mod index;
pub mod morphology;
pub mod parser;
pub mod token;

pub use index::{compile_lexicon, EntryIssue, LEXICON_VERSION};
pub use morphology::{resolve, Analysis, INVARIABLE_CONFIDENCE};
pub use parser::tokenize;
pub use token::{Span, Token, TokenKind};

use latina_protocol::{ArchivedCompiledLexicon, CompiledLexicon};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("compiled lexicon failed validation: {0}")]
    Corrupt(String),

    #[error("compiled lexicon version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },
}

/// A token together with its readings. Periphrastic phrases (`amātum sum`)
/// come back as one token spanning both words.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedToken<'t> {
    pub span: Span,
    pub text: &'t str,
    pub kind: TokenKind,
    pub analyses: Vec<Analysis>,
}

/// Read-only lookups over an archived lexicon.
pub struct Analyzer<'a> {
    lexicon: &'a ArchivedCompiledLexicon,
}

impl<'a> Analyzer<'a> {
    pub fn new(lexicon: &'a ArchivedCompiledLexicon) -> Self {
        Self { lexicon }
    }

    /// Validates `bytes` as an archived [`CompiledLexicon`] of the current
    /// version.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, AnalyzerError> {
        let lexicon = rkyv::check_archived_root::<CompiledLexicon>(bytes)
            .map_err(|err| AnalyzerError::Corrupt(err.to_string()))?;
        if lexicon.version != LEXICON_VERSION {
            return Err(AnalyzerError::VersionMismatch {
                found: lexicon.version,
                expected: LEXICON_VERSION,
            });
        }
        Ok(Self::new(lexicon))
    }

    pub fn lexicon(&self) -> &'a ArchivedCompiledLexicon {
        self.lexicon
    }

    pub fn analyze_word(&self, form: &str) -> Vec<Analysis> {
        resolve(self.lexicon, form)
    }

    pub fn analyze_text<'t>(&self, text: &'t str) -> Vec<AnalyzedToken<'t>> {
        let tokens = tokenize(text);
        let mut result = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            if token.kind != TokenKind::Word {
                result.push(AnalyzedToken {
                    span: token.span,
                    text: token.text,
                    kind: token.kind,
                    analyses: Vec::new(),
                });
                i += 1;
                continue;
            }

            if let Some(next) = tokens.get(i + 1).filter(|next| next.kind == TokenKind::Word) {
                let gap = &text[token.span.end..next.span.start];
                if gap.chars().all(char::is_whitespace) {
                    let phrase = format!("{} {}", token.text, next.text);
                    let analyses = self.analyze_word(&phrase);
                    if !analyses.is_empty() {
                        let span = token.span.join(next.span);
                        debug!(%phrase, readings = analyses.len(), "matched periphrastic phrase");
                        result.push(AnalyzedToken {
                            span,
                            text: &text[span.start..span.end],
                            kind: TokenKind::Word,
                            analyses,
                        });
                        i += 2;
                        continue;
                    }
                }
            }

            result.push(AnalyzedToken {
                span: token.span,
                text: token.text,
                kind: token.kind,
                analyses: self.analyze_word(token.text),
            });
            i += 1;
        }

        result
    }
}
