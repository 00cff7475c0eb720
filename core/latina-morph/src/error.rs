use latina_protocol::{Category, ProtocolError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    #[error("expected at least 3 principal parts, found {found}")]
    InsufficientPrincipalParts { found: usize },
}

/// Problems with a stored irregular-forms payload.
#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("override payload is not a JSON object of strings: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("`{tag}` is not a form a {category} can have")]
    UnknownTag { tag: String, category: Category },

    #[error("override for `{tag}` is empty")]
    EmptyForm { tag: String },
}

/// Why a lexicon entry could not become a descriptor.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("irregular forms of `{lemma}`: {source}")]
    Override {
        lemma: String,
        #[source]
        source: OverrideError,
    },

    #[error("`{lemma}` has no {field}")]
    Missing { lemma: String, field: &'static str },
}
