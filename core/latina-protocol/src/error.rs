use thiserror::Error;

/// Failures raised while turning stored strings into protocol values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("invalid grammatical tag `{0}`")]
    InvalidTag(String),

    #[error("unrecognized inflection class `{code}` for a {category}")]
    UnrecognizedClass { code: String, category: String },

    #[error("unknown gender `{0}`")]
    UnknownGender(String),

    #[error("unknown part of speech `{0}`")]
    UnknownCategory(String),

    #[error("an entry cannot be both plurale tantum and singulare tantum")]
    ConflictingTantum,
}
