//! Shared vocabulary of the Latina engine: grammatical categories, tags,
//! paradigm tables, lexical descriptors and the compiled-lexicon records.

pub mod error;
pub mod ids;
pub mod morphology;
pub mod tag;

// Re-export core types for convenience
pub use error::ProtocolError;
pub use ids::LemmaId;
pub use morphology::*;
pub use tag::{GrammaticalTag, InfinitiveKind, ParticipleKind, TagKind};

pub mod model;
pub use model::*;
