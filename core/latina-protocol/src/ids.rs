use core::fmt;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Identifies a headword inside one compiled lexicon. Ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct LemmaId(pub u32);

impl LemmaId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for LemmaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LemmaId#{}", self.0)
    }
}
