use std::fmt;

/// Strongly typed TMDB person identifier.
///
/// Assigned by the upstream API and stable across requests; used as the
/// lookup key for combined-credit fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u64);

impl PersonId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed TMDB production identifier (movie or TV series).
///
/// The join key for filmography intersection; unique within each media
/// kind, so a movie and a series may share the same numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleId(pub u64);

impl TitleId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
