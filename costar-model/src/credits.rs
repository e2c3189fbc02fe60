use std::collections::HashMap;

use crate::ids::TitleId;
use crate::year::Year;

/// One production credit in an actor's filmography.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditRecord {
    pub id: TitleId,
    pub title: String,
    pub year: Year,
    pub character: String,
    /// Episode count for TV credits, 0 for movies.
    pub episodes: u32,
}

/// A single actor's complete normalized filmography, keyed by provider ID.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filmography {
    pub movies: HashMap<TitleId, CreditRecord>,
    pub tv: HashMap<TitleId, CreditRecord>,
}

impl Filmography {
    pub fn insert_movie(&mut self, record: CreditRecord) {
        self.movies.insert(record.id, record);
    }

    /// Insert a TV credit. The first credit seen for a series wins; later
    /// entries for the same series (guest or secondary appearances) must
    /// not override the primary character.
    pub fn insert_tv(&mut self, record: CreditRecord) {
        self.tv.entry(record.id).or_insert(record);
    }
}
