use crate::media_type::MediaKind;
use crate::person::ResolvedActor;
use crate::year::Year;

/// A production present in both actors' filmographies under the same
/// provider ID.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedCredit {
    pub kind: MediaKind,
    pub title: String,
    pub year: Year,
    /// Character names in actor-input order.
    pub characters: [String; 2],
    /// Per-actor episode counts, TV credits only.
    pub episodes: Option<[u32; 2]>,
    /// External cross-reference URL, empty when the upstream has none.
    pub link: String,
}

/// Why a search produced no shared-credit list.
///
/// The caller contract folds all of these into an absent media list; they
/// stay distinguishable here so a future caller can report them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissReason {
    /// At least one query matched no eligible candidate.
    UnresolvedActor,
    /// Both queries resolved to the same person.
    SameActor,
    /// A resolved actor's filmography could not be fetched.
    MissingCredits,
    /// Two valid, distinct filmographies with no overlap.
    NoSharedCredits,
}

/// Top-level result of one search call.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Shared credits sorted by year descending, or absent when the search
    /// could not produce a meaningful intersection.
    pub media: Option<Vec<SharedCredit>>,
    /// Both actors in input order, always present for display.
    pub actors: [ResolvedActor; 2],
    pub miss: Option<MissReason>,
}

impl SearchOutcome {
    pub fn found(media: Vec<SharedCredit>, actors: [ResolvedActor; 2]) -> Self {
        Self {
            media: Some(media),
            actors,
            miss: None,
        }
    }

    pub fn miss(actors: [ResolvedActor; 2], reason: MissReason) -> Self {
        Self {
            media: None,
            actors,
            miss: Some(reason),
        }
    }
}
