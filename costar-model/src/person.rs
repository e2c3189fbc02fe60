use crate::ids::PersonId;

/// One entry from a people-search result page.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorCandidate {
    pub id: PersonId,
    pub name: String,
    /// Relative notability score from the upstream API, higher is more
    /// notable. Used only to break ties between surviving candidates.
    pub popularity: f64,
    /// The department the person is primarily known for; only `Acting`
    /// candidates are eligible for resolution.
    pub department: Option<String>,
    pub profile_path: Option<String>,
}

impl ActorCandidate {
    pub fn is_actor(&self) -> bool {
        self.department.as_deref() == Some("Acting")
    }
}

/// The canonical identity picked for one free-text actor query.
///
/// Resolution never fails hard: an unresolved query keeps `id` absent and
/// carries the original query string as `name` so callers can still
/// display it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedActor {
    pub id: Option<PersonId>,
    pub name: String,
    /// Full profile image URL, when the matched candidate has one.
    pub image: Option<String>,
}

impl ResolvedActor {
    /// The fallback identity for a query that matched nothing.
    pub fn unresolved(query: impl Into<String>) -> Self {
        Self {
            id: None,
            name: query.into(),
            image: None,
        }
    }
}
