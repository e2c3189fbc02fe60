//! Wire types for the upstream metadata API.
//!
//! Every field the upstream may omit carries `#[serde(default)]` so the
//! engine only ever sees typed values with documented defaults and never
//! inspects raw JSON.

use costar_model::{ActorCandidate, PersonId};
use serde::{Deserialize, Serialize};

/// One page of `GET /search/person` results.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSearchPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<PersonResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonResult {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl PersonResult {
    pub fn into_candidate(self) -> ActorCandidate {
        ActorCandidate {
            id: PersonId(self.id),
            name: self.name,
            popularity: self.popularity,
            department: self.known_for_department,
            profile_path: self.profile_path,
        }
    }
}

/// `GET /person/{id}/combined_credits` body.
///
/// `cast` stays optional: a payload without it means the person has no
/// usable filmography, which is distinct from an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct CombinedCreditsResponse {
    #[serde(default)]
    pub cast: Option<Vec<CastCredit>>,
}

/// One cast entry of a combined-credits response.
///
/// Movies carry `title`/`release_date`, TV entries `name`/`first_air_date`
/// and `episode_count`; anything else is ignored by the fetcher.
#[derive(Debug, Clone, Deserialize)]
pub struct CastCredit {
    pub id: u64,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub episode_count: Option<u32>,
}

/// `GET /{movie|tv}/{id}/external_ids` body, reduced to the one
/// cross-reference the engine links to.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonSearchQuery<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub page: u32,
    pub include_adult: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiKeyQuery<'a> {
    pub api_key: &'a str,
}
