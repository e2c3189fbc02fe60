//! Upstream metadata provider port.
//!
//! The engine talks to exactly one external collaborator, a
//! metadata-and-credits HTTP API, through the [`MetadataProvider`] trait.
//! Production code uses the reqwest-backed [`TmdbProvider`]; tests swap in
//! an in-memory fake.

mod tmdb;
pub mod types;

pub use tmdb::TmdbProvider;

use async_trait::async_trait;
use costar_model::{MediaKind, PersonId, TitleId};

use types::{CombinedCreditsResponse, ExternalIds, PersonSearchPage};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Access to the people-search, combined-credits, and external-ids
/// endpoints of the upstream metadata API.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch one page of people-search results for a free-text query.
    async fn search_person(
        &self,
        query: &str,
        page: u32,
    ) -> Result<PersonSearchPage, ProviderError>;

    /// Fetch a person's combined movie and TV credit list.
    async fn combined_credits(
        &self,
        person: PersonId,
    ) -> Result<CombinedCreditsResponse, ProviderError>;

    /// Fetch the external cross-reference identifiers for one production.
    async fn external_ids(
        &self,
        kind: MediaKind,
        title: TitleId,
    ) -> Result<ExternalIds, ProviderError>;
}
