//! Engine configuration.
//!
//! All knobs are injected at construction time; nothing in the engine
//! reads the process environment ad hoc. [`EngineConfig::from_env`] exists
//! only as a convenience for binaries that keep the key in `TMDB_API_KEY`.

/// TMDB v3 REST base URL.
pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// Image host prefix for profile-sized portraits.
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w185";

/// Upper bound on search result pages fetched for one query, including the
/// first. Bounds worst-case latency for queries matching thousands of
/// people.
pub const MAX_SEARCH_PAGES: u32 = 12;

/// Default bound on concurrent in-flight external-id lookups.
pub const LINK_CONCURRENCY: usize = 8;

/// Configuration for [`crate::SearchEngine`] and [`crate::TmdbProvider`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// TMDB v3 API key, sent as a query parameter on every request.
    pub api_key: String,
    pub api_base: String,
    pub image_base: String,
    pub max_search_pages: u32,
    pub link_concurrency: usize,
}

impl EngineConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: TMDB_API_BASE.to_owned(),
            image_base: TMDB_IMAGE_BASE.to_owned(),
            max_search_pages: MAX_SEARCH_PAGES,
            link_concurrency: LINK_CONCURRENCY,
        }
    }

    /// Read the API key from `TMDB_API_KEY`, defaulting to an empty key.
    ///
    /// An empty key is not an error here; the upstream rejects it with an
    /// auth failure that degrades to an unresolved actor like any other
    /// fetch failure.
    pub fn from_env() -> Self {
        Self::new(std::env::var("TMDB_API_KEY").unwrap_or_else(|_| String::new()))
    }
}
