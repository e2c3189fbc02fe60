//! # Costar Core
//!
//! Actor resolution and credit-intersection engine: resolves two free-text
//! actor names against the TMDB people search, fetches each actor's
//! combined movie/TV filmography, and computes the productions they share,
//! annotated with per-actor character names and IMDb cross-reference
//! links.
//!
//! The crate exposes a single entry point, [`SearchEngine::search`], which
//! never fails hard: unresolvable names, malformed upstream payloads, and
//! disjoint filmographies all degrade to an absent media list while still
//! returning both actors for display.
//!
//! ## Architecture
//!
//! - [`provider`]: the [`MetadataProvider`] port and its reqwest-backed
//!   TMDB implementation
//! - [`config`]: engine configuration, injected at construction
//! - `matcher` / `resolver`: fuzzy name scoring and candidate
//!   disambiguation
//! - `credits` / `links` / `intersect`: filmography normalization, batch
//!   external-id enrichment, and the shared-credit assembly
//!
//! ## Examples
//!
//! ```no_run
//! use costar_core::{EngineConfig, SearchEngine};
//!
//! # async fn run() {
//! let engine = SearchEngine::from_config(EngineConfig::from_env());
//! let outcome = engine.search("Tom Hanks", "Tim Allen").await;
//! for credit in outcome.media.unwrap_or_default() {
//!     println!("{} ({})", credit.title, credit.year);
//! }
//! # }
//! ```

pub mod config;
pub mod provider;

mod credits;
mod engine;
mod intersect;
mod links;
mod matcher;
mod resolver;

pub use config::EngineConfig;
pub use engine::SearchEngine;
pub use provider::{MetadataProvider, ProviderError, TmdbProvider};

// Re-export the model types a caller needs to consume a search outcome.
pub use costar_model::{
    MediaKind, MissReason, PersonId, ResolvedActor, SearchOutcome,
    SharedCredit, TitleId, Year,
};
