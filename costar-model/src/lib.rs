//! Core data model definitions shared across costar crates.
//!
//! Everything in here is request-scoped and plain data: the engine builds
//! these values fresh for each search call and discards them once the
//! result has been handed back to the caller. Network and orchestration
//! concerns live in `costar-core`.
#![allow(missing_docs)]

pub mod credits;
pub mod ids;
pub mod media_type;
pub mod person;
pub mod shared;
pub mod year;

// Intentionally curated re-exports for downstream consumers.
pub use credits::{CreditRecord, Filmography};
pub use ids::{PersonId, TitleId};
pub use media_type::MediaKind;
pub use person::{ActorCandidate, ResolvedActor};
pub use shared::{MissReason, SearchOutcome, SharedCredit};
pub use year::Year;
