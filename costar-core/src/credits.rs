//! Filmography fetching and normalization.
//!
//! Turns a combined-credits payload into a [`Filmography`]: self-appearance
//! and characterless entries are dropped, the rest partitioned into movie
//! and TV maps keyed by provider ID.

use costar_model::{CreditRecord, Filmography, PersonId, TitleId, Year};
use tracing::warn;

use crate::provider::MetadataProvider;
use crate::provider::types::CastCredit;

/// Fetch and normalize one actor's filmography.
///
/// `None` propagates unresolved-actor state; any provider failure or a
/// payload without a cast list degrades to `None` as well.
pub(crate) async fn fetch_credits<P: MetadataProvider>(
    provider: &P,
    actor: Option<PersonId>,
) -> Option<Filmography> {
    let id = actor?;

    let response = match provider.combined_credits(id).await {
        Ok(response) => response,
        Err(err) => {
            warn!(person = %id, error = %err, "combined credits fetch failed");
            return None;
        }
    };

    Some(build_filmography(response.cast?))
}

pub(crate) fn build_filmography(cast: Vec<CastCredit>) -> Filmography {
    let mut filmography = Filmography::default();

    for entry in cast {
        let Some(character) =
            entry.character.filter(|name| !name.trim().is_empty())
        else {
            continue;
        };
        if is_self_appearance(&character) {
            continue;
        }

        match entry.media_type.as_str() {
            "movie" => filmography.insert_movie(CreditRecord {
                id: TitleId(entry.id),
                title: entry.title.unwrap_or_default(),
                year: Year::from_date(entry.release_date.as_deref()),
                character,
                episodes: 0,
            }),
            "tv" => filmography.insert_tv(CreditRecord {
                id: TitleId(entry.id),
                title: entry.name.unwrap_or_default(),
                year: Year::from_date(entry.first_air_date.as_deref()),
                character,
                episodes: entry.episode_count.unwrap_or(0),
            }),
            _ => {}
        }
    }

    filmography
}

/// Self-appearance and documentary entries pollute the shared-filmography
/// signal and are excluded outright.
fn is_self_appearance(character: &str) -> bool {
    let character = character.to_lowercase();
    ["himself", "herself", "self"]
        .iter()
        .any(|marker| character.contains(marker))
}
