//! Free-text actor resolution.
//!
//! Fans out over the paginated people search, filters to acting
//! candidates with a strong name-score, and disambiguates homonyms by
//! exact-name preference and popularity. Resolution never errors; a query
//! that matches nothing yields an unresolved actor carrying the original
//! query string.

use std::cmp::Reverse;

use costar_model::{ActorCandidate, ResolvedActor};
use futures::future::join_all;
use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::matcher::{MATCH_THRESHOLD, name_match_score};
use crate::provider::MetadataProvider;

pub(crate) async fn resolve<P: MetadataProvider>(
    provider: &P,
    config: &EngineConfig,
    query: &str,
) -> ResolvedActor {
    let first_page = match provider.search_person(query, 1).await {
        Ok(page) => page,
        Err(err) => {
            warn!(query, error = %err, "person search failed");
            return ResolvedActor::unresolved(query);
        }
    };

    if first_page.results.is_empty() {
        return ResolvedActor::unresolved(query);
    }

    let mut results = first_page.results;

    // Remaining pages are independent of each other; fetch them
    // concurrently and join before filtering. The cap bounds worst-case
    // latency on queries matching thousands of people.
    let last_page = first_page.total_pages.min(config.max_search_pages);
    if last_page > 1 {
        let pages =
            join_all((2..=last_page).map(|page| provider.search_person(query, page)))
                .await;
        for page in pages {
            match page {
                Ok(mut page) => results.append(&mut page.results),
                Err(err) => {
                    warn!(query, error = %err, "search page fetch failed")
                }
            }
        }
    }

    let candidates = results.into_iter().map(|result| result.into_candidate());
    let survivors = score_candidates(query, candidates);
    if survivors.is_empty() {
        debug!(query, "no candidate passed the name-score threshold");
        return ResolvedActor::unresolved(query);
    }

    let pick = pick_candidate(query, &survivors);
    ResolvedActor {
        id: Some(pick.id),
        name: pick.name.clone(),
        image: pick
            .profile_path
            .as_deref()
            .map(|path| format!("{}{}", config.image_base, path)),
    }
}

/// Filter to acting candidates whose name-score clears the threshold,
/// sorted by popularity descending. The sort is stable, so equally popular
/// candidates keep their page order.
pub(crate) fn score_candidates(
    query: &str,
    candidates: impl Iterator<Item = ActorCandidate>,
) -> Vec<ActorCandidate> {
    let mut survivors: Vec<ActorCandidate> = candidates
        .filter(ActorCandidate::is_actor)
        .filter(|candidate| {
            let score = name_match_score(query, &candidate.name);
            debug!(query, candidate = %candidate.name, score, "scored candidate");
            score > MATCH_THRESHOLD
        })
        .collect();

    survivors.sort_by_key(|candidate| Reverse(OrderedFloat(candidate.popularity)));
    survivors
}

/// Pick the winner among popularity-sorted survivors.
///
/// A case-insensitive exact name match is preferred only for multi-token
/// queries; a bare first name "exactly matching" some candidate is not a
/// meaningful disambiguator, so single-token queries always take the most
/// popular survivor.
pub(crate) fn pick_candidate<'a>(
    query: &str,
    survivors: &'a [ActorCandidate],
) -> &'a ActorCandidate {
    let query = query.trim().to_lowercase();
    let multi_token = query.split_whitespace().count() > 1;

    if multi_token
        && let Some(exact) = survivors
            .iter()
            .find(|candidate| candidate.name.trim().to_lowercase() == query)
    {
        return exact;
    }

    &survivors[0]
}
