//! Shared-credit computation.
//!
//! Pure set logic over two filmographies: intersect provider IDs per media
//! kind, assemble [`SharedCredit`] entries in actor-input order, and order
//! the merged list by year descending.

use std::cmp::Reverse;
use std::collections::HashMap;

use costar_model::{Filmography, MediaKind, SharedCredit, TitleId};

/// IDs present in both maps of the given kind, in ascending ID order so
/// downstream assembly is deterministic.
pub(crate) fn shared_ids(
    kind: MediaKind,
    first: &Filmography,
    second: &Filmography,
) -> Vec<TitleId> {
    let (ours, theirs) = match kind {
        MediaKind::Movie => (&first.movies, &second.movies),
        MediaKind::Tv => (&first.tv, &second.tv),
    };

    let mut shared: Vec<TitleId> = ours
        .keys()
        .filter(|id| theirs.contains_key(id))
        .copied()
        .collect();
    shared.sort_unstable();
    shared
}

/// Build shared credits for one media kind.
///
/// Title and year come from the first actor's record; character names and
/// episode counts are carried for both actors in input order. IDs must be
/// the output of [`shared_ids`], so both lookups are infallible.
pub(crate) fn build_shared(
    kind: MediaKind,
    ids: &[TitleId],
    first: &Filmography,
    second: &Filmography,
    links: &HashMap<TitleId, String>,
) -> Vec<SharedCredit> {
    let (ours, theirs) = match kind {
        MediaKind::Movie => (&first.movies, &second.movies),
        MediaKind::Tv => (&first.tv, &second.tv),
    };

    ids.iter()
        .filter_map(|id| {
            let mine = ours.get(id)?;
            let other = theirs.get(id)?;
            Some(SharedCredit {
                kind,
                title: mine.title.clone(),
                year: mine.year.clone(),
                characters: [mine.character.clone(), other.character.clone()],
                episodes: match kind {
                    MediaKind::Movie => None,
                    MediaKind::Tv => Some([mine.episodes, other.episodes]),
                },
                link: links.get(id).cloned().unwrap_or_default(),
            })
        })
        .collect()
}

/// Stable sort by year descending; undated credits go last.
pub(crate) fn sort_by_year_desc(credits: &mut [SharedCredit]) {
    credits.sort_by_key(|credit| Reverse(credit.year.sort_key()));
}
