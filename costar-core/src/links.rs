//! Batch external-link enrichment.
//!
//! Resolves a set of provider IDs to IMDb title URLs concurrently. Each
//! lookup owns its ID and produces its own `(id, link)` slot, so a failed
//! or linkless lookup degrades to an empty string without touching the
//! rest of the batch.

use std::collections::HashMap;

use costar_model::{MediaKind, TitleId};
use futures::StreamExt;
use futures::stream;
use tracing::warn;

use crate::provider::MetadataProvider;

const IMDB_TITLE_BASE: &str = "https://www.imdb.com/title/";

/// Resolve cross-reference links for an already-intersected ID set.
///
/// In-flight lookups are bounded by `concurrency`; the join releases no
/// partial results, so a single slow lookup delays the whole batch.
pub(crate) async fn resolve_links<P: MetadataProvider>(
    provider: &P,
    concurrency: usize,
    kind: MediaKind,
    ids: &[TitleId],
) -> HashMap<TitleId, String> {
    stream::iter(ids.iter().copied())
        .map(|id| async move {
            let link = match provider.external_ids(kind, id).await {
                Ok(external) => external
                    .imdb_id
                    .filter(|imdb| !imdb.is_empty())
                    .map(|imdb| format!("{IMDB_TITLE_BASE}{imdb}/"))
                    .unwrap_or_default(),
                Err(err) => {
                    warn!(%kind, title = %id, error = %err, "external ids lookup failed");
                    String::new()
                }
            };
            (id, link)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await
}
