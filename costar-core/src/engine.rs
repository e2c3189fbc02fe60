//! Top-level search orchestration.

use costar_model::{
    Filmography, MediaKind, MissReason, ResolvedActor, SearchOutcome,
};
use tokio::join;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::provider::{MetadataProvider, TmdbProvider};
use crate::{credits, intersect, links, resolver};

/// The actor resolution and credit-intersection engine.
///
/// Owns an injected [`MetadataProvider`] and an [`EngineConfig`]; all
/// state is request-scoped, so one engine serves any number of concurrent
/// search calls.
#[derive(Debug)]
pub struct SearchEngine<P> {
    provider: P,
    config: EngineConfig,
}

impl SearchEngine<TmdbProvider> {
    /// Engine backed by the real TMDB API.
    pub fn from_config(config: EngineConfig) -> Self {
        let provider = TmdbProvider::new(&config);
        Self { provider, config }
    }
}

impl<P: MetadataProvider> SearchEngine<P> {
    pub fn new(provider: P, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Resolve two free-text actor names and compute their shared credits.
    ///
    /// Never fails hard: every degraded upstream interaction folds into an
    /// absent media list, and both actors come back for display either
    /// way. The two per-actor pipelines are independent and run
    /// concurrently.
    pub async fn search(&self, first: &str, second: &str) -> SearchOutcome {
        let (actor_a, actor_b) = join!(
            resolver::resolve(&self.provider, &self.config, first),
            resolver::resolve(&self.provider, &self.config, second),
        );
        debug!(?actor_a, ?actor_b, "resolved actors");

        let (credits_a, credits_b) = join!(
            credits::fetch_credits(&self.provider, actor_a.id),
            credits::fetch_credits(&self.provider, actor_b.id),
        );

        let outcome = self
            .intersect(actor_a, actor_b, credits_a, credits_b)
            .await;
        info!(
            shared = outcome.media.as_ref().map(Vec::len),
            miss = ?outcome.miss,
            "search complete"
        );
        outcome
    }

    async fn intersect(
        &self,
        actor_a: ResolvedActor,
        actor_b: ResolvedActor,
        credits_a: Option<Filmography>,
        credits_b: Option<Filmography>,
    ) -> SearchOutcome {
        let (Some(id_a), Some(id_b)) = (actor_a.id, actor_b.id) else {
            return SearchOutcome::miss(
                [actor_a, actor_b],
                MissReason::UnresolvedActor,
            );
        };

        // Same person entered twice, even if the display strings differed.
        if id_a == id_b {
            return SearchOutcome::miss([actor_a, actor_b], MissReason::SameActor);
        }

        let (Some(filmography_a), Some(filmography_b)) = (credits_a, credits_b)
        else {
            return SearchOutcome::miss(
                [actor_a, actor_b],
                MissReason::MissingCredits,
            );
        };

        let shared_movies =
            intersect::shared_ids(MediaKind::Movie, &filmography_a, &filmography_b);
        let shared_tv =
            intersect::shared_ids(MediaKind::Tv, &filmography_a, &filmography_b);
        if shared_movies.is_empty() && shared_tv.is_empty() {
            return SearchOutcome::miss(
                [actor_a, actor_b],
                MissReason::NoSharedCredits,
            );
        }

        // Only the genuinely shared IDs are enriched; the two batches hit
        // different endpoints per media kind.
        let (movie_links, tv_links) = join!(
            links::resolve_links(
                &self.provider,
                self.config.link_concurrency,
                MediaKind::Movie,
                &shared_movies,
            ),
            links::resolve_links(
                &self.provider,
                self.config.link_concurrency,
                MediaKind::Tv,
                &shared_tv,
            ),
        );

        let mut media = intersect::build_shared(
            MediaKind::Movie,
            &shared_movies,
            &filmography_a,
            &filmography_b,
            &movie_links,
        );
        media.extend(intersect::build_shared(
            MediaKind::Tv,
            &shared_tv,
            &filmography_a,
            &filmography_b,
            &tv_links,
        ));
        intersect::sort_by_year_desc(&mut media);

        SearchOutcome::found(media, [actor_a, actor_b])
    }
}
