//! In-memory [`MetadataProvider`] fake for driving the engine end-to-end
//! without a network.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use costar_core::provider::types::{
    CastCredit, CombinedCreditsResponse, ExternalIds, PersonResult,
    PersonSearchPage,
};
use costar_core::{MediaKind, MetadataProvider, PersonId, ProviderError, TitleId};

#[derive(Debug, Default)]
pub struct FakeProvider {
    pages: HashMap<(String, u32), Vec<PersonResult>>,
    total_pages: HashMap<String, u32>,
    credits: HashMap<PersonId, Vec<CastCredit>>,
    imdb: HashMap<(MediaKind, TitleId), String>,
    failing_titles: HashSet<(MediaKind, TitleId)>,
    // Shared handles so tests can keep observing after the provider moves
    // into the engine.
    pub search_calls: Arc<Mutex<Vec<(String, u32)>>>,
    pub external_calls: Arc<Mutex<Vec<(MediaKind, TitleId)>>>,
}

impl FakeProvider {
    pub fn add_search_page(
        &mut self,
        query: &str,
        page: u32,
        total_pages: u32,
        results: Vec<PersonResult>,
    ) {
        self.pages.insert((query.to_owned(), page), results);
        self.total_pages.insert(query.to_owned(), total_pages);
    }

    pub fn add_credits(&mut self, person: PersonId, cast: Vec<CastCredit>) {
        self.credits.insert(person, cast);
    }

    pub fn add_imdb(&mut self, kind: MediaKind, title: TitleId, imdb: &str) {
        self.imdb.insert((kind, title), imdb.to_owned());
    }

    pub fn fail_external(&mut self, kind: MediaKind, title: TitleId) {
        self.failing_titles.insert((kind, title));
    }
}

pub fn pages_fetched(
    calls: &Arc<Mutex<Vec<(String, u32)>>>,
    query: &str,
) -> Vec<u32> {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter(|(q, _)| q == query)
        .map(|&(_, page)| page)
        .collect()
}

#[async_trait]
impl MetadataProvider for FakeProvider {
    async fn search_person(
        &self,
        query: &str,
        page: u32,
    ) -> Result<PersonSearchPage, ProviderError> {
        self.search_calls
            .lock()
            .unwrap()
            .push((query.to_owned(), page));

        let results = self
            .pages
            .get(&(query.to_owned(), page))
            .cloned()
            .unwrap_or_default();
        Ok(PersonSearchPage {
            page,
            total_pages: self.total_pages.get(query).copied().unwrap_or(1),
            results,
        })
    }

    async fn combined_credits(
        &self,
        person: PersonId,
    ) -> Result<CombinedCreditsResponse, ProviderError> {
        Ok(CombinedCreditsResponse {
            cast: self.credits.get(&person).cloned(),
        })
    }

    async fn external_ids(
        &self,
        kind: MediaKind,
        title: TitleId,
    ) -> Result<ExternalIds, ProviderError> {
        self.external_calls.lock().unwrap().push((kind, title));

        if self.failing_titles.contains(&(kind, title)) {
            return Err(ProviderError::ApiError(
                "backend failure injected by test".to_owned(),
            ));
        }
        Ok(ExternalIds {
            imdb_id: self.imdb.get(&(kind, title)).cloned(),
        })
    }
}

pub fn person(id: u64, name: &str, popularity: f64) -> PersonResult {
    PersonResult {
        id,
        name: name.to_owned(),
        popularity,
        known_for_department: Some("Acting".to_owned()),
        profile_path: Some(format!("/profile-{id}.jpg")),
    }
}

pub fn movie_credit(id: u64, title: &str, character: &str, date: &str) -> CastCredit {
    CastCredit {
        id,
        media_type: "movie".to_owned(),
        title: Some(title.to_owned()),
        name: None,
        character: Some(character.to_owned()),
        release_date: Some(date.to_owned()),
        first_air_date: None,
        episode_count: None,
    }
}

pub fn tv_credit(
    id: u64,
    name: &str,
    character: &str,
    date: &str,
    episodes: u32,
) -> CastCredit {
    CastCredit {
        id,
        media_type: "tv".to_owned(),
        title: None,
        name: Some(name.to_owned()),
        character: Some(character.to_owned()),
        release_date: None,
        first_air_date: Some(date.to_owned()),
        episode_count: Some(episodes),
    }
}
