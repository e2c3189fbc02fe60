use std::fmt;

use async_trait::async_trait;
use costar_model::{MediaKind, PersonId, TitleId};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::EngineConfig;

use super::types::{
    ApiKeyQuery, CombinedCreditsResponse, ExternalIds, PersonSearchPage,
    PersonSearchQuery,
};
use super::{MetadataProvider, ProviderError};

/// Reqwest-backed TMDB v3 client.
///
/// Holds one connection pool for the whole request; the API key travels as
/// a query parameter on every call.
pub struct TmdbProvider {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl fmt::Debug for TmdbProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbProvider")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl TmdbProvider {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
        }
    }

    async fn get_json<Q, T>(&self, url: &str, query: &Q) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(ProviderError::from);
        }

        #[derive(Debug, Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| {
                format!("TMDB request failed with status {}", status)
            });

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    async fn search_person(
        &self,
        query: &str,
        page: u32,
    ) -> Result<PersonSearchPage, ProviderError> {
        let params = PersonSearchQuery {
            api_key: &self.api_key,
            query,
            page: page.max(1),
            include_adult: false,
        };

        self.get_json(&format!("{}/search/person", self.api_base), &params)
            .await
    }

    async fn combined_credits(
        &self,
        person: PersonId,
    ) -> Result<CombinedCreditsResponse, ProviderError> {
        self.get_json(
            &format!("{}/person/{}/combined_credits", self.api_base, person),
            &ApiKeyQuery {
                api_key: &self.api_key,
            },
        )
        .await
    }

    async fn external_ids(
        &self,
        kind: MediaKind,
        title: TitleId,
    ) -> Result<ExternalIds, ProviderError> {
        self.get_json(
            &format!("{}/{}/{}/external_ids", self.api_base, kind, title),
            &ApiKeyQuery {
                api_key: &self.api_key,
            },
        )
        .await
    }
}
