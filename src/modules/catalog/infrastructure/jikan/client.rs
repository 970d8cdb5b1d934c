use async_trait::async_trait;
use tracing::info;

use super::dto::{JikanMangaListResponse, JikanMangaResponse, JikanSearchParams};
use super::mapper::JikanMapper;
use crate::modules::catalog::application::{CatalogClient, CatalogManga};
use crate::modules::catalog::infrastructure::http_client::RateLimitClient;
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};

/// Jikan's maximum page size
const MAX_LIMIT: usize = 25;

pub struct JikanCatalogClient {
    http: RateLimitClient,
    base_url: String,
}

impl JikanCatalogClient {
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        Ok(Self {
            http: RateLimitClient::for_jikan()?,
            base_url: config.jikan_base_url.clone(),
        })
    }
}

#[async_trait]
impl CatalogClient for JikanCatalogClient {
    async fn fetch_manga(&self, mal_id: i32) -> AppResult<Option<CatalogManga>> {
        let url = format!("{}/manga/{}", self.base_url, mal_id);

        match self.http.get_json::<JikanMangaResponse, _>(&url, &[] as &[(&str, &str)]).await {
            Ok(response) => Ok(Some(JikanMapper::to_catalog(response.data))),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<CatalogManga>> {
        let params = JikanSearchParams {
            q: query.to_string(),
            limit: limit.clamp(1, MAX_LIMIT),
            order_by: "popularity",
            sfw: true,
        };

        let url = format!("{}/manga", self.base_url);
        let response: JikanMangaListResponse = self.http.get_json(&url, &params).await?;

        info!("Jikan search '{}' returned {} results", query, response.data.len());
        Ok(response
            .data
            .into_iter()
            .map(JikanMapper::to_catalog)
            .collect())
    }
}
