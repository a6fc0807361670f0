use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::config::TmdbConfig;
use crate::tmdb::types::MovieListPage;

/// Client for the upstream movie-metadata API. Holds the base URL, the
/// per-request timeout, and the API key that goes onto every outbound call
/// as an `api_key` query parameter. Immutable after construction.
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, TmdbError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.baseurl.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub async fn most_popular(&self) -> Result<MovieListPage, TmdbError> {
        self.get_json("/movie/popular", &[]).await
    }

    /// Search by title. `include_adult=false` mirrors the upstream flag
    /// literally. When no title was given, the `query` parameter is omitted
    /// and upstream decides what an unqualified search returns.
    pub async fn search(&self, title: Option<&str>) -> Result<MovieListPage, TmdbError> {
        let mut params: Vec<(&str, &str)> = vec![("include_adult", "false")];
        if let Some(title) = title {
            params.push(("query", title));
        }
        self.get_json("/search/movie", &params).await
    }

    /// Fetch one movie by its identifier. The id is an opaque token; it gets
    /// percent-encoded into the path and upstream rejects whatever it
    /// doesn't recognize.
    pub async fn movie_detail(&self, movie_id: &str) -> Result<Value, TmdbError> {
        let path = format!("/movie/{}", urlencoding::encode(movie_id));
        self.get_json(&path, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TmdbError::Status(status));
        }

        Ok(response.json::<T>().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
}
