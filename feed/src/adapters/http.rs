//! HTTP feed source
//!
//! Talks to the uigen backend's feed endpoints. The backend owns ordering,
//! ranking and the time-window filter; this adapter only shuttles the
//! query parameters across and decodes the camelCase card JSON.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::domain::entities::{SortMode, TimeRange, Ui};
use crate::domain::ports::FeedSource;
use crate::error::SourceError;

/// Feed source backed by the uigen HTTP API
#[derive(Clone)]
pub struct HttpFeedSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFeedSource {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn page_url(&self, sort_mode: SortMode, offset: usize, limit: usize, range: TimeRange) -> String {
        format!(
            "{}/api/ui?mode={}&start={}&limit={}&timeRange={}",
            self.base_url, sort_mode, offset, limit, range
        )
    }

    fn home_url(&self) -> String {
        format!("{}/api/ui/home", self.base_url)
    }

    async fn get_cards(&self, url: &str) -> Result<Vec<Ui>, SourceError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SourceError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_page(
        &self,
        sort_mode: SortMode,
        offset: usize,
        limit: usize,
        time_range: TimeRange,
    ) -> Result<Vec<Ui>, SourceError> {
        let url = self.page_url(sort_mode, offset, limit, time_range);
        tracing::debug!(%url, "GET feed page");
        self.get_cards(&url).await
    }

    async fn fetch_home(&self) -> Result<Vec<Ui>, SourceError> {
        let url = self.home_url();
        tracing::debug!(%url, "GET home grid");
        self.get_cards(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let source = HttpFeedSource::new("http://localhost:3000/").unwrap();
        assert_eq!(source.home_url(), "http://localhost:3000/api/ui/home");
    }

    #[test]
    fn page_url_carries_the_full_query() {
        let source = HttpFeedSource::new("https://uigen.test").unwrap();
        assert_eq!(
            source.page_url(SortMode::MostLiked, 18, 9, TimeRange::LastWeek),
            "https://uigen.test/api/ui?mode=most_liked&start=18&limit=9&timeRange=7d"
        );
    }
}
