//! HTTP client for the paginated collection and single-record endpoints.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use maester_core::{Book, Category, Character, House, PageIndex};

use crate::error::ApiError;

const DEFAULT_BASE_URL: &str = "https://www.anapioficeandfire.com/api";
const DEFAULT_PAGE_SIZE: u32 = 5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the remote API.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL up to (not including) the category path segment.
    pub base_url: String,
    /// Records per remote page.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Shared client for all remote fetches.
///
/// One `reqwest::Client` is reused across requests; every call carries a
/// bounded timeout so a hung request cannot wedge a fetch task forever.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        // Validate the base eagerly so a bad MAESTER_BASE_URL fails at
        // startup instead of on the first fetch.
        let trimmed = config.base_url.trim_end_matches('/');
        Url::parse(trimmed)?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
            page_size: config.page_size,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection URL for one remote page of a category. The wire page
    /// parameter is 1-based.
    pub fn page_url(&self, category: Category, page: PageIndex) -> String {
        format!(
            "{}/{}?page={}&pageSize={}",
            self.base_url,
            category,
            page.wire_page(),
            self.page_size
        )
    }

    /// Fetches one page of houses. A page past the end of the remote data
    /// decodes as an empty list.
    pub async fn fetch_houses(&self, page: PageIndex) -> Result<Vec<House>, ApiError> {
        self.get_json(&self.page_url(Category::Houses, page)).await
    }

    /// Fetches one page of characters.
    pub async fn fetch_characters(&self, page: PageIndex) -> Result<Vec<Character>, ApiError> {
        self.get_json(&self.page_url(Category::Characters, page))
            .await
    }

    /// Fetches one page of books.
    pub async fn fetch_books(&self, page: PageIndex) -> Result<Vec<Book>, ApiError> {
        self.get_json(&self.page_url(Category::Books, page)).await
    }

    /// Dereferences a character hyperlink taken from another record, for
    /// lord-name resolution and the profile screen.
    pub async fn fetch_character(&self, url: &str) -> Result<Character, ApiError> {
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let url = Url::parse(url)?;
        tracing::debug!(%url, "issuing GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_public_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "https://api.example.com/".into(),
            page_size: 5,
        })
        .unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn page_url_uses_one_based_wire_page() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "https://api.example.com".into(),
            page_size: 5,
        })
        .unwrap();

        let mut page = PageIndex::default();
        assert_eq!(
            client.page_url(Category::Houses, page),
            "https://api.example.com/houses?page=1&pageSize=5"
        );

        page.advance();
        assert_eq!(
            client.page_url(Category::Books, page),
            "https://api.example.com/books?page=2&pageSize=5"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected_at_startup() {
        let result = ApiClient::new(&ApiConfig {
            base_url: "not a url".into(),
            page_size: 5,
        });
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
