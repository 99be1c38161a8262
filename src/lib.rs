//! Fetches the GitHub trending page and extracts its repositories.
//!
//! ```no_run
//! # async fn demo() -> Result<(), github_trending::TrendingError> {
//! let repos = github_trending::this_week().language("rust").repos().await?;
//! for (i, repo) in repos.iter().enumerate() {
//!     println!("{} {}", i + 1, repo.title);
//! }
//! # Ok(()) }
//! ```

use lazy_static::lazy_static;
use std::fmt;
use tracing::warn;
use url::Url;

pub mod fetch;
pub mod parser;
pub mod query;

mod error;
mod repository;

pub use error::TrendingError;
pub use fetch::Fetcher;
pub use repository::Repository;

pub const DEFAULT_BASE_URL: &str = "https://github.com";

lazy_static! {
    static ref DEFAULT_BASE: Url = Url::parse(DEFAULT_BASE_URL).expect("Invalid default base url");
}

/// The time windows offered by the trending page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Since {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Since {
    pub fn as_str(&self) -> &'static str {
        match self {
            Since::Daily => "daily",
            Since::Weekly => "weekly",
            Since::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Since> for String {
    fn from(since: Since) -> Self {
        since.as_str().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Trending<F = reqwest::Client> {
    since: String,
    language: String,
    base_url: Url,
    fetcher: F,
}

impl Trending {
    pub fn new() -> Self {
        Self::with_fetcher(reqwest::Client::new())
    }
}

impl Default for Trending {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetcher> Trending<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Trending {
            since: String::new(),
            language: String::new(),
            base_url: DEFAULT_BASE.clone(),
            fetcher,
        }
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = since.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// The time window that will be requested, `daily` when unset.
    pub fn time_span(&self) -> &str {
        if self.since.is_empty() {
            Since::Daily.as_str()
        } else {
            &self.since
        }
    }

    pub fn language_filter(&self) -> &str {
        &self.language
    }

    pub fn base(&self) -> &Url {
        &self.base_url
    }

    pub fn url(&self) -> Result<Url, TrendingError> {
        query::build_url(&self.base_url, self.time_span(), &self.language)
    }

    pub async fn repos(&self) -> Result<Vec<Repository>, TrendingError> {
        self.fetch_entries(self.time_span(), &self.language).await
    }

    pub async fn fetch_entries(
        &self,
        since: &str,
        language: &str,
    ) -> Result<Vec<Repository>, TrendingError> {
        let url = query::build_url(&self.base_url, since, language)?;
        let html = self.fetcher.get(&url).await?;

        let repositories = parser::extract_repositories(&html, &self.base_url);
        if repositories.is_empty() {
            warn!("No repositories extracted: {}", url);
        }
        Ok(repositories)
    }
}

/// Today's trending repositories with the default client.
pub async fn repos() -> Result<Vec<Repository>, TrendingError> {
    Trending::new().repos().await
}

pub fn today() -> Trending {
    Trending::new().since(Since::Daily)
}

pub fn this_week() -> Trending {
    Trending::new().since(Since::Weekly)
}

pub fn this_month() -> Trending {
    Trending::new().since(Since::Monthly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct StubFetcher {
        html: String,
        requested: Mutex<Vec<Url>>,
    }

    impl StubFetcher {
        fn from_file(path: &str) -> Self {
            StubFetcher {
                html: fs::read_to_string(path).expect("Invalid file url"),
                ..Default::default()
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested
                .lock()
                .unwrap()
                .iter()
                .map(ToString::to_string)
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl Fetcher for StubFetcher {
        async fn get(&self, url: &Url) -> Result<String, TrendingError> {
            self.requested.lock().unwrap().push(url.clone());
            Ok(self.html.clone())
        }
    }

    struct DownFetcher;

    #[async_trait::async_trait]
    impl Fetcher for DownFetcher {
        async fn get(&self, url: &Url) -> Result<String, TrendingError> {
            Err(TrendingError::Status {
                url: url.clone(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            })
        }
    }

    fn test_base() -> Url {
        Url::parse("https://example.test").unwrap()
    }

    #[test]
    fn test_defaults() {
        let trending = Trending::new();
        assert_eq!(trending.time_span(), "daily");
        assert_eq!(trending.language_filter(), "");
        assert_eq!(trending.base().as_str(), "https://github.com/");
        assert_eq!(
            trending.url().unwrap().as_str(),
            "https://github.com/trending?since=daily"
        );
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(today().time_span(), "daily");
        assert_eq!(this_week().time_span(), "weekly");
        assert_eq!(this_month().time_span(), "monthly");
        assert_eq!(
            this_week().language("go").url().unwrap().as_str(),
            "https://github.com/trending/go?since=weekly"
        );
    }

    #[test]
    fn test_builder_values_are_independent() {
        let weekly = this_week().base_url(test_base());
        let monthly_go = weekly.clone().since(Since::Monthly).language("go");

        assert_eq!(
            weekly.url().unwrap().as_str(),
            "https://example.test/trending?since=weekly"
        );
        assert_eq!(
            monthly_go.url().unwrap().as_str(),
            "https://example.test/trending/go?since=monthly"
        );
    }

    #[test]
    fn test_empty_since_means_daily() {
        let trending = Trending::new().since("weekly").since("");
        assert_eq!(trending.time_span(), "daily");
    }

    #[tokio::test]
    async fn test_repos() {
        let fetcher = Arc::new(StubFetcher::from_file("tests/htmls/trending.html"));
        let trending = Trending::with_fetcher(fetcher.clone()).base_url(test_base());

        let repos = trending.repos().await.unwrap();

        assert_eq!(
            fetcher.requested(),
            vec!["https://example.test/trending?since=daily".to_string()]
        );
        assert_eq!(repos.len(), 3);
        assert_eq!(repos[0].owner, "schollz");
        assert_eq!(repos[0].name, "find3");
        assert_eq!(repos[0].url.as_str(), "https://example.test/schollz/find3");
    }

    #[tokio::test]
    async fn test_fetch_entries_with_language() {
        let fetcher = Arc::new(StubFetcher::from_file("tests/htmls/trending.html"));
        let trending = Trending::with_fetcher(fetcher.clone()).base_url(test_base());

        let repos = trending.fetch_entries("weekly", "go").await.unwrap();

        assert_eq!(repos.len(), 3);
        assert_eq!(
            fetcher.requested(),
            vec!["https://example.test/trending/go?since=weekly".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unexpected_page_gives_empty_list() {
        let fetcher = StubFetcher {
            html: "<html><body><h1>Rate limited</h1></body></html>".to_string(),
            ..Default::default()
        };
        let repos = Trending::with_fetcher(fetcher).repos().await.unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_language_is_not_fetched() {
        let fetcher = Arc::new(StubFetcher::default());
        let trending = Trending::with_fetcher(fetcher.clone()).language("c#");

        let err = trending.repos().await.unwrap_err();

        assert!(matches!(err, TrendingError::InvalidLanguage(_)));
        assert!(fetcher.requested().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_is_returned() {
        let err = Trending::with_fetcher(DownFetcher)
            .base_url(test_base())
            .repos()
            .await
            .unwrap_err();

        match err {
            TrendingError::Status { url, status } => {
                assert_eq!(url.as_str(), "https://example.test/trending?since=daily");
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
            }
            other => panic!("Unexpected error {other:?}"),
        }
    }
}
