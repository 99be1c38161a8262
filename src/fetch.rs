use crate::TrendingError;
use tracing::debug;
use url::Url;

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &Url) -> Result<String, TrendingError>;
}

#[async_trait::async_trait]
impl Fetcher for reqwest::Client {
    async fn get(&self, url: &Url) -> Result<String, TrendingError> {
        debug!("Visit {}", url);
        let response = reqwest::Client::get(self, url.clone()).send().await?;

        let status = response.status();
        debug!("Status {} from {}", status, url);
        if !status.is_success() {
            return Err(TrendingError::Status {
                url: url.clone(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl<F: Fetcher + ?Sized> Fetcher for std::sync::Arc<F> {
    async fn get(&self, url: &Url) -> Result<String, TrendingError> {
        (**self).get(url).await
    }
}
