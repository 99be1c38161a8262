use reqwest::StatusCode;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum TrendingError {
    #[error("Language `{0}` is not a valid path segment")]
    InvalidLanguage(String),

    #[error("Invalid url")]
    Url(#[from] url::ParseError),

    #[error("Request failed")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { url: Url, status: StatusCode },
}
