use crate::TrendingError;
use lazy_regex::regex;
use url::Url;

pub const TRENDING_PATH: &str = "/trending";

/// Builds `<base>/trending[/<language>]?since=<since>`.
///
/// `since` is not checked against the known windows, it is sent verbatim.
/// `language` must be usable as a single path segment; percent escapes are kept
/// as they are, so `c%23` selects C#.
pub fn build_url(base: &Url, since: &str, language: &str) -> Result<Url, TrendingError> {
    let mut path = TRENDING_PATH.to_string();

    if !language.is_empty() {
        if !is_path_segment(language) {
            return Err(TrendingError::InvalidLanguage(language.to_string()));
        }
        path.push('/');
        path.push_str(language);
    }

    let mut url = base.join(&path)?;
    url.query_pairs_mut().clear().append_pair("since", since);
    Ok(url)
}

fn is_path_segment(s: &str) -> bool {
    // `.` and `..` would be collapsed by `Url::join`
    regex!(r"^(?:[^/?#\\%\s\p{Cc}]|%[0-9A-Fa-f]{2})+$").is_match(s)
        && !regex!(r"(?i)^(?:\.|%2e){1,2}$").is_match(s)
}
