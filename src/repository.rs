use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A single entry of the trending list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Heading text as shown on the page, e.g. `schollz / find3`.
    pub title: String,
    pub owner: String,
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    /// Stars gained during the selected time window.
    pub additional_stars: u64,
    pub url: Url,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title           : {}", self.title)?;
        writeln!(f, "Owner           : {}", self.owner)?;
        writeln!(f, "Name            : {}", self.name)?;
        if self.description.is_empty() {
            writeln!(f, "Description     : None")?;
        } else {
            writeln!(f, "Description     : {}", self.description)?;
        }
        if self.language.is_empty() {
            writeln!(f, "Language        : None")?;
        } else {
            writeln!(f, "Language        : {}", self.language)?;
        }
        writeln!(
            f,
            "Stars           : {} (+{})",
            self.stars, self.additional_stars
        )?;
        writeln!(f, "Url             : {}", self.url)
    }
}
