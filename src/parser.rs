use crate::Repository;
use lazy_regex::regex;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};
use url::Url;

const E: &str = "Invalid selector";
lazy_static! {
    static ref ITEM: Selector = Selector::parse("ol.repo-list > li").expect(E);
    static ref TITLE: Selector = Selector::parse("h3 a").expect(E);
    static ref DESCRIPTION: Selector = Selector::parse(".py-1 p").expect(E);
    static ref LANGUAGE: Selector = Selector::parse("div.f6 > span").expect(E);
    static ref STARS: Selector = Selector::parse("div.f6 a").expect(E);
    static ref ADDITIONAL_STARS: Selector =
        Selector::parse("div.f6 span.float-sm-right").expect(E);
}

pub fn extract_repositories(html: &str, base: &Url) -> Vec<Repository> {
    let doc = Html::parse_document(html);
    let repositories = select_repositories(&doc, base);
    debug!("Extracted {} repositories", repositories.len());
    repositories
}

pub fn select_repositories(doc: &Html, base: &Url) -> Vec<Repository> {
    doc.select(&ITEM)
        .map(|item| parse_repository(item, base))
        .collect()
}

pub fn parse_repository(item: ElementRef, base: &Url) -> Repository {
    let title = first_text(item, &TITLE).unwrap_or_default();
    let (owner, name) = split_title(&title);

    let description = first_text(item, &DESCRIPTION).unwrap_or_default();
    let language = first_text(item, &LANGUAGE).unwrap_or_default();

    let stars = first_text(item, &STARS)
        .map(|s| parse_count(&s))
        .unwrap_or_default();

    let additional_stars = first_text(item, &ADDITIONAL_STARS)
        .map(|s| first_number(&s))
        .unwrap_or_default();

    let url = resolve_url(item, &title, base);

    Repository {
        title,
        owner,
        name,
        description,
        language,
        stars,
        additional_stars,
        url,
    }
}

fn first_text(item: ElementRef, selector: &Selector) -> Option<String> {
    let text = item
        .select(selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    if text.is_empty() {
        trace!("Empty text for {:?}", selector);
    }
    Some(text)
}

/// `owner / name` split on the first `/`. Without a separator the whole title
/// is the owner and the name is empty.
fn split_title(title: &str) -> (String, String) {
    match title.split_once('/') {
        Some((owner, name)) => (owner.trim().to_string(), name.trim().to_string()),
        None => (title.trim().to_string(), String::new()),
    }
}

fn parse_count(s: &str) -> u64 {
    s.trim().replace(',', "").parse().unwrap_or_default()
}

fn first_number(s: &str) -> u64 {
    regex!("[0-9]+")
        .find(s)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default()
}

// Without an href the link is guessed from the title.
fn resolve_url(item: ElementRef, title: &str, base: &Url) -> Url {
    item.select(&TITLE)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| base.join(href.trim()).ok())
        .or_else(|| {
            trace!("No href for `{}`, guessing from title", title);
            base.join(&title.replace(' ', "")).ok()
        })
        .unwrap_or_else(|| base.clone())
}
