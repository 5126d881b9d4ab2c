// src/page.rs
use std::fmt;

use scraper::Html;

use crate::error::Result;
use crate::record::RiderRecord;
use crate::specs::race_url::{canonicalize, CanonicalIdentity};
use crate::specs::startlist::extract_startlist;

/// A startlist page: its URL (validated up front) and its parsed HTML.
///
/// Two pages are equal when their URLs canonicalize to the same identity;
/// the HTML does not take part.
pub struct RaceStartlist {
    url: String,
    identity: CanonicalIdentity,
    document: Html,
}

impl RaceStartlist {
    pub fn new(url: &str, html: &str) -> Result<Self> {
        let identity = canonicalize(url)?;
        logd!("Startlist page {identity} ({} bytes of HTML)", html.len());
        Ok(Self {
            url: s!(url),
            identity,
            document: Html::parse_document(html),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `race/{race_id}[/{year}]/startlist`
    pub fn normalized_relative_url(&self) -> &CanonicalIdentity {
        &self.identity
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Rider table; `fields` empty means every field.
    pub fn startlist<S: AsRef<str>>(&self, fields: &[S]) -> Result<Vec<RiderRecord>> {
        extract_startlist(&self.document, fields)
    }
}

impl PartialEq for RaceStartlist {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for RaceStartlist {}

impl fmt::Debug for RaceStartlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RaceStartlist")
            .field("url", &self.url)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use crate::specs::fields::Field;

    const PAGE: &str = r#"<div class="page-content"><div><a href="rider/x">X</a></div></div>"#;

    #[test]
    fn equality_ignores_surface_form_and_html() {
        let a = RaceStartlist::new("https://example.org/race/tour-de-suisse/2019/startlist", PAGE).unwrap();
        let b = RaceStartlist::new("race/tour-de-suisse/2019/stage-2/startlist/", "<p></p>").unwrap();
        let c = RaceStartlist::new("race/tour-de-suisse/startlist", PAGE).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.normalized_relative_url().as_str(), "race/tour-de-suisse/2019/startlist");
    }

    #[test]
    fn bad_url_fails_before_parsing() {
        assert!(matches!(RaceStartlist::new("race/tour-de-suisse", PAGE), Err(ScrapeError::InvalidUrl(_))));
    }

    #[test]
    fn startlist_delegates_to_extractor() {
        let page = RaceStartlist::new("race/tour-de-suisse/2019/startlist", PAGE).unwrap();
        let riders = page.startlist(&["rider_name"]).unwrap();
        assert_eq!(riders.len(), 1);
        assert_eq!(riders[0].text(Field::RiderName), Some("X"));
        assert_eq!(page.url(), "race/tour-de-suisse/2019/startlist");
    }
}
