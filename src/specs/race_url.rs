// src/specs/race_url.rs
//! Race page URLs → canonical identity.
//!
//! Accepts absolute (`https://host/race/...`) or relative (`race/...`, `/race/...`)
//! forms. Query strings, fragments, trailing slashes and extra trailing segments
//! don't affect the result:
//!
//! ```text
//! https://example.org/race/tour-de-france/2021/stage-4/startlist?x=1  →  race/tour-de-france/2021/startlist
//! race/vuelta-a-espana/startlist/                                     →  race/vuelta-a-espana/startlist
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::consts::*;
use crate::error::{Result, ScrapeError};

/// `race/{race_id}[/{year}]/{page}`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalIdentity(String);

impl CanonicalIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static STARTLIST_PATH: LazyLock<std::result::Result<Regex, regex::Error>> = LazyLock::new(|| {
    let page = PAGE_TOKEN;
    Regex::new(&format!(
        "^{RACE_SEGMENT}/{RE_SLUG}/(?:{RE_YEAR}/{RE_STAGE}/{page}|{RE_YEAR}(?:/{RE_RESULT})?/{page}|{page}){RE_ANYTHING}$"
    ))
});

static YEAR: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(&format!("^{RE_YEAR}$")));

fn compiled(re: &'static std::result::Result<Regex, regex::Error>) -> Result<&'static Regex> {
    re.as_ref().map_err(|e| ScrapeError::Pattern(e.to_string()))
}

/// Path components of `url`, scheme/host/query/fragment stripped, empty segments dropped.
pub fn decompose_url(url: &str) -> Vec<String> {
    let url = url.trim();

    if let Ok(abs) = Url::parse(url) {
        if abs.has_host() {
            return abs
                .path_segments()
                .map(|segs| segs.filter(|s| !s.is_empty()).map(|s| s!(s)).collect())
                .unwrap_or_default();
        }
    }

    let path = url.split(['?', '#']).next().unwrap_or("");
    path.split('/').filter(|s| !s.is_empty()).map(|s| s!(s)).collect()
}

/// Build `race/{id}[/{year}]/{page}` from decomposed components.
/// `components[0]` must be the race marker; the year, if any, directly follows the id.
pub fn normalize_race_url(components: &[String], page: &str) -> Result<CanonicalIdentity> {
    let race_id = match components {
        [marker, id, ..] if marker == RACE_SEGMENT => id,
        _ => return Err(ScrapeError::InvalidUrl(components.join("/"))),
    };

    let year_re = compiled(&YEAR)?;
    let year = components.get(2).filter(|c| year_re.is_match(c));

    Ok(CanonicalIdentity(match year {
        Some(y) => format!("{RACE_SEGMENT}/{race_id}/{y}/{page}"),
        None => format!("{RACE_SEGMENT}/{race_id}/{page}"),
    }))
}

/// Validate a startlist URL and return its canonical identity.
pub fn canonicalize(url: &str) -> Result<CanonicalIdentity> {
    let components = decompose_url(url);
    let path = components.join("/");

    if !compiled(&STARTLIST_PATH)?.is_match(&path) {
        logd!("URL rejected: {url:?} (path {path:?})");
        return Err(ScrapeError::InvalidUrl(s!(url)));
    }
    normalize_race_url(&components, PAGE_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(url: &str) -> String {
        canonicalize(url).unwrap().to_string()
    }

    #[test]
    fn absolute_url_with_year() {
        assert_eq!(
            canon("https://example.org/race/tour-de-france/2021/startlist"),
            "race/tour-de-france/2021/startlist"
        );
    }

    #[test]
    fn relative_url_without_year() {
        assert_eq!(canon("race/vuelta-a-espana/startlist/"), "race/vuelta-a-espana/startlist");
        assert_eq!(canon("/race/vuelta-a-espana/startlist"), "race/vuelta-a-espana/startlist");
    }

    #[test]
    fn stage_result_and_trailing_segments_are_dropped() {
        let expected = "race/tour-de-pologne/2009/startlist";
        assert_eq!(canon("race/tour-de-pologne/2009/gc/startlist"), expected);
        assert_eq!(canon("race/tour-de-pologne/2009/stage-3/startlist/top-competitors"), expected);
        assert_eq!(canon("race/tour-de-pologne/2009/result/startlist"), expected);
        assert_eq!(canon("https://www.procyclingstats.com/race/tour-de-pologne/2009/startlist//?sort=team#x"), expected);
    }

    #[test]
    fn surface_forms_share_identity() {
        let a = canonicalize("https://example.org/race/giro-d-italia/2022/startlist").unwrap();
        let b = canonicalize("race/giro-d-italia/2022/startlist/?filter=1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_non_startlist_shapes() {
        for bad in [
            "",
            "race/tour-de-france/2021",
            "race/tour-de-france/2021/stage-2",
            "rider/tadej-pogacar",
            "race/startlist",
            "race/tour-de-france/21/startlist",
            "https://example.org/team/ineos-2021/startlist",
        ] {
            assert!(
                matches!(canonicalize(bad), Err(ScrapeError::InvalidUrl(_))),
                "expected InvalidUrl for {bad:?}"
            );
        }
    }

    #[test]
    fn normalize_needs_race_marker() {
        let parts = vec![s!("team"), s!("x")];
        assert!(normalize_race_url(&parts, PAGE_TOKEN).is_err());

        let parts = vec![s!("race"), s!("paris-nice"), s!("2020"), s!("stage-1")];
        assert_eq!(normalize_race_url(&parts, "result").unwrap().as_str(), "race/paris-nice/2020/result");
    }

    #[test]
    fn decompose_strips_host_and_query() {
        assert_eq!(
            decompose_url("https://example.org/race/a/2020/startlist?x=1"),
            vec!["race", "a", "2020", "startlist"]
        );
        assert_eq!(decompose_url("race//a/startlist#top"), vec!["race", "a", "startlist"]);
    }
}
