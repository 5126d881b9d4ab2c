// src/specs/startlist.rs
//! Scraping *spec* for the race startlist page.
//!
//! The page comes in two shapes:
//! - **team-grouped**: `.startlist_v3 > li.team`, each team with a header link and a
//!   nested rider list (`<ul>` of `<li>`, each starting with the printed rider number)
//! - **individual**: no `li.team` anywhere; riders are the plain (unclassed) links of
//!   the first `.page-content > div`, numbered by position
//!
//! `detect_layout` picks one, and each shape has its own extractor. Both end with
//! `RiderRecord::project`, so every record of a call carries exactly the requested keys.
//!
//! Team-grouped flow:
//! ```text
//! li.team ─┬─ first <a>          → team_name / team_url (same for every rider of the team)
//!          └─ first <ul>/<ol>
//!               ├─ direct <li>s  → rider_name / rider_url / nationality   (table::project_rows)
//!               └─ all <li>s     → rider_number from the leading own-text token
//! ```
//! A team whose number column doesn't line up with its rider rows is rejected
//! (`MalformedPage`) rather than emitted misaligned.

use scraper::{ElementRef, Html};

use crate::config::consts::*;
use crate::core::html::{attr, shallow_text, text_of};
use crate::core::sanitize::leading_token;
use crate::error::{Result, ScrapeError};
use crate::record::{RiderRecord, RiderSource};
use crate::specs::fields::{validate_fields, Field, FieldSet};
use crate::specs::table::{project_rows, RiderRow};

/// Every field this page can produce.
pub const SUPPORTED_FIELDS: [Field; 6] = Field::ALL;

/// Which shape the page has, with the node each extractor scans from.
#[derive(Clone, Copy, Debug)]
pub enum Layout<'a> {
    /// The startlist section holding the `li.team` groups.
    TeamGrouped(ElementRef<'a>),
    /// The general page-content block holding the flat rider links.
    Individual(ElementRef<'a>),
}

impl Layout<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::TeamGrouped(_) => "team-grouped",
            Layout::Individual(_) => "individual",
        }
    }
}

pub fn detect_layout(doc: &Html) -> Result<Layout<'_>> {
    let team_sel = selector!(TEAM_SEL)?;

    if let Some(section) = doc.select(selector!(STARTLIST_SEL)?).next() {
        if section.select(team_sel).next().is_some() {
            return Ok(Layout::TeamGrouped(section));
        }
    }

    doc.select(selector!(INDIVIDUAL_SEL)?)
        .next()
        .map(Layout::Individual)
        .ok_or_else(|| {
            loge!("Neither team groups nor a page-content block found");
            ScrapeError::MalformedPage(format!("no `{TEAM_SEL}` groups and no `{INDIVIDUAL_SEL}` container"))
        })
}

/// Extract the startlist from a parsed page.
///
/// `requested` are field names (see `Field`); empty means all of them. Names are
/// validated before the document is looked at.
pub fn extract_startlist<S: AsRef<str>>(doc: &Html, requested: &[S]) -> Result<Vec<RiderRecord>> {
    let fields = validate_fields(requested, &SUPPORTED_FIELDS)?;
    extract_with_fields(doc, &fields)
}

/// Same as `extract_startlist`, parsing `html` first.
pub fn extract_startlist_html<S: AsRef<str>>(html: &str, requested: &[S]) -> Result<Vec<RiderRecord>> {
    let fields = validate_fields(requested, &SUPPORTED_FIELDS)?;
    let doc = Html::parse_document(html);
    extract_with_fields(&doc, &fields)
}

pub fn extract_with_fields(doc: &Html, fields: &FieldSet) -> Result<Vec<RiderRecord>> {
    let layout = detect_layout(doc)?;
    logd!("Startlist layout: {}", layout.name());

    let records = match layout {
        Layout::TeamGrouped(root) => assemble(extract_teams(root, fields)?),
        Layout::Individual(root) => extract_individual(root, fields)?,
    };

    logd!("Extracted {} riders ({} fields)", records.len(), fields.len());
    Ok(records)
}

/* ---------- individual layout ---------- */

fn extract_individual(root: ElementRef<'_>, fields: &FieldSet) -> Result<Vec<RiderRecord>> {
    let records = root
        .select(selector!(RIDER_ANCHOR_SEL)?)
        .enumerate()
        .map(|(i, a)| {
            let src = RiderSource {
                rider_name: Some(text_of(a)),
                rider_url: attr(a, "href"),
                rider_number: u32::try_from(i + 1).ok(),
                ..Default::default()
            };
            RiderRecord::project(fields, &src)
        })
        .collect();
    Ok(records)
}

/* ---------- team-grouped layout ---------- */

fn extract_teams(root: ElementRef<'_>, fields: &FieldSet) -> Result<Vec<Vec<RiderRecord>>> {
    root.select(selector!(TEAM_SEL)?)
        .enumerate()
        .map(|(i, team)| extract_team(i, team, fields))
        .collect()
}

struct TeamHeader {
    name: Option<String>,
    url: Option<String>,
}

fn extract_team(index: usize, team: ElementRef<'_>, fields: &FieldSet) -> Result<Vec<RiderRecord>> {
    let riders = team.select(selector!(RIDER_LIST_SEL)?).next().ok_or_else(|| {
        loge!("Team #{index} has no rider list");
        ScrapeError::MalformedPage(format!("team #{} has no nested rider list", index + 1))
    })?;

    let rows = project_rows(riders, fields)?;

    let numbers = if fields.contains(Field::RiderNumber) {
        let numbers = rider_numbers(index, riders)?;
        if numbers.len() != rows.len() {
            loge!("Team #{index}: {} numbers for {} riders", numbers.len(), rows.len());
            return Err(ScrapeError::MalformedPage(format!(
                "team #{}: {} rider numbers for {} riders",
                index + 1,
                numbers.len(),
                rows.len()
            )));
        }
        Some(numbers)
    } else {
        None
    };

    let header = team_header(index, team, riders, fields)?;
    logd!("Team #{index} {:?}: {} riders", header.name, rows.len());

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let RiderRow { name, url, nationality } = row;
            let src = RiderSource {
                rider_name: name,
                rider_url: url,
                nationality,
                team_name: header.name.clone(),
                team_url: header.url.clone(),
                rider_number: numbers.as_ref().map(|n| n[i]),
            };
            RiderRecord::project(fields, &src)
        })
        .collect();
    Ok(records)
}

/// Team name / URL, read once per team and only when requested.
/// Links inside the rider list never count as the team link.
fn team_header(
    index: usize,
    team: ElementRef<'_>,
    riders: ElementRef<'_>,
    fields: &FieldSet,
) -> Result<TeamHeader> {
    let wants_name = fields.contains(Field::TeamName);
    let wants_url = fields.contains(Field::TeamUrl);
    if !wants_name && !wants_url {
        return Ok(TeamHeader { name: None, url: None });
    }

    let anchor = team
        .select(selector!(ANCHOR_SEL)?)
        .find(|a| !a.ancestors().any(|n| n.id() == riders.id()))
        .ok_or_else(|| {
            loge!("Team #{index} has no header link");
            ScrapeError::MalformedPage(format!("team #{} has no team link", index + 1))
        })?;

    Ok(TeamHeader {
        name: wants_name.then(|| text_of(anchor)),
        url: if wants_url { attr(anchor, "href") } else { None },
    })
}

/// Printed rider numbers: the leading token of each list item's own text.
fn rider_numbers(index: usize, riders: ElementRef<'_>) -> Result<Vec<u32>> {
    riders
        .select(selector!(LIST_ITEM_SEL)?)
        .map(|li| {
            let own = shallow_text(li);
            leading_token(&own)
                .and_then(|tok| tok.parse::<u32>().ok())
                .ok_or_else(|| {
                    ScrapeError::MalformedPage(format!(
                        "team #{}: rider number {:?} is not an integer",
                        index + 1,
                        own.trim()
                    ))
                })
        })
        .collect()
}

/// Concatenate per-team rows in team order. No sorting, no dedup.
pub fn assemble(per_team: Vec<Vec<RiderRecord>>) -> Vec<RiderRecord> {
    per_team.into_iter().flatten().collect()
}
