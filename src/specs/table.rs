// src/specs/table.rs
//! Rider-level columns out of a rider list (`<ul>`/`<ol>` of `<li>`).
//!
//! One row per *direct* `<li>` of the list, in document order. Only the columns
//! asked for are read; the rest stay `None`.
//!
//! ```text
//! <li>11 <span class="flag si"></span> <a href="rider/tadej-pogacar">POGAČAR Tadej</a></li>
//!     → name "POGAČAR Tadej", url "rider/tadej-pogacar", nationality "SI"
//! ```

use scraper::ElementRef;

use crate::config::consts::*;
use crate::core::html::{attr, child_elements, text_of};
use crate::core::sanitize::country_code;
use crate::error::Result;
use crate::specs::fields::{Field, FieldSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RiderRow {
    pub name: Option<String>,
    pub url: Option<String>,
    pub nationality: Option<String>,
}

/// How each rider-level column is read from a list item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    AnchorText,
    AnchorHref,
    FlagCode,
}

fn column_for(field: Field) -> Option<Column> {
    match field {
        Field::RiderName => Some(Column::AnchorText),
        Field::RiderUrl => Some(Column::AnchorHref),
        Field::Nationality => Some(Column::FlagCode),
        Field::TeamName | Field::TeamUrl | Field::RiderNumber => None,
    }
}

/// Parse every direct list item of `list`, reading the rider-level fields in `fields`.
pub fn project_rows(list: ElementRef<'_>, fields: &FieldSet) -> Result<Vec<RiderRow>> {
    let columns: Vec<Column> = fields.iter().filter_map(column_for).collect();

    child_elements(list, LIST_ITEM_TAG)
        .map(|li| read_row(li, &columns))
        .collect()
}

fn read_row(li: ElementRef<'_>, columns: &[Column]) -> Result<RiderRow> {
    let mut row = RiderRow::default();
    if columns.is_empty() {
        return Ok(row);
    }

    let anchor = rider_anchor(li)?;
    for col in columns {
        match col {
            Column::AnchorText => row.name = anchor.map(text_of),
            Column::AnchorHref => row.url = anchor.and_then(|a| attr(a, "href")),
            Column::FlagCode => row.nationality = flag_code(li)?,
        }
    }
    Ok(row)
}

/// The item's link to a rider profile, else its first link.
fn rider_anchor(li: ElementRef<'_>) -> Result<Option<ElementRef<'_>>> {
    let mut first = None;
    for a in li.select(selector!(ANCHOR_SEL)?) {
        let is_rider = a.value().attr("href").is_some_and(|h| h.contains(RIDER_HREF_MARK));
        if is_rider {
            return Ok(Some(a));
        }
        first.get_or_insert(a);
    }
    Ok(first)
}

fn flag_code(li: ElementRef<'_>) -> Result<Option<String>> {
    let code = li
        .select(selector!(FLAG_SEL)?)
        .next()
        .and_then(|flag| {
            flag.value()
                .classes()
                .find(|c| !c.eq_ignore_ascii_case(FLAG_CLASS))
                .and_then(country_code)
        });
    Ok(code)
}
