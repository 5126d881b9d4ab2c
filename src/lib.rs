// src/lib.rs
//! Cycling race startlist scraping: riders (optionally grouped by team) out of a
//! startlist page, plus a canonical identity for the page's URL.
//!
//! ```no_run
//! use startlist_scrape::RaceStartlist;
//!
//! # fn main() -> startlist_scrape::Result<()> {
//! let html = std::fs::read_to_string("startlist.html")?;
//! let page = RaceStartlist::new("race/tour-de-france/2021/startlist", &html)?;
//! for rider in page.startlist(&["rider_name", "team_name"])? {
//!     println!("{rider:?}");
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod specs;

pub mod csv;
pub mod file;
pub mod page;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, ScrapeError};
pub use page::RaceStartlist;
pub use record::{FieldValue, RiderRecord};
pub use specs::fields::{validate_fields, Field, FieldSet};
pub use specs::race_url::{canonicalize, CanonicalIdentity};
pub use specs::startlist::{detect_layout, extract_startlist, extract_startlist_html, Layout};

#[doc(hidden)]
pub use tracing as __tracing;
