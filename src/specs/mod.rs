// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground truth
//! lives in the HTML* of one page kind and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML reading** over an already-parsed `scraper::Html`. No fetching.
//! - **Layout choice**: a page that comes in more than one shape is classified once
//!   (`startlist::Layout`) and each shape gets its own extractor.
//! - **Field vocabulary** (`fields`): the closed set of output columns and the
//!   validation of caller requests against it.
//! - **Page identity** (`race_url`): URL shape checks and canonical relative URLs.
//!
//! ## What does **not** live here
//! - Fetching or caching pages.
//! - Export formatting (`csv`, `file`) and CLI concerns (`cli`).
//!
//! ## Typical call chain
//! ```text
//! caller / cli → page::RaceStartlist::new(url, html)     (race_url::canonicalize)
//!             → RaceStartlist::startlist(fields)          (fields::validate_fields)
//!             → startlist::detect_layout → extractor      (table::project_rows)
//!             → Vec<RiderRecord>
//! ```
//!
//! ## Conventions & invariants
//! - Requested names are validated **before** the document is touched.
//! - Every record of one call has exactly the validated keys; unknown values are null.
//! - Document order is preserved; nothing is sorted or deduplicated.
//! - Structure violations are `MalformedPage`, never silently misaligned output.
//!
//! ## Testing notes
//! Specs are tested offline against inline markup and saved fixtures (`tests/fixtures`).
pub mod fields;
pub mod race_url;
pub mod startlist;
pub mod table;
