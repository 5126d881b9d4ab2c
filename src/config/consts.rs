// src/config/consts.rs

// Page
pub const PAGE_TOKEN: &str = "startlist";
pub const RACE_SEGMENT: &str = "race";

// Selectors: team-grouped layout
pub const STARTLIST_SEL: &str = ".startlist_v3";
pub const TEAM_SEL: &str = "li.team";
pub const RIDER_LIST_SEL: &str = "ul, ol";
pub const LIST_ITEM_SEL: &str = "li";
pub const LIST_ITEM_TAG: &str = "li";
pub const ANCHOR_SEL: &str = "a";
pub const FLAG_SEL: &str = "span.flag";
pub const FLAG_CLASS: &str = "flag";
pub const RIDER_HREF_MARK: &str = "rider/";

// Selectors: individual layout
pub const INDIVIDUAL_SEL: &str = ".page-content > div";
pub const RIDER_ANCHOR_SEL: &str = "a:not([class])";

// URL shape (joined with '/')
pub const RE_SLUG: &str = r"[A-Za-z0-9_\-]+";
pub const RE_YEAR: &str = r"\d{4}";
pub const RE_STAGE: &str = r"(?:stage-\d+[a-z]?|prologue|gc)";
pub const RE_RESULT: &str = "result";
pub const RE_ANYTHING: &str = r"(?:/.*)?";

// Export
pub const DEFAULT_FILE: &str = "startlist";
