pub mod config;
pub mod grid;
pub mod milestones;
pub mod session;
pub mod ui;
pub mod week;

use chrono::NaiveDate;

/// The date treated as "now": `--today` when given, else the local date.
pub fn today(pinned: Option<NaiveDate>) -> NaiveDate {
    pinned.unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    weeks_core::calendar::parse_date(s).map_err(|e| e.to_string())
}
