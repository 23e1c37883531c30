use crate::error::{Result, WeeksError};
use chrono::{Duration, NaiveDate};

/// Every lifespan year is sized as exactly 52 weeks. The default milestone
/// offsets are expressed in the same unit, so the two must change together.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Lifespan bounds offered by the input controls. The week model itself does
/// not enforce them.
pub const LIFESPAN_MIN: u32 = 1;
pub const LIFESPAN_MAX: u32 = 120;
pub const DEFAULT_LIFESPAN: u32 = 90;

/// Date format accepted by every date input (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of grid cells for a lifespan in years.
pub fn total_weeks(lifespan_years: u32) -> usize {
    lifespan_years as usize * WEEKS_PER_YEAR as usize
}

/// Whole weeks from `earlier` to `later`, truncated toward zero.
///
/// Negative when `later` precedes `earlier`.
pub fn whole_weeks_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_weeks()
}

/// Weeks lived as of `today`, never negative.
pub fn weeks_lived(birth_date: NaiveDate, today: NaiveDate) -> u64 {
    whole_weeks_between(today, birth_date).max(0) as u64
}

/// First day of week `index` counted from `birth_date`.
///
/// `None` if the result falls outside chrono's representable range.
pub fn week_start(birth_date: NaiveDate, index: i64) -> Option<NaiveDate> {
    let offset = Duration::try_weeks(index)?;
    birth_date.checked_add_signed(offset)
}

/// `MMM d, yyyy`, e.g. `Jan 8, 2000`.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse a `YYYY-MM-DD` date, trimming surrounding whitespace.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| WeeksError::InvalidDate(trimmed.to_string()))
}

/// Whether `years` sits inside the range the input controls offer.
pub fn lifespan_in_range(years: u32) -> bool {
    (LIFESPAN_MIN..=LIFESPAN_MAX).contains(&years)
}
