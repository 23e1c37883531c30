use chrono::NaiveDate;
use std::fmt::Write;
use weeks_core::calendar::{self, WEEKS_PER_YEAR};
use weeks_core::milestone::MilestoneSet;
use weeks_core::week::{self, WeekDescriptor, WeekSummary};

pub const LIVED: char = '#';
pub const CURRENT: char = '@';
pub const MILESTONE: char = '*';
pub const AHEAD: char = '.';

/// Glyph for one cell. The current week wins over a milestone, which wins
/// over the lived shading.
pub fn glyph(week: &WeekDescriptor) -> char {
    if week.is_current {
        CURRENT
    } else if week.milestone.is_some() {
        MILESTONE
    } else if week.lived {
        LIVED
    } else {
        AHEAD
    }
}

/// Render the grid as text: a week ruler, one row per year, the legend,
/// a summary line and the milestones that fall inside the grid.
pub fn render_grid(
    birth_date: NaiveDate,
    lifespan_years: u32,
    today: NaiveDate,
    milestones: &MilestoneSet,
) -> String {
    let weeks = week::compute_weeks(Some(birth_date), lifespan_years, today, milestones);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Life in weeks: born {}, {} years",
        calendar::format_short(birth_date),
        lifespan_years
    );
    let _ = writeln!(out);

    let mut ruler = String::from("     ");
    for w in 1..=WEEKS_PER_YEAR {
        ruler.push(if w == 1 || w % 10 == 0 { '|' } else { ' ' });
    }
    let _ = writeln!(out, "{}", ruler.trim_end());

    for (year, row) in week::year_rows(&weeks).enumerate() {
        let cells: String = row.iter().map(glyph).collect();
        let _ = writeln!(out, "{year:>4} {cells}");
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{LIVED} lived   {CURRENT} this week   {MILESTONE} milestone   {AHEAD} ahead"
    );

    let summary = WeekSummary::new(birth_date, lifespan_years, today);
    let _ = writeln!(
        out,
        "{} of {} weeks lived ({:.1}%), {} remaining",
        summary.weeks_lived, summary.total_weeks, summary.percent_lived, summary.weeks_remaining
    );

    let marked: Vec<&WeekDescriptor> = weeks.iter().filter(|w| w.milestone.is_some()).collect();
    if !marked.is_empty() {
        let _ = writeln!(out);
        for w in marked {
            for line in w.tooltip(birth_date, milestones).lines() {
                let _ = writeln!(out, "  {line}");
            }
        }
    }

    out
}

/// What the grid area shows before a birth date exists.
pub const EMPTY_STATE: &str = "No birth date set: pass --born YYYY-MM-DD to draw the grid.";
