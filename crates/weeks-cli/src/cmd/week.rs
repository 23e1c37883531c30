use crate::output::print_json;
use anyhow::anyhow;
use chrono::NaiveDate;
use weeks_core::calendar;

/// Which week of life `date` falls in.
pub fn run_week(born: NaiveDate, date: NaiveDate, json: bool) -> anyhow::Result<()> {
    let week = calendar::whole_weeks_between(date, born);
    if json {
        return print_json(&serde_json::json!({
            "birth_date": born,
            "date": date,
            "week_index": week,
        }));
    }
    println!("{date} falls in week {week} (index from 0)");
    Ok(())
}

/// The first day of week `week` and its tooltip text.
pub fn run_date(born: NaiveDate, week: i64, json: bool) -> anyhow::Result<()> {
    let start = calendar::week_start(born, week)
        .ok_or_else(|| anyhow!("week {week} is out of the supported date range"))?;
    if json {
        return print_json(&serde_json::json!({
            "birth_date": born,
            "week_index": week,
            "starts_on": start,
            "label": format!("Week {}: {}", week + 1, calendar::format_short(start)),
        }));
    }
    println!("Week {}: {}", week + 1, calendar::format_short(start));
    Ok(())
}
