use crate::output::{print_json, Align, Table};
use anyhow::Context;
use chrono::NaiveDate;
use weeks_core::{
    calendar::{self, WEEKS_PER_YEAR},
    config::Config,
};

pub fn run(config: &Config, born: Option<NaiveDate>, json: bool) -> anyhow::Result<()> {
    let milestones = config
        .starting_milestones()
        .context("invalid milestones in config")?;

    if json {
        let items: Vec<serde_json::Value> = milestones
            .iter()
            .map(|m| {
                serde_json::json!({
                    "week_index": m.week_index,
                    "description": m.description,
                    "date": born.and_then(|b| calendar::week_start(b, m.week_index)),
                })
            })
            .collect();
        return print_json(&items);
    }

    if milestones.is_empty() {
        println!("No milestones.");
        return Ok(());
    }

    let per_year = i64::from(WEEKS_PER_YEAR);
    let mut columns = vec![
        ("WEEK", Align::Right),
        ("AGE", Align::Right),
        ("DESCRIPTION", Align::Left),
    ];
    if born.is_some() {
        columns.push(("DATE", Align::Left));
    }
    let mut table = Table::new(&columns);
    for m in &milestones {
        let mut row = vec![
            m.week_index.to_string(),
            format!(
                "{}y {}w",
                m.week_index.div_euclid(per_year),
                m.week_index.rem_euclid(per_year)
            ),
            m.description.clone(),
        ];
        if let Some(b) = born {
            row.push(
                calendar::week_start(b, m.week_index)
                    .map(calendar::format_short)
                    .unwrap_or_default(),
            );
        }
        table.row(row);
    }
    table.print();
    Ok(())
}
