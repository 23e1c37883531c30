use crate::output::print_json;
use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use weeks_cli::render;
use weeks_core::{
    config::Config,
    milestone::Milestone,
    state::{Action, AppState},
};

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Birth date (YYYY-MM-DD); without it there is no grid
    #[arg(long, value_parser = super::parse_date_arg)]
    pub born: Option<NaiveDate>,

    /// Expected lifespan in years (default from config, else 90)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub lifespan: Option<u32>,

    /// Extra milestone at a week index (repeatable: --milestone 10:Graduation)
    #[arg(long = "milestone", value_name = "WEEK:TEXT")]
    pub milestones: Vec<Milestone>,

    /// Extra milestone on a calendar date (repeatable: --on 2010-09-01:University)
    #[arg(long = "on", value_name = "DATE:TEXT")]
    pub dated: Vec<String>,

    /// Start without the configured or built-in milestones
    #[arg(long)]
    pub no_defaults: bool,
}

/// Build the state the grid is drawn from. Dated milestones go through the
/// editor's date mode, exactly as if entered in the dialog.
pub fn build_state(config: &Config, args: &GridArgs, today: NaiveDate) -> anyhow::Result<AppState> {
    let mut state = config
        .initial_state()
        .context("invalid milestones in config")?;
    if args.no_defaults {
        state.milestones = Default::default();
    }
    if let Some(years) = args.lifespan {
        state.apply(Action::SetLifespan { years }, today)?;
    }
    state.apply(
        Action::SetBirthDate {
            birth_date: args.born,
        },
        today,
    )?;

    for m in &args.milestones {
        state.milestones.push(m.clone());
    }

    for entry in &args.dated {
        let (date, text) = entry
            .split_once(':')
            .with_context(|| format!("expected DATE:TEXT, got '{entry}'"))?;
        state.apply(Action::OpenByDate, today)?;
        state.apply(
            Action::SetDate {
                text: date.to_string(),
            },
            today,
        )?;
        state.apply(
            Action::SetDescription {
                text: text.to_string(),
            },
            today,
        )?;
        state
            .apply(Action::Commit, today)
            .with_context(|| format!("cannot place milestone '{entry}'"))?;
    }

    Ok(state)
}

pub fn run(config: &Config, args: GridArgs, today: NaiveDate, json: bool) -> anyhow::Result<()> {
    let state = build_state(config, &args, today)?;

    if json {
        let view = state.view(today);
        tracing::debug!(weeks = view.grid.as_ref().map(|g| g.weeks.len()), "grid computed");
        return print_json(&view);
    }

    match state.birth_date {
        Some(birth) => print!(
            "{}",
            render::render_grid(birth, state.lifespan_years, today, &state.milestones)
        ),
        None => println!("{}", render::EMPTY_STATE),
    }
    Ok(())
}
