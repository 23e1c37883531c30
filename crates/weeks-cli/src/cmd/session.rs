use anyhow::Context;
use chrono::NaiveDate;
use weeks_cli::session::Session;
use weeks_core::{
    config::Config,
    state::Action,
};

pub fn run(config: &Config, born: Option<NaiveDate>, today: NaiveDate) -> anyhow::Result<()> {
    let mut state = config
        .initial_state()
        .context("invalid milestones in config")?;
    if born.is_some() {
        state.apply(Action::SetBirthDate { birth_date: born }, today)?;
    }

    tracing::info!(%today, "starting session");
    let mut session = Session::new(state, today);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())
}
