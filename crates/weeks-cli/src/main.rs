mod cmd;
mod output;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, grid::GridArgs, parse_date_arg};
use std::path::PathBuf;
use weeks_core::config::Config;

#[derive(Parser)]
#[command(
    name = "lifeweeks",
    about = "Your life as a grid of weeks: lived, current and milestones ahead",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ~/.config/lifeweeks/config.yaml)
    #[arg(long, global = true, env = "LIFEWEEKS_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the week grid
    Grid(GridArgs),

    /// Show which week of life a date falls in
    Week {
        /// Birth date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        born: NaiveDate,
        /// Date to locate (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },

    /// Show the date a week of life starts on
    Date {
        /// Birth date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        born: NaiveDate,
        /// Week index, counted from 0
        #[arg(allow_negative_numbers = true)]
        week: i64,
    },

    /// List the milestones every grid starts with
    Milestones {
        /// Birth date, to show the calendar date of each milestone
        #[arg(long, value_parser = parse_date_arg)]
        born: Option<NaiveDate>,
    },

    /// Interactive session: edit the grid and add milestones from stdin
    Session {
        /// Start with this birth date already set
        #[arg(long, value_parser = parse_date_arg)]
        born: Option<NaiveDate>,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Launch the web UI
    Ui {
        /// Port to listen on (0 = OS-assigned; default from config, else 3141)
        #[arg(long)]
        port: Option<u16>,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Ui { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.config.as_deref()).context("failed to load config")?;
    let today = cmd::today(cli.today);
    tracing::debug!(%today, "resolved today");

    match cli.command {
        Commands::Grid(args) => cmd::grid::run(&config, args, today, cli.json),
        Commands::Week { born, date } => cmd::week::run_week(born, date, cli.json),
        Commands::Date { born, week } => cmd::week::run_date(born, week, cli.json),
        Commands::Milestones { born } => cmd::milestones::run(&config, born, cli.json),
        Commands::Session { born } => cmd::session::run(&config, born, today),
        Commands::Config { subcommand } => cmd::config::run(&config, subcommand, cli.json),
        Commands::Ui { port, no_open } => cmd::ui::run(config, port, no_open, cli.today),
    }
}
