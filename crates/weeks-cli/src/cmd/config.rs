use crate::output::{print_json, Align, Table};
use clap::Subcommand;
use weeks_core::config::{Config, WarnLevel};

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration
    Show,

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(config: &Config, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(config, json),
        ConfigSubcommand::Validate => validate(config, json),
    }
}

fn show(config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(config);
    }
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}

fn validate(config: &Config, json: bool) -> anyhow::Result<()> {
    let warnings = config.validate();
    let errors = warnings
        .iter()
        .filter(|w| w.level == WarnLevel::Error)
        .count();

    if json {
        print_json(&serde_json::json!({
            "ok": errors == 0,
            "warnings": warnings,
        }))?;
    } else if warnings.is_empty() {
        println!("Config OK.");
    } else {
        let mut table = Table::new(&[("LEVEL", Align::Left), ("MESSAGE", Align::Left)]);
        for w in &warnings {
            let level = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            table.row(vec![level.to_string(), w.message.clone()]);
        }
        table.print();
    }

    if errors > 0 {
        anyhow::bail!("config has {errors} error(s)");
    }
    Ok(())
}
