use crate::calendar::{self, DEFAULT_LIFESPAN, WEEKS_PER_YEAR};
use crate::error::{Result, WeeksError};
use crate::milestone::{Milestone, MilestoneSet};
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.yaml";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// MilestoneEntry
// ---------------------------------------------------------------------------

/// A starting milestone, placed either at an age in years or at a raw week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<i64>,
    pub description: String,
}

impl MilestoneEntry {
    fn to_milestone(&self) -> Result<Milestone> {
        match (self.years, self.week) {
            (Some(years), None) => Milestone::at_age(years, self.description.as_str()),
            (None, Some(week)) => Milestone::new(week, self.description.as_str()),
            _ => Err(WeeksError::InvalidMilestone(format!(
                "'{}' must set exactly one of `years` or `week`",
                self.description
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

fn default_port() -> u16 {
    3141
}

fn default_open_browser() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open_browser: default_open_browser(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_lifespan")]
    pub default_lifespan: u32,
    /// Replaces the built-in life stages when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<MilestoneEntry>>,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_version() -> u32 {
    1
}

fn default_lifespan() -> u32 {
    DEFAULT_LIFESPAN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_lifespan: default_lifespan(),
            milestones: None,
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// `~/.config/lifeweeks/config.yaml`
    pub fn default_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or(WeeksError::HomeNotFound)?;
        Ok(home.join(".config").join("lifeweeks").join(CONFIG_FILE))
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    /// Load from an explicit path, or from [`Config::default_path`].
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(p) => Self::load(p),
            None => Self::load(&Self::default_path()?),
        }
    }

    /// The milestone set every new state starts with.
    pub fn starting_milestones(&self) -> Result<MilestoneSet> {
        match &self.milestones {
            None => Ok(MilestoneSet::defaults()),
            Some(entries) => entries
                .iter()
                .map(MilestoneEntry::to_milestone)
                .collect::<Result<Vec<_>>>()
                .map(MilestoneSet::from),
        }
    }

    /// A fresh application state seeded from this config.
    pub fn initial_state(&self) -> Result<AppState> {
        Ok(AppState::new(
            self.default_lifespan,
            self.starting_milestones()?,
        ))
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if !calendar::lifespan_in_range(self.default_lifespan) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "default_lifespan {} is outside {}..={} years",
                    self.default_lifespan,
                    calendar::LIFESPAN_MIN,
                    calendar::LIFESPAN_MAX
                ),
            });
        }

        let total = i64::from(self.default_lifespan) * i64::from(WEEKS_PER_YEAR);
        for entry in self.milestones.iter().flatten() {
            match entry.to_milestone() {
                Err(e) => warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: e.to_string(),
                }),
                Ok(m) if m.week_index < 0 || m.week_index >= total => {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!(
                            "milestone '{}' at week {} is outside the default grid and will not render",
                            m.description, m.week_index
                        ),
                    })
                }
                Ok(_) => {}
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config.default_lifespan, 90);
        assert_eq!(config.ui.port, 3141);
        assert!(config.ui.open_browser);
        assert_eq!(config.starting_milestones().unwrap(), MilestoneSet::defaults());
    }

    #[test]
    fn loads_custom_milestones() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "default_lifespan: 80\n\
             milestones:\n\
             \x20 - years: 16\n\
             \x20   description: Driving licence\n\
             \x20 - week: 3\n\
             \x20   description: First smile\n\
             ui:\n\
             \x20 open_browser: false\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_lifespan, 80);
        assert!(!config.ui.open_browser);
        assert_eq!(config.ui.port, 3141);

        let set = config.starting_milestones().unwrap();
        let weeks: Vec<i64> = set.iter().map(|m| m.week_index).collect();
        assert_eq!(weeks, vec![832, 3]);

        let state = config.initial_state().unwrap();
        assert_eq!(state.lifespan_years, 80);
        assert!(state.birth_date.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn empty_milestone_list_starts_empty() {
        let config: Config = serde_yaml::from_str("milestones: []\n").unwrap();
        assert!(config.starting_milestones().unwrap().is_empty());
    }

    #[test]
    fn validate_flags_bad_entries() {
        let config: Config = serde_yaml::from_str(
            "default_lifespan: 150\n\
             milestones:\n\
             \x20 - years: 1\n\
             \x20   week: 2\n\
             \x20   description: Both\n\
             \x20 - week: 100000\n\
             \x20   description: Far\n\
             \x20 - years: 3\n\
             \x20   description: '  '\n",
        )
        .unwrap();

        let warnings = config.validate();
        assert_eq!(warnings.len(), 4);
        assert_eq!(warnings[0].level, WarnLevel::Warning);
        assert!(warnings[0].message.contains("150"));
        assert_eq!(warnings[1].level, WarnLevel::Error);
        assert_eq!(warnings[2].level, WarnLevel::Warning);
        assert!(warnings[2].message.contains("Far"));
        assert_eq!(warnings[3].level, WarnLevel::Error);
        assert!(config.starting_milestones().is_err());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "").unwrap();
        assert_eq!(Config::load(&path).unwrap().default_lifespan, 90);
    }
}
