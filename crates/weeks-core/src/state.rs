use crate::calendar::{self, DEFAULT_LIFESPAN};
use crate::editor::{Draft, MilestoneEditor};
use crate::error::{Result, WeeksError};
use crate::milestone::{Milestone, MilestoneSet};
use crate::week::{self, WeekDescriptor, WeekSummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A discrete user event. Every state change goes through [`AppState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetBirthDate { birth_date: Option<NaiveDate> },
    SetLifespan { years: u32 },
    SelectWeek { week: usize },
    OpenByDate,
    SetDescription { text: String },
    SetDate { text: String },
    SetPickerOpen { open: bool },
    Commit,
    Cancel,
}

/// What an applied action changed, for callers that want to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Committed(Milestone),
    Cancelled,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The whole application state, owned by the root view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub birth_date: Option<NaiveDate>,
    pub lifespan_years: u32,
    pub milestones: MilestoneSet,
    pub editor: MilestoneEditor,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_LIFESPAN, MilestoneSet::defaults())
    }
}

impl AppState {
    pub fn new(lifespan_years: u32, milestones: MilestoneSet) -> Self {
        Self {
            birth_date: None,
            lifespan_years,
            milestones,
            editor: MilestoneEditor::Idle,
        }
    }

    /// Apply one user event. `today` bounds the birth date input.
    ///
    /// A failed action leaves the state unchanged.
    pub fn apply(&mut self, action: Action, today: NaiveDate) -> Result<Outcome> {
        match action {
            Action::SetBirthDate { birth_date } => {
                if let Some(date) = birth_date {
                    if date > today {
                        return Err(WeeksError::BirthDateInFuture(date));
                    }
                }
                self.birth_date = birth_date;
                // Without a birth date the grid and its cells are gone.
                if birth_date.is_none() && self.editor.selected_week().is_some() {
                    self.editor.cancel();
                }
            }
            Action::SetLifespan { years } => {
                self.lifespan_years = years;
                let total = calendar::total_weeks(years);
                if self.editor.selected_week().is_some_and(|w| w >= total) {
                    self.editor.cancel();
                }
            }
            Action::SelectWeek { week } => self.editor.open_week(
                week,
                self.birth_date,
                calendar::total_weeks(self.lifespan_years),
            )?,
            Action::OpenByDate => self.editor.open_by_date(),
            Action::SetDescription { text } => self.editor.set_description(text)?,
            Action::SetDate { text } => self.editor.set_date(text)?,
            Action::SetPickerOpen { open } => self.editor.set_picker_open(open)?,
            Action::Commit => {
                let milestone = self.editor.commit(self.birth_date, &mut self.milestones)?;
                return Ok(Outcome::Committed(milestone));
            }
            Action::Cancel => {
                self.editor.cancel();
                return Ok(Outcome::Cancelled);
            }
        }
        Ok(Outcome::Updated)
    }

    /// Week sequence for the current inputs; empty without a birth date.
    pub fn weeks(&self, today: NaiveDate) -> Vec<WeekDescriptor> {
        week::compute_weeks(self.birth_date, self.lifespan_years, today, &self.milestones)
    }

    /// Everything a renderer needs, recomputed from scratch.
    pub fn view(&self, today: NaiveDate) -> View {
        let grid = self.birth_date.map(|birth| GridView {
            summary: WeekSummary::new(birth, self.lifespan_years, today),
            weeks: self
                .weeks(today)
                .into_iter()
                .map(|w| WeekView {
                    tooltip: w.tooltip(birth, &self.milestones),
                    week: w,
                })
                .collect(),
        });

        View {
            today,
            birth_date: self.birth_date,
            lifespan_years: self.lifespan_years,
            grid,
            milestones: self.milestones.as_slice().to_vec(),
            editor: EditorView {
                mode: self.editor.mode(),
                week: self.editor.selected_week(),
                draft: self.editor.draft().cloned(),
                target_week: self.editor.target(self.birth_date).ok(),
                can_commit: self.editor.can_commit(self.birth_date),
                blocked_by: match self.editor.target(self.birth_date) {
                    Err(reason) if self.editor.is_open() => Some(reason),
                    _ => None,
                },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub today: NaiveDate,
    pub birth_date: Option<NaiveDate>,
    pub lifespan_years: u32,
    /// Absent until a birth date is set.
    pub grid: Option<GridView>,
    pub milestones: Vec<Milestone>,
    pub editor: EditorView,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub summary: WeekSummary,
    pub weeks: Vec<WeekView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    #[serde(flatten)]
    pub week: WeekDescriptor,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditorView {
    pub mode: &'static str,
    pub week: Option<usize>,
    pub draft: Option<Draft>,
    pub target_week: Option<i64>,
    pub can_commit: bool,
    pub blocked_by: Option<String>,
}

/// Parse a birth date field: empty text clears it.
pub fn parse_birth_date(input: &str) -> Result<Option<NaiveDate>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    calendar::parse_date(input).map(Some)
}
