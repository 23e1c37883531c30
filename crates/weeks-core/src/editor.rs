use crate::calendar;
use crate::error::{Result, WeeksError};
use crate::milestone::{Milestone, MilestoneSet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Transient form fields of an open editor.
///
/// `date` holds the raw text of the date field so that half-typed or invalid
/// input can be shown back and simply keeps the commit action disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub description: String,
    pub date: String,
    pub picker_open: bool,
}

impl Draft {
    fn selected_date(&self) -> Option<std::result::Result<NaiveDate, String>> {
        if self.date.trim().is_empty() {
            return None;
        }
        Some(calendar::parse_date(&self.date).map_err(|_| {
            format!("'{}' is not a valid date", self.date.trim())
        }))
    }
}

// ---------------------------------------------------------------------------
// MilestoneEditor
// ---------------------------------------------------------------------------

/// State machine behind the "add milestone" dialog.
///
/// ```text
/// Idle --click cell--> ByWeek --commit/cancel--> Idle
/// Idle --add by date--> ByDate --commit/cancel--> Idle
/// ```
///
/// Opening the editor while it is already open re-targets it and discards
/// the previous draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MilestoneEditor {
    #[default]
    Idle,
    ByWeek {
        week: usize,
        draft: Draft,
    },
    ByDate {
        draft: Draft,
    },
}

impl MilestoneEditor {
    pub fn is_open(&self) -> bool {
        !matches!(self, MilestoneEditor::Idle)
    }

    pub fn mode(&self) -> &'static str {
        match self {
            MilestoneEditor::Idle => "idle",
            MilestoneEditor::ByWeek { .. } => "by_week",
            MilestoneEditor::ByDate { .. } => "by_date",
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            MilestoneEditor::Idle => None,
            MilestoneEditor::ByWeek { draft, .. } | MilestoneEditor::ByDate { draft } => {
                Some(draft)
            }
        }
    }

    fn draft_mut(&mut self) -> Result<&mut Draft> {
        match self {
            MilestoneEditor::Idle => Err(WeeksError::EditorNotOpen),
            MilestoneEditor::ByWeek { draft, .. } | MilestoneEditor::ByDate { draft } => {
                Ok(draft)
            }
        }
    }

    // ---------------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------------

    /// A grid cell was clicked. Cells only exist once a birth date is set,
    /// and only for `week < total_weeks`.
    pub fn open_week(
        &mut self,
        week: usize,
        birth_date: Option<NaiveDate>,
        total_weeks: usize,
    ) -> Result<()> {
        if birth_date.is_none() {
            return Err(WeeksError::MissingBirthDate);
        }
        if week >= total_weeks {
            return Err(WeeksError::WeekOffGrid {
                week,
                total: total_weeks,
            });
        }
        *self = MilestoneEditor::ByWeek {
            week,
            draft: Draft::default(),
        };
        Ok(())
    }

    /// The clicked cell, in week mode.
    pub fn selected_week(&self) -> Option<usize> {
        match self {
            MilestoneEditor::ByWeek { week, .. } => Some(*week),
            _ => None,
        }
    }

    /// "Add milestone by date" was requested.
    pub fn open_by_date(&mut self) {
        *self = MilestoneEditor::ByDate {
            draft: Draft::default(),
        };
    }

    pub fn set_description(&mut self, text: impl Into<String>) -> Result<()> {
        self.draft_mut()?.description = text.into();
        Ok(())
    }

    /// Store the raw date text. Choosing a date closes the picker.
    pub fn set_date(&mut self, text: impl Into<String>) -> Result<()> {
        let draft = self.draft_mut()?;
        draft.date = text.into();
        draft.picker_open = false;
        Ok(())
    }

    pub fn set_picker_open(&mut self, open: bool) -> Result<()> {
        self.draft_mut()?.picker_open = open;
        Ok(())
    }

    /// Week the pending milestone would land on, or why it cannot be added.
    ///
    /// In week mode a filled-in date field takes precedence over the clicked
    /// cell. Date-derived indices are not range-checked.
    pub fn target(&self, birth_date: Option<NaiveDate>) -> std::result::Result<i64, String> {
        let (week, draft) = match self {
            MilestoneEditor::Idle => return Err("editor is not open".to_string()),
            MilestoneEditor::ByWeek { week, draft } => (Some(*week), draft),
            MilestoneEditor::ByDate { draft } => (None, draft),
        };

        if draft.description.trim().is_empty() {
            return Err("description is empty".to_string());
        }

        match (draft.selected_date(), week) {
            (Some(Ok(date)), _) => {
                let birth = birth_date.ok_or_else(|| "no birth date set".to_string())?;
                Ok(calendar::whole_weeks_between(date, birth))
            }
            (Some(Err(reason)), _) => Err(reason),
            (None, Some(week)) => {
                birth_date.ok_or_else(|| "no birth date set".to_string())?;
                Ok(week as i64)
            }
            (None, None) => Err("no date selected".to_string()),
        }
    }

    pub fn can_commit(&self, birth_date: Option<NaiveDate>) -> bool {
        self.target(birth_date).is_ok()
    }

    /// Append the pending milestone and return to `Idle`.
    ///
    /// On failure the editor keeps its draft untouched.
    pub fn commit(
        &mut self,
        birth_date: Option<NaiveDate>,
        milestones: &mut MilestoneSet,
    ) -> Result<Milestone> {
        if !self.is_open() {
            return Err(WeeksError::EditorNotOpen);
        }
        let week_index = self.target(birth_date).map_err(WeeksError::CommitNotReady)?;
        let description = self.draft().map(|d| d.description.clone()).unwrap_or_default();
        let milestone = Milestone::new(week_index, description)?;
        milestones.push(milestone.clone());
        *self = MilestoneEditor::Idle;
        Ok(milestone)
    }

    /// Discard the draft. Returns whether anything was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        *self = MilestoneEditor::Idle;
        was_open
    }
}
