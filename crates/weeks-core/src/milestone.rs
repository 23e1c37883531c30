use crate::calendar::WEEKS_PER_YEAR;
use crate::error::{Result, WeeksError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Milestone
// ---------------------------------------------------------------------------

/// An annotation attached to one week of the grid.
///
/// `week_index` is signed: a milestone derived from a date before birth keeps
/// its negative index and simply never renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub week_index: i64,
    pub description: String,
}

impl Milestone {
    /// Build a milestone, rejecting blank descriptions. The description is
    /// stored trimmed.
    pub fn new(week_index: i64, description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(WeeksError::EmptyDescription);
        }
        Ok(Self {
            week_index,
            description: trimmed.to_string(),
        })
    }

    /// Milestone at the first week of the given age.
    pub fn at_age(years: u32, description: impl Into<String>) -> Result<Self> {
        Self::new(i64::from(years) * i64::from(WEEKS_PER_YEAR), description)
    }
}

/// Parse a `WEEK:DESCRIPTION` pair as given on the command line.
impl std::str::FromStr for Milestone {
    type Err = WeeksError;

    fn from_str(s: &str) -> Result<Self> {
        let (week, description) = s
            .split_once(':')
            .ok_or_else(|| WeeksError::InvalidMilestone(format!("expected WEEK:TEXT, got '{s}'")))?;
        let week_index: i64 = week
            .trim()
            .parse()
            .map_err(|_| WeeksError::InvalidMilestone(format!("'{}' is not a week index", week.trim())))?;
        Self::new(week_index, description)
    }
}

// ---------------------------------------------------------------------------
// MilestoneSet
// ---------------------------------------------------------------------------

/// Ordered, append-only collection of milestones.
///
/// Several milestones may share a week; insertion order decides which one a
/// grid cell shows first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneSet {
    items: Vec<Milestone>,
}

/// Life stages every grid starts with: (age in years, description).
pub const DEFAULT_LIFE_STAGES: &[(u32, &str)] = &[
    (18, "Adulthood"),
    (21, "Twenty-one"),
    (30, "Thirty"),
    (40, "Forty"),
    (65, "Retirement"),
];

impl MilestoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in starting set.
    pub fn defaults() -> Self {
        let items = DEFAULT_LIFE_STAGES
            .iter()
            .map(|&(years, description)| Milestone {
                week_index: i64::from(years) * i64::from(WEEKS_PER_YEAR),
                description: description.to_string(),
            })
            .collect();
        Self { items }
    }

    pub fn push(&mut self, milestone: Milestone) {
        self.items.push(milestone);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Milestone> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Milestone] {
        &self.items
    }

    /// First milestone at `week_index`, in insertion order.
    pub fn first_at(&self, week_index: i64) -> Option<&Milestone> {
        self.items.iter().find(|m| m.week_index == week_index)
    }

    /// Every milestone at `week_index`, in insertion order.
    pub fn all_at(&self, week_index: i64) -> Vec<&Milestone> {
        self.items
            .iter()
            .filter(|m| m.week_index == week_index)
            .collect()
    }

    /// Group milestones by week index, preserving insertion order per week.
    pub fn by_week(&self) -> HashMap<i64, Vec<&Milestone>> {
        let mut map: HashMap<i64, Vec<&Milestone>> = HashMap::new();
        for m in &self.items {
            map.entry(m.week_index).or_default().push(m);
        }
        map
    }
}

impl From<Vec<Milestone>> for MilestoneSet {
    fn from(items: Vec<Milestone>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a MilestoneSet {
    type Item = &'a Milestone;
    type IntoIter = std::slice::Iter<'a, Milestone>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
