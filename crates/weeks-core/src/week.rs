use crate::calendar::{self, WEEKS_PER_YEAR};
use crate::milestone::{Milestone, MilestoneSet};
use chrono::NaiveDate;
use serde::Serialize;

/// One cell of the grid. Derived on every render, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekDescriptor {
    pub index: usize,
    pub lived: bool,
    pub is_current: bool,
    /// First milestone on this week, in insertion order.
    pub milestone: Option<Milestone>,
    /// Further milestones that share this week.
    pub more: usize,
}

impl WeekDescriptor {
    /// Hover text: `Week {n}: {MMM d, yyyy}`, followed by the milestone
    /// descriptions on separate lines.
    pub fn tooltip(&self, birth_date: NaiveDate, milestones: &MilestoneSet) -> String {
        let mut text = match calendar::week_start(birth_date, self.index as i64) {
            Some(date) => format!("Week {}: {}", self.index + 1, calendar::format_short(date)),
            None => format!("Week {}", self.index + 1),
        };
        if self.milestone.is_some() {
            for m in milestones.all_at(self.index as i64) {
                text.push('\n');
                text.push_str(&m.description);
            }
        }
        text
    }
}

/// Build the week sequence for a lifespan.
///
/// Returns an empty sequence when no birth date is set. `weeks_lived` is
/// never negative; once it reaches the end of the lifespan no cell is current.
pub fn compute_weeks(
    birth_date: Option<NaiveDate>,
    lifespan_years: u32,
    today: NaiveDate,
    milestones: &MilestoneSet,
) -> Vec<WeekDescriptor> {
    let Some(birth_date) = birth_date else {
        return Vec::new();
    };

    let total = calendar::total_weeks(lifespan_years);
    let lived = calendar::weeks_lived(birth_date, today);
    let by_week = milestones.by_week();

    (0..total)
        .map(|i| {
            let here = by_week.get(&(i as i64));
            WeekDescriptor {
                index: i,
                lived: (i as u64) < lived,
                is_current: i as u64 == lived,
                milestone: here.and_then(|ms| ms.first()).map(|m| (*m).clone()),
                more: here.map(|ms| ms.len().saturating_sub(1)).unwrap_or(0),
            }
        })
        .collect()
}

/// Split a week sequence into rows of one year each.
pub fn year_rows(weeks: &[WeekDescriptor]) -> std::slice::Chunks<'_, WeekDescriptor> {
    weeks.chunks(WEEKS_PER_YEAR as usize)
}

/// Counts shown next to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekSummary {
    pub total_weeks: usize,
    pub weeks_lived: u64,
    pub weeks_remaining: u64,
    pub percent_lived: f64,
}

impl WeekSummary {
    pub fn new(birth_date: NaiveDate, lifespan_years: u32, today: NaiveDate) -> Self {
        let total_weeks = calendar::total_weeks(lifespan_years);
        let weeks_lived = calendar::weeks_lived(birth_date, today);
        let weeks_remaining = (total_weeks as u64).saturating_sub(weeks_lived);
        let percent_lived = if total_weeks == 0 {
            0.0
        } else {
            (weeks_lived.min(total_weeks as u64) as f64 / total_weeks as f64) * 100.0
        };
        Self {
            total_weeks,
            weeks_lived,
            weeks_remaining,
            percent_lived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn one_year_after_first_week() {
        let weeks = compute_weeks(
            Some(d("2000-01-01")),
            1,
            d("2000-01-08"),
            &MilestoneSet::new(),
        );
        assert_eq!(weeks.len(), 52);
        assert!(weeks[0].lived);
        assert!(!weeks[0].is_current);
        assert!(!weeks[1].lived);
        assert!(weeks[1].is_current);
        assert!(weeks[2..].iter().all(|w| !w.lived && !w.is_current));
    }

    #[test]
    fn no_birth_date_means_no_weeks() {
        let weeks = compute_weeks(None, 90, d("2020-01-01"), &MilestoneSet::defaults());
        assert!(weeks.is_empty());
    }

    #[test]
    fn indices_are_dense_and_ordered() {
        let weeks = compute_weeks(Some(d("1990-06-15")), 3, d("1991-01-01"), &MilestoneSet::new());
        assert_eq!(weeks.len(), 156);
        assert!(weeks.iter().enumerate().all(|(i, w)| w.index == i));
    }

    #[test]
    fn future_birth_date_lives_nothing() {
        let weeks = compute_weeks(Some(d("2030-01-01")), 2, d("2020-01-01"), &MilestoneSet::new());
        assert!(weeks.iter().all(|w| !w.lived));
        assert!(weeks[0].is_current);
        assert_eq!(weeks.iter().filter(|w| w.is_current).count(), 1);
    }

    #[test]
    fn outliving_the_lifespan_has_no_current_week() {
        let weeks = compute_weeks(Some(d("1900-01-01")), 1, d("2000-01-01"), &MilestoneSet::new());
        assert_eq!(weeks.len(), 52);
        assert!(weeks.iter().all(|w| w.lived));
        assert_eq!(weeks.iter().filter(|w| w.is_current).count(), 0);
    }

    #[test]
    fn last_cell_is_current_in_final_week() {
        for today in ["2000-12-23", "2000-12-29"] {
            let weeks = compute_weeks(Some(d("2000-01-01")), 1, d(today), &MilestoneSet::new());
            let current: Vec<usize> = weeks.iter().filter(|w| w.is_current).map(|w| w.index).collect();
            assert_eq!(current, vec![51], "{today}");
            assert!(weeks[..51].iter().all(|w| w.lived));
            assert!(!weeks[51].lived);
        }
    }

    #[test]
    fn no_current_cell_once_lifespan_is_reached() {
        let weeks = compute_weeks(Some(d("2000-01-01")), 1, d("2000-12-30"), &MilestoneSet::new());
        assert!(weeks.iter().all(|w| w.lived && !w.is_current));
    }

    #[test]
    fn exactly_one_current_week_within_lifespan() {
        for today in ["1980-01-01", "1995-07-04", "2040-12-20"] {
            let weeks = compute_weeks(Some(d("1980-01-01")), 70, d(today), &MilestoneSet::new());
            assert_eq!(weeks.iter().filter(|w| w.is_current).count(), 1, "{today}");
        }
    }

    #[test]
    fn milestones_attach_only_inside_range() {
        let set = MilestoneSet::from(vec![
            Milestone::new(-1, "before").unwrap(),
            Milestone::new(0, "birth").unwrap(),
            Milestone::new(51, "last").unwrap(),
            Milestone::new(52, "after").unwrap(),
        ]);
        let weeks = compute_weeks(Some(d("2000-01-01")), 1, d("2000-01-01"), &set);
        let attached: Vec<(usize, &str)> = weeks
            .iter()
            .filter_map(|w| w.milestone.as_ref().map(|m| (w.index, m.description.as_str())))
            .collect();
        assert_eq!(attached, vec![(0, "birth"), (51, "last")]);
    }

    #[test]
    fn shared_week_reports_extra_milestones() {
        let set = MilestoneSet::from(vec![
            Milestone::new(3, "first").unwrap(),
            Milestone::new(3, "second").unwrap(),
            Milestone::new(3, "third").unwrap(),
        ]);
        let birth = d("2000-01-01");
        let weeks = compute_weeks(Some(birth), 1, d("2000-01-01"), &set);
        assert_eq!(weeks[3].milestone.as_ref().unwrap().description, "first");
        assert_eq!(weeks[3].more, 2);
        assert_eq!(
            weeks[3].tooltip(birth, &set),
            "Week 4: Jan 22, 2000\nfirst\nsecond\nthird"
        );
    }

    #[test]
    fn default_milestones_land_on_their_ages() {
        let weeks = compute_weeks(
            Some(d("2000-01-01")),
            90,
            d("2020-01-01"),
            &MilestoneSet::defaults(),
        );
        let marked: Vec<usize> = weeks
            .iter()
            .filter(|w| w.milestone.is_some())
            .map(|w| w.index)
            .collect();
        assert_eq!(marked, vec![936, 1092, 1560, 2080, 3380]);
    }

    #[test]
    fn tooltip_without_milestone() {
        let birth = d("2000-01-01");
        let weeks = compute_weeks(Some(birth), 1, birth, &MilestoneSet::new());
        assert_eq!(weeks[1].tooltip(birth, &MilestoneSet::new()), "Week 2: Jan 8, 2000");
    }

    #[test]
    fn rows_are_one_year_each() {
        let weeks = compute_weeks(Some(d("2000-01-01")), 3, d("2000-01-01"), &MilestoneSet::new());
        let rows: Vec<usize> = year_rows(&weeks).map(|r| r.len()).collect();
        assert_eq!(rows, vec![52, 52, 52]);
    }

    #[test]
    fn summary_counts() {
        let s = WeekSummary::new(d("2000-01-01"), 1, d("2000-07-01"));
        assert_eq!(s.total_weeks, 52);
        assert_eq!(s.weeks_lived, 26);
        assert_eq!(s.weeks_remaining, 26);
        assert!((s.percent_lived - 50.0).abs() < 1e-9);

        let past = WeekSummary::new(d("1900-01-01"), 1, d("2000-01-01"));
        assert_eq!(past.weeks_remaining, 0);
        assert!((past.percent_lived - 100.0).abs() < 1e-9);
    }
}
