use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard};
use weeks_core::config::Config;
use weeks_core::state::{Action, AppState as WeeksState, Outcome, View};

/// Shared application state passed to all route handlers.
///
/// The grid state has exactly one writer at a time: every request takes the
/// lock, applies one action and renders the view before releasing it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    weeks: Arc<Mutex<WeeksState>>,
    pinned_today: Option<NaiveDate>,
}

impl AppState {
    /// Seed the grid state from `config`. `pinned_today` freezes "now",
    /// otherwise the local date is read on every request.
    pub fn new(config: Config, pinned_today: Option<NaiveDate>) -> weeks_core::Result<Self> {
        let initial = config.initial_state()?;
        Ok(Self {
            config: Arc::new(config),
            weeks: Arc::new(Mutex::new(initial)),
            pinned_today,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    fn lock(&self) -> MutexGuard<'_, WeeksState> {
        // `apply` validates before mutating: a poisoned lock never holds a half-applied action.
        self.weeks.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn view(&self) -> View {
        self.lock().view(self.today())
    }

    /// Apply one action and return the outcome with the re-rendered view.
    pub fn apply(&self, action: Action) -> weeks_core::Result<(Outcome, View)> {
        let today = self.today();
        let mut weeks = self.lock();
        let outcome = weeks.apply(action, today)?;
        Ok((outcome, weeks.view(today)))
    }

    /// Read something off the current state under the lock.
    pub fn read<T>(&self, f: impl FnOnce(&WeeksState) -> T) -> T {
        f(&self.lock())
    }

    /// Run several steps against the state under one lock.
    pub fn with<T>(&self, f: impl FnOnce(&mut WeeksState, NaiveDate) -> T) -> T {
        let today = self.today();
        f(&mut self.lock(), today)
    }
}
