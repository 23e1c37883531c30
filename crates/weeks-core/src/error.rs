use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeeksError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("birth date {0} is later than today")]
    BirthDateInFuture(chrono::NaiveDate),

    #[error("no birth date set")]
    MissingBirthDate,

    #[error("lifespan {0} is outside 1..=120 years")]
    InvalidLifespan(u32),

    #[error("invalid milestone: {0}")]
    InvalidMilestone(String),

    #[error("milestone description must not be empty")]
    EmptyDescription,

    #[error("week {week} is not on the grid ({total} weeks)")]
    WeekOffGrid { week: usize, total: usize },

    #[error("milestone editor is not open")]
    EditorNotOpen,

    #[error("cannot add milestone yet: {0}")]
    CommitNotReady(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, WeeksError>;
