pub mod calendar;
pub mod config;
pub mod editor;
pub mod error;
pub mod milestone;
pub mod state;
pub mod week;

pub use error::{Result, WeeksError};
