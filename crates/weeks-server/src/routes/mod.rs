pub mod config;
pub mod editor;
pub mod inputs;
pub mod milestones;
pub mod state;
