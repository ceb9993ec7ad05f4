//! UI layer for the intake shell: the single form screen.

pub mod app;

pub use app::IntakeApp;
