//! Bridge between the egui thread and the backend worker that owns the
//! form controller.

pub mod commands;
pub mod runtime;
