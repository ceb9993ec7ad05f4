//! Backend commands queued from UI to backend worker.

use shared::domain::Field;

pub enum BackendCommand {
    UpdateField { field: Field, value: String },
    Submit,
    Reset,
}
