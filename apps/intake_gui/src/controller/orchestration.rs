//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::ui::app::{StatusLine, StatusSeverity};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut Option<StatusLine>,
) {
    let cmd_name = match &cmd {
        BackendCommand::UpdateField { .. } => "update_field",
        BackendCommand::Submit => "submit",
        BackendCommand::Reset => "reset",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::trace!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = Some(StatusLine {
                severity: StatusSeverity::Error,
                text: "UI command queue is full; please retry".to_string(),
            });
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = Some(StatusLine {
                severity: StatusSeverity::Error,
                text: "Backend command processor disconnected (possible startup failure); restart the app"
                    .to_string(),
            });
        }
    }
}
