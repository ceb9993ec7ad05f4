//! Backend worker: a spawned thread with its own tokio runtime that owns
//! the form controller and drains the UI command queue.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use form_core::{FormController, SubmitOutcome};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(endpoint: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let mut controller = FormController::new(endpoint);
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            // The submit await is the only suspending operation; commands
            // queued behind it wait, so one request is in flight at a time.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::UpdateField { field, value } => {
                        controller.update_field(field, value);
                    }
                    BackendCommand::Submit => {
                        tracing::info!("backend: submit employee record");
                        let event = match controller.submit().await {
                            SubmitOutcome::Invalid(errors) => {
                                tracing::debug!(
                                    invalid_fields = errors.len(),
                                    "backend: record rejected by validation"
                                );
                                UiEvent::FormRejected(errors)
                            }
                            SubmitOutcome::Accepted => UiEvent::SubmitAccepted {
                                message: form_core::SUBMIT_SUCCESS_MESSAGE.to_string(),
                            },
                            SubmitOutcome::Rejected { message } => {
                                UiEvent::SubmitRejected { message }
                            }
                            SubmitOutcome::TransportFailed => UiEvent::SubmitFailed {
                                message: form_core::TRANSPORT_FAILURE_MESSAGE.to_string(),
                            },
                        };
                        let _ = ui_tx.try_send(event);
                    }
                    BackendCommand::Reset => {
                        controller.reset();
                    }
                }
            }
        });
    });
}
