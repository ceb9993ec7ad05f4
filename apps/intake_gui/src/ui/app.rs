use crossbeam_channel::{Receiver, Sender};
use form_core::{EmployeeDraft, ValidationErrors};
use shared::domain::{Department, EmployeeRole, Field};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Success,
    Error,
}

/// The single outcome line shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub severity: StatusSeverity,
    pub text: String,
}

pub struct IntakeApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    // Local mirror of the controller-owned record; every edit is forwarded
    // to the worker so both sides hold the same values.
    draft: EmployeeDraft,
    errors: ValidationErrors,
    status: Option<StatusLine>,
    worker_ready: bool,
}

impl IntakeApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            draft: EmployeeDraft::default(),
            errors: ValidationErrors::default(),
            status: None,
            worker_ready: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.worker_ready = true;
                }
                UiEvent::WorkerFailed(text) => {
                    self.status = Some(StatusLine {
                        severity: StatusSeverity::Error,
                        text,
                    });
                }
                UiEvent::FormRejected(errors) => {
                    self.errors = errors;
                }
                UiEvent::SubmitAccepted { message } => {
                    self.draft.clear();
                    self.errors.clear();
                    self.status = Some(StatusLine {
                        severity: StatusSeverity::Success,
                        text: message,
                    });
                }
                UiEvent::SubmitRejected { message } | UiEvent::SubmitFailed { message } => {
                    self.errors.clear();
                    self.status = Some(StatusLine {
                        severity: StatusSeverity::Error,
                        text: message,
                    });
                }
            }
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value.clone());
        self.dispatch(BackendCommand::UpdateField { field, value });
    }

    fn submit_form(&mut self) {
        self.dispatch(BackendCommand::Submit);
    }

    fn reset_form(&mut self) {
        self.draft.clear();
        self.errors.clear();
        self.status = None;
        self.dispatch(BackendCommand::Reset);
    }

    fn show_inline_error(&self, ui: &mut egui::Ui, field: Field) {
        if let Some(message) = self.errors.get(field) {
            ui.colored_label(ui.visuals().error_fg_color, message);
        }
    }

    fn form_text_field(&mut self, ui: &mut egui::Ui, field: Field, hint: &str) {
        ui.label(egui::RichText::new(field.label()).strong());
        let mut value = self.draft.get(field).to_string();
        let edit = egui::TextEdit::singleline(&mut value)
            .id_salt(field.as_str())
            .hint_text(
                egui::RichText::new(hint)
                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
            )
            .desired_width(f32::INFINITY);
        let response = ui.add_sized([ui.available_width(), 30.0], edit);
        if response.changed() {
            self.set_field(field, value);
        }
        self.show_inline_error(ui, field);
        ui.add_space(4.0);
    }

    fn form_select_field(&mut self, ui: &mut egui::Ui, field: Field, options: &[&'static str]) {
        ui.label(egui::RichText::new(field.label()).strong());
        let current = self.draft.get(field).to_string();
        let mut selected = current.clone();
        egui::ComboBox::from_id_salt(field.as_str())
            .selected_text(if selected.is_empty() {
                "Select".to_string()
            } else {
                selected.clone()
            })
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(&mut selected, (*option).to_string(), *option);
                }
            });
        if selected != current {
            self.set_field(field, selected);
        }
        self.show_inline_error(ui, field);
        ui.add_space(4.0);
    }

    fn show_status_line(&self, ui: &mut egui::Ui) {
        if let Some(status) = &self.status {
            let color = match status.severity {
                StatusSeverity::Success => egui::Color32::from_rgb(0x27, 0x9f, 0x4d),
                StatusSeverity::Error => ui.visuals().error_fg_color,
            };
            ui.colored_label(color, &status.text);
        }
    }

    fn show_form_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(420.0, 520.0);
            ui.add_space((avail.y * 0.05).clamp(8.0, 40.0));

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                egui::Frame::NONE
                    .fill(ui.visuals().faint_bg_color)
                    .corner_radius(12.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(18, 16))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(8.0, 8.0);

                        ui.heading("Add Employee");
                        self.show_status_line(ui);
                        ui.add_space(4.0);

                        self.form_text_field(ui, Field::Name, "Ada Lovelace");
                        self.form_text_field(ui, Field::EmployeeId, "EMP-001");
                        self.form_text_field(ui, Field::Email, "ada@example.com");
                        self.form_text_field(ui, Field::PhoneNumber, "10 digits");

                        let departments = Department::ALL.map(|d| d.as_str());
                        self.form_select_field(ui, Field::Department, &departments);

                        self.form_text_field(ui, Field::DateOfJoining, "YYYY-MM-DD");

                        let roles = EmployeeRole::ALL.map(|r| r.as_str());
                        self.form_select_field(ui, Field::Role, &roles);

                        ui.add_space(6.0);
                        ui.horizontal(|ui| {
                            let submit = egui::Button::new(
                                egui::RichText::new("Submit").strong(),
                            )
                            .min_size(egui::vec2(120.0, 32.0));
                            if ui.add_enabled(self.worker_ready, submit).clicked() {
                                self.submit_form();
                            }

                            let reset = egui::Button::new("Reset")
                                .min_size(egui::vec2(120.0, 32.0));
                            if ui.add(reset).clicked() {
                                self.reset_form();
                            }
                        });
                    });
            });
        });
    }
}

impl eframe::App for IntakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_form_screen(ctx);
        // Submission outcomes arrive from the worker thread; poll for them
        // even while the window sees no input.
        ctx.request_repaint_after(std::time::Duration::from_millis(150));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn app_with_channels() -> (
        IntakeApp,
        Receiver<BackendCommand>,
        Sender<UiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        (IntakeApp::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    #[test]
    fn set_field_updates_draft_and_queues_backend_update() {
        let (mut app, cmd_rx, _ui_tx) = app_with_channels();

        app.set_field(Field::Name, "Grace Hopper".to_string());

        assert_eq!(app.draft.name, "Grace Hopper");
        match cmd_rx.try_recv().expect("queued command") {
            BackendCommand::UpdateField { field, value } => {
                assert_eq!(field, Field::Name);
                assert_eq!(value, "Grace Hopper");
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn accepted_submit_clears_draft_and_shows_success() {
        let (mut app, _cmd_rx, ui_tx) = app_with_channels();
        app.draft.name = "Grace Hopper".to_string();
        app.draft.email = "grace@example.com".to_string();

        ui_tx
            .send(UiEvent::SubmitAccepted {
                message: "Employee added successfully.".to_string(),
            })
            .expect("send event");
        app.process_ui_events();

        assert!(app.draft.is_empty());
        assert_eq!(
            app.status,
            Some(StatusLine {
                severity: StatusSeverity::Success,
                text: "Employee added successfully.".to_string(),
            })
        );
    }

    #[test]
    fn rejected_submit_keeps_draft_and_shows_body_text() {
        let (mut app, _cmd_rx, ui_tx) = app_with_channels();
        app.draft.name = "Grace Hopper".to_string();

        ui_tx
            .send(UiEvent::SubmitRejected {
                message: "Duplicate employee ID".to_string(),
            })
            .expect("send event");
        app.process_ui_events();

        assert_eq!(app.draft.name, "Grace Hopper");
        assert_eq!(
            app.status,
            Some(StatusLine {
                severity: StatusSeverity::Error,
                text: "Duplicate employee ID".to_string(),
            })
        );
    }

    #[test]
    fn validation_rejection_shows_inline_errors_without_touching_status() {
        let (mut app, _cmd_rx, ui_tx) = app_with_channels();
        let errors = form_core::validate(&EmployeeDraft::default());

        ui_tx.send(UiEvent::FormRejected(errors)).expect("send event");
        app.process_ui_events();

        assert_eq!(app.errors.len(), 7);
        assert!(app.status.is_none());
    }

    #[test]
    fn reset_clears_local_state_and_notifies_worker() {
        let (mut app, cmd_rx, _ui_tx) = app_with_channels();
        app.draft.name = "Grace Hopper".to_string();
        app.status = Some(StatusLine {
            severity: StatusSeverity::Error,
            text: "Duplicate employee ID".to_string(),
        });

        app.reset_form();

        assert!(app.draft.is_empty());
        assert!(app.errors.is_empty());
        assert!(app.status.is_none());
        assert!(matches!(
            cmd_rx.try_recv().expect("queued command"),
            BackendCommand::Reset
        ));
    }
}
