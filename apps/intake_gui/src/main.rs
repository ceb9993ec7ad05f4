use clap::Parser;
use crossbeam_channel::bounded;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::IntakeApp;

#[derive(Parser, Debug)]
struct Args {
    /// Create-record endpoint the form submits to. Falls back to the
    /// INTAKE_ENDPOINT environment variable, then the built-in default.
    #[arg(long)]
    endpoint: Option<String>,
}

fn resolve_endpoint(cli_endpoint: Option<String>) -> String {
    if let Some(endpoint) = cli_endpoint {
        return endpoint;
    }
    if let Ok(endpoint) = std::env::var("INTAKE_ENDPOINT") {
        if !endpoint.trim().is_empty() {
            return endpoint;
        }
    }
    form_core::DEFAULT_ENDPOINT.to_string()
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let endpoint = resolve_endpoint(args.endpoint);
    tracing::info!(%endpoint, "employee intake starting");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(endpoint, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Intake")
            .with_inner_size([560.0, 780.0])
            .with_min_inner_size([440.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Employee Intake",
        options,
        Box::new(|_cc| Ok(Box::new(IntakeApp::new(cmd_tx, ui_rx)))),
    )
}
