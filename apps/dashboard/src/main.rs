use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use client_core::{
    DiceBearAvatars, EmployeeStore, FakerApiProvider, MissingPersonsProvider, PersonsProvider,
};
use crossbeam_channel::{bounded, RecvTimeoutError};
use hr_dashboard::{
    backend_bridge::{self, commands::BackendCommand},
    config,
    controller::{
        coordinator::ViewCoordinator,
        orchestration::{dispatch_backend_command, request_load},
        reducer::apply_ui_event,
    },
    presenter,
};
use shared::{
    domain::{Department, EmployeeStatus, Selection},
    error::ProviderError,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Loads the employee directory and prints the HR dashboard")]
struct Args {
    #[arg(long, default_value = config::DEFAULT_SETTINGS_PATH)]
    config: PathBuf,
    #[arg(long)]
    persons_api_url: Option<String>,
    #[arg(long)]
    batch_size: Option<usize>,
    /// Free-text search over name, email and department.
    #[arg(long, default_value = "")]
    query: String,
    /// Department label, or "all".
    #[arg(long, default_value = "all")]
    department: Selection<Department>,
    /// Status (active, on-leave, terminated), or "all".
    #[arg(long, default_value = "all")]
    status: Selection<EmployeeStatus>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(&args.config)?;
    if let Some(url) = args.persons_api_url {
        settings.persons_api_url = url;
    }
    if let Some(batch_size) = args.batch_size {
        settings.batch_size = batch_size;
    }
    tracing::info!(?settings, "dashboard settings resolved");

    let provider: Arc<dyn PersonsProvider> =
        match FakerApiProvider::new(&settings.persons_api_url, settings.request_timeout()) {
            Ok(provider) => Arc::new(provider),
            Err(err) => {
                tracing::error!(error = %err, "persons provider unavailable");
                Arc::new(MissingPersonsProvider::new(err.to_string()))
            }
        };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded(64);
    let worker = backend_bridge::runtime::launch(cmd_rx, ui_tx, provider);

    let mut store = EmployeeStore::with_avatars(Arc::new(DiceBearAvatars::new(
        settings.avatar_base_url.clone(),
    )))
    .with_batch_size(settings.batch_size);

    let mut view = ViewCoordinator::new();
    view.set_query(args.query);
    view.set_department_filter(args.department);
    view.set_status_filter(args.status);

    let mut status = String::new();
    let ticket = request_load(&cmd_tx, &mut store, &mut status);

    // Allow the provider's own timeout to fire before giving up here.
    let deadline = settings.request_timeout() + Duration::from_secs(5);
    while store.is_loading() {
        match ui_rx.recv_timeout(deadline) {
            Ok(event) => apply_ui_event(&mut store, event, &mut status),
            Err(RecvTimeoutError::Timeout) => {
                store.complete_load(
                    ticket,
                    Err(ProviderError::Transport("no response from backend worker".into())),
                );
                status = "Timed out waiting for employees".to_string();
            }
            Err(RecvTimeoutError::Disconnected) => {
                store.complete_load(
                    ticket,
                    Err(ProviderError::Transport("backend worker disconnected".into())),
                );
                status = "Backend worker stopped unexpectedly".to_string();
            }
        }
    }

    print!("{}", presenter::render_dashboard(&store, &view, &status));

    dispatch_backend_command(&cmd_tx, BackendCommand::Shutdown, &mut status);
    if worker.join().is_err() {
        tracing::warn!("backend worker panicked during shutdown");
    }
    Ok(())
}
