//! Backend worker: owns a tokio runtime and performs remote fetches off the
//! dashboard loop.

use std::{sync::Arc, thread};

use client_core::PersonsProvider;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    provider: Arc<dyn PersonsProvider>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadEmployees { ticket, quantity } => {
                        let provider = Arc::clone(&provider);
                        let ui_tx = ui_tx.clone();
                        // Fetches may overlap; the store drops superseded tickets.
                        tokio::spawn(async move {
                            let result = provider.fetch_persons(quantity).await;
                            if let Err(err) = &result {
                                tracing::warn!(
                                    generation = ticket.generation(),
                                    error = %err,
                                    "persons fetch failed"
                                );
                            }
                            let _ = ui_tx.send(UiEvent::EmployeesLoaded { ticket, result });
                        });
                    }
                    BackendCommand::Shutdown => break,
                }
            }
            tracing::debug!("backend worker stopped");
        });
    })
}
