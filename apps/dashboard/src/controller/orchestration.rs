//! Command orchestration from dashboard actions to the backend command queue.

use client_core::{EmployeeStore, LoadTicket};
use crossbeam_channel::{Sender, TrySendError};
use shared::error::ProviderError;

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::LoadEmployees { .. } => "load_employees",
        BackendCommand::Shutdown => "shutdown",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued dashboard->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected (possible startup failure); refresh to retry"
                .to_string();
            false
        }
    }
}

/// Starts a store load and hands the fetch to the backend worker.
///
/// When the command cannot be queued the load is completed immediately as a
/// failure so the store never stays in the loading state.
pub fn request_load(
    cmd_tx: &Sender<BackendCommand>,
    store: &mut EmployeeStore,
    status: &mut String,
) -> LoadTicket {
    let ticket = store.begin_load();
    let cmd = BackendCommand::LoadEmployees {
        ticket,
        quantity: store.batch_size(),
    };
    if !dispatch_backend_command(cmd_tx, cmd, status) {
        store.complete_load(ticket, Err(ProviderError::Transport(status.clone())));
    }
    ticket
}
