//! Applies backend events to the store and the footer status line.

use client_core::EmployeeStore;

use crate::controller::events::UiEvent;

pub fn apply_ui_event(store: &mut EmployeeStore, event: UiEvent, status: &mut String) {
    match event {
        UiEvent::Info(message) => {
            tracing::debug!(%message, "backend info");
            *status = message;
        }
        UiEvent::EmployeesLoaded { ticket, result } => {
            if store.complete_load(ticket, result) {
                *status = match store.error() {
                    Some(message) => message.to_string(),
                    None => format!("Loaded {} employees", store.employees().len()),
                };
            }
        }
        UiEvent::Error(err) => {
            tracing::warn!(
                context = ?err.context(),
                category = ?err.category(),
                message = err.message(),
                "backend error"
            );
            *status = err.status_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::{UiError, UiErrorContext};
    use shared::error::{ProviderError, LOAD_FAILURE_MESSAGE};

    #[test]
    fn failed_batch_surfaces_fixed_message() {
        let mut store = EmployeeStore::new();
        let mut status = String::new();
        let ticket = store.begin_load();

        apply_ui_event(
            &mut store,
            UiEvent::EmployeesLoaded {
                ticket,
                result: Err(ProviderError::Status { status: 502 }),
            },
            &mut status,
        );

        assert_eq!(status, LOAD_FAILURE_MESSAGE);
        assert!(!store.is_loading());
    }

    #[test]
    fn stale_batch_leaves_status_alone() {
        let mut store = EmployeeStore::new();
        let stale = store.begin_load();
        let _fresh = store.begin_load();
        let mut status = "Loading".to_string();

        apply_ui_event(
            &mut store,
            UiEvent::EmployeesLoaded {
                ticket: stale,
                result: Ok(Vec::new()),
            },
            &mut status,
        );

        assert_eq!(status, "Loading");
        assert!(store.is_loading());
    }

    #[test]
    fn error_event_sets_status_line() {
        let mut store = EmployeeStore::new();
        let mut status = String::new();
        apply_ui_event(
            &mut store,
            UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "failed to build runtime",
            )),
            &mut status,
        );
        assert_eq!(status, "Dashboard error: failed to build runtime");
    }
}
