//! Backend → dashboard events and error modeling.

use client_core::LoadTicket;
use shared::{error::ProviderError, protocol::EmployeeRecord};

pub enum UiEvent {
    Info(String),
    EmployeesLoaded {
        ticket: LoadTicket,
        result: Result<Vec<EmployeeRecord>, ProviderError>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadEmployees,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line status text for the dashboard footer.
    pub fn status_line(&self) -> String {
        match self.category {
            UiErrorCategory::Transport => {
                format!("Backend unreachable; check network and refresh. ({})", self.message)
            }
            UiErrorCategory::Validation => format!("Configuration problem: {}", self.message),
            UiErrorCategory::Unknown => format!("Dashboard error: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_transport_failures() {
        let err = UiError::from_message(
            UiErrorContext::LoadEmployees,
            "backend worker disconnected",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::LoadEmployees);
        assert!(err.status_line().starts_with("Backend unreachable"));
    }

    #[test]
    fn classifies_configuration_failures() {
        let err = UiError::from_message(UiErrorContext::BackendStartup, "invalid provider url: x");
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err.message(), "invalid provider url: x");
    }

    #[test]
    fn falls_back_to_unknown() {
        let err = UiError::from_message(UiErrorContext::LoadEmployees, "something odd");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.status_line(), "Dashboard error: something odd");
    }
}
