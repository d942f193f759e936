//! Backend commands queued from the dashboard loop to the backend worker.

use client_core::LoadTicket;

pub enum BackendCommand {
    LoadEmployees { ticket: LoadTicket, quantity: usize },
    Shutdown,
}
