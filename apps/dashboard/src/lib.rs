//! Headless HR dashboard: view state over the employee store, a backend
//! worker for remote loads, and text rendering.

pub mod backend_bridge;
pub mod config;
pub mod controller;
pub mod presenter;
