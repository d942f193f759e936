//! Controller layer: view state, backend events, and command orchestration.

pub mod coordinator;
pub mod events;
pub mod orchestration;
pub mod reducer;
