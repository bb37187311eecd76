//! Visitor-counter client for a personal portfolio site.
//!
//! The counting service is an external HTTP collaborator; this crate owns the
//! client half: layered endpoint resolution, the single-call request cycle
//! with last-trigger-wins ordering, the view-state machine, and the rendered
//! label.

pub mod api;
pub mod config;
pub mod counter;
pub mod render;
