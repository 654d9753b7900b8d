//! Networking modules for the backend HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single chat call, `types` defines the shared wire
//! schema for it.

pub mod api;
pub mod types;
