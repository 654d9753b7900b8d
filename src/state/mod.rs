//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! View state lives in plain structs with event-handler methods so the
//! conversation logic stays unit-testable without a browser; components
//! wrap them in `RwSignal` context providers.

pub mod chat;
pub mod session;
