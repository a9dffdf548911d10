//! Observability subsystem.
//!
//! The library only emits `tracing` events (configuration warnings, one
//! debug event per served request, server start/stop). Installing a
//! subscriber is left to the binary or the test harness.

pub mod logging;
