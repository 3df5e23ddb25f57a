//! Observability for the airport service
//!
//! Structured logging through `tracing`. Request-level spans come from the
//! `TraceLayer` on the router; directory operations log their own events.

mod logger;

pub use logger::{init_logging, LogFormat, DEFAULT_FILTER};
