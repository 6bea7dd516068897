//! Time subsystem.
//!
//! Provides testable timing utilities without coupling to an event loop.
//! Intended usage:
//! - call `Debouncer::notify` for every burst event (e.g. a resize)
//! - call `Debouncer::poll` from the loop's idle tick; it fires once per burst
//!
//! Callers pass the current `Instant` in, so tests never sleep.

mod debounce;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
