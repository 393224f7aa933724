//! Integration layer
//!
//! Wires the pure core to the host terminal and the clock timers:
//! - Runtime: translate → update → execute
//! - Render coalescing and drawing
//! - The application runner loop

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
