//! # Clockface - an analog clock for the terminal
//!
//! A clock face drawn with ratatui's braille canvas: three hands driven by
//! independent timers, twelve upright numerals and a soft drop shadow.
//!
//! ## Architecture Overview
//!
//! The crate follows an Elm-like loop:
//!
//! - **Model** (`core::state`): the clock counters and host status
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects such as render requests
//! - **View** (`presentation`): a pure renderer from state to draw commands
//!
//! ## Example Usage
//!
//! ```rust
//! use clockface::core::{
//!     msg::{clock::ClockMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//! use clockface::domain::clock::TimeUnit;
//!
//! let state = AppState::default();
//! let (state, _cmds) = update(Msg::Clock(ClockMsg::Tick(TimeUnit::Seconds)), state);
//!
//! assert_eq!(state.clock.seconds_angle(), 96.0);
//! assert_eq!(state.clock.minutes_angle(), 0.0);
//! assert_eq!(state.clock.hours_angle(), 120.0);
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Time-to-angle model and face geometry
//! - [`core`] - State, messages, update and command execution
//! - [`presentation`] - Face renderer, drawing surfaces, components
//! - [`infrastructure`] - Terminal, timers, CLI and configuration
//! - [`integration`] - The runner loop wiring it all together

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
