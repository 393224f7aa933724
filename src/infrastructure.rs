//! Infrastructure layer
//!
//! External integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Layered configuration
//! - Clock timers

pub mod cli;
pub mod clock_service;
pub mod config;
pub mod tui;
