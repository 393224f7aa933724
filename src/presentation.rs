//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - The stateless clock component
//! - The face renderer and drawing surfaces
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod face;
pub mod widgets;
