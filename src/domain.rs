//! Domain logic
//!
//! This module contains the clock's pure, host-independent logic:
//! - Time units and the counter-to-angle mapping
//! - Face geometry and its construction contract
//! - Domain errors

pub mod clock;
pub mod error;
pub mod geometry;
