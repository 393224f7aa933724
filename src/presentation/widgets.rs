//! Reusable UI widgets

pub mod clock_face;
pub mod status_bar;
