//! Toolkit-free domain types for the dashboard widgets manager.

pub mod domain;
pub mod fonts;
pub mod geometry;
pub mod settings;
pub mod theme;
