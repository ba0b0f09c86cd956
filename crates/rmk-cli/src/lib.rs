//! CLI library components for the remarketing converter.

pub mod config;
pub mod logging;
pub mod pipeline;
