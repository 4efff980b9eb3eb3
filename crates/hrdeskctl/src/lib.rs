//! hrdeskctl library - exposes modules for testing

pub mod cli;
pub mod commands;
pub mod demo;
pub mod errors;
pub mod logging;
pub mod output;
