// src/cli/mod.rs
pub mod args;
pub mod dispatch;
pub mod handlers;
pub mod input;

pub use args::Cli;
