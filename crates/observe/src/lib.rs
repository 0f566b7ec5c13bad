//! Initialization logic for logging shared by all binaries of the workspace.
pub mod config;
mod panic_hook;
pub mod tracing;

pub use config::Config;
