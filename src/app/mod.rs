pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod session;

pub use session::Session;
