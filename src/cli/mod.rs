//! CLI module
//!
//! Command-line interface over a pagination session.
//!
//! # Commands
//!
//! - `page` - Offset page by page number
//! - `hyper` - Offset page with navigation metadata
//! - `hyper-index` - Deletion-resilient page by stable index
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
