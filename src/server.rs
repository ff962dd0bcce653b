//! Demonstration web application.
//!
//! This module re-exports `fasterhtml-server`: route table, handlers,
//! SQLite notes store, settings and the hyper-based HTTP server.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fasterhtml::server::{Settings, run};
//!
//! # async fn example() -> fasterhtml::server::Result<()> {
//! run(Settings::from_env()?).await
//! # }
//! ```

pub use fasterhtml_server::*;
