//! # Stockpile
//!
//! Stockpile is a **UI-agnostic inventory library**; the CLI binary is just
//! one client of it.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs, args.rs)     argument parsing, terminal output, exit codes
//!          │
//! API (api.rs)               thin facade, structured Result types
//!          │
//! Commands (commands/*.rs)   pure business logic, no I/O assumptions
//!          │
//! Storage (store/)           InventoryStore trait:
//!                            FileStore (production), InMemoryStore (tests)
//! ```
//!
//! From `api.rs` inward, code takes plain arguments, returns plain
//! `Result<CmdResult>` values, and never touches stdout, stderr or
//! `std::process::exit`. The same core could sit behind a REST API or a
//! desktop app unchanged.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `Catalogue`)
//! - [`restock`]: Background restock producer (thread + channel)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod restock;
pub mod store;
