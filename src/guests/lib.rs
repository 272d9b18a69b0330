//! # Guests Architecture
//!
//! Guests keeps an ordered guest list in a single JSON file. The binary is a thin
//! client: everything interesting lives in this library, and the CLI only parses
//! arguments, prints results and picks exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - read, create, init                                       │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - GuestStore trait: whole-list load/save                   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The file is the only state
//!
//! Nothing is cached between invocations. Every operation loads the whole list,
//! and `create` writes the whole list back. There is no locking: two concurrent
//! `create` calls may lose one of the names.
//!
//! ## Errors are fatal
//!
//! A missing, unreadable or malformed guest file is an error, never an empty
//! list. Callers get the underlying [`error::GuestsError`] and decide what to do;
//! the CLI prints it and exits with status 1.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::GuestList`] type
//! - [`config`]: Data file location and output settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
