//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic address-book library**. The interactive
//! assistant is just one client of it; the same core could back a REST API
//! or any other UI.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  REPL Layer (wired by main.rs + args.rs)                    │
//! │  - Parses command lines, formats output, handles terminal   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session's AddressBook and its SnapshotStore     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the AddressBook                 │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Storage (model.rs, store/)                         │
//! │  - Validating value types (Name, Phone, Birthday)           │
//! │  - Record and AddressBook, incl. the birthday window query  │
//! │  - Abstract SnapshotStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, model, storage), code takes regular
//! Rust arguments, returns `Result<CmdResult>`, never writes to
//! stdout/stderr, and never calls `std::process::exit`. Persistence happens
//! only at the session boundaries: the snapshot is loaded when the API is
//! opened and saved when the session ends.
//!
//! ## Testing Strategy
//!
//! 1. **Model** (`model.rs`): thorough unit tests of validation and the
//!    birthday-window edge cases. This is where the lion's share of testing
//!    lives.
//! 2. **Commands** (`commands/*.rs`): unit tests of each operation against
//!    an in-memory book.
//! 3. **API** (`api.rs`): dispatch and persistence round-trip tests over
//!    `InMemoryStore`.
//! 4. **REPL** (`tests/repl_e2e.rs`): the compiled binary driven over stdin
//!    with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Core data types (`Record`, `AddressBook`, field values)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
