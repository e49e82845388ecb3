//! # Snipcat Architecture
//!
//! Snipcat browses a catalog of reusable text snippets ("items") filed under
//! a hierarchy of categories. The catalog is owned elsewhere; snipcat reads
//! snapshots of it and answers four questions about them: what does the
//! category tree look like, which items match a search and tag selection, in
//! what order should they be shown, and what color is each tag.
//!
//! Like any client of the catalog, it is a library first. The binary is one
//! UI over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses selectors              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Composes the engine into listings, trees, tag summaries  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Engine (catalog/)       Sources (store/)           │
//! │  - Pure, infallible functions    - CatalogSource trait      │
//! │    over snapshots                - JSON file, in-memory     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code takes and returns Rust values. It never prints,
//! never exits the process, and never assumes a terminal. Only sources touch
//! the filesystem, and only the CLI touches stdout.
//!
//! ## Display indexes
//!
//! Listings number their rows from 1; `view` and `copy` accept those numbers
//! or raw item ids. See [`index`].
//!
//! ## Testing
//!
//! 1. **Engine** (`catalog/*.rs`): exhaustive unit tests of each operation.
//! 2. **Commands** (`commands/*.rs`): behavior over the in-memory fixtures.
//! 3. **API** (`api.rs`): dispatch and selector parsing.
//! 4. **CLI** (`cli/`, `tests/`): argument parsing, rendering, and end-to-end
//!    runs of the binary against a temporary catalog.
//!
//! ## Module Overview
//!
//! - [`catalog`]: tree building, filtering, sorting, tag colors
//! - [`api`]: the facade every UI goes through
//! - [`commands`]: business logic per command
//! - [`store`]: snapshot sources
//! - [`model`]: `Category`, `Item`, `CategoryNode`
//! - [`index`]: display indexes and item selectors
//! - [`config`]: persisted defaults
//! - [`init`]: path resolution and context setup for clients
//! - [`clipboard`]: cross-platform clipboard support
//! - [`error`]: error types

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod store;
