//! # Khitab Architecture
//!
//! Khitab is a **UI-agnostic correspondence library**. The CLI binary is just
//! one client of it; nothing below the CLI layer writes to stdout/stderr or
//! assumes a terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders tables/badges, exit codes      │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds the store, the letter service, and the review log  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over Rust types                      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backends (store/, service.rs, review.rs)                   │
//! │  - Abstract RecordStore trait                               │
//! │  - SheetsStore (production), InMemoryStore (testing)        │
//! │  - LetterService: remote generation with local fallback     │
//! │  - ReviewLog: JSON side store for review workflow state     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two error policies
//!
//! The letter service degrades gracefully: a failed remote call is replaced
//! with locally fabricated data and reported as [`service::Outcome::Degraded`]
//! so callers can tell the difference without treating it as a failure. The
//! record store does the opposite: its errors always propagate.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//!    This is where the lion's share of testing lives.
//! 2. **Pure modules** (`template`, `filter`, `model`): direct unit tests.
//! 3. **CLI** (`tests/`): end-to-end through the binary with an isolated
//!    `KHITAB_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Record storage abstraction and implementations
//! - [`service`]: Remote letter-generation client with fallback
//! - [`template`]: The local Arabic letter template engine
//! - [`review`]: Review state machine and its side store
//! - [`filter`]: Records table filtering
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`theme`]: Light/dark palette preference
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod review;
pub mod service;
pub mod store;
pub mod template;
pub mod theme;
