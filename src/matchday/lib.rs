//! # Matchday Architecture
//!
//! Matchday is a **UI-agnostic league-tracking library**. The menu-driven
//! binary is just one client; everything from the API inward takes plain Rust
//! arguments, returns plain Rust types, and never touches stdout, stderr, or
//! the process exit code.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs)                                         │
//! │  - Menu loop, prompt/re-prompt parsing, terminal output      │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - LeagueApi: thin facade, one method per operation          │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Business logic, returns Result<CmdResult>                 │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                        │
//! │  - LeagueStore: match arena + registry/index/history/schedule│
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership of matches
//!
//! The store's append-only arena is the single owner of every match record.
//! The date index, the undo history, and the fixture queue hold [`model::MatchId`]
//! values, never references, so removing a match from one structure can never
//! dangle another. Matches are never physically deleted; undo marks them
//! retracted and every query skips retracted records.
//!
//! ## Module overview
//!
//! - [`api`]: the `LeagueApi` facade — entry point for all operations
//! - [`commands`]: business logic for each menu operation
//! - [`store`]: the record store and its four access structures
//! - [`ranking`]: the standings ranker and its two sort strategies
//! - [`model`]: core data types (`Team`, `Match`, ids)
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod ranking;
pub mod store;
