//! # Wordify Architecture
//!
//! Wordify is a **UI-agnostic dictionary library**: look words up, keep a search
//! history and a favorites list, show a word of the day, remember a dark/light
//! preference. The `wordify` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (wordify crate)                                        │
//! │  - Parses arguments, renders output, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Session state: view, displayed record, inline error      │
//! │  - Search ordering (latest search wins)                     │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                │                    │                  │
//!                ▼                    ▼                  ▼
//! ┌──────────────────────┐ ┌────────────────────┐ ┌──────────────┐
//! │ lookup/              │ │ manager.rs         │ │ theme.rs     │
//! │ WordLookup trait     │ │ lists.rs           │ │              │
//! │ HTTP + mock          │ │ history, favorites │ │ dark mode    │
//! └──────────────────────┘ └────────────────────┘ └──────────────┘
//!                                     │                  │
//!                                     ▼                  ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - StorageBackend trait: string values under string keys    │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never exits the
//! process. Diagnostics go through `tracing`; the front end decides whether and
//! where to show them (see [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The facade and session state
//! - [`commands`]: `CmdResult` and messages
//! - [`lookup`]: Dictionary lookups
//! - [`lists`], [`manager`]: History and favorites, and their persistence
//! - [`daily`]: Deterministic word of the day
//! - [`theme`]: Dark/light preference
//! - [`store`]: Key-value persistence
//! - [`model`]: `Word`, `WordRecord` and friends
//! - [`config`], [`init`], [`logging`]: Wiring for the production stack
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod daily;
pub mod error;
pub mod init;
pub mod lists;
pub mod logging;
pub mod lookup;
pub mod manager;
pub mod model;
pub mod store;
pub mod theme;
