//! # CLI Behavior
//!
//! This is **one UI client** for wordifyapp, not the application itself. It owns
//! terminal I/O, exit codes and output formatting; everything else lives in the
//! library.
//!
//! ## Naked Execution
//!
//! `wordify` with no arguments shows the word of the day. `wordify <word>` is
//! the same as `wordify define <word>`; several words are joined with spaces.
//!
//! ## Output
//!
//! `--output text` (default) renders through templates with a light or dark
//! palette taken from the saved theme. `--output json` prints the structured
//! result instead. Logs go to stderr in either mode.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Template rendering
//! - `setup`: Argument parsing via clap
//! - `styles`: Light and dark themes
//! - `templates`: Embedded template files

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
