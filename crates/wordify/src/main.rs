//! # Wordify CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file
//! only starts the runtime, invokes `cli::run()` and handles process
//! termination.
//!
//! ## Workspace Structure
//!
//! - `crates/wordifyapp/`: UI-agnostic library (lookups, lists, theme, storage)
//! - `crates/wordify/`: this CLI, depending on `wordifyapp`
//!
//! See the `wordifyapp` crate docs for the layering.

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
