//! # datastar-demo
//!
//! A thin CLI over the `datastar-attrs` library. It renders a single HTML page
//! that exercises every directive builder against the real Datastar client,
//! which doubles as living documentation of the attribute syntax.
//!
//! ## Workspace Structure
//!
//! - `crates/datastar-attrs/`: the library, pure formatting with no I/O
//! - `crates/datastar-demo/`: this binary, which owns config, logging and files
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - logging, config, dispatch, file output (commands.rs)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page (src/page.rs)                                         │
//! │  - maud markup, one section per directive family            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  datastar-attrs                                             │
//! │  - builders, modifiers, encoders                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod config;
mod page;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
