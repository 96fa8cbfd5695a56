//! # CLI Behavior
//!
//! The CLI is the only place that touches the filesystem, the terminal, and
//! exit codes. Everything it renders comes from the `datastar-attrs` library.
//!
//! - `datastar-demo` / `datastar-demo generate`: write the demo page.
//! - `datastar-demo catalog`: list the modifier vocabulary and directives.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup, logging, and per-command handlers

mod commands;
pub mod setup;

pub use commands::run;
