//! # datastar-attrs
//!
//! Typed builders for [Datastar](https://data-star.dev) `data-*` attributes.
//!
//! Datastar reads its behavior from attributes like `data-on:click` or
//! `data-signals`, with a small microsyntax for modifiers
//! (`__debounce.500ms.leading`) and values (`{title: $title}`). This crate
//! builds those names and values and hands them to the markup layer as an
//! [`Attr`]. There is no runtime here, only formatting.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Directive builders (directives/)                           │
//! │  - One function per directive: on, signals, bind, ...       │
//! │  - Name = keyword + modifiers, value = composed or raw      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Composers (compose.rs) and encoders (encode.rs)            │
//! │  - Object literals, filters, JSON                           │
//! │  - Duration and threshold value modifiers                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Vocabulary (modifier.rs) and node (attr.rs)                │
//! │  - Closed Modifier enum, family decides delimiter           │
//! │  - Attr renders through maud, which does the escaping       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use chrono::TimeDelta;
//! use datastar_attrs::{encode, on, signals, Modifier};
//! use serde_json::json;
//!
//! let state = signals(&json!({"count": 0}), &[]).unwrap();
//! assert_eq!(state.to_string(), r#"data-signals="{&quot;count&quot;:0}""#);
//!
//! let debounce = encode::duration(TimeDelta::milliseconds(300)).unwrap();
//! let click = on("click", "$count++", &[Modifier::Debounce, debounce]);
//! assert_eq!(click.to_string(), r#"data-on:click__debounce.300ms="$count++""#);
//! ```
//!
//! ## Errors
//!
//! Only three things can go wrong, and each is reported to the caller as a
//! [`DatastarError`]: a negative duration, a threshold outside `(0, 1]`, and
//! a signal value that can't be encoded as JSON. Non-finite floats count as
//! unencodable; they are rejected instead of being written as `null`.
//! [`Pairs::from_flat`] also rejects a flat key/value list with a dangling
//! key. Nothing is logged.
//!
//! ## Purity
//!
//! Every builder is a pure function of its arguments. There is no shared
//! state, so calling a builder twice with the same input yields identical
//! output.

pub mod attr;
pub mod compose;
pub mod directives;
pub mod encode;
pub mod error;
mod finite;
pub mod modifier;

pub use attr::Attr;
pub use compose::{Filter, Pairs};
pub use directives::{
    attr, bind, class, computed, effect, get_spec, ignore, ignore_morph, indicator, init,
    json_signals, on, on_intersect, on_interval, on_signal_patch, on_signal_patch_filter,
    preserve_attr, reference, show, signals, style, text, DirectiveSpec, ValueRule, DIRECTIVES,
};
pub use error::{DatastarError, Result};
pub use modifier::{Hundredths, Modifier, ModifierFamily};
