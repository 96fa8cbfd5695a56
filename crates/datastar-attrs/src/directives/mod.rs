//! # Directive Builders
//!
//! One function per Datastar directive. Every builder has the same shape:
//!
//! 1. Start from the directive keyword (`on:click`, `indicator`, `signals`, ...)
//! 2. Append each modifier in call order, using its own delimiter
//! 3. Compose the value: raw expression, object literal, filter or JSON
//! 4. Return an [`Attr`](crate::Attr), bare when there is no value
//!
//! Expressions are opaque strings. Builders never parse, validate, or quote
//! them; escaping happens when the [`Attr`](crate::Attr) is rendered.
//!
//! ## Modules
//!
//! - [`attrs`]: `data-attr`, `data-class`, `data-style` (object maps)
//! - [`binding`]: `data-bind`, `data-indicator`, `data-ref` (signal names)
//! - [`signals`]: `data-signals`, `data-computed`, `data-effect`, `data-json-signals`
//! - [`events`]: `data-on:*`, `data-on-intersect`, `data-on-interval`, `data-init`,
//!   `data-on-signal-patch`, `data-on-signal-patch-filter`
//! - [`dom`]: `data-ignore`, `data-ignore-morph`, `data-preserve-attr`, `data-show`, `data-text`
//! - [`spec`]: registry describing every directive

pub mod attrs;
pub mod binding;
pub mod dom;
pub mod events;
pub mod signals;
pub mod spec;

pub use attrs::{attr, class, style};
pub use binding::{bind, indicator, reference};
pub use dom::{ignore, ignore_morph, preserve_attr, show, text};
pub use events::{init, on, on_intersect, on_interval, on_signal_patch, on_signal_patch_filter};
pub use signals::{computed, effect, json_signals, signals};
pub use spec::{get_spec, DirectiveSpec, ValueRule, DIRECTIVES};
