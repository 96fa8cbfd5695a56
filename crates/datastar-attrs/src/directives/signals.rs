use serde::Serialize;

use crate::attr::Attr;
use crate::compose::{self, computed_object, Filter, Pairs};
use crate::error::Result;
use crate::modifier::Modifier;

/// Patch (add, update, or remove) signals from a JSON-encodable value.
///
/// ```html
/// <div data-signals="{&quot;foo&quot;:{&quot;bar&quot;:1}}"></div>
/// ```
///
/// Setting a signal to `null` removes it. Signal names cannot contain `__`,
/// since that is the modifier delimiter. Fails if the value cannot be encoded.
pub fn signals<T: Serialize + ?Sized>(value: &T, modifiers: &[Modifier]) -> Result<Attr> {
    Ok(Attr::new(
        "signals",
        modifiers,
        Some(compose::signals(value)?),
    ))
}

/// Read-only signals computed from expressions.
///
/// ```html
/// <div data-computed="{total: () => $price * $quantity}"></div>
/// ```
pub fn computed(pairs: impl Into<Pairs>) -> Attr {
    Attr::new("computed", &[], Some(computed_object(&pairs.into())))
}

/// Run an expression on load and whenever a signal it reads changes.
///
/// ```html
/// <div data-effect="$foo = $bar + $baz"></div>
/// ```
pub fn effect(expression: impl Into<String>) -> Attr {
    Attr::new("effect", &[], Some(expression.into()))
}

/// Render the signals as reactive JSON text, optionally filtered.
///
/// ```html
/// <pre data-json-signals="{include: /^app/, exclude: /password/}"></pre>
/// <pre data-json-signals></pre>
/// ```
///
/// An empty filter produces a bare attribute.
pub fn json_signals(filter: &Filter, modifiers: &[Modifier]) -> Attr {
    let value = (!filter.is_empty()).then(|| compose::filter(filter));
    Attr::new("json-signals", modifiers, value)
}
