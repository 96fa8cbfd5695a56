use crate::attr::Attr;
use crate::compose::{self, Filter};
use crate::modifier::Modifier;

/// Attach an event listener that runs an expression.
///
/// The event name is appended after `on:`, followed by the modifiers:
///
/// ```
/// use chrono::TimeDelta;
/// use datastar_attrs::{encode, on, Modifier};
///
/// let half_second = encode::duration(TimeDelta::milliseconds(500)).unwrap();
/// let a = on(
///     "click",
///     "$foo = ''",
///     &[Modifier::Window, Modifier::Debounce, half_second, Modifier::Leading],
/// );
/// assert_eq!(a.name(), "data-on:click__window__debounce.500ms.leading");
/// ```
///
/// An `evt` variable holding the event object is available in the expression.
pub fn on(event: &str, expression: impl Into<String>, modifiers: &[Modifier]) -> Attr {
    Attr::new(&format!("on:{event}"), modifiers, Some(expression.into()))
}

/// Run an expression when the element intersects the viewport.
///
/// ```html
/// <div data-on-intersect__once__full="$fullyIntersected = true"></div>
/// ```
pub fn on_intersect(expression: impl Into<String>, modifiers: &[Modifier]) -> Attr {
    Attr::new("on-intersect", modifiers, Some(expression.into()))
}

/// Run an expression at a regular interval. The client defaults to one
/// second; change it with [`Modifier::Duration`] and a duration value.
///
/// ```html
/// <div data-on-interval__duration.500ms="$count++"></div>
/// ```
pub fn on_interval(expression: impl Into<String>, modifiers: &[Modifier]) -> Attr {
    Attr::new("on-interval", modifiers, Some(expression.into()))
}

/// Run an expression when the element is loaded into the DOM.
///
/// This happens on page load, when the element is patched in, and whenever
/// the attribute itself changes.
///
/// ```html
/// <div data-init__delay.500ms="$count = 1"></div>
/// ```
pub fn init(expression: impl Into<String>, modifiers: &[Modifier]) -> Attr {
    Attr::new("init", modifiers, Some(expression.into()))
}

/// Run an expression whenever signals are patched. A `patch` variable holds
/// the patch details.
pub fn on_signal_patch(expression: impl Into<String>, modifiers: &[Modifier]) -> Attr {
    Attr::new("on-signal-patch", modifiers, Some(expression.into()))
}

/// Restrict which signals `data-on-signal-patch` watches.
///
/// Unlike [`json_signals`](super::json_signals), an empty filter still renders
/// a value: `{}`.
pub fn on_signal_patch_filter(filter: &Filter) -> Attr {
    Attr::new("on-signal-patch-filter", &[], Some(compose::filter(filter)))
}
