use crate::attr::Attr;
use crate::modifier::Modifier;

/// Two-way binding between a signal and an element's value.
///
/// The signal is created if it doesn't exist yet, and is initialized from the
/// element's value unless already defined.
///
/// ```html
/// <input data-bind="foo" />
/// ```
pub fn bind(name: impl Into<String>) -> Attr {
    Attr::new("bind", &[], Some(name.into()))
}

/// Create a signal that is `true` while a fetch request is in flight.
///
/// ```html
/// <button data-on:click="@get('/endpoint')" data-indicator="fetching"></button>
/// ```
///
/// Use [`Modifier::Case`] followed by a format modifier to convert the name.
pub fn indicator(name: impl Into<String>, modifiers: &[Modifier]) -> Attr {
    Attr::new("indicator", modifiers, Some(name.into()))
}

/// Create a signal that references the element (`data-ref`).
///
/// ```html
/// <div data-ref="foo"></div>
/// ```
pub fn reference(name: impl Into<String>, modifiers: &[Modifier]) -> Attr {
    Attr::new("ref", modifiers, Some(name.into()))
}
