//! The attribute node handed to the markup renderer.

use std::fmt;

use maud::Render;

use crate::modifier::{suffix, Modifier};

/// Prefix marking an attribute as framework-controlled.
pub const PREFIX: &str = "data-";

/// A `data-*` attribute: a full name and an optional value.
///
/// Bare attributes (`data-ignore`) render without `=""`. Values are escaped by
/// maud when rendered; [`Attr::value`] returns them unescaped.
///
/// maud's `html!` has no syntax for attributes with a computed name, so
/// splicing `(attr)` emits it as text. To put one on an element, write the
/// open tag yourself and wrap it in `PreEscaped`:
///
/// ```
/// use datastar_attrs::show;
/// use maud::{html, PreEscaped, Render};
///
/// let attr = show("$open");
/// let open_tag = format!("<div {}>", attr.render().into_string());
/// let markup = html! { (PreEscaped(open_tag)) "menu" (PreEscaped("</div>")) };
/// assert_eq!(markup.into_string(), r#"<div data-show="$open">menu</div>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    name: String,
    value: Option<String>,
}

impl Attr {
    /// Assemble `data-<directive><modifiers>` with an optional value.
    pub(crate) fn new(directive: &str, modifiers: &[Modifier], value: Option<String>) -> Self {
        Self {
            name: format!("{PREFIX}{directive}{}", suffix(modifiers)),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_bare(&self) -> bool {
        self.value.is_none()
    }
}

impl Render for Attr {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.name);
        if let Some(value) = &self.value {
            buffer.push_str("=\"");
            value.as_str().render_to(buffer);
            buffer.push('"');
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.render_to(&mut rendered);
        f.write_str(&rendered)
    }
}
