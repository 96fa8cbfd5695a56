use crate::attr::Attr;
use crate::modifier::Modifier;

/// Tell Datastar to skip an element and its descendants.
///
/// With [`Modifier::SelfTarget`] only the element itself is skipped.
pub fn ignore(modifiers: &[Modifier]) -> Attr {
    Attr::new("ignore", modifiers, None)
}

/// Skip an element and its children when morphing patched elements.
pub fn ignore_morph() -> Attr {
    Attr::new("ignore-morph", &[], None)
}

/// Keep the listed attributes untouched when morphing.
///
/// ```html
/// <details open data-preserve-attr="open class"></details>
/// ```
pub fn preserve_attr<I>(attrs: I) -> Attr
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let names: Vec<String> = attrs
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    Attr::new("preserve-attr", &[], Some(names.join(" ")))
}

/// Show the element while the expression is truthy.
///
/// Add `style="display: none"` to avoid a flash before Datastar processes the
/// page.
pub fn show(expression: impl Into<String>) -> Attr {
    Attr::new("show", &[], Some(expression.into()))
}

/// Bind the element's text content to an expression.
pub fn text(expression: impl Into<String>) -> Attr {
    Attr::new("text", &[], Some(expression.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_is_bare() {
        let a = ignore(&[]);
        assert_eq!(a.to_string(), "data-ignore");
        assert!(a.is_bare());
    }

    #[test]
    fn ignore_self_is_bare() {
        let a = ignore(&[Modifier::SelfTarget]);
        assert_eq!(a.to_string(), "data-ignore__self");
        assert!(a.is_bare());
    }

    #[test]
    fn ignore_morph_is_bare() {
        assert_eq!(ignore_morph().to_string(), "data-ignore-morph");
        assert!(ignore_morph().is_bare());
    }

    #[test]
    fn preserve_single_attr() {
        let a = preserve_attr(["open"]);
        assert_eq!(a.name(), "data-preserve-attr");
        assert_eq!(a.value(), Some("open"));
    }

    #[test]
    fn preserve_several_attrs_space_joined() {
        let a = preserve_attr(vec!["open".to_string(), "class".to_string()]);
        assert_eq!(a.value(), Some("open class"));
    }

    #[test]
    fn show_passes_expression_through() {
        let a = show("$foo");
        assert_eq!(a.name(), "data-show");
        assert_eq!(a.value(), Some("$foo"));
    }

    #[test]
    fn text_passes_expression_through() {
        let a = text("$foo");
        assert_eq!(a.name(), "data-text");
        assert_eq!(a.value(), Some("$foo"));
    }
}
