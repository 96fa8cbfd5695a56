use crate::attr::Attr;
use crate::compose::{object, Pairs};

/// Set attribute values from expressions and keep them in sync.
///
/// ```html
/// <div data-attr="{title: $foo, disabled: $bar}"></div>
/// ```
pub fn attr(pairs: impl Into<Pairs>) -> Attr {
    Attr::new("attr", &[], Some(object(&pairs.into())))
}

/// Add or remove classes depending on whether each expression is truthy.
///
/// ```html
/// <div data-class="{hidden: $foo, 'font-bold': $bar}"></div>
/// ```
pub fn class(pairs: impl Into<Pairs>) -> Attr {
    Attr::new("class", &[], Some(object(&pairs.into())))
}

/// Set inline CSS properties from expressions.
///
/// Property names may be camelCase or kebab-case. Falsy values restore the
/// element's original inline value.
///
/// ```html
/// <div data-style="{display: $hiding ? 'none' : 'flex', color: $red ? 'red' : 'green'}"></div>
/// ```
pub fn style(pairs: impl Into<Pairs>) -> Attr {
    Attr::new("style", &[], Some(object(&pairs.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_with_single_pair() {
        let a = attr([("title", "$title")]);
        assert_eq!(a.name(), "data-attr");
        assert_eq!(a.value(), Some("{title: $title}"));
    }

    #[test]
    fn attr_with_several_pairs() {
        let a = attr([("title", "$title"), ("id", "$id")]);
        assert_eq!(a.value(), Some("{title: $title, id: $id}"));
    }

    #[test]
    fn class_keeps_hyphenated_names() {
        let a = class([("hidden", "$hidden"), ("font-bold", "$bold")]);
        assert_eq!(a.name(), "data-class");
        assert_eq!(a.value(), Some("{hidden: $hidden, font-bold: $bold}"));
    }

    #[test]
    fn style_passes_expressions_through() {
        let a = style(vec![
            ("display", "$hiding ? 'none' : 'flex'"),
            ("color", "$usingRed ? 'red' : 'green'"),
        ]);
        assert_eq!(a.name(), "data-style");
        assert_eq!(
            a.value(),
            Some("{display: $hiding ? 'none' : 'flex', color: $usingRed ? 'red' : 'green'}")
        );
    }

    #[test]
    fn flat_pairs_feed_builders() {
        let pairs = Pairs::from_flat(&["disabled", "$busy"]).unwrap();
        assert_eq!(attr(pairs).value(), Some("{disabled: $busy}"));
    }
}
