//! Directive specifications and registry.
//!
//! This module describes every directive the builders produce: its keyword,
//! how its value is composed, and whether it accepts modifiers. It is used for
//! documentation and catalog listings. The builders themselves don't consult
//! it.

/// How a directive's value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// The caller's expression or signal name, unchanged.
    Raw,
    /// `{key: expr, ...}`
    Object,
    /// `{key: () => expr, ...}`
    ComputedObject,
    /// `{include: ..., exclude: ...}`, `{}` when empty.
    Filter,
    /// Like `Filter`, but an empty filter drops the value entirely.
    FilterOrBare,
    /// Compact JSON.
    Json,
    /// Names joined by single spaces.
    SpaceList,
    /// Never has a value.
    Bare,
}

impl ValueRule {
    pub const fn describe(self) -> &'static str {
        match self {
            ValueRule::Raw => "raw expression",
            ValueRule::Object => "object literal",
            ValueRule::ComputedObject => "computed object literal",
            ValueRule::Filter => "filter object",
            ValueRule::FilterOrBare => "filter object, or none",
            ValueRule::Json => "JSON",
            ValueRule::SpaceList => "space-separated list",
            ValueRule::Bare => "none",
        }
    }
}

/// Specification for a single directive.
#[derive(Debug, Clone)]
pub struct DirectiveSpec {
    /// Keyword after `data-`, e.g. "on-interval". `on` takes the event name
    /// as `on:<event>`.
    pub keyword: &'static str,

    /// How the value is composed.
    pub value: ValueRule,

    /// Whether the builder accepts modifiers.
    pub modifiers: bool,

    /// Whether the keyword is followed by a caller-supplied identifier.
    pub parameterized: bool,
}

impl DirectiveSpec {
    const fn new(keyword: &'static str, value: ValueRule) -> Self {
        Self {
            keyword,
            value,
            modifiers: false,
            parameterized: false,
        }
    }

    const fn modifiers(mut self) -> Self {
        self.modifiers = true;
        self
    }

    const fn parameterized(mut self) -> Self {
        self.parameterized = true;
        self
    }
}

/// Registry of all directives, alphabetical by keyword.
pub const DIRECTIVES: &[DirectiveSpec] = &[
    DirectiveSpec::new("attr", ValueRule::Object),
    DirectiveSpec::new("bind", ValueRule::Raw),
    DirectiveSpec::new("class", ValueRule::Object),
    DirectiveSpec::new("computed", ValueRule::ComputedObject),
    DirectiveSpec::new("effect", ValueRule::Raw),
    DirectiveSpec::new("ignore", ValueRule::Bare).modifiers(),
    DirectiveSpec::new("ignore-morph", ValueRule::Bare),
    DirectiveSpec::new("indicator", ValueRule::Raw).modifiers(),
    DirectiveSpec::new("init", ValueRule::Raw).modifiers(),
    DirectiveSpec::new("json-signals", ValueRule::FilterOrBare).modifiers(),
    DirectiveSpec::new("on", ValueRule::Raw)
        .modifiers()
        .parameterized(),
    DirectiveSpec::new("on-intersect", ValueRule::Raw).modifiers(),
    DirectiveSpec::new("on-interval", ValueRule::Raw).modifiers(),
    DirectiveSpec::new("on-signal-patch", ValueRule::Raw).modifiers(),
    DirectiveSpec::new("on-signal-patch-filter", ValueRule::Filter),
    DirectiveSpec::new("preserve-attr", ValueRule::SpaceList),
    DirectiveSpec::new("ref", ValueRule::Raw).modifiers(),
    DirectiveSpec::new("show", ValueRule::Raw),
    DirectiveSpec::new("signals", ValueRule::Json).modifiers(),
    DirectiveSpec::new("style", ValueRule::Object),
    DirectiveSpec::new("text", ValueRule::Raw),
];

/// Look up a directive spec by keyword.
pub fn get_spec(keyword: &str) -> Option<&'static DirectiveSpec> {
    DIRECTIVES.iter().find(|spec| spec.keyword == keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{Filter, Pairs};
    use crate::directives::*;
    use crate::Attr;
    use serde_json::json;

    /// One attribute per registry entry, built with no modifiers.
    fn sample(keyword: &str) -> Attr {
        match keyword {
            "attr" => attr([("title", "$t")]),
            "bind" => bind("foo"),
            "class" => class([("hidden", "$h")]),
            "computed" => computed(Pairs::new().with("t", "$a")),
            "effect" => effect("$a = 1"),
            "ignore" => ignore(&[]),
            "ignore-morph" => ignore_morph(),
            "indicator" => indicator("busy", &[]),
            "init" => init("$a = 1", &[]),
            "json-signals" => json_signals(&Filter::new(), &[]),
            "on" => on("click", "$a++", &[]),
            "on-intersect" => on_intersect("$a = 1", &[]),
            "on-interval" => on_interval("$a++", &[]),
            "on-signal-patch" => on_signal_patch("log(patch)", &[]),
            "on-signal-patch-filter" => on_signal_patch_filter(&Filter::new()),
            "preserve-attr" => preserve_attr(["open"]),
            "ref" => reference("el", &[]),
            "show" => show("$a"),
            "signals" => signals(&json!({"a": 1}), &[]).unwrap(),
            "style" => style([("color", "$c")]),
            "text" => text("$a"),
            other => panic!("no sample for directive {other}"),
        }
    }

    #[test]
    fn registry_has_expected_entries() {
        assert_eq!(DIRECTIVES.len(), 21);
        assert!(get_spec("on").is_some());
        assert!(get_spec("json-signals").is_some());
        assert!(get_spec("ref").is_some());
    }

    #[test]
    fn unknown_directive_returns_none() {
        assert!(get_spec("nonexistent").is_none());
    }

    #[test]
    fn on_spec_is_correct() {
        let spec = get_spec("on").unwrap();
        assert_eq!(spec.value, ValueRule::Raw);
        assert!(spec.modifiers);
        assert!(spec.parameterized);
    }

    #[test]
    fn only_on_is_parameterized() {
        let parameterized: Vec<_> = DIRECTIVES
            .iter()
            .filter(|spec| spec.parameterized)
            .map(|spec| spec.keyword)
            .collect();
        assert_eq!(parameterized, vec!["on"]);
    }

    #[test]
    fn builders_match_registry() {
        for spec in DIRECTIVES {
            let built = sample(spec.keyword);
            let expected_name = if spec.parameterized {
                format!("data-{}:click", spec.keyword)
            } else {
                format!("data-{}", spec.keyword)
            };
            assert_eq!(built.name(), expected_name, "{}", spec.keyword);

            let bare = matches!(spec.value, ValueRule::Bare | ValueRule::FilterOrBare);
            assert_eq!(built.is_bare(), bare, "{}", spec.keyword);
        }
    }
}
