//! Modifier vocabulary.
//!
//! Modifiers are suffixes appended to a directive name. They come in families,
//! and the family decides the delimiter written in front of the keyword:
//!
//! | Family | Delimiter | Examples |
//! |--------|-----------|----------|
//! | `Behavior` | `__` | `__debounce`, `__once`, `__window` |
//! | `Format` | `.` | `.camel`, `.kebab`, `.leading` |
//! | `Value` | `.` | `.500ms`, `.25`, `.100` |
//!
//! Value modifiers carry a number and are produced by the encoders in
//! [`crate::encode`]. A behavior modifier like `__debounce` is usually followed
//! by a value or format modifier that parameterizes it:
//!
//! ```text
//! data-on:click__window__debounce.500ms.leading
//! ```

use std::fmt;

/// The delimiter class a modifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierFamily {
    /// Event and timing behavior, written as `__keyword`.
    Behavior,
    /// Case conversion and edge trimming, written as `.keyword`.
    Format,
    /// Numeric arguments (durations, thresholds), written as `.value`.
    Value,
}

impl ModifierFamily {
    pub const fn delimiter(self) -> &'static str {
        match self {
            ModifierFamily::Behavior => "__",
            ModifierFamily::Format | ModifierFamily::Value => ".",
        }
    }
}

/// A directive-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Capture,
    Case,
    Debounce,
    Delay,
    Duration,
    Exit,
    Full,
    Half,
    IfMissing,
    Once,
    Outside,
    Passive,
    Prevent,
    /// `__self`: only react when the event target is the element itself.
    SelfTarget,
    Stop,
    Terse,
    Threshold,
    Throttle,
    ViewTransition,
    Window,

    /// Camel case: myEvent
    Camel,
    /// Kebab case: my-event
    Kebab,
    Leading,
    NoLeading,
    NoTrailing,
    /// Pascal case: MyEvent
    Pascal,
    /// Snake case: my_event
    Snake,
    Trailing,

    /// A whole number of milliseconds, rendered as `.<n>ms`.
    Millis(u64),
    /// A visibility ratio in hundredths. Only [`crate::encode::threshold`]
    /// builds one.
    Percent(Hundredths),
}

/// A visibility ratio in hundredths, `0..=100`.
///
/// The field is private so the range check in [`crate::encode::threshold`]
/// can't be skipped. `100` renders as `100`, anything lower as two
/// zero-padded digits.
///
/// ```compile_fail
/// use datastar_attrs::modifier::{Hundredths, Modifier};
///
/// let too_wide = Modifier::Percent(Hundredths(150));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hundredths(u8);

impl Hundredths {
    pub(crate) const fn new(hundredths: u8) -> Option<Self> {
        if hundredths <= 100 {
            Some(Self(hundredths))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Hundredths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            100 => f.write_str("100"),
            hundredths => write!(f, "{hundredths:02}"),
        }
    }
}

impl Modifier {
    /// Every behavior modifier, in catalog order.
    pub const BEHAVIOR: &'static [Modifier] = &[
        Modifier::Capture,
        Modifier::Case,
        Modifier::Debounce,
        Modifier::Delay,
        Modifier::Duration,
        Modifier::Exit,
        Modifier::Full,
        Modifier::Half,
        Modifier::IfMissing,
        Modifier::Once,
        Modifier::Outside,
        Modifier::Passive,
        Modifier::Prevent,
        Modifier::SelfTarget,
        Modifier::Stop,
        Modifier::Terse,
        Modifier::Threshold,
        Modifier::Throttle,
        Modifier::ViewTransition,
        Modifier::Window,
    ];

    /// Every format modifier, in catalog order.
    pub const FORMAT: &'static [Modifier] = &[
        Modifier::Camel,
        Modifier::Kebab,
        Modifier::Leading,
        Modifier::NoLeading,
        Modifier::NoTrailing,
        Modifier::Pascal,
        Modifier::Snake,
        Modifier::Trailing,
    ];

    pub const fn family(&self) -> ModifierFamily {
        match self {
            Modifier::Capture
            | Modifier::Case
            | Modifier::Debounce
            | Modifier::Delay
            | Modifier::Duration
            | Modifier::Exit
            | Modifier::Full
            | Modifier::Half
            | Modifier::IfMissing
            | Modifier::Once
            | Modifier::Outside
            | Modifier::Passive
            | Modifier::Prevent
            | Modifier::SelfTarget
            | Modifier::Stop
            | Modifier::Terse
            | Modifier::Threshold
            | Modifier::Throttle
            | Modifier::ViewTransition
            | Modifier::Window => ModifierFamily::Behavior,
            Modifier::Camel
            | Modifier::Kebab
            | Modifier::Leading
            | Modifier::NoLeading
            | Modifier::NoTrailing
            | Modifier::Pascal
            | Modifier::Snake
            | Modifier::Trailing => ModifierFamily::Format,
            Modifier::Millis(_) | Modifier::Percent(_) => ModifierFamily::Value,
        }
    }

    /// The keyword without its delimiter, or `None` for value modifiers.
    pub const fn keyword(&self) -> Option<&'static str> {
        let keyword = match self {
            Modifier::Capture => "capture",
            Modifier::Case => "case",
            Modifier::Debounce => "debounce",
            Modifier::Delay => "delay",
            Modifier::Duration => "duration",
            Modifier::Exit => "exit",
            Modifier::Full => "full",
            Modifier::Half => "half",
            Modifier::IfMissing => "ifmissing",
            Modifier::Once => "once",
            Modifier::Outside => "outside",
            Modifier::Passive => "passive",
            Modifier::Prevent => "prevent",
            Modifier::SelfTarget => "self",
            Modifier::Stop => "stop",
            Modifier::Terse => "terse",
            Modifier::Threshold => "threshold",
            Modifier::Throttle => "throttle",
            Modifier::ViewTransition => "viewtransition",
            Modifier::Window => "window",
            Modifier::Camel => "camel",
            Modifier::Kebab => "kebab",
            Modifier::Leading => "leading",
            Modifier::NoLeading => "noleading",
            Modifier::NoTrailing => "notrailing",
            Modifier::Pascal => "pascal",
            Modifier::Snake => "snake",
            Modifier::Trailing => "trailing",
            Modifier::Millis(_) | Modifier::Percent(_) => return None,
        };
        Some(keyword)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family().delimiter())?;
        match self {
            Modifier::Millis(ms) => write!(f, "{ms}ms"),
            Modifier::Percent(hundredths) => fmt::Display::fmt(hundredths, f),
            other => f.write_str(other.keyword().unwrap_or_default()),
        }
    }
}

/// Concatenate modifiers in the order given.
pub fn suffix(modifiers: &[Modifier]) -> String {
    modifiers.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent(hundredths: u8) -> Modifier {
        Modifier::Percent(Hundredths::new(hundredths).unwrap())
    }

    #[test]
    fn behavior_modifiers_use_double_underscore() {
        assert_eq!(Modifier::Debounce.to_string(), "__debounce");
        assert_eq!(Modifier::SelfTarget.to_string(), "__self");
        assert_eq!(Modifier::IfMissing.to_string(), "__ifmissing");
        assert_eq!(Modifier::ViewTransition.to_string(), "__viewtransition");
    }

    #[test]
    fn format_modifiers_use_dot() {
        assert_eq!(Modifier::Camel.to_string(), ".camel");
        assert_eq!(Modifier::NoTrailing.to_string(), ".notrailing");
    }

    #[test]
    fn value_modifiers_render_their_number() {
        assert_eq!(Modifier::Millis(0).to_string(), ".0ms");
        assert_eq!(Modifier::Millis(1500).to_string(), ".1500ms");
        assert_eq!(percent(5).to_string(), ".05");
        assert_eq!(percent(50).to_string(), ".50");
        assert_eq!(percent(100).to_string(), ".100");
    }

    #[test]
    fn hundredths_above_one_hundred_are_unrepresentable() {
        assert_eq!(Hundredths::new(100).map(Hundredths::get), Some(100));
        assert_eq!(Hundredths::new(101), None);
        assert_eq!(Hundredths::new(u8::MAX), None);
    }

    #[test]
    fn catalog_families_are_disjoint() {
        assert!(Modifier::BEHAVIOR
            .iter()
            .all(|m| m.family() == ModifierFamily::Behavior));
        assert!(Modifier::FORMAT
            .iter()
            .all(|m| m.family() == ModifierFamily::Format));
    }

    #[test]
    fn catalog_entries_all_have_keywords() {
        for modifier in Modifier::BEHAVIOR.iter().chain(Modifier::FORMAT) {
            let keyword = modifier.keyword().expect("catalog entry has a keyword");
            let delimiter = modifier.family().delimiter();
            assert_eq!(modifier.to_string(), format!("{delimiter}{keyword}"));
        }
    }

    #[test]
    fn value_modifiers_have_no_keyword() {
        assert_eq!(Modifier::Millis(10).keyword(), None);
        assert_eq!(percent(10).keyword(), None);
    }

    #[test]
    fn suffix_preserves_order_and_duplicates() {
        let mods = [
            Modifier::Window,
            Modifier::Debounce,
            Modifier::Millis(500),
            Modifier::Leading,
            Modifier::Window,
        ];
        assert_eq!(suffix(&mods), "__window__debounce.500ms.leading__window");
    }

    #[test]
    fn empty_suffix_is_empty() {
        assert_eq!(suffix(&[]), "");
    }
}
