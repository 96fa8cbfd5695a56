//! Value composers.
//!
//! Directive values are either passed through verbatim or composed here into
//! one of three shapes Datastar understands:
//!
//! - a pseudo object literal, `{title: $title, id: $id}`
//! - a filter object, `{include: /user/, exclude: /password/}`
//! - compact JSON, `{"foo":{"bar":1}}`
//!
//! Keys and expressions are never inspected or quoted. Whatever the caller
//! writes is what the client evaluates.

use serde::Serialize;

use crate::error::{DatastarError, Result};
use crate::finite;

/// Ordered `(key, expression)` pairs.
///
/// Order is preserved exactly as built. Construct it from tuples:
///
/// ```
/// use datastar_attrs::Pairs;
///
/// let pairs = Pairs::from([("title", "$title"), ("id", "$id")]);
/// assert_eq!(pairs.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairs(Vec<(String, String)>);

impl Pairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, builder style.
    pub fn with(mut self, key: impl Into<String>, expression: impl Into<String>) -> Self {
        self.push(key, expression);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, expression: impl Into<String>) {
        self.0.push((key.into(), expression.into()));
    }

    /// Build pairs from a flat `key, expression, key, expression, ...` list.
    ///
    /// Fails with [`DatastarError::UnpairedKey`] when the list has odd length.
    pub fn from_flat<S: AsRef<str>>(items: &[S]) -> Result<Self> {
        let chunks = items.chunks_exact(2);
        if let [dangling] = chunks.remainder() {
            return Err(DatastarError::UnpairedKey(dangling.as_ref().to_string()));
        }
        Ok(chunks
            .map(|pair| (pair[0].as_ref(), pair[1].as_ref()))
            .collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Pairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Pairs {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Pairs {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// Include/exclude patterns scoping which signals a directive sees.
///
/// Patterns are regular-expression literals such as `/^app/`. An empty
/// pattern is treated the same as an unset one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    include: Option<String>,
    exclude: Option<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include = non_empty(pattern.into());
        self
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = non_empty(pattern.into());
        self
    }

    pub fn included(&self) -> Option<&str> {
        self.include.as_deref()
    }

    pub fn excluded(&self) -> Option<&str> {
        self.exclude.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }
}

fn non_empty(pattern: String) -> Option<String> {
    (!pattern.is_empty()).then_some(pattern)
}

/// `{k1: v1, k2: v2}`
pub fn object(pairs: &Pairs) -> String {
    braced(pairs.iter().map(|(key, expr)| format!("{key}: {expr}")))
}

/// `{k1: () => v1, k2: () => v2}`
pub fn computed_object(pairs: &Pairs) -> String {
    braced(pairs.iter().map(|(key, expr)| format!("{key}: () => {expr}")))
}

/// `{include: I, exclude: E}`, with unset sides left out. Include always
/// comes first.
pub fn filter(filter: &Filter) -> String {
    let include = filter.included().map(|p| format!("include: {p}"));
    let exclude = filter.excluded().map(|p| format!("exclude: {p}"));
    braced(include.into_iter().chain(exclude))
}

/// Compact JSON encoding of a signal mapping.
///
/// Maps built from `serde_json::Map` keep sorted keys; structs keep field
/// order. Fails when the value cannot be represented as JSON, e.g. a map with
/// non-string keys or a `NaN` anywhere in it.
pub fn signals<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    if let Some(v) = finite::check(value) {
        return Err(DatastarError::NonFiniteSignal(v));
    }
    Ok(serde_json::to_string(value)?)
}

fn braced(entries: impl Iterator<Item = String>) -> String {
    format!("{{{}}}", entries.collect::<Vec<_>>().join(", "))
}
