//! Declared (raw) attribute values.
//!
//! A [`RawValue`] is whatever the caller attached to an attribute: a string,
//! a boolean literal, an unquoted number from an attribute document, or a
//! [`SelectionMode`] constant. The resolver coerces it
//! into a typed value according to the key's [`ValueKind`](crate::ValueKind).

use serde::Deserialize;

/// How rows of a tree table can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Any number of rows, rendered with checkboxes.
    Multiple,
    /// A single row.
    Single,
    /// A single row, restricted to leaf nodes.
    SingleLeafOnly,
}

impl SelectionMode {
    /// Returns the declared name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionMode::Multiple => "multiple",
            SelectionMode::Single => "single",
            SelectionMode::SingleLeafOnly => "single-leaf-only",
        }
    }

    /// Parses a declared mode name, ignoring ASCII case.
    ///
    /// Accepts the kebab-case names plus the camel-case spelling
    /// `singleLeafOnly`.
    pub fn parse(name: &str) -> Option<SelectionMode> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("multiple") {
            Some(SelectionMode::Multiple)
        } else if name.eq_ignore_ascii_case("single") {
            Some(SelectionMode::Single)
        } else if name.eq_ignore_ascii_case("single-leaf-only")
            || name.eq_ignore_ascii_case("singleleafonly")
        {
            Some(SelectionMode::SingleLeafOnly)
        } else {
            None
        }
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An untyped attribute value as declared by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Scalar")]
pub enum RawValue {
    /// A string literal.
    Text(String),
    /// A boolean literal.
    Bool(bool),
    /// An unquoted number from an attribute document, in canonical form.
    ///
    /// Only integer lists accept numbers. The canonical form may differ from
    /// the document text (`1.10` reads as `1.1`), so string keys reject them.
    Number(String),
    /// An enumerated selection mode constant.
    Mode(SelectionMode),
}

impl RawValue {
    /// Returns a short name of the variant, used in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Text(_) => "string",
            RawValue::Bool(_) => "boolean",
            RawValue::Number(_) => "number",
            RawValue::Mode(_) => "selection mode",
        }
    }

    /// Returns the textual form of this value.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Text(s) | RawValue::Number(s) => s.clone(),
            RawValue::Bool(b) => b.to_string(),
            RawValue::Mode(m) => m.as_str().to_string(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<SelectionMode> for RawValue {
    fn from(mode: SelectionMode) -> Self {
        RawValue::Mode(mode)
    }
}

/// Scalar shapes accepted from attribute documents.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<Scalar> for RawValue {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(b) => RawValue::Bool(b),
            Scalar::Int(n) => RawValue::Number(n.to_string()),
            Scalar::Float(n) => RawValue::Number(n.to_string()),
            Scalar::Text(s) => RawValue::Text(s),
        }
    }
}
