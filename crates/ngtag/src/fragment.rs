//! Markup fragments.
//!
//! A [`Fragment`] is one attribute of the output tag in one of four shapes:
//!
//! ```text
//! idMarker   := "#" ident "=\"\""
//! plainAttr  := name "=\"" value "\""
//! oneWayBind := "[" name "]=\"" value "\""
//! twoWayBind := "[(" name ")]=\"" value "\""
//! ```
//!
//! Values are escaped for a double-quoted attribute: `"` becomes `&quot;`.

use std::borrow::Cow;
use std::fmt;

/// The syntactic form of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `#name=""`
    IdMarker,
    /// `name="value"`
    Plain,
    /// `[name]="value"`
    OneWay,
    /// `[(name)]="value"`
    TwoWay,
}

impl Shape {
    /// Renders a placeholder pattern for `name`, e.g. `[(queryParam)]="…"`.
    pub fn pattern(self, name: &str) -> String {
        match self {
            Shape::IdMarker => "#<id>=\"\"".to_string(),
            Shape::Plain => format!("{}=\"…\"", name),
            Shape::OneWay => format!("[{}]=\"…\"", name),
            Shape::TwoWay => format!("[({})]=\"…\"", name),
        }
    }

    /// Returns the display name of this shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::IdMarker => "id-marker",
            Shape::Plain => "plain",
            Shape::OneWay => "one-way",
            Shape::TwoWay => "two-way",
        }
    }
}

/// A rendered attribute of the output tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    shape: Shape,
    name: String,
    value: String,
}

impl Fragment {
    /// A structural id marker, `#id=""`.
    pub fn id_marker(id: impl Into<String>) -> Self {
        Self {
            shape: Shape::IdMarker,
            name: id.into(),
            value: String::new(),
        }
    }

    /// A fragment of the given shape.
    ///
    /// For [`Shape::IdMarker`] the name is the identifier and the value is
    /// ignored.
    pub fn new(shape: Shape, name: impl Into<String>, value: impl Into<String>) -> Self {
        match shape {
            Shape::IdMarker => Self::id_marker(name),
            _ => Self {
                shape,
                name: name.into(),
                value: value.into(),
            },
        }
    }

    /// A plain attribute, `name="value"`.
    pub fn plain(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Shape::Plain, name, value)
    }

    /// A one-way binding, `[name]="value"`.
    pub fn one_way(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Shape::OneWay, name, value)
    }

    /// A two-way binding, `[(name)]="value"`.
    pub fn two_way(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Shape::TwoWay, name, value)
    }

    /// The fragment's shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The attribute name, or the identifier for an id marker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unescaped value; empty for an id marker.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = escape_attr(&self.value);
        match self.shape {
            Shape::IdMarker => write!(f, "#{}=\"\"", self.name),
            Shape::Plain => write!(f, "{}=\"{}\"", self.name, value),
            Shape::OneWay => write!(f, "[{}]=\"{}\"", self.name, value),
            Shape::TwoWay => write!(f, "[({})]=\"{}\"", self.name, value),
        }
    }
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(value)
    }
}
