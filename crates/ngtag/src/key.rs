//! Attribute keys and their semantic types.
//!
//! The [`AttributeKey`] enum is the closed set of attributes a tree table
//! understands. Each key has exactly one [`ValueKind`], which decides how the
//! resolver coerces the declared value.

use std::fmt;

/// A recognized attribute on a tree table element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    /// Local reference name; also mirrored into the `key` attribute.
    Id,
    /// Two-way bound query parameter object.
    QueryParam,
    /// Base address for the table's data requests.
    BaseUrl,
    /// Address the table loads its rows from.
    Url,
    /// Address used for deleting rows.
    DeleteUrl,
    /// Row selection behavior.
    SelectionMode,
    /// Whether the table loads on init.
    AutoLoad,
    /// Choices offered by the paginator.
    PageSizeOptions,
    /// Two-way bound selected nodes.
    Selection,
}

/// The semantic type a key's declared value is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Local reference name, defaulted when absent.
    Identifier,
    /// Free string.
    Text,
    /// `true` or `false`.
    Bool,
    /// One of the [`SelectionMode`](crate::SelectionMode) variants.
    Mode,
    /// Ordered list of integers.
    IntList,
}

impl AttributeKey {
    /// Every key, in declaration order of this enum.
    pub const ALL: [AttributeKey; 9] = [
        AttributeKey::Id,
        AttributeKey::QueryParam,
        AttributeKey::BaseUrl,
        AttributeKey::Url,
        AttributeKey::DeleteUrl,
        AttributeKey::SelectionMode,
        AttributeKey::AutoLoad,
        AttributeKey::PageSizeOptions,
        AttributeKey::Selection,
    ];

    /// Returns the declared attribute name for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKey::Id => "id",
            AttributeKey::QueryParam => "query-param",
            AttributeKey::BaseUrl => "base-url",
            AttributeKey::Url => "url",
            AttributeKey::DeleteUrl => "delete-url",
            AttributeKey::SelectionMode => "selection-mode",
            AttributeKey::AutoLoad => "auto-load",
            AttributeKey::PageSizeOptions => "page-size-options",
            AttributeKey::Selection => "selection",
        }
    }

    /// Looks up a key by its declared name.
    ///
    /// Returns `None` for names outside the known set; callers drop those.
    pub fn from_name(name: &str) -> Option<AttributeKey> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Returns the semantic type of this key's value.
    pub fn kind(self) -> ValueKind {
        match self {
            AttributeKey::Id => ValueKind::Identifier,
            AttributeKey::QueryParam
            | AttributeKey::BaseUrl
            | AttributeKey::Url
            | AttributeKey::DeleteUrl
            | AttributeKey::Selection => ValueKind::Text,
            AttributeKey::SelectionMode => ValueKind::Mode,
            AttributeKey::AutoLoad => ValueKind::Bool,
            AttributeKey::PageSizeOptions => ValueKind::IntList,
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Identifier => "identifier",
            ValueKind::Text => "string",
            ValueKind::Bool => "boolean",
            ValueKind::Mode => "selection mode",
            ValueKind::IntList => "integer list",
        }
    }
}
