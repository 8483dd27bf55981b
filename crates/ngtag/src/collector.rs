//! Attribute collection.
//!
//! An [`AttributeSet`] gathers the declared attributes of one element. Keys
//! are unique: declaring a key twice keeps the later value. Declaration order
//! is not retained, since the emitter's rule table fixes the output order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::Result;
use crate::key::AttributeKey;
use crate::value::RawValue;

/// The declared attributes of a single element.
///
/// # Example
///
/// ```
/// use ngtag::{AttributeKey, AttributeSet, SelectionMode};
///
/// let attrs = AttributeSet::new()
///     .with(AttributeKey::Id, "tree")
///     .with(AttributeKey::SelectionMode, SelectionMode::Multiple);
///
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    values: BTreeMap<AttributeKey, RawValue>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, returning the set for chaining.
    pub fn with(mut self, key: AttributeKey, value: impl Into<RawValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Declares an attribute, replacing any earlier value for the same key.
    pub fn set(&mut self, key: AttributeKey, value: impl Into<RawValue>) {
        self.values.insert(key, value.into());
    }

    /// Declares an attribute by name.
    ///
    /// Unknown names are dropped. Returns `true` when the name was recognized.
    pub fn declare(&mut self, name: &str, value: impl Into<RawValue>) -> bool {
        match AttributeKey::from_name(name) {
            Some(key) => {
                self.set(key, value);
                true
            }
            None => {
                debug!(name, "dropping unknown attribute");
                false
            }
        }
    }

    /// Collects named attributes, dropping unknown names.
    pub fn from_named<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<RawValue>,
    {
        let mut set = Self::new();
        for (name, value) in pairs {
            set.declare(name.as_ref(), value);
        }
        set
    }

    /// Parses a YAML mapping of attribute names to scalar values.
    ///
    /// An empty document yields an empty set.
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::new());
        }
        let map: BTreeMap<String, RawValue> = serde_yaml::from_str(source)?;
        Ok(Self::from_named(map))
    }

    /// Parses a JSON object of attribute names to scalar values.
    pub fn from_json(source: &str) -> Result<Self> {
        let map: BTreeMap<String, RawValue> = serde_json::from_str(source)?;
        Ok(Self::from_named(map))
    }

    /// Overlays `other` onto this set; keys present in both take `other`'s value.
    pub fn merge(&mut self, other: AttributeSet) {
        self.values.extend(other.values);
    }

    /// Returns the declared value for a key.
    pub fn get(&self, key: AttributeKey) -> Option<&RawValue> {
        self.values.get(&key)
    }

    /// Returns `true` if the key was declared.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Removes a declared attribute, returning its value.
    pub fn remove(&mut self, key: AttributeKey) -> Option<RawValue> {
        self.values.remove(&key)
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the declared attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &RawValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }
}

impl<V: Into<RawValue>> FromIterator<(AttributeKey, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.set(key, value);
        }
        set
    }
}
