//! Attribute resolution and defaulting.
//!
//! The resolver turns a declared [`AttributeSet`] into [`ResolvedAttributes`]:
//! every declared value is coerced to its key's [`ValueKind`], and the
//! identifier is synthesized when it was not declared.
//!
//! Coercion rules:
//!
//! | Kind | Accepts | Result |
//! |------|---------|--------|
//! | Identifier | non-blank string | the string; blank or absent → generated |
//! | Text | string, boolean, mode | textual form |
//! | Bool | boolean, `"true"`/`"false"` | boolean |
//! | Mode | mode constant, mode name | [`SelectionMode`] |
//! | IntList | `"1,2"`, `"[1,2]"`, a number | `vec![1, 2]` |
//!
//! Generated identifiers are checked like declared ones, so a generator
//! that yields an empty or unusable name fails instead of emitting broken
//! markup.

use std::collections::BTreeMap;

use tracing::debug;

use crate::collector::AttributeSet;
use crate::error::{Result, TagError};
use crate::id::IdGenerator;
use crate::key::{AttributeKey, ValueKind};
use crate::value::{RawValue, SelectionMode};

/// Opening delimiter of a bracketed list.
pub const LIST_OPEN: char = '[';
/// Closing delimiter of a bracketed list.
pub const LIST_CLOSE: char = ']';

/// A typed attribute value, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    /// A string value.
    Text(String),
    /// A boolean value.
    Bool(bool),
    /// A selection mode.
    Mode(SelectionMode),
    /// An ordered list of integers.
    IntList(Vec<i64>),
}

/// The outcome of resolving one element's attributes.
///
/// The identifier is always present; every other key is present only if it
/// was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttributes {
    id: String,
    values: BTreeMap<AttributeKey, ResolvedValue>,
}

impl ResolvedAttributes {
    /// The declared or synthesized identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the resolved value for a non-identifier key.
    pub fn get(&self, key: AttributeKey) -> Option<&ResolvedValue> {
        self.values.get(&key)
    }

    /// Returns the value of a string-typed key.
    pub fn text(&self, key: AttributeKey) -> Option<&str> {
        match self.values.get(&key) {
            Some(ResolvedValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the value of a boolean key.
    pub fn flag(&self, key: AttributeKey) -> Option<bool> {
        match self.values.get(&key) {
            Some(ResolvedValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value of a selection mode key.
    pub fn mode(&self, key: AttributeKey) -> Option<SelectionMode> {
        match self.values.get(&key) {
            Some(ResolvedValue::Mode(m)) => Some(*m),
            _ => None,
        }
    }

    /// Returns the value of an integer list key.
    pub fn list(&self, key: AttributeKey) -> Option<&[i64]> {
        match self.values.get(&key) {
            Some(ResolvedValue::IntList(items)) => Some(items),
            _ => None,
        }
    }

    /// Number of resolved keys besides the identifier.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if only the identifier was resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolves declared attributes, drawing a default identifier from `ids`
/// when none was declared.
///
/// Fails on the first value that cannot be coerced; no partial result is
/// returned.
pub fn resolve(attrs: &AttributeSet, ids: &dyn IdGenerator) -> Result<ResolvedAttributes> {
    let id = match attrs.get(AttributeKey::Id) {
        Some(raw) => resolve_identifier(raw)?,
        None => None,
    };
    let id = match id {
        Some(id) => id,
        None => {
            let id = ids.next_id();
            if !is_valid_identifier(&id) {
                return Err(TagError::InvalidIdentifier(id));
            }
            debug!(%id, "synthesized element id");
            id
        }
    };

    let mut values = BTreeMap::new();
    for (key, raw) in attrs.iter() {
        let value = match key.kind() {
            ValueKind::Identifier => continue,
            ValueKind::Text => ResolvedValue::Text(resolve_text(key, raw)?),
            ValueKind::Bool => ResolvedValue::Bool(resolve_bool(key, raw)?),
            ValueKind::Mode => ResolvedValue::Mode(resolve_mode(key, raw)?),
            ValueKind::IntList => ResolvedValue::IntList(resolve_list(key, raw)?),
        };
        values.insert(key, value);
    }

    Ok(ResolvedAttributes { id, values })
}

/// Returns the declared identifier, or `None` when it is blank.
fn resolve_identifier(raw: &RawValue) -> Result<Option<String>> {
    let RawValue::Text(id) = raw else {
        return Err(mismatch(AttributeKey::Id, ValueKind::Identifier, raw));
    };
    let id = id.trim();
    if id.is_empty() {
        return Ok(None);
    }
    if !is_valid_identifier(id) {
        return Err(TagError::InvalidIdentifier(id.to_string()));
    }
    Ok(Some(id.to_string()))
}

fn resolve_text(key: AttributeKey, raw: &RawValue) -> Result<String> {
    match raw {
        RawValue::Number(_) => Err(mismatch(key, ValueKind::Text, raw)),
        _ => Ok(raw.to_text()),
    }
}

/// Returns `true` if `id` can appear as a local reference name.
pub fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty()
        && !id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'))
}

fn resolve_bool(key: AttributeKey, raw: &RawValue) -> Result<bool> {
    match raw {
        RawValue::Bool(b) => Ok(*b),
        RawValue::Text(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if s.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(TagError::InvalidBoolean {
                    key,
                    value: s.to_string(),
                })
            }
        }
        RawValue::Number(_) | RawValue::Mode(_) => Err(mismatch(key, ValueKind::Bool, raw)),
    }
}

fn resolve_mode(key: AttributeKey, raw: &RawValue) -> Result<SelectionMode> {
    match raw {
        RawValue::Mode(mode) => Ok(*mode),
        RawValue::Text(s) => {
            SelectionMode::parse(s).ok_or_else(|| TagError::unrecognized(key, s))
        }
        RawValue::Bool(_) | RawValue::Number(_) => Err(mismatch(key, ValueKind::Mode, raw)),
    }
}

fn resolve_list(key: AttributeKey, raw: &RawValue) -> Result<Vec<i64>> {
    match raw {
        RawValue::Text(s) | RawValue::Number(s) => parse_int_list(key, s),
        _ => Err(mismatch(key, ValueKind::IntList, raw)),
    }
}

/// Parses a bare (`1,2`) or bracketed (`[1,2]`) list of integers.
///
/// Whitespace around tokens is ignored. An empty body yields an empty list.
pub fn parse_int_list(key: AttributeKey, value: &str) -> Result<Vec<i64>> {
    let trimmed = value.trim();
    let body = match trimmed.strip_prefix(LIST_OPEN) {
        Some(rest) => rest
            .strip_suffix(LIST_CLOSE)
            .ok_or_else(|| TagError::malformed_list(key, value, rest))?,
        None => trimmed,
    };

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    body.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| TagError::malformed_list(key, value, token))
        })
        .collect()
}

fn mismatch(key: AttributeKey, expected: ValueKind, raw: &RawValue) -> TagError {
    TagError::TypeMismatch {
        key,
        expected: expected.as_str(),
        actual: raw.type_name(),
    }
}
