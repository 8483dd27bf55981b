//! Widget rule tables.
//!
//! A [`Widget`] pairs a tag name with an ordered table of [`Rule`]s. The
//! emitter walks the table from top to bottom; each rule checks whether its
//! source is present in the resolved attributes and, if so, renders zero or
//! more fragments. Output order is therefore the table order, never the
//! order attributes were declared in.
//!
//! The tree table's table:
//!
//! | # | Source | Fragment |
//! |---|--------|----------|
//! | 1 | id | `#<id>=""` |
//! | 2 | base-url | `baseUrl="…"` |
//! | 3 | delete-url | `deleteUrl="…"` |
//! | 4 | id | `key="<id>"` |
//! | 5 | query-param | `[(queryParam)]="…"` |
//! | 6 | selection | `[(selection)]="…"` |
//! | 7 | selection-mode | `selectionMode="…"`, then `[leafOnly]="true"` for leaf-only |
//! | 8 | auto-load | `[autoLoad]="…"` |
//! | 9 | page-size-options | `[pageSizeOptions]="[…]"` |
//! | 10 | url | `url="…"` |

use std::fmt;

use crate::fragment::{Fragment, Shape};
use crate::key::AttributeKey;
use crate::resolve::{ResolvedAttributes, ResolvedValue, LIST_CLOSE, LIST_OPEN};
use crate::value::SelectionMode;

/// Where a rule takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The resolved identifier; always present.
    Id,
    /// A declared attribute; present only if declared.
    Key(AttributeKey),
}

impl Source {
    /// Returns `true` if this source has a value in `resolved`.
    pub fn is_present(self, resolved: &ResolvedAttributes) -> bool {
        match self {
            Source::Id => true,
            Source::Key(key) => resolved.get(key).is_some(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Id => f.write_str(AttributeKey::Id.as_str()),
            Source::Key(key) => f.write_str(key.as_str()),
        }
    }
}

/// Renders the fragments of one rule.
pub type RenderFn = fn(&Rule, &ResolvedAttributes) -> Vec<Fragment>;

/// One entry of a widget's rule table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Where the value comes from.
    pub source: Source,
    /// Output attribute name.
    pub name: &'static str,
    /// Syntactic form of the (first) fragment.
    pub shape: Shape,
    /// Fragment renderer, called only when the source is present.
    pub render: RenderFn,
}

impl Rule {
    /// A rule emitting a single fragment carrying the source's value.
    pub const fn value(source: Source, name: &'static str, shape: Shape) -> Self {
        Self {
            source,
            name,
            shape,
            render: render_value,
        }
    }

    /// A rule with a custom renderer.
    pub const fn custom(
        source: Source,
        name: &'static str,
        shape: Shape,
        render: RenderFn,
    ) -> Self {
        Self {
            source,
            name,
            shape,
            render,
        }
    }

    /// Evaluates the rule: no fragments when the source is absent.
    pub fn apply(&self, resolved: &ResolvedAttributes) -> Vec<Fragment> {
        if self.source.is_present(resolved) {
            (self.render)(self, resolved)
        } else {
            Vec::new()
        }
    }

    /// Placeholder pattern of the rule's first fragment.
    pub fn pattern(&self) -> String {
        self.shape.pattern(self.name)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("source", &self.source)
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// A component tag and its ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct Widget {
    /// Element name, e.g. `p-tree-table`.
    pub tag: &'static str,
    /// Rules in emission order.
    pub rules: &'static [Rule],
}

/// The PrimeNG tree table.
pub static TREE_TABLE: Widget = Widget {
    tag: "p-tree-table",
    rules: &TREE_TABLE_RULES,
};

/// Attribute name of the secondary leaf-only binding.
pub const LEAF_ONLY: &str = "leafOnly";

static TREE_TABLE_RULES: [Rule; 10] = [
    Rule::value(Source::Id, "id", Shape::IdMarker),
    Rule::value(Source::Key(AttributeKey::BaseUrl), "baseUrl", Shape::Plain),
    Rule::value(Source::Key(AttributeKey::DeleteUrl), "deleteUrl", Shape::Plain),
    Rule::value(Source::Id, "key", Shape::Plain),
    Rule::value(Source::Key(AttributeKey::QueryParam), "queryParam", Shape::TwoWay),
    Rule::value(Source::Key(AttributeKey::Selection), "selection", Shape::TwoWay),
    Rule::custom(
        Source::Key(AttributeKey::SelectionMode),
        "selectionMode",
        Shape::Plain,
        render_selection_mode,
    ),
    Rule::value(Source::Key(AttributeKey::AutoLoad), "autoLoad", Shape::OneWay),
    Rule::value(
        Source::Key(AttributeKey::PageSizeOptions),
        "pageSizeOptions",
        Shape::OneWay,
    ),
    Rule::value(Source::Key(AttributeKey::Url), "url", Shape::Plain),
];

/// Renders the source's value as a single fragment of the rule's shape.
fn render_value(rule: &Rule, resolved: &ResolvedAttributes) -> Vec<Fragment> {
    let value = match rule.source {
        Source::Id => resolved.id().to_string(),
        Source::Key(key) => match resolved.get(key) {
            Some(value) => format_value(value),
            None => return Vec::new(),
        },
    };
    match rule.shape {
        Shape::IdMarker => vec![Fragment::id_marker(value)],
        shape => vec![Fragment::new(shape, rule.name, value)],
    }
}

/// Expands a selection mode into its mode token and, for leaf-only
/// selection, a `[leafOnly]="true"` binding.
fn render_selection_mode(rule: &Rule, resolved: &ResolvedAttributes) -> Vec<Fragment> {
    let Source::Key(key) = rule.source else {
        return Vec::new();
    };
    match resolved.mode(key) {
        Some(mode) => selection_mode_fragments(rule.name, mode),
        None => Vec::new(),
    }
}

/// The fragments a selection mode expands to, in order.
pub fn selection_mode_fragments(name: &str, mode: SelectionMode) -> Vec<Fragment> {
    match mode {
        SelectionMode::Multiple => vec![Fragment::plain(name, "checkbox")],
        SelectionMode::Single => vec![Fragment::plain(name, "single")],
        SelectionMode::SingleLeafOnly => vec![
            Fragment::plain(name, "single"),
            Fragment::one_way(LEAF_ONLY, "true"),
        ],
    }
}

/// Serializes a resolved value into attribute text.
pub fn format_value(value: &ResolvedValue) -> String {
    match value {
        ResolvedValue::Text(s) => s.clone(),
        ResolvedValue::Bool(b) => b.to_string(),
        ResolvedValue::Mode(m) => m.as_str().to_string(),
        ResolvedValue::IntList(items) => {
            let body = items
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            format!("{}{}{}", LIST_OPEN, body, LIST_CLOSE)
        }
    }
}
