//! ngtag - attribute resolution and markup rendering for component tags.
//!
//! ngtag expands a declarative bag of attributes into canonical
//! Angular-style component markup. It is the server-side half of a tag
//! helper: the host collects the attributes a template author wrote on a
//! placeholder tag, and ngtag decides which of them appear in the output,
//! in what order, and in which binding syntax.
//!
//! # Quick Start
//!
//! ```rust
//! use ngtag::{AttributeKey, AttributeSet, FixedId, SelectionMode, TreeTable};
//!
//! let table = TreeTable::with_ids(FixedId::new("id"));
//!
//! let attrs = AttributeSet::new()
//!     .with(AttributeKey::SelectionMode, SelectionMode::SingleLeafOnly)
//!     .with(AttributeKey::PageSizeOptions, "10,20");
//!
//! assert_eq!(
//!     table.render(&attrs).unwrap(),
//!     concat!(
//!         r#"<p-tree-table #id="" key="id" selectionMode="single" [leafOnly]="true" "#,
//!         r#"[pageSizeOptions]="[10,20]"></p-tree-table>"#,
//!     )
//! );
//! ```
//!
//! # Pipeline
//!
//! ```text
//! AttributeSet ──resolve──▶ ResolvedAttributes ──emit(Widget)──▶ Markup
//!   (declared)              (typed, id defaulted)   (rule table)   (string)
//! ```
//!
//! - **Collect**: [`AttributeSet`] holds the declared values, keyed by
//!   [`AttributeKey`]. Unknown attribute names are dropped.
//! - **Resolve**: [`resolve`] coerces each value to its key's [`ValueKind`]
//!   and synthesizes the identifier via an [`IdGenerator`] when absent.
//! - **Emit**: [`emit`] walks the [`Widget`]'s rule table in order. Output
//!   order never depends on declaration order.
//!
//! # Binding Syntax
//!
//! | Shape | Syntax | Used for |
//! |-------|--------|----------|
//! | Id marker | `#id=""` | local reference |
//! | Plain | `name="value"` | urls, `key`, `selectionMode` |
//! | One-way | `[name]="value"` | `autoLoad`, `pageSizeOptions`, `leafOnly` |
//! | Two-way | `[(name)]="value"` | `queryParam`, `selection` |
//!
//! # Identifiers
//!
//! Elements without an `id` get one from the renderer's [`IdGenerator`]. The
//! default [`TreeTable::new`] draws from a process-wide generator that tests
//! can pin with [`seed_id`] and restore with [`reset_id_generator`].

mod collector;
mod emit;
mod error;
mod fragment;
mod id;
mod key;
mod resolve;
mod tree_table;
mod value;
mod widget;

// Re-export public API
pub use collector::AttributeSet;
pub use emit::{emit, Markup};
pub use error::{Result, TagError};
pub use fragment::{escape_attr, Fragment, Shape};
pub use id::{
    next_id, reset_id_generator, seed_id, set_id_generator, FixedId, GlobalIds, IdGenerator,
    SequentialIds, UuidIds,
};
pub use key::{AttributeKey, ValueKind};
pub use resolve::{
    is_valid_identifier, parse_int_list, resolve, ResolvedAttributes, ResolvedValue,
};
pub use tree_table::{render_tree_table, TreeTable};
pub use value::{RawValue, SelectionMode};
pub use widget::{
    format_value, selection_mode_fragments, RenderFn, Rule, Source, Widget, LEAF_ONLY,
    TREE_TABLE,
};
