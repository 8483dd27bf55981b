//! The tree table component.
//!
//! [`TreeTable`] runs the collect → resolve → emit pipeline for the
//! `p-tree-table` element. It owns the [`IdGenerator`] used when no `id` is
//! declared; [`TreeTable::new`] uses the process-wide generator.

use crate::collector::AttributeSet;
use crate::emit::{emit, Markup};
use crate::error::Result;
use crate::id::{GlobalIds, IdGenerator};
use crate::resolve::resolve;
use crate::widget::{Widget, TREE_TABLE};

/// Renders `p-tree-table` markup.
///
/// # Example
///
/// ```
/// use ngtag::{AttributeKey, AttributeSet, FixedId, TreeTable};
///
/// let table = TreeTable::with_ids(FixedId::new("id"));
/// let attrs = AttributeSet::new().with(AttributeKey::AutoLoad, false);
///
/// assert_eq!(
///     table.render(&attrs).unwrap(),
///     r#"<p-tree-table #id="" key="id" [autoLoad]="false"></p-tree-table>"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeTable<G = GlobalIds> {
    ids: G,
}

impl TreeTable<GlobalIds> {
    /// Creates a renderer drawing default ids from the process-wide generator.
    pub fn new() -> Self {
        Self { ids: GlobalIds }
    }
}

impl<G: IdGenerator> TreeTable<G> {
    /// Creates a renderer with its own id generator.
    pub fn with_ids(ids: G) -> Self {
        Self { ids }
    }

    /// The widget definition this component renders.
    pub fn widget(&self) -> &'static Widget {
        &TREE_TABLE
    }

    /// Resolves and emits the markup without serializing it.
    pub fn markup(&self, attrs: &AttributeSet) -> Result<Markup> {
        let resolved = resolve(attrs, &self.ids)?;
        Ok(emit(self.widget(), &resolved))
    }

    /// Renders the element with no content.
    pub fn render(&self, attrs: &AttributeSet) -> Result<String> {
        Ok(self.markup(attrs)?.to_string())
    }

    /// Renders the element with `content` between its tags.
    pub fn render_with_content(&self, attrs: &AttributeSet, content: &str) -> Result<String> {
        Ok(self.markup(attrs)?.with_content(content).to_string())
    }
}

/// Renders a tree table using the process-wide id generator.
pub fn render_tree_table(attrs: &AttributeSet) -> Result<String> {
    TreeTable::new().render(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagError;
    use crate::id::SequentialIds;
    use crate::key::AttributeKey;

    #[test]
    fn sequential_defaults_are_distinct() {
        let table = TreeTable::with_ids(SequentialIds::with_prefix("tt"));
        let first = table.render(&AttributeSet::new()).unwrap();
        let second = table.render(&AttributeSet::new()).unwrap();
        assert_eq!(first, "<p-tree-table #tt1=\"\" key=\"tt1\"></p-tree-table>");
        assert_eq!(second, "<p-tree-table #tt2=\"\" key=\"tt2\"></p-tree-table>");
    }

    #[test]
    fn declared_id_does_not_consume_generator() {
        let table = TreeTable::with_ids(SequentialIds::new());
        let attrs = AttributeSet::new().with(AttributeKey::Id, "a");
        table.render(&attrs).unwrap();
        let markup = table.markup(&AttributeSet::new()).unwrap();
        assert_eq!(markup.id(), "id_1");
    }

    #[test]
    fn error_yields_no_output() {
        let table = TreeTable::with_ids(SequentialIds::new());
        let attrs = AttributeSet::new()
            .with(AttributeKey::Url, "a")
            .with(AttributeKey::PageSizeOptions, "1,two");
        assert!(matches!(
            table.render(&attrs),
            Err(TagError::MalformedListValue { .. })
        ));
    }
}
