//! Markup emission.
//!
//! [`emit`] walks a widget's rule table in order and collects the fragments
//! of every rule whose source is present. The resulting [`Markup`] renders as
//!
//! ```text
//! <tag frag1 frag2 ...>content</tag>
//! ```

use std::fmt;

use tracing::trace;

use crate::fragment::Fragment;
use crate::resolve::ResolvedAttributes;
use crate::widget::Widget;

/// A rendered element: tag name, ordered fragments, and passed-through content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    tag: &'static str,
    id: String,
    fragments: Vec<Fragment>,
    content: String,
}

impl Markup {
    /// Sets the content placed verbatim between the opening and closing tag.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// The element name.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// The element's resolved identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The rendered fragments in emission order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The passed-through content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Renders the opening tag, e.g. `<p-tree-table #id="" key="id">`.
    pub fn open_tag(&self) -> String {
        let mut out = String::with_capacity(16 + self.fragments.len() * 16);
        out.push('<');
        out.push_str(self.tag);
        for fragment in &self.fragments {
            out.push(' ');
            out.push_str(&fragment.to_string());
        }
        out.push('>');
        out
    }

    /// Renders the closing tag, e.g. `</p-tree-table>`.
    pub fn close_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.open_tag(), self.content, self.close_tag())
    }
}

/// Emits the markup for `resolved` following `widget`'s rule table.
pub fn emit(widget: &Widget, resolved: &ResolvedAttributes) -> Markup {
    let mut fragments = Vec::with_capacity(widget.rules.len());
    for rule in widget.rules {
        for fragment in rule.apply(resolved) {
            trace!(tag = widget.tag, rule = rule.name, %fragment, "emit");
            fragments.push(fragment);
        }
    }
    Markup {
        tag: widget.tag,
        id: resolved.id().to_string(),
        fragments,
        content: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::AttributeSet;
    use crate::id::FixedId;
    use crate::key::AttributeKey;
    use crate::resolve::resolve;
    use crate::value::SelectionMode;
    use crate::widget::TREE_TABLE;

    fn markup(attrs: AttributeSet) -> Markup {
        let resolved = resolve(&attrs, &FixedId::new("id")).unwrap();
        emit(&TREE_TABLE, &resolved)
    }

    #[test]
    fn default_markup() {
        let markup = markup(AttributeSet::new());
        assert_eq!(markup.to_string(), "<p-tree-table #id=\"\" key=\"id\"></p-tree-table>");
        assert_eq!(markup.id(), "id");
        assert_eq!(markup.tag(), "p-tree-table");
    }

    #[test]
    fn content_between_tags() {
        let markup = markup(AttributeSet::new()).with_content("<p-column></p-column>");
        assert_eq!(
            markup.to_string(),
            "<p-tree-table #id=\"\" key=\"id\"><p-column></p-column></p-tree-table>"
        );
        assert_eq!(markup.content(), "<p-column></p-column>");
    }

    #[test]
    fn full_order() {
        let markup = markup(
            AttributeSet::new()
                .with(AttributeKey::Url, "u")
                .with(AttributeKey::PageSizeOptions, "5,10")
                .with(AttributeKey::AutoLoad, true)
                .with(AttributeKey::SelectionMode, SelectionMode::SingleLeafOnly)
                .with(AttributeKey::Selection, "s")
                .with(AttributeKey::QueryParam, "q")
                .with(AttributeKey::DeleteUrl, "d")
                .with(AttributeKey::BaseUrl, "b")
                .with(AttributeKey::Id, "t"),
        );
        assert_eq!(
            markup.open_tag(),
            "<p-tree-table #t=\"\" baseUrl=\"b\" deleteUrl=\"d\" key=\"t\" \
             [(queryParam)]=\"q\" [(selection)]=\"s\" selectionMode=\"single\" \
             [leafOnly]=\"true\" [autoLoad]=\"true\" [pageSizeOptions]=\"[5,10]\" url=\"u\">"
        );
        assert_eq!(markup.fragments().len(), 11);
        assert_eq!(markup.close_tag(), "</p-tree-table>");
    }
}
