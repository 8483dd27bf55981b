//! Property-based tests for rendering using proptest.

use ngtag::{AttributeSet, FixedId, RawValue, SelectionMode, TreeTable};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn render(attrs: &AttributeSet) -> String {
    TreeTable::with_ids(FixedId::new("id")).render(attrs).unwrap()
}

fn mode_strategy() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![
        Just(SelectionMode::Multiple),
        Just(SelectionMode::Single),
        Just(SelectionMode::SingleLeafOnly),
    ]
}

// Declarations that always resolve, as (name, value) pairs with distinct names.
fn declarations_strategy() -> impl Strategy<Value = Vec<(&'static str, RawValue)>> {
    (
        prop::option::of("[a-z][a-z0-9]{0,8}"),
        prop::option::of("[a-zA-Z0-9/._-]{1,12}"),
        prop::option::of("[a-zA-Z0-9/._-]{1,12}"),
        prop::option::of("[a-zA-Z0-9/._-]{1,12}"),
        prop::option::of(mode_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(prop::collection::vec(1i64..500, 0..6)),
        prop::option::of("[a-zA-Z.]{1,12}"),
    )
        .prop_map(|(id, base, url, delete, mode, auto, sizes, selection)| {
            let mut decls: Vec<(&'static str, RawValue)> = Vec::new();
            if let Some(id) = id {
                decls.push(("id", id.into()));
            }
            if let Some(base) = base {
                decls.push(("base-url", base.into()));
            }
            if let Some(url) = url {
                decls.push(("url", url.into()));
            }
            if let Some(delete) = delete {
                decls.push(("delete-url", delete.into()));
            }
            if let Some(mode) = mode {
                decls.push(("selection-mode", mode.into()));
            }
            if let Some(auto) = auto {
                decls.push(("auto-load", auto.into()));
            }
            if let Some(sizes) = sizes {
                let joined = sizes
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                decls.push(("page-size-options", joined.into()));
            }
            if let Some(selection) = selection {
                decls.push(("selection", selection.into()));
            }
            decls
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Permuting the declaration order never changes the output.
    #[test]
    fn declaration_order_is_irrelevant(
        (decls, shuffled) in declarations_strategy()
            .prop_flat_map(|d| (Just(d.clone()), Just(d).prop_shuffle())),
    ) {
        let a = AttributeSet::from_named(decls);
        let b = AttributeSet::from_named(shuffled);
        prop_assert_eq!(render(&a), render(&b));
    }

    /// Rendering the same attributes twice is byte-identical.
    #[test]
    fn rendering_is_idempotent(decls in declarations_strategy()) {
        let attrs = AttributeSet::from_named(decls);
        prop_assert_eq!(render(&attrs), render(&attrs));
    }

    /// The output is always one well-formed element.
    #[test]
    fn output_is_wrapped(decls in declarations_strategy()) {
        let out = render(&AttributeSet::from_named(decls));
        prop_assert!(out.starts_with("<p-tree-table #"));
        prop_assert!(out.ends_with("></p-tree-table>"));
        prop_assert_eq!(out.matches("</p-tree-table>").count(), 1);
    }

    /// Bare and bracketed lists render identically.
    #[test]
    fn list_forms_agree(items in prop::collection::vec(-1000i64..1000, 0..8)) {
        let bare = items.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
        let bracketed = format!("[{}]", bare);

        let a = render(&AttributeSet::from_named([("page-size-options", bare.clone())]));
        let b = render(&AttributeSet::from_named([("page-size-options", bracketed.clone())]));
        prop_assert_eq!(&a, &b);
        let expected = format!("[pageSizeOptions]=\"{}\"", bracketed);
        prop_assert!(a.contains(&expected));
    }

    /// The identifier feeds both the marker and the key attribute.
    #[test]
    fn id_is_mirrored(id in "[a-z][a-zA-Z0-9_]{0,12}") {
        let out = render(&AttributeSet::from_named([("id", id.clone())]));
        let expected = format!("<p-tree-table #{id}=\"\" key=\"{id}\">");
        prop_assert!(out.starts_with(&expected));
    }

    /// Only leaf-only selection adds the leafOnly binding.
    #[test]
    fn leaf_only_binding_iff_leaf_only_mode(mode in mode_strategy()) {
        let out = render(&AttributeSet::from_named([("selection-mode", mode)]));
        prop_assert_eq!(
            out.contains("[leafOnly]=\"true\""),
            mode == SelectionMode::SingleLeafOnly
        );
        prop_assert_eq!(out.matches("selectionMode=").count(), 1);
    }
}
