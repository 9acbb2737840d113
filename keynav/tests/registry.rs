use keynav::{FocusHandle, Node, Registry};

fn item(id: &str, text: &str) -> Node {
    Node::text(text).id(id)
}

// ============================================================================
// Navigation order
// ============================================================================

#[test]
fn test_subscribe_preserves_insertion_order() {
    let mut registry = Registry::new();
    registry.subscribe("tab1", item("tab1", "one"));
    registry.subscribe("tab2", item("tab2", "two"));
    registry.subscribe("tab3", item("tab3", "three"));

    assert_eq!(registry.labels(), vec!["tab1", "tab2", "tab3"]);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_resubscribe_replaces_handle_in_place() {
    let mut registry = Registry::new();
    registry.subscribe("tab1", item("tab1", "one"));
    registry.subscribe("tab2", item("tab2", "two"));

    // Same label, new handle: position stays, handle changes
    registry.subscribe("tab1", item("tab1", "replacement"));

    assert_eq!(registry.labels(), vec!["tab1", "tab2"]);
    assert_eq!(
        registry.get("tab1").unwrap().text().as_deref(),
        Some("replacement")
    );
}

#[test]
fn test_remove_and_readd_appends_at_end() {
    let mut registry = Registry::new();
    registry.subscribe("a", item("a", "a"));
    registry.subscribe("b", item("b", "b"));
    registry.subscribe("c", item("c", "c"));

    registry.unsubscribe("a");
    assert_eq!(registry.labels(), vec!["b", "c"]);

    registry.subscribe("a", item("a", "a"));
    assert_eq!(registry.labels(), vec!["b", "c", "a"]);
}

#[test]
fn test_unsubscribe_never_leaves_duplicates_or_reorders() {
    let mut registry = Registry::new();
    registry.subscribe("a", item("a", "a"));
    registry.subscribe("b", item("b", "b"));
    registry.subscribe("c", item("c", "c"));
    registry.subscribe("d", item("d", "d"));

    registry.unsubscribe("b");
    registry.unsubscribe("d");

    assert_eq!(registry.labels(), vec!["a", "c"]);

    // Labels stay unique after churn
    registry.subscribe("b", item("b", "b"));
    registry.subscribe("b", item("b", "b2"));
    assert_eq!(registry.labels(), vec!["a", "c", "b"]);
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_unsubscribe_absent_label_is_noop() {
    let mut registry = Registry::new();
    registry.subscribe("a", item("a", "a"));

    registry.unsubscribe("missing");

    assert_eq!(registry.labels(), vec!["a"]);
}

#[test]
fn test_index_and_positional_lookup() {
    let mut registry = Registry::new();
    registry.subscribe("a", item("a", "alpha"));
    registry.subscribe("b", item("b", "beta"));

    assert_eq!(registry.index_of("a"), Some(0));
    assert_eq!(registry.index_of("b"), Some(1));
    assert_eq!(registry.index_of("missing"), None);

    assert_eq!(registry.label_at(0), Some("a"));
    assert_eq!(registry.label_at(2), None);
    assert_eq!(
        registry.handle_at(1).unwrap().text().as_deref(),
        Some("beta")
    );
}

#[test]
fn test_empty_registry() {
    let registry: Registry<Node> = Registry::new();

    assert!(registry.is_empty());
    assert!(registry.labels().is_empty());
    assert!(registry.get("anything").is_none());
}
