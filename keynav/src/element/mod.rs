mod node;

pub use node::Node;

/// Find a node by ID in the tree.
pub fn find_node(root: &Node, id: &str) -> Option<Node> {
    root.find(id)
}
