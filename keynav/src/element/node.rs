use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::handle::FocusHandle;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug)]
struct NodeInner {
    id: RefCell<String>,
    text: RefCell<Option<String>>,
    open: Cell<bool>,
    focused: Cell<bool>,
    activations: Cell<u32>,
    parent: RefCell<Weak<NodeInner>>,
    children: RefCell<Vec<Node>>,
}

/// Shared-ownership tree node implementing [`FocusHandle`].
///
/// Cloning a `Node` clones the handle, not the subtree, so a node handed
/// to a registry and the same node reached through tree traversal refer
/// to one underlying element.
#[derive(Debug, Clone)]
pub struct Node {
    inner: Rc<NodeInner>,
}

impl Node {
    /// Create an empty container node.
    pub fn new() -> Self {
        Self::with_prefix("node")
    }

    /// Create a leaf node carrying text content.
    pub fn text(content: impl Into<String>) -> Self {
        let node = Self::with_prefix("text");
        *node.inner.text.borrow_mut() = Some(content.into());
        node
    }

    fn with_prefix(prefix: &str) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                id: RefCell::new(generate_id(prefix)),
                text: RefCell::new(None),
                open: Cell::new(false),
                focused: Cell::new(false),
                activations: Cell::new(0),
                parent: RefCell::new(Weak::new()),
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    // Identity
    pub fn id(self, id: impl Into<String>) -> Self {
        *self.inner.id.borrow_mut() = id.into();
        self
    }

    pub fn get_id(&self) -> String {
        self.inner.id.borrow().clone()
    }

    /// Initial submenu visibility.
    pub fn open(self, open: bool) -> Self {
        self.inner.open.set(open);
        self
    }

    // Children
    pub fn child(self, child: Node) -> Self {
        *child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
        self.inner.children.borrow_mut().push(child);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        for node in nodes {
            self = self.child(node);
        }
        self
    }

    /// Walk up to the tree root.
    pub fn root(&self) -> Node {
        let mut node = self.clone();
        while let Some(parent) = FocusHandle::parent(&node) {
            node = parent;
        }
        node
    }

    /// Find a node by ID in this subtree.
    pub fn find(&self, id: &str) -> Option<Node> {
        if *self.inner.id.borrow() == id {
            return Some(self.clone());
        }
        for child in self.inner.children.borrow().iter() {
            if let Some(found) = child.find(id) {
                return Some(found);
            }
        }
        None
    }

    /// ID of the focused node in this subtree, if any.
    pub fn focused_id(&self) -> Option<String> {
        if self.inner.focused.get() {
            return Some(self.get_id());
        }
        for child in self.inner.children.borrow().iter() {
            if let Some(id) = child.focused_id() {
                return Some(id);
            }
        }
        None
    }

    pub fn is_focused(&self) -> bool {
        self.inner.focused.get()
    }

    /// Number of times this node has been activated.
    pub fn activations(&self) -> u32 {
        self.inner.activations.get()
    }

    fn clear_focus(&self) {
        self.inner.focused.set(false);
        for child in self.inner.children.borrow().iter() {
            child.clear_focus();
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusHandle for Node {
    fn focus(&self) {
        self.root().clear_focus();
        self.inner.focused.set(true);
    }

    fn activate(&self) {
        self.inner.activations.set(self.inner.activations.get() + 1);
    }

    fn text(&self) -> Option<String> {
        self.inner.text.borrow().clone()
    }

    fn parent(&self) -> Option<Node> {
        self.inner.parent.borrow().upgrade().map(|inner| Node { inner })
    }

    fn next_sibling(&self) -> Option<Node> {
        let parent = FocusHandle::parent(self)?;
        let children = parent.inner.children.borrow();
        let idx = children
            .iter()
            .position(|child| Rc::ptr_eq(&child.inner, &self.inner))?;
        children.get(idx + 1).cloned()
    }

    fn first_child(&self) -> Option<Node> {
        self.inner.children.borrow().first().cloned()
    }

    fn last_child(&self) -> Option<Node> {
        self.inner.children.borrow().last().cloned()
    }

    fn is_open(&self) -> bool {
        self.inner.open.get()
    }

    fn set_open(&self, open: bool) {
        self.inner.open.set(open);
    }

    fn contains(&self, other: &Node) -> bool {
        let mut cursor = Some(other.clone());
        while let Some(node) = cursor {
            if Rc::ptr_eq(&node.inner, &self.inner) {
                return true;
            }
            cursor = FocusHandle::parent(&node);
        }
        false
    }
}
