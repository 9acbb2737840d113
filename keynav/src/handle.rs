/// Minimal capability set a navigator needs from a registered element.
///
/// The engine treats handles as opaque beyond these operations, so any
/// rendering surface can participate by implementing this trait. The
/// in-crate [`Node`](crate::element::Node) tree is one implementation;
/// adapters for real surfaces supply their own.
///
/// Structural accessors mirror how a menu tree is laid out: a trigger's
/// submenu is its adjacent `next_sibling`, and each submenu entry holds
/// its focusable link as the entry's `first_child`.
pub trait FocusHandle: Clone {
    /// Transfer focus to this element.
    fn focus(&self);

    /// Activate this element (click equivalent).
    fn activate(&self);

    /// Visible text content, used for type-ahead matching.
    fn text(&self) -> Option<String>;

    fn parent(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn first_child(&self) -> Option<Self>;

    fn last_child(&self) -> Option<Self>;

    /// Submenu visibility flag, read directly off the element.
    fn is_open(&self) -> bool;

    fn set_open(&self, open: bool);

    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;
}
