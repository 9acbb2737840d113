pub mod element;
pub mod event;
pub mod handle;
pub mod navigator;
pub mod registry;

pub use element::{find_node, Node};
pub use event::{Key, KeyPress, Modifiers};
pub use handle::FocusHandle;
pub use navigator::{Navigator, Orientation};
pub use registry::Registry;
