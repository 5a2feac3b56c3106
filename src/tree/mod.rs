pub mod dom;
pub mod memory;

pub use dom::DomTree;
pub use memory::{MemoryTree, NodeId};

use crate::error::BloomError;

/// The document capabilities the generator needs: selector lookup,
/// element creation, per-element style parameters, and child
/// insertion/removal.
pub trait HostTree {
    type Element: Clone;

    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>, BloomError>;

    fn create_element(&mut self, tag: &str) -> Result<Self::Element, BloomError>;

    fn add_class(&mut self, element: &Self::Element, class: &str) -> Result<(), BloomError>;

    /// Sets an inline style property on one element. Custom properties
    /// (`--name`) are accepted.
    fn set_style_property(
        &mut self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), BloomError>;

    fn append_child(
        &mut self,
        parent: &Self::Element,
        child: &Self::Element,
    ) -> Result<(), BloomError>;

    /// Direct children of `parent` carrying `class`, in document order.
    fn children_with_class(
        &self,
        parent: &Self::Element,
        class: &str,
    ) -> Result<Vec<Self::Element>, BloomError>;

    fn remove(&mut self, element: &Self::Element) -> Result<(), BloomError>;
}
