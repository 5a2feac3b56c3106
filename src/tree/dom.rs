use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::HostTree;
use crate::error::BloomError;

/// [`HostTree`] over a live browser document.
#[derive(Clone)]
pub struct DomTree {
    document: Document,
}

impl DomTree {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if running in a browser page.
    pub fn from_window() -> Result<Self, BloomError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| BloomError::Host("no document available".to_string()))?;
        Ok(Self::new(document))
    }

    /// Appends a `<style id=id>` holding `css` to the document head.
    /// Returns `false` if an element with that id already exists.
    pub fn install_stylesheet(&self, id: &str, css: &str) -> Result<bool, BloomError> {
        if self.document.get_element_by_id(id).is_some() {
            return Ok(false);
        }
        let style = self.document.create_element("style").map_err(host_error)?;
        style.set_id(id);
        style.set_text_content(Some(css));

        let parent: Element = match self.document.head() {
            Some(head) => head.into(),
            None => self
                .document
                .document_element()
                .ok_or_else(|| BloomError::Host("document has no root element".to_string()))?,
        };
        parent.append_child(&style).map_err(host_error)?;
        Ok(true)
    }
}

pub(crate) fn host_error(err: JsValue) -> BloomError {
    BloomError::Host(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl HostTree for DomTree {
    type Element = Element;

    fn query_selector(&self, selector: &str) -> Result<Option<Element>, BloomError> {
        self.document.query_selector(selector).map_err(host_error)
    }

    fn create_element(&mut self, tag: &str) -> Result<Element, BloomError> {
        self.document.create_element(tag).map_err(host_error)
    }

    fn add_class(&mut self, element: &Element, class: &str) -> Result<(), BloomError> {
        element.class_list().add_1(class).map_err(host_error)
    }

    fn set_style_property(
        &mut self,
        element: &Element,
        name: &str,
        value: &str,
    ) -> Result<(), BloomError> {
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| BloomError::Host(format!("<{}> has no inline style", element.tag_name())))?;
        html.style().set_property(name, value).map_err(host_error)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), BloomError> {
        parent.append_child(child).map(|_| ()).map_err(host_error)
    }

    fn children_with_class(&self, parent: &Element, class: &str) -> Result<Vec<Element>, BloomError> {
        let children = parent.children();
        Ok((0..children.length())
            .filter_map(|i| children.item(i))
            .filter(|child| child.class_list().contains(class))
            .collect())
    }

    fn remove(&mut self, element: &Element) -> Result<(), BloomError> {
        element.remove();
        Ok(())
    }
}
