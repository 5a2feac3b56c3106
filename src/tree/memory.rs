use std::collections::HashMap;

use super::HostTree;
use crate::error::BloomError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    style: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            style: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena-backed document for running the generator outside a browser.
///
/// Supports compound simple selectors (`div`, `#id`, `.class`,
/// `section.a.b#id`); combinators and attribute selectors are rejected
/// as a host error, the way a browser throws on a selector it cannot
/// parse.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: Vec<Node>,
    mutations: usize,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body")],
            mutations: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Creates `tag` under `parent` with optional id and classes. Setup
    /// helper; does not count as a mutation.
    pub fn insert(&mut self, parent: NodeId, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        let mut node = Node::new(tag);
        node.id = id.map(str::to_string);
        node.classes = classes.iter().map(|c| c.to_string()).collect();
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(node_id);
        node_id
    }

    /// Number of structural or style changes made through [`HostTree`].
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].classes.iter().any(|c| c == class)
    }

    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0]
            .style
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn style_map(&self, id: NodeId) -> HashMap<&str, &str> {
        self.nodes[id.0]
            .style
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    fn find_first(&self, from: NodeId, selector: &Selector) -> Option<NodeId> {
        for &child in &self.nodes[from.0].children {
            if selector.matches(&self.nodes[child.0]) {
                return Some(child);
            }
            if let Some(found) = self.find_first(child, selector) {
                return Some(found);
            }
        }
        None
    }

    fn check(&self, id: NodeId) -> Result<&Node, BloomError> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| BloomError::Host(format!("unknown node {}", id.0)))
    }
}

#[derive(Debug, Default, PartialEq)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    fn parse(input: &str) -> Result<Self, BloomError> {
        let input = input.trim();
        let unsupported = || BloomError::Host(format!("unsupported selector {:?}", input));
        if input.is_empty() {
            return Err(unsupported());
        }

        let mut selector = Selector::default();
        let mut rest = input;
        let tag_len = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_len > 0 {
            selector.tag = Some(rest[..tag_len].to_ascii_lowercase());
            rest = &rest[tag_len..];
        }

        while let Some(sigil) = rest.chars().next() {
            let body = &rest[1..];
            let len = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..len];
            if name.is_empty() {
                return Err(unsupported());
            }
            match sigil {
                '#' => selector.id = Some(name.to_string()),
                _ => selector.classes.push(name.to_string()),
            }
            rest = &body[len..];
        }

        let valid_ident =
            |s: &str| s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        let idents_ok = selector.tag.iter().all(|t| valid_ident(t))
            && selector.id.iter().all(|i| valid_ident(i))
            && selector.classes.iter().all(|c| valid_ident(c));
        if !idents_ok {
            return Err(unsupported());
        }
        Ok(selector)
    }

    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().is_none_or(|t| *t == node.tag)
            && self.id.as_ref().is_none_or(|id| node.id.as_ref() == Some(id))
            && self.classes.iter().all(|c| node.classes.contains(c))
    }
}

impl HostTree for MemoryTree {
    type Element = NodeId;

    fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, BloomError> {
        let selector = Selector::parse(selector)?;
        Ok(self.find_first(self.root(), &selector))
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, BloomError> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        Ok(id)
    }

    fn add_class(&mut self, element: &NodeId, class: &str) -> Result<(), BloomError> {
        self.check(*element)?;
        let classes = &mut self.nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
            self.mutations += 1;
        }
        Ok(())
    }

    fn set_style_property(
        &mut self,
        element: &NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), BloomError> {
        self.check(*element)?;
        let style = &mut self.nodes[element.0].style;
        match style.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => style.push((name.to_string(), value.to_string())),
        }
        self.mutations += 1;
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), BloomError> {
        self.check(*parent)?;
        self.check(*child)?;
        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|c| c != child);
        }
        self.nodes[child.0].parent = Some(*parent);
        self.nodes[parent.0].children.push(*child);
        self.mutations += 1;
        Ok(())
    }

    fn children_with_class(&self, parent: &NodeId, class: &str) -> Result<Vec<NodeId>, BloomError> {
        let node = self.check(*parent)?;
        Ok(node
            .children
            .iter()
            .copied()
            .filter(|&child| self.has_class(child, class))
            .collect())
    }

    fn remove(&mut self, element: &NodeId) -> Result<(), BloomError> {
        self.check(*element)?;
        if let Some(parent) = self.nodes[element.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| c != element);
            self.mutations += 1;
        }
        Ok(())
    }
}
