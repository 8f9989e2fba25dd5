//! In-memory host tree
//!
//! Backs tests and headless embeddings the same way the real host's
//! renderer tree would. Nodes carry just what the engine reads: tag,
//! classes, rendered size, attributes, and parent/child links.

use std::collections::HashMap;

use scraper::{ElementRef, Html};

use crate::{HostDom, MediaKind, MediaSource, NodeId};

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    width: u32,
    height: u32,
    attrs: HashMap<String, String>,
    label: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An owned tree implementing [`HostDom`].
pub struct MemoryDom {
    nodes: HashMap<NodeId, NodeData>,
    next_id: u64,
    stylesheets: HashMap<String, String>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 1,
            stylesheets: HashMap::new(),
        }
    }

    /// Build a tree from an HTML fragment.
    ///
    /// Rendered size comes from `width`/`height` attributes, since a
    /// fragment has no layout of its own.
    pub fn from_html(fragment: &str) -> Self {
        let mut dom = MemoryDom::new();
        let html = Html::parse_fragment(fragment);

        for child in html.root_element().children() {
            if let Some(element) = ElementRef::wrap(child) {
                dom.insert_html_element(element, None);
            }
        }

        dom
    }

    fn insert_html_element(&mut self, element: ElementRef<'_>, parent: Option<NodeId>) -> NodeId {
        let id = self.insert(element.value().name(), parent);

        for (name, value) in element.value().attrs() {
            match name {
                "class" => {
                    let classes: Vec<&str> = value.split_whitespace().collect();
                    self.set_classes(id, &classes);
                }
                "width" | "height" => {}
                _ => self.set_attr(id, name, value),
            }
        }

        let width = element
            .value()
            .attr("width")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let height = element
            .value()
            .attr("height")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        self.set_size(id, width, height);

        for child in element.children() {
            if let Some(child_element) = ElementRef::wrap(child) {
                self.insert_html_element(child_element, Some(id));
            }
        }

        id
    }

    /// Insert a new element under `parent` (or as a root when `None`).
    pub fn insert(&mut self, tag: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;

        let parent = parent.filter(|p| self.nodes.contains_key(p));
        self.nodes.insert(
            id,
            NodeData {
                tag: tag.to_lowercase(),
                classes: Vec::new(),
                width: 0,
                height: 0,
                attrs: HashMap::new(),
                label: None,
                parent,
                children: Vec::new(),
            },
        );

        if let Some(parent) = parent {
            if let Some(data) = self.nodes.get_mut(&parent) {
                data.children.push(id);
            }
        }

        id
    }

    pub fn set_classes(&mut self, node: NodeId, classes: &[&str]) {
        if let Some(data) = self.nodes.get_mut(&node) {
            data.classes = classes.iter().map(|c| c.to_string()).collect();
        }
    }

    pub fn set_size(&mut self, node: NodeId, width: u32, height: u32) {
        if let Some(data) = self.nodes.get_mut(&node) {
            data.width = width;
            data.height = height;
        }
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(data) = self.nodes.get_mut(&node) {
            data.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(&node)?.attrs.get(name).map(String::as_str)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|d| d.tag.as_str())
    }

    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node)?.label.as_deref()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|d| d.children.clone())
            .unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// First descendant-or-self with the given tag, in insertion order.
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        let tag = tag.to_lowercase();
        let mut ids: Vec<&NodeId> = self.nodes.keys().collect();
        ids.sort();
        ids.into_iter()
            .find(|id| self.nodes[*id].tag == tag)
            .copied()
    }

    pub fn stylesheet(&self, id: &str) -> Option<&str> {
        self.stylesheets.get(id).map(String::as_str)
    }

    fn remove_subtree(&mut self, node: NodeId) {
        if let Some(data) = self.nodes.remove(&node) {
            for child in data.children {
                self.remove_subtree(child);
            }
        }
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDom for MemoryDom {
    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node)?.parent
    }

    fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes
            .get(&node)
            .map(|d| d.classes.clone())
            .unwrap_or_default()
    }

    fn rendered_size(&self, node: NodeId) -> (u32, u32) {
        self.nodes
            .get(&node)
            .map(|d| (d.width, d.height))
            .unwrap_or((0, 0))
    }

    fn closest_media(&self, node: NodeId) -> Option<NodeId> {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            let data = self.nodes.get(&current)?;
            if MediaKind::from_tag(&data.tag).is_some() {
                return Some(current);
            }
            cursor = data.parent;
        }
        None
    }

    fn media_source(&self, node: NodeId) -> Option<MediaSource> {
        let data = self.nodes.get(&node)?;
        let src = data.attrs.get("src").cloned();

        match MediaKind::from_tag(&data.tag)? {
            MediaKind::Image => Some(MediaSource::Image { src }),
            MediaKind::Video => {
                let nested_src = data
                    .children
                    .iter()
                    .filter_map(|child| self.nodes.get(child))
                    .find(|child| child.tag == "source")
                    .and_then(|child| child.attrs.get("src").cloned());
                Some(MediaSource::Video { src, nested_src })
            }
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.nodes.get_mut(&node) {
            Some(data) => {
                if !data.classes.iter().any(|c| c == class) {
                    data.classes.push(class.to_string());
                }
                true
            }
            None => false,
        }
    }

    fn has_child_with_class(&self, container: NodeId, class: &str) -> bool {
        self.nodes
            .get(&container)
            .map(|data| {
                data.children
                    .iter()
                    .filter_map(|child| self.nodes.get(child))
                    .any(|child| child.classes.iter().any(|c| c == class))
            })
            .unwrap_or(false)
    }

    fn append_control(&mut self, container: NodeId, class: &str, label: &str) -> Option<NodeId> {
        if !self.nodes.contains_key(&container) {
            return None;
        }

        let id = self.insert("div", Some(container));
        self.set_classes(id, &[class]);
        if let Some(data) = self.nodes.get_mut(&id) {
            data.label = Some(label.to_string());
        }
        Some(id)
    }

    fn remove_node(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.nodes.get(&node).map(|d| d.parent) else {
            return false;
        };

        if let Some(parent) = parent {
            if let Some(data) = self.nodes.get_mut(&parent) {
                data.children.retain(|c| *c != node);
            }
        }

        self.remove_subtree(node);
        true
    }

    fn inject_stylesheet(&mut self, id: &str, css: &str) {
        self.stylesheets.insert(id.to_string(), css.to_string());
    }

    fn has_stylesheet(&self, id: &str) -> bool {
        self.stylesheets.contains_key(id)
    }

    fn remove_stylesheet(&mut self, id: &str) -> bool {
        self.stylesheets.remove(id).is_some()
    }
}
