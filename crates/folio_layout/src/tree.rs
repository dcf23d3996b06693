//! View tree
//!
//! The abstract output of the section renderers. Nodes live in a slot map
//! and refer to each other by [`ViewNodeId`]. An external view layer reads
//! the tree (or its [`NodeSnapshot`]) and paints it.

use indexmap::IndexMap;
use serde::Serialize;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::motion::MotionSpec;

new_key_type! {
    pub struct ViewNodeId;
}

/// Structural element type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Page,
    Section,
    Div,
    Article,
    Heading(u8),
    Paragraph,
    Span,
    List,
    ListItem,
    Link,
}

/// What a node means on the page, independent of its element type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Heading,
    Card,
    Summary,
    ResumeButton,
    QuickInfo,
    Orb,
    Particle,
    Spotlight,
    SkillGroup,
    SkillTag,
    ProjectCard,
    StackList,
    StackTag,
    HighlightList,
    Highlight,
    ProjectLink,
    LinkArrow,
    Glow,
    TimelineItem,
    Subtitle,
    MetricPill,
    Period,
    BulletList,
    Bullet,
    AchievementList,
    Achievement,
    Blurb,
    ContactButton,
}

/// A single element in the tree
#[derive(Clone, Debug, PartialEq)]
pub struct ViewNode {
    pub kind: ElementKind,
    pub role: Option<Role>,
    /// Sibling-unique display key
    pub key: Option<String>,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub attrs: IndexMap<String, String>,
    pub motion: MotionSpec,
    pub(crate) parent: Option<ViewNodeId>,
    pub(crate) children: SmallVec<[ViewNodeId; 4]>,
}

impl ViewNode {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            role: None,
            key: None,
            classes: Vec::new(),
            text: None,
            attrs: IndexMap::new(),
            motion: MotionSpec::default(),
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn parent(&self) -> Option<ViewNodeId> {
        self.parent
    }

    pub fn children(&self) -> &[ViewNodeId] {
        &self.children
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The rendered page
#[derive(Clone, Debug, Default)]
pub struct ViewTree {
    nodes: SlotMap<ViewNodeId, ViewNode>,
    root: Option<ViewNodeId>,
    duplicate_keys: Vec<String>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `parent`, or as the root when `parent` is `None`
    pub fn insert(&mut self, mut node: ViewNode, parent: Option<ViewNodeId>) -> ViewNodeId {
        node.parent = parent;
        node.children.clear();
        let id = self.nodes.insert(node);
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => {
                if self.root.is_none() {
                    self.root = Some(id);
                }
            }
        }
        id
    }

    pub fn root(&self) -> Option<ViewNodeId> {
        self.root
    }

    pub fn get(&self, id: ViewNodeId) -> Option<&ViewNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, id: ViewNodeId) -> &[ViewNodeId] {
        self.nodes.get(id).map(|n| n.children()).unwrap_or(&[])
    }

    pub fn parent(&self, id: ViewNodeId) -> Option<ViewNodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// `id` and everything below it, parents before children, siblings in order
    pub fn descendants(&self, id: ViewNodeId) -> Vec<ViewNodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Every node in document order
    pub fn iter(&self) -> impl Iterator<Item = (ViewNodeId, &ViewNode)> {
        self.root
            .map(|root| self.descendants(root))
            .unwrap_or_default()
            .into_iter()
            .filter_map(move |id| self.nodes.get(id).map(|n| (id, n)))
    }

    /// Nodes with `role` below (and including) `scope`, in document order
    pub fn find_role_in(&self, scope: ViewNodeId, role: Role) -> Vec<ViewNodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.nodes.get(*id).and_then(|n| n.role) == Some(role))
            .collect()
    }

    /// Nodes with `role` anywhere in the tree, in document order
    pub fn find_role(&self, role: Role) -> Vec<ViewNodeId> {
        self.root
            .map(|root| self.find_role_in(root, role))
            .unwrap_or_default()
    }

    /// First node in document order carrying `key`
    pub fn find_key(&self, key: &str) -> Option<ViewNodeId> {
        self.iter()
            .find(|(_, n)| n.key.as_deref() == Some(key))
            .map(|(id, _)| id)
    }

    /// Closest ancestor that reveals on entrance
    pub fn entrance_ancestor(&self, id: ViewNodeId) -> Option<ViewNodeId> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            let node = self.nodes.get(ancestor)?;
            if node.motion.entrance.is_some() {
                return Some(ancestor);
            }
            current = node.parent;
        }
        None
    }

    /// Text of a node and its descendants, joined by spaces
    pub fn text_content(&self, id: ViewNodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.nodes.get(d).and_then(|n| n.text.as_deref()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Keys that appeared more than once among one node's children
    pub fn duplicate_keys(&self) -> &[String] {
        &self.duplicate_keys
    }

    pub(crate) fn record_duplicate_key(&mut self, key: String) {
        self.duplicate_keys.push(key);
    }

    /// Serializable copy of the tree
    pub fn snapshot(&self) -> Option<NodeSnapshot> {
        self.root.and_then(|root| self.snapshot_of(root))
    }

    pub fn snapshot_of(&self, id: ViewNodeId) -> Option<NodeSnapshot> {
        let node = self.nodes.get(id)?;
        Some(NodeSnapshot {
            kind: node.kind,
            role: node.role,
            key: node.key.clone(),
            classes: node.classes.clone(),
            text: node.text.clone(),
            attrs: node.attrs.clone(),
            motion: (!node.motion.is_empty()).then(|| node.motion.clone()),
            children: node
                .children
                .iter()
                .filter_map(|child| self.snapshot_of(*child))
                .collect(),
        })
    }

    /// The snapshot as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

/// Owned, serializable view of a subtree
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_node(kind: ElementKind, text: &str) -> ViewNode {
        let mut node = ViewNode::new(kind);
        node.text = Some(text.to_string());
        node
    }

    #[test]
    fn test_insert_and_walk() {
        let mut tree = ViewTree::new();
        let root = tree.insert(ViewNode::new(ElementKind::Page), None);
        let a = tree.insert(text_node(ElementKind::Paragraph, "a"), Some(root));
        let list = tree.insert(ViewNode::new(ElementKind::List), Some(root));
        let b = tree.insert(text_node(ElementKind::ListItem, "b"), Some(list));

        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.children(root), &[a, list]);
        assert_eq!(tree.parent(b), Some(list));
        assert_eq!(tree.descendants(root), vec![root, a, list, b]);
        assert_eq!(tree.text_content(root), "a b");
    }

    #[test]
    fn test_find_role() {
        let mut tree = ViewTree::new();
        let root = tree.insert(ViewNode::new(ElementKind::Page), None);
        let mut pill = text_node(ElementKind::Span, "CGPA");
        pill.role = Some(Role::MetricPill);
        let id = tree.insert(pill, Some(root));

        assert_eq!(tree.find_role(Role::MetricPill), vec![id]);
        assert!(tree.find_role(Role::HighlightList).is_empty());
    }

    #[test]
    fn test_snapshot_skips_empty_fields() {
        let mut tree = ViewTree::new();
        let root = tree.insert(ViewNode::new(ElementKind::Section), None);
        tree.insert(text_node(ElementKind::Heading(2), "Skills"), Some(root));

        let json = serde_json::to_value(tree.snapshot().unwrap()).unwrap();
        assert_eq!(json["kind"], "section");
        assert!(json.get("motion").is_none());
        assert_eq!(json["children"][0]["kind"]["heading"], 2);
        assert_eq!(json["children"][0]["text"], "Skills");
    }

    #[test]
    fn test_empty_tree() {
        let tree = ViewTree::new();
        assert!(tree.is_empty());
        assert!(tree.snapshot().is_none());
        assert_eq!(tree.iter().count(), 0);
        assert_eq!(tree.to_json().unwrap(), "null");
    }
}
