//! Element builders
//!
//! Sections describe their output with a small fluent builder:
//!
//! ```rust
//! use folio_animation::Entrance;
//! use folio_layout::element::{heading, paragraph, section};
//! use folio_layout::ViewTree;
//!
//! let page = section("skills")
//!     .class("section py-20")
//!     .child(heading(2, "Skills").entrance(Entrance::Up, 0, Some(0.0)))
//!     .child(paragraph("Things I work with"));
//!
//! let mut tree = ViewTree::new();
//! let root = page.build_into(&mut tree);
//! assert_eq!(tree.children(root).len(), 2);
//! ```

use folio_animation::{
    build_ambient_styled, build_entrance_staggered, AmbientStyle, AnimationDescriptor, Entrance,
    Interaction, MagneticConfig, StaggerConfig,
};
use rustc_hash::FxHashSet;
use tracing::warn;

use crate::motion::{EntranceSpec, InteractionSpec, MagneticBinding, SpotlightBinding};
use crate::tracker::SpotlightStyle;
use crate::tree::{ElementKind, Role, ViewNode, ViewNodeId, ViewTree};

/// Anything that can add itself to a [`ViewTree`]
pub trait ElementBuilder {
    /// Build this element (and its children) under `parent`
    fn build(&self, tree: &mut ViewTree, parent: Option<ViewNodeId>) -> ViewNodeId;

    /// Sibling key, if any
    fn sibling_key(&self) -> Option<&str> {
        None
    }
}

/// Generic element builder
pub struct Element {
    node: ViewNode,
    children: Vec<Box<dyn ElementBuilder>>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            node: ViewNode::new(kind),
            children: Vec::new(),
        }
    }

    /// Add whitespace-separated classes
    pub fn class(mut self, classes: &str) -> Self {
        self.node
            .classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.node.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.node.attrs.insert(name.into(), value.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.node.role = Some(role);
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.node.key = Some(key.into());
        self
    }

    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Add a child only when there is one
    pub fn child_opt(self, child: Option<impl ElementBuilder + 'static>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: ElementBuilder + 'static,
    {
        for child in children {
            self.children.push(Box::new(child));
        }
        self
    }

    // ========================================================================
    // Motion
    // ========================================================================

    /// Reveal with the template's own stagger
    pub fn entrance(self, direction: Entrance, index: usize, viewport_amount: Option<f32>) -> Self {
        let stagger = direction.default_stagger();
        self.entrance_staggered(direction, index, &stagger, viewport_amount)
    }

    /// Reveal with an explicit stagger schedule
    pub fn entrance_staggered(
        mut self,
        direction: Entrance,
        index: usize,
        stagger: &StaggerConfig,
        viewport_amount: Option<f32>,
    ) -> Self {
        self.node.motion.entrance = Some(EntranceSpec {
            direction,
            index,
            viewport_amount,
            descriptor: build_entrance_staggered(direction, index, stagger),
        });
        self
    }

    pub fn ambient(mut self, style: AmbientStyle, seed: u64) -> Self {
        self.node.motion.ambient = Some(build_ambient_styled(style, seed));
        self
    }

    pub fn ambient_descriptor(mut self, descriptor: AnimationDescriptor) -> Self {
        self.node.motion.ambient = Some(descriptor);
        self
    }

    pub fn interaction(mut self, kind: Interaction) -> Self {
        if !self.node.motion.has_interaction(kind) {
            self.node.motion.interactions.push(InteractionSpec::new(kind));
        }
        self
    }

    pub fn magnetic(mut self, region: impl Into<String>, config: MagneticConfig) -> Self {
        self.node.motion.magnetic = Some(MagneticBinding {
            region: region.into(),
            config,
        });
        self
    }

    pub fn spotlight(mut self, region: impl Into<String>, style: SpotlightStyle) -> Self {
        self.node.motion.spotlight = Some(SpotlightBinding {
            region: region.into(),
            style,
        });
        self
    }

    /// Build as the root of `tree`
    pub fn build_into(&self, tree: &mut ViewTree) -> ViewNodeId {
        self.build(tree, None)
    }
}

impl ElementBuilder for Element {
    fn build(&self, tree: &mut ViewTree, parent: Option<ViewNodeId>) -> ViewNodeId {
        let id = tree.insert(self.node.clone(), parent);

        let mut seen = FxHashSet::default();
        for child in &self.children {
            if let Some(key) = child.sibling_key() {
                if !seen.insert(key) {
                    warn!("duplicate key {:?} among siblings; rendering continues", key);
                    tree.record_duplicate_key(key.to_string());
                }
            }
            child.build(tree, Some(id));
        }

        id
    }

    fn sibling_key(&self) -> Option<&str> {
        self.node.key.as_deref()
    }
}

// ============================================================================
// Constructors
// ============================================================================

pub fn page() -> Element {
    Element::new(ElementKind::Page)
}

/// A page section. `id` is both its key and its anchor.
pub fn section(id: &str) -> Element {
    Element::new(ElementKind::Section).key(id).attr("id", id)
}

pub fn div() -> Element {
    Element::new(ElementKind::Div)
}

pub fn article() -> Element {
    Element::new(ElementKind::Article)
}

pub fn heading(level: u8, text: impl Into<String>) -> Element {
    Element::new(ElementKind::Heading(level.clamp(1, 6)))
        .role(Role::Heading)
        .text(text)
}

pub fn paragraph(text: impl Into<String>) -> Element {
    Element::new(ElementKind::Paragraph).text(text)
}

pub fn span(text: impl Into<String>) -> Element {
    Element::new(ElementKind::Span).text(text)
}

pub fn list() -> Element {
    Element::new(ElementKind::List)
}

pub fn list_item(text: impl Into<String>) -> Element {
    Element::new(ElementKind::ListItem).text(text)
}

/// Link to `href`. Absolute http(s) links open in a new tab.
pub fn link(href: impl Into<String>, label: impl Into<String>) -> Element {
    let href = href.into();
    let external = href.starts_with("http://") || href.starts_with("https://");
    let el = Element::new(ElementKind::Link).attr("href", href).text(label);
    if external {
        el.attr("target", "_blank").attr("rel", "noreferrer")
    } else {
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_opt() {
        let none: Option<Element> = None;
        let el = div().child_opt(none).child_opt(Some(span("x")));
        let mut tree = ViewTree::new();
        let root = el.build_into(&mut tree);
        assert_eq!(tree.children(root).len(), 1);
    }

    #[test]
    fn test_duplicate_sibling_keys_recorded() {
        let el = list()
            .child(list_item("a").key("Same"))
            .child(list_item("b").key("Same"))
            .child(list_item("c").key("Other"));
        let mut tree = ViewTree::new();
        let root = el.build_into(&mut tree);

        // both entries still render
        assert_eq!(tree.children(root).len(), 3);
        assert_eq!(tree.duplicate_keys(), &["Same".to_string()]);
    }

    #[test]
    fn test_external_links() {
        let mut tree = ViewTree::new();
        let id = link("https://example.com", "Site").build_into(&mut tree);
        assert_eq!(tree.get(id).unwrap().attr("target"), Some("_blank"));

        let mut tree = ViewTree::new();
        let id = link("mailto:a@b.c", "Email").build_into(&mut tree);
        assert_eq!(tree.get(id).unwrap().attr("target"), None);
    }

    #[test]
    fn test_interaction_added_once() {
        let el = span("tag")
            .interaction(Interaction::HoverScale)
            .interaction(Interaction::HoverScale);
        let mut tree = ViewTree::new();
        let id = el.build_into(&mut tree);
        assert_eq!(tree.get(id).unwrap().motion.interactions.len(), 1);
    }
}
