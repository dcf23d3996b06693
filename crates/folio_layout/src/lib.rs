//! Folio Layout
//!
//! Turns a [`ContentStore`](folio_content::ContentStore) into a view tree
//! whose nodes carry their motion, and plays that motion once mounted.
//!
//! # Features
//!
//! - **Element Builders**: fluent `div()`/`heading()`/`link()` builders with
//!   entrance, ambient, interaction and magnetic attachments
//! - **Section Renderers**: About, Skills, Projects, Résumé and Contact
//! - **Interaction Tracking**: latest-sample pointer tracking per region,
//!   feeding magnetic tilt and cursor spotlights
//! - **Render State**: fire-once viewport entrances, ambient loops and
//!   region-driven springs on a shared scheduler
//!
//! # Example
//!
//! ```rust
//! use folio_content::ContentStore;
//! use folio_layout::{render_page, RenderOptions, RenderState};
//!
//! let store = ContentStore::bundled().unwrap();
//! let options = RenderOptions::default();
//! let tree = render_page(&store, &options);
//!
//! let mut state = RenderState::new();
//! state.mount(&tree, &options);
//! // ambient loops start on mount
//! assert!(state.tick(16.0));
//! state.unmount();
//! assert_eq!(state.scheduler().playback_count(), 0);
//! ```

pub mod element;
pub mod motion;
pub mod page;
pub mod render_state;
pub mod sections;
pub mod tracker;
pub mod tree;

// Builder API
pub use element::{div, heading, link, section, Element, ElementBuilder};

// Tree
pub use tree::{ElementKind, NodeSnapshot, Role, ViewNode, ViewNodeId, ViewTree};

// Motion attachments
pub use motion::{EntranceSpec, InteractionSpec, MagneticBinding, MotionSpec, SpotlightBinding};

// Page composition
pub use page::{render_page, RenderOptions, ViewportAmounts};
pub use sections::{
    education_region, experience_region, project_region, ABOUT_REGION, CONTACT_REGION,
    REGION_ATTR,
};

// Runtime
pub use render_state::RenderState;
pub use tracker::{InteractionTracker, PointerSample, SpotlightStyle};
