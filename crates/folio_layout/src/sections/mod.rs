//! Section renderers
//!
//! Each renderer is a pure function of the content store and the render
//! options. It picks entrance templates by position, binds pointer regions
//! for continuous effects and returns an [`Element`] for the page to build.

mod about;
mod contact;
mod projects;
mod skills;
mod timeline;

pub use about::render_about;
pub use contact::render_contact;
pub use projects::render_projects;
pub use skills::render_skills;
pub use timeline::render_timeline;

use folio_animation::{Entrance, StaggerConfig};

use crate::element::Element;

/// Pointer region of the About section
pub const ABOUT_REGION: &str = "about";
/// Pointer region of the Contact section
pub const CONTACT_REGION: &str = "contact";

/// Pointer region of the project card at `index`
pub fn project_region(index: usize) -> String {
    format!("project-{index}")
}

/// Pointer region of an education entry
pub fn education_region(index: usize) -> String {
    format!("education-{index}")
}

/// Pointer region of an experience entry
pub fn experience_region(index: usize) -> String {
    format!("experience-{index}")
}

/// Attribute telling the view layer which region a node's pointer events feed
pub const REGION_ATTR: &str = "data-region";

/// Give each element a following entrance, indices counting only what is
/// actually rendered
pub(crate) fn staggered(
    items: Vec<Element>,
    direction: Entrance,
    stagger: &StaggerConfig,
) -> impl Iterator<Item = Element> + '_ {
    items
        .into_iter()
        .enumerate()
        .map(move |(i, el)| el.entrance_staggered(direction, i, stagger, None))
}

/// Skip blank strings
pub(crate) fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
