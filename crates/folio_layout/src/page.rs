//! Page composition and render options

use folio_animation::magnetic::{DEFAULT_MAX_SHIFT_PX, DEFAULT_MAX_TILT_DEG, DEFAULT_STIFFNESS};
use folio_animation::MagneticConfig;
use folio_content::ContentStore;
use tracing::debug;

use crate::element::page;
use crate::sections::{render_about, render_contact, render_projects, render_skills, render_timeline};
use crate::tree::ViewTree;

/// Visible fraction each section's entrances wait for
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportAmounts {
    /// Headings and cards without a section-specific amount
    pub default_amount: f32,
    pub projects: f32,
    pub timeline: f32,
    pub about: f32,
    pub contact: f32,
}

impl Default for ViewportAmounts {
    fn default() -> Self {
        Self {
            default_amount: 0.0,
            projects: 0.15,
            timeline: 0.3,
            about: 0.3,
            contact: 0.3,
        }
    }
}

/// Everything about the page that is not content
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Prefix for static assets
    pub base_url: String,
    /// Résumé file name under `base_url`
    pub resume_file: String,
    pub max_tilt_deg: f32,
    pub magnetic_stiffness: f32,
    pub magnetic_mass: f32,
    /// Spring damping for tilt and parallax. `None` is critical damping.
    pub magnetic_damping: Option<f32>,
    /// Largest timeline parallax shift in pixels
    pub parallax_px: f32,
    /// Attach ambient loops to decorative elements
    pub ambient: bool,
    pub viewport: ViewportAmounts,
    /// Skill categories shown on the Professional card
    pub professional_skills: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            resume_file: "RESUME.pdf".to_string(),
            max_tilt_deg: DEFAULT_MAX_TILT_DEG,
            magnetic_stiffness: DEFAULT_STIFFNESS,
            magnetic_mass: 1.0,
            magnetic_damping: None,
            parallax_px: DEFAULT_MAX_SHIFT_PX,
            ambient: true,
            viewport: ViewportAmounts::default(),
            professional_skills: vec!["Soft Skills".to_string(), "Languages".to_string()],
        }
    }
}

impl RenderOptions {
    /// Where the résumé download points
    pub fn resume_href(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let file = self.resume_file.trim_start_matches('/');
        format!("{base}/{file}")
    }

    /// Magnetic tilt for project cards
    pub fn tilt(&self) -> MagneticConfig {
        MagneticConfig {
            stiffness: self.magnetic_stiffness,
            mass: self.magnetic_mass,
            damping: self.magnetic_damping,
            ..MagneticConfig::tilt(self.max_tilt_deg)
        }
    }

    /// Magnetic parallax for timeline items
    pub fn parallax(&self) -> MagneticConfig {
        MagneticConfig {
            stiffness: self.magnetic_stiffness,
            mass: self.magnetic_mass,
            damping: self.magnetic_damping,
            ..MagneticConfig::parallax(self.parallax_px)
        }
    }

    pub fn is_professional(&self, category: &str) -> bool {
        self.professional_skills.iter().any(|c| c == category)
    }
}

/// Render the whole page: About, Skills, Projects, Résumé, Contact
pub fn render_page(store: &ContentStore, options: &RenderOptions) -> ViewTree {
    let root = page()
        .key("page")
        .child(render_about(store, options))
        .child(render_skills(store, options))
        .child(render_projects(store, options))
        .child(render_timeline(store, options))
        .child(render_contact(store, options));

    let mut tree = ViewTree::new();
    root.build_into(&mut tree);
    debug!(
        nodes = tree.len(),
        duplicate_keys = tree.duplicate_keys().len(),
        "page rendered"
    );
    tree
}
