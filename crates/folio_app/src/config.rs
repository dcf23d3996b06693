//! Folio configuration file handling
//!
//! Everything lives in an optional `folio.toml`. Every table and key may be
//! left out, in which case the built-in defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_layout::{RenderOptions, ViewportAmounts};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// File name looked up by [`FolioConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level configuration (`folio.toml`)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FolioConfig {
    pub site: SiteConfig,
    pub content: ContentConfig,
    pub motion: MotionConfig,
    pub skills: SkillsConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    pub resume_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            resume_file: "RESUME.pdf".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content file (`.toml` or `.json`). The bundled record is used when
    /// this is absent.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionConfig {
    pub max_tilt_deg: f32,
    pub magnetic_stiffness: f32,
    pub magnetic_mass: f32,
    /// Spring damping. Critical damping when left out.
    pub magnetic_damping: Option<f32>,
    pub parallax_px: f32,
    pub ambient: bool,
    pub viewport: ViewportConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            max_tilt_deg: options.max_tilt_deg,
            magnetic_stiffness: options.magnetic_stiffness,
            magnetic_mass: options.magnetic_mass,
            magnetic_damping: options.magnetic_damping,
            parallax_px: options.parallax_px,
            ambient: options.ambient,
            viewport: ViewportConfig::default(),
        }
    }
}

/// Visible fraction required before entrances fire, per section
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub default_amount: f32,
    pub projects: f32,
    pub timeline: f32,
    pub about: f32,
    pub contact: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        let amounts = ViewportAmounts::default();
        Self {
            default_amount: amounts.default_amount,
            projects: amounts.projects,
            timeline: amounts.timeline,
            about: amounts.about,
            contact: amounts.contact,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Categories shown on the Professional card. Everything else is
    /// Technical.
    pub professional: Vec<String>,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            professional: RenderOptions::default().professional_skills,
        }
    }
}

impl FolioConfig {
    /// Load `folio.toml` from a directory, falling back to defaults when the
    /// file does not exist
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!(dir = %dir.display(), "no {CONFIG_FILE}, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load a specific config file. A relative content path is resolved
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let (Some(content), Some(dir)) = (config.content.path.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Invalid folio configuration")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Renderer options for this configuration.
    ///
    /// Non-finite or negative motion values fall back to their defaults.
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        let motion = &self.motion;
        let viewport = &motion.viewport;
        let amounts = ViewportAmounts::default();

        RenderOptions {
            base_url: self.site.base_url.clone(),
            resume_file: self.site.resume_file.clone(),
            max_tilt_deg: non_negative("max_tilt_deg", motion.max_tilt_deg, defaults.max_tilt_deg),
            magnetic_stiffness: positive(
                "magnetic_stiffness",
                motion.magnetic_stiffness,
                defaults.magnetic_stiffness,
            ),
            magnetic_mass: positive("magnetic_mass", motion.magnetic_mass, defaults.magnetic_mass),
            magnetic_damping: motion.magnetic_damping.and_then(|damping| {
                let valid = damping.is_finite() && damping > 0.0;
                if !valid {
                    warn!(damping, "invalid magnetic_damping, using critical damping");
                }
                valid.then_some(damping)
            }),
            parallax_px: non_negative("parallax_px", motion.parallax_px, defaults.parallax_px),
            ambient: motion.ambient,
            viewport: ViewportAmounts {
                default_amount: fraction("default_amount", viewport.default_amount, amounts.default_amount),
                projects: fraction("projects", viewport.projects, amounts.projects),
                timeline: fraction("timeline", viewport.timeline, amounts.timeline),
                about: fraction("about", viewport.about, amounts.about),
                contact: fraction("contact", viewport.contact, amounts.contact),
            },
            professional_skills: self.skills.professional.clone(),
        }
    }
}

fn non_negative(key: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(key, value, default, "invalid motion setting, using default");
        default
    }
}

fn positive(key: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!(key, value, default, "invalid motion setting, using default");
        default
    }
}

fn fraction(key: &str, value: f32, default: f32) -> f32 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        warn!(key, value, default, "viewport amount outside [0, 1], using default");
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = FolioConfig::from_toml_str("").unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = FolioConfig::from_toml_str(
            r#"
            [site]
            resume_file = "cv.pdf"

            [motion]
            max_tilt_deg = 8.0

            [motion.viewport]
            projects = 0.5
            "#,
        )
        .unwrap();
        let options = config.render_options();
        assert_eq!(options.resume_href(), "/cv.pdf");
        assert_eq!(options.max_tilt_deg, 8.0);
        assert_eq!(options.viewport.projects, 0.5);
        assert_eq!(options.viewport.timeline, 0.3);
        assert_eq!(options.magnetic_stiffness, 150.0);
    }

    #[test]
    fn test_invalid_motion_values_fall_back() {
        let config = FolioConfig::from_toml_str(
            r#"
            [motion]
            max_tilt_deg = nan
            magnetic_mass = 0.0

            [motion.viewport]
            about = 3.0
            "#,
        )
        .unwrap();
        let options = config.render_options();
        assert_eq!(options.max_tilt_deg, 5.0);
        assert_eq!(options.magnetic_mass, 1.0);
        assert_eq!(options.viewport.about, 0.3);
    }

    #[test]
    fn test_damping_reaches_magnetic_springs() {
        let options = FolioConfig::default().render_options();
        assert_eq!(options.tilt().damping, None);
        assert!(options.tilt().spring().is_critically_damped());

        let config = FolioConfig::from_toml_str("[motion]\nmagnetic_damping = 30.0").unwrap();
        let options = config.render_options();
        assert_eq!(options.tilt().damping, Some(30.0));
        assert_eq!(options.parallax().damping, Some(30.0));
        assert_eq!(options.parallax().spring().damping, 30.0);

        let config = FolioConfig::from_toml_str("[motion]\nmagnetic_damping = -1.0").unwrap();
        assert_eq!(config.render_options().magnetic_damping, None);
    }

    #[test]
    fn test_unknown_type_is_error() {
        let err = FolioConfig::from_toml_str("[motion]\nambient = \"yes\"").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid folio configuration"));
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_relative_content_path_resolved() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[content]\npath = \"data/me.toml\"\n",
        )
        .unwrap();
        let config = FolioConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.content.path, Some(dir.path().join("data/me.toml")));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = FolioConfig::default();
        config.skills.professional = vec!["Languages".to_string()];
        let text = config.to_toml().unwrap();
        assert_eq!(FolioConfig::from_toml_str(&text).unwrap(), config);
    }
}
