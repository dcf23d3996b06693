//! Content store
//!
//! Holds the portfolio record for the lifetime of the page. The record is
//! normalized and validated once on construction and never mutated after.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ContentError, Result};
use crate::model::{
    EducationEntry, ExperienceEntry, PortfolioContent, Profile, ProjectEntry, SkillGroups,
};
use crate::validate::{validate, ContentWarning};

const BUNDLED: &str = include_str!("../data/portfolio.toml");

/// Read-only access to the portfolio record
#[derive(Clone, Debug)]
pub struct ContentStore {
    content: PortfolioContent,
    warnings: Vec<ContentWarning>,
}

impl ContentStore {
    /// Build a store from an already-parsed record
    pub fn new(mut content: PortfolioContent) -> Self {
        content.normalize();
        let warnings = validate(&content);
        debug!(
            projects = content.projects.len(),
            skills = content.skills.len(),
            warnings = warnings.len(),
            "content loaded"
        );
        Self { content, warnings }
    }

    /// The record compiled into the library
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let content: PortfolioContent = toml::from_str(source)?;
        Ok(Self::new(content))
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let content: PortfolioContent = serde_json::from_str(source)?;
        Ok(Self::new(content))
    }

    /// Load a `.toml` or `.json` content file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let store = match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            _ => return Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        };
        info!("Loaded content from {}", path.display());
        Ok(store)
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn profile(&self) -> &Profile {
        &self.content.profile
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.content.education
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.content.experience
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.content.projects
    }

    pub fn skills(&self) -> &SkillGroups {
        &self.content.skills
    }

    pub fn achievements(&self) -> &[String] {
        &self.content.achievements
    }

    /// Warnings raised while validating the record
    pub fn warnings(&self) -> &[ContentWarning] {
        &self.warnings
    }
}
