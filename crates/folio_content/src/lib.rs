//! Folio Content
//!
//! The portfolio record: schema, loading and validation.
//!
//! # Features
//!
//! - **Bundled Record**: the default content is compiled in from
//!   `data/portfolio.toml`
//! - **File Loading**: TOML or JSON, chosen by extension
//! - **Normalization**: blank optional fields become absent
//! - **Validation**: duplicate titles and malformed links are reported as
//!   warnings and never stop the page from rendering
//!
//! # Example
//!
//! ```rust
//! use folio_content::ContentStore;
//!
//! let store = ContentStore::bundled().unwrap();
//! for project in store.projects() {
//!     println!("{} ({})", project.title, project.period);
//! }
//! ```

pub mod error;
pub mod model;
pub mod store;
pub mod validate;

pub use error::{ContentError, Result};
pub use model::{
    EducationEntry, ExperienceEntry, PortfolioContent, Profile, ProjectEntry, SkillGroups,
};
pub use store::ContentStore;
pub use validate::{check_link, is_valid_link, validate, ContentWarning};
