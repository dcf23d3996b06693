//! Folio Application
//!
//! Loads configuration and content, renders the portfolio page and keeps
//! its motion running.
//!
//! # Example
//!
//! ```rust
//! use folio_app::{FolioConfig, PortfolioApp};
//!
//! fn main() -> folio_app::Result<()> {
//!     folio_app::init_logging();
//!
//!     let config = FolioConfig::load_from_dir(std::path::Path::new("."))?;
//!     let mut app = PortfolioApp::new(config)?;
//!     for warning in app.warnings() {
//!         eprintln!("{warning}");
//!     }
//!     app.tick(16.0);
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod error;

#[cfg(test)]
mod tests;

pub use app::PortfolioApp;
pub use config::{
    ContentConfig, FolioConfig, MotionConfig, SiteConfig, SkillsConfig, ViewportConfig,
    CONFIG_FILE,
};
pub use error::{FolioError, Result};

/// Install a `tracing` subscriber filtered by `RUST_LOG`, defaulting to
/// `info`. Calling it more than once is harmless.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
