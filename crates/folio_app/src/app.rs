//! Portfolio application
//!
//! Ties configuration, content, the rendered view tree and its live render
//! state together.

use std::path::Path;

use folio_animation::{MagneticOutput, VisualState};
use folio_content::{ContentStore, ContentWarning};
use folio_core::{Point, Rect};
use folio_layout::{render_page, NodeSnapshot, RenderOptions, RenderState, ViewNodeId, ViewTree};
use tracing::{debug, info};

use crate::config::FolioConfig;
use crate::error::{FolioError, Result};

/// A mounted portfolio page
///
/// # Example
///
/// ```rust
/// use folio_app::{FolioConfig, PortfolioApp};
///
/// let mut app = PortfolioApp::new(FolioConfig::default())?;
/// let about = app.tree().find_key("about").unwrap();
///
/// app.on_viewport(about, 1.0);
/// app.tick(16.0);
///
/// let json = app.to_json()?;
/// assert!(json.contains("\"about\""));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PortfolioApp {
    config: FolioConfig,
    options: RenderOptions,
    store: ContentStore,
    tree: ViewTree,
    state: RenderState,
}

impl PortfolioApp {
    /// Load content, render the page and mount it
    pub fn new(config: FolioConfig) -> Result<Self> {
        let store = match &config.content.path {
            Some(path) => ContentStore::load(path)?,
            None => ContentStore::bundled()?,
        };
        Ok(Self::with_store(config, store))
    }

    /// Load `folio.toml` from `dir` (defaults when absent), then start as
    /// [`new`](Self::new) does
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let config =
            FolioConfig::load_from_dir(dir).map_err(|err| FolioError::Config(format!("{err:#}")))?;
        Self::new(config)
    }

    /// Render and mount already loaded content
    pub fn with_store(config: FolioConfig, store: ContentStore) -> Self {
        let options = config.render_options();
        let tree = render_page(&store, &options);
        let mut state = RenderState::new();
        state.mount(&tree, &options);

        info!(
            name = %store.profile().name,
            nodes = tree.len(),
            warnings = store.warnings().len(),
            "portfolio mounted"
        );

        Self {
            config,
            options,
            store,
            tree,
            state,
        }
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    pub fn render_state(&self) -> &RenderState {
        &self.state
    }

    /// Content warnings found while loading
    pub fn warnings(&self) -> &[ContentWarning] {
        self.store.warnings()
    }

    /// Serialisable view of the whole page
    pub fn snapshot(&self) -> Option<NodeSnapshot> {
        self.tree.snapshot()
    }

    pub fn to_json(&self) -> Result<String> {
        self.tree
            .to_json()
            .map_err(|err| anyhow::Error::new(err).context("Failed to serialize view tree").into())
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn on_viewport(&mut self, node: ViewNodeId, visible_fraction: f32) -> bool {
        self.state.on_viewport(node, visible_fraction)
    }

    pub fn on_viewport_bounds(&mut self, node: ViewNodeId, bounds: &Rect, viewport: &Rect) -> bool {
        self.state.on_viewport_bounds(node, bounds, viewport)
    }

    pub fn on_pointer_move(&mut self, region: &str, point: Point, bounds: &Rect) -> bool {
        self.state.on_pointer_move(region, point, bounds)
    }

    pub fn on_pointer_leave(&mut self, region: &str) -> bool {
        self.state.on_pointer_leave(region)
    }

    /// Advance all motion. Returns true while anything is still moving.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.state.tick(dt_ms)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn visual_state(&self, node: ViewNodeId) -> VisualState {
        self.state.visual_state(node)
    }

    pub fn magnetic_offset(&self, region: &str) -> Option<MagneticOutput> {
        self.state.magnetic_offset(region)
    }

    pub fn spotlight(&self, region: &str) -> Option<String> {
        self.state.spotlight(region)
    }

    /// Tear down every playback. The page can be mounted again with
    /// [`remount`](Self::remount).
    pub fn unmount(&mut self) {
        self.state.unmount();
    }

    pub fn remount(&mut self) {
        self.state.mount(&self.tree, &self.options);
        debug!("portfolio remounted");
    }
}
