//! Export Page Demo
//!
//! Mounts the portfolio, plays a short scripted scroll through every
//! section and prints the view tree as JSON.
//!
//! A `folio.toml` in the working directory is picked up if present.
//!
//! Run with: cargo run -p folio_app --example export_page

use std::path::Path;

use anyhow::Result;
use folio_app::{FolioConfig, PortfolioApp};
use folio_core::{Point, Rect};
use folio_layout::{project_region, Role};

const FRAME_MS: f32 = 16.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FolioConfig::load_from_dir(Path::new("."))?;
    let mut app = PortfolioApp::new(config)?;

    for warning in app.warnings() {
        tracing::warn!("{warning}");
    }

    // Scroll every section into full view, one after another
    let sections: Vec<_> = ["about", "skills", "projects", "resume", "contact"]
        .into_iter()
        .filter_map(|key| app.tree().find_key(key))
        .collect();
    for section in sections {
        let entrances: Vec<_> = app
            .tree()
            .descendants(section)
            .into_iter()
            .filter(|id| {
                app.tree()
                    .get(*id)
                    .is_some_and(|node| node.motion.entrance.is_some())
            })
            .collect();
        for id in entrances {
            app.on_viewport(id, 1.0);
        }
        for _ in 0..30 {
            app.tick(FRAME_MS);
        }
    }

    // Hover the first project card near its top-right corner
    let card_bounds = Rect::new(0.0, 0.0, 480.0, 320.0);
    let region = project_region(0);
    app.on_pointer_move(&region, Point::new(440.0, 40.0), &card_bounds);
    for _ in 0..60 {
        app.tick(FRAME_MS);
    }
    if let Some(offset) = app.magnetic_offset(&region) {
        tracing::info!(
            rotate_x = offset.rotation.x,
            rotate_y = offset.rotation.y,
            "first project card tilt"
        );
    }
    if let Some(card) = app.tree().find_role(Role::ProjectCard).first() {
        let state = app.visual_state(*card);
        tracing::info!(opacity = state.opacity, "first project card settled");
    }
    app.on_pointer_leave(&region);

    println!("{}", app.to_json()?);

    app.unmount();
    Ok(())
}
