//! End-to-end tests for the mounted portfolio
//!
//! Each test renders a full page, drives it with simulated viewport and
//! pointer events, and checks the resulting motion.

use std::fs;

use folio_animation::{build_entrance, Entrance, PlaybackPhase};
use folio_content::ContentStore;
use folio_core::{Point, Rect};
use folio_layout::{project_region, Role, ABOUT_REGION};

use crate::{FolioConfig, FolioError, PortfolioApp};

const FRAME_MS: f32 = 16.0;

fn bundled_app() -> PortfolioApp {
    PortfolioApp::new(FolioConfig::default()).expect("bundled content loads")
}

fn run_frames(app: &mut PortfolioApp, frames: usize) {
    for _ in 0..frames {
        app.tick(FRAME_MS);
    }
}

const THREE_PROJECTS: &str = r#"
[Profile]
name = "Test Person"
title = "Engineer"

[[projects]]
title = "First"
period = "2024"
description = "One"
stack = ["Rust"]

[[projects]]
title = "Second"
period = "2025"
description = "Two"
stack = []
highlights = []

[[projects]]
title = "Third"
period = "2026"
description = "Three"
link = "https://example.com/third"
"#;

#[test]
fn test_bundled_page_mounts() {
    let app = bundled_app();
    assert!(app.warnings().is_empty());
    assert!(app.tree().duplicate_keys().is_empty());
    assert!(app.render_state().is_mounted());
    assert!(app.render_state().scheduler().playback_count() > 0);

    let root = app.snapshot().unwrap();
    let sections: Vec<&str> = root
        .children
        .iter()
        .filter_map(|child| child.key.as_deref())
        .collect();
    assert_eq!(sections, vec!["about", "skills", "projects", "resume", "contact"]);
}

#[test]
fn test_entrance_fires_once() {
    let mut app = bundled_app();
    let card = app.tree().find_role(Role::ProjectCard)[0];

    let fired: Vec<bool> = [0.6, 0.0, 0.9]
        .into_iter()
        .map(|fraction| app.on_viewport(card, fraction))
        .collect();
    assert_eq!(fired, vec![true, false, false]);

    run_frames(&mut app, 200);
    assert_eq!(
        app.render_state().entrance_phase(card),
        Some(PlaybackPhase::Settled)
    );
    assert!(!app.on_viewport(card, 1.0));
}

#[test]
fn test_unseen_card_stays_hidden() {
    let mut app = bundled_app();
    let cards = app.tree().find_role(Role::ProjectCard);
    app.on_viewport(cards[0], 1.0);
    run_frames(&mut app, 200);

    assert!((app.visual_state(cards[0]).opacity - 1.0).abs() < 1e-4);
    assert_eq!(app.visual_state(cards[1]).opacity, 0.0);
}

#[test]
fn test_viewport_bounds_respect_section_amount() {
    let mut app = bundled_app();
    let card = app.tree().find_role(Role::ProjectCard)[0];
    let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);

    // 10% visible: below the projects threshold
    let peeking = Rect::new(0.0, 780.0, 400.0, 200.0);
    assert!(!app.on_viewport_bounds(card, &peeking, &viewport));

    let half = Rect::new(0.0, 700.0, 400.0, 200.0);
    assert!(app.on_viewport_bounds(card, &half, &viewport));
}

#[test]
fn test_three_projects_alternate_directions() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("me.toml");
    fs::write(&content, THREE_PROJECTS).unwrap();
    fs::write(
        dir.path().join(crate::CONFIG_FILE),
        "[content]\npath = \"me.toml\"\n",
    )
    .unwrap();

    let config = FolioConfig::load_from_dir(dir.path()).unwrap();
    let app = PortfolioApp::new(config).unwrap();
    let tree = app.tree();

    let sides: Vec<&str> = tree
        .find_role(Role::ProjectCard)
        .into_iter()
        .filter_map(|id| tree.get(id).and_then(|node| node.attr("data-side")))
        .collect();
    assert_eq!(sides, vec!["left", "right", "left"]);

    // no highlights anywhere, a link only on the last card
    assert!(tree.find_role(Role::HighlightList).is_empty());
    assert_eq!(tree.find_role(Role::ProjectLink).len(), 1);
    assert_eq!(tree.find_role(Role::StackList).len(), 1);
}

#[test]
fn test_languages_render_in_order() {
    let app = bundled_app();
    let tree = app.tree();
    let group = tree.find_key("Languages").unwrap();
    let tags: Vec<String> = tree
        .find_role_in(group, Role::SkillTag)
        .into_iter()
        .map(|id| tree.text_content(id))
        .collect();
    assert_eq!(tags, vec!["Telugu", "Hindi", "English"]);
}

#[test]
fn test_education_without_meta_has_no_pill() {
    let app = bundled_app();
    let tree = app.tree();
    let education = tree.find_key("education").unwrap();
    for item in tree.find_role_in(education, Role::TimelineItem) {
        let pills = tree.find_role_in(item, Role::MetricPill).len();
        let has_meta = app
            .store()
            .education()
            .iter()
            .any(|entry| tree.text_content(item).contains(&entry.school) && entry.meta.is_some());
        assert_eq!(pills, usize::from(has_meta));
    }
}

#[test]
fn test_entrance_templates_are_deterministic() {
    assert_eq!(
        build_entrance(Entrance::Left, 2),
        build_entrance(Entrance::Left, 2)
    );
}

#[test]
fn test_magnetic_tilt_clamped_to_config() {
    let config = FolioConfig::from_toml_str("[motion]\nmax_tilt_deg = 3.0").unwrap();
    let mut app = PortfolioApp::new(config).unwrap();
    let region = project_region(0);
    let bounds = Rect::new(100.0, 100.0, 300.0, 200.0);

    for point in [
        Point::new(10_000.0, 10_000.0),
        Point::new(-10_000.0, 250.0),
        Point::new(f32::NAN, f32::NAN),
    ] {
        assert!(app.on_pointer_move(&region, point, &bounds));
        for _ in 0..120 {
            app.tick(FRAME_MS);
            let offset = app.magnetic_offset(&region).unwrap();
            assert!(offset.rotation.x.abs() <= 3.0 + 1e-4);
            assert!(offset.rotation.y.abs() <= 3.0 + 1e-4);
        }
    }
}

#[test]
fn test_pointer_leave_resets_to_origin() {
    let mut app = bundled_app();
    let bounds = Rect::new(0.0, 0.0, 1200.0, 900.0);
    app.on_pointer_move(ABOUT_REGION, Point::new(640.0, 120.0), &bounds);
    let lit = app.spotlight(ABOUT_REGION).unwrap();
    assert!(lit.contains("at 640px 120px"));

    assert!(app.on_pointer_leave(ABOUT_REGION));
    let sample = app.render_state().pointer_sample(ABOUT_REGION).unwrap();
    assert_eq!(sample.offset, Point::ZERO);
    assert_eq!(sample.normalized.x, 0.0);
    assert_eq!(sample.normalized.y, 0.0);
    assert!(app.spotlight(ABOUT_REGION).unwrap().contains("at 0px 0px"));
}

#[test]
fn test_unmount_empties_scheduler() {
    let mut app = bundled_app();
    let card = app.tree().find_role(Role::ProjectCard)[0];
    app.on_viewport(card, 1.0);
    run_frames(&mut app, 10);

    app.unmount();
    assert_eq!(app.render_state().scheduler().playback_count(), 0);
    assert!(!app.tick(FRAME_MS));

    app.remount();
    assert!(app.render_state().scheduler().playback_count() > 0);
    // a fresh mount starts hidden again
    assert_eq!(app.visual_state(card).opacity, 0.0);
}

#[test]
fn test_ambient_disabled() {
    let config = FolioConfig::from_toml_str("[motion]\nambient = false").unwrap();
    let mut app = PortfolioApp::new(config).unwrap();
    let decorative = [Role::Orb, Role::Glow, Role::LinkArrow];
    assert!(decorative
        .into_iter()
        .flat_map(|role| app.tree().find_role(role))
        .all(|id| {
            app.tree()
                .get(id)
                .is_some_and(|node| node.motion.ambient.is_none())
        }));
    // nothing triggered, nothing hovered: nothing moves
    assert!(!app.tick(FRAME_MS));
}

#[test]
fn test_missing_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = FolioConfig::default();
    config.content.path = Some(dir.path().join("absent.toml"));

    let err = PortfolioApp::new(config).err().unwrap();
    assert!(matches!(err, FolioError::Content(_)));
}

#[test]
fn test_duplicate_titles_warn_and_render() {
    let source = THREE_PROJECTS.replace("\"Second\"", "\"First\"");
    let store = ContentStore::from_toml_str(&source).unwrap();
    let app = PortfolioApp::with_store(FolioConfig::default(), store);

    assert_eq!(app.warnings().len(), 1);
    assert_eq!(app.tree().find_role(Role::ProjectCard).len(), 3);
    assert_eq!(app.tree().duplicate_keys(), &["First".to_string()]);
}

#[test]
fn test_snapshot_json_carries_motion() {
    let app = bundled_app();
    let json = app.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["key"], "page");
    assert!(json.contains("\"magnetic\""));
    assert!(json.contains("\"data-region\""));
}

#[test]
fn test_broken_config_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(crate::CONFIG_FILE), "[motion\nambient = true").unwrap();

    let err = PortfolioApp::from_dir(dir.path()).err().unwrap();
    assert!(matches!(err, FolioError::Config(_)));
    assert!(err.to_string().contains("Failed to parse"));
}
