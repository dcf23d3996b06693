//! Résumé section: education and experience timelines plus achievements

use folio_animation::{Entrance, Interaction, StaggerConfig};
use folio_content::{ContentStore, EducationEntry, ExperienceEntry};

use super::{education_region, experience_region, present, staggered, REGION_ATTR};
use crate::element::{div, heading, list, list_item, paragraph, section, span, Element};
use crate::page::RenderOptions;
use crate::tree::Role;

/// Item content reveals 200ms after the item, 100ms apart
const CONTENT_STAGGER: StaggerConfig = StaggerConfig::new(200, 100);
/// Bullets reveal 300ms after their list, 80ms apart
const POINT_STAGGER: StaggerConfig = StaggerConfig::new(300, 80);

/// Common shape of education and experience entries
struct TimelineEntry<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    meta: Option<&'a str>,
    period: &'a str,
    points: &'a [String],
}

impl<'a> From<&'a EducationEntry> for TimelineEntry<'a> {
    fn from(entry: &'a EducationEntry) -> Self {
        Self {
            title: &entry.school,
            subtitle: present(&entry.degree),
            meta: entry.meta.as_deref().and_then(present),
            period: &entry.period,
            points: &[],
        }
    }
}

impl<'a> From<&'a ExperienceEntry> for TimelineEntry<'a> {
    fn from(entry: &'a ExperienceEntry) -> Self {
        Self {
            title: &entry.org,
            subtitle: present(&entry.role),
            meta: None,
            period: &entry.period,
            points: &entry.points,
        }
    }
}

pub fn render_timeline(store: &ContentStore, options: &RenderOptions) -> Element {
    let education = store
        .education()
        .iter()
        .enumerate()
        .map(|(i, entry)| timeline_item(entry.into(), i, education_region(i), options));
    let experience = store
        .experience()
        .iter()
        .enumerate()
        .map(|(i, entry)| timeline_item(entry.into(), i, experience_region(i), options));

    let column = |title: &str| {
        div().child(
            heading(2, title)
                .class("text-2xl font-bold mb-6 text-white")
                .entrance(Entrance::Up, 0, Some(options.viewport.default_amount)),
        )
    };

    section("resume")
        .class("section py-20 text-white")
        .child(
            div()
                .class("container mx-auto px-6 grid md:grid-cols-2 gap-12")
                .child_opt(
                    (!store.education().is_empty())
                        .then(|| column("Education").key("education").children(education)),
                )
                .child_opt(
                    (!store.experience().is_empty())
                        .then(|| column("Experience").key("experience").children(experience)),
                ),
        )
        .child_opt(achievements(store.achievements(), options))
}

fn timeline_item(
    entry: TimelineEntry<'_>,
    index: usize,
    region: String,
    options: &RenderOptions,
) -> Element {
    let mut content = vec![div()
        .class("flex items-start justify-between gap-2")
        .child(heading(3, entry.title).class("font-medium text-white text-lg"))
        .child_opt(present(entry.period).map(|period| {
            span(period)
                .role(Role::Period)
                .class("text-xs text-zinc-400 whitespace-nowrap px-3 py-1 rounded-lg bg-zinc-800/50")
        }))];

    if let Some(subtitle) = entry.subtitle {
        content.push(
            paragraph(subtitle)
                .role(Role::Subtitle)
                .class("mt-2 text-sm text-zinc-300"),
        );
    }

    if let Some(meta) = entry.meta {
        content.push(
            div().class("mt-2").child(
                span(meta)
                    .role(Role::MetricPill)
                    .class("inline-block px-3 py-1 bg-zinc-800 text-xs text-brand-300 rounded-lg")
                    .interaction(Interaction::HoverScale),
            ),
        );
    }

    if !entry.points.is_empty() {
        let bullets: Vec<Element> = entry
            .points
            .iter()
            .map(|point| {
                list_item(point.as_str())
                    .role(Role::Bullet)
                    .class("text-zinc-300/90 flex items-start")
            })
            .collect();
        content.push(
            list()
                .role(Role::BulletList)
                .class("mt-3 space-y-2")
                .children(staggered(bullets, Entrance::Slide, &POINT_STAGGER)),
        );
    }

    div()
        .role(Role::TimelineItem)
        .key(format!("{}-{index}", entry.title))
        .class("relative mb-6 group")
        .attr(REGION_ATTR, region.as_str())
        .entrance(Entrance::Rise, index, Some(options.viewport.timeline))
        .magnetic(region, options.parallax())
        .child(
            div()
                .class("bg-zinc-900 p-6 rounded-2xl shadow-lg overflow-hidden relative z-10")
                .children(staggered(content, Entrance::Slide, &CONTENT_STAGGER)),
        )
}

fn achievements(items: &[String], options: &RenderOptions) -> Option<Element> {
    if items.is_empty() {
        return None;
    }
    let entries: Vec<Element> = items
        .iter()
        .map(|text| list_item(text.as_str()).role(Role::Achievement))
        .collect();
    let stagger = Entrance::Slide.default_stagger();

    Some(
        div()
            .key("achievements")
            .class("container mx-auto px-6 mt-12")
            .child(
                heading(2, "Achievements")
                    .class("text-2xl font-bold mb-6 text-white")
                    .entrance(Entrance::Up, 0, Some(options.viewport.timeline)),
            )
            .child(
                list()
                    .role(Role::AchievementList)
                    .class("space-y-2 text-zinc-300")
                    .children(staggered(entries, Entrance::Slide, &stagger)),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ViewTree;
    use folio_content::{PortfolioContent, Profile};

    fn render(content: PortfolioContent) -> ViewTree {
        let store = ContentStore::new(PortfolioContent {
            profile: Profile {
                name: "Someone".into(),
                ..Profile::default()
            },
            ..content
        });
        let mut tree = ViewTree::new();
        render_timeline(&store, &RenderOptions::default()).build_into(&mut tree);
        tree
    }

    fn school(name: &str, meta: Option<&str>) -> EducationEntry {
        EducationEntry {
            school: name.into(),
            degree: "B.Tech".into(),
            meta: meta.map(Into::into),
            period: "2022 — 2026".into(),
        }
    }

    #[test]
    fn test_no_pill_without_meta() {
        let tree = render(PortfolioContent {
            education: vec![school("A", None), school("B", Some("CGPA: 8.00")), school("C", None)],
            ..PortfolioContent::default()
        });
        let items = tree.find_role(Role::TimelineItem);
        let pills: Vec<usize> = items
            .iter()
            .map(|id| tree.find_role_in(*id, Role::MetricPill).len())
            .collect();
        assert_eq!(pills, vec![0, 1, 0]);
    }

    #[test]
    fn test_experience_bullets_and_parallax() {
        let tree = render(PortfolioContent {
            experience: vec![
                ExperienceEntry {
                    org: "Org".into(),
                    role: "Intern".into(),
                    period: "2024".into(),
                    points: vec!["One".into(), "Two".into()],
                },
                ExperienceEntry {
                    org: "Quiet".into(),
                    ..ExperienceEntry::default()
                },
            ],
            ..PortfolioContent::default()
        });
        let items = tree.find_role(Role::TimelineItem);
        assert_eq!(tree.find_role_in(items[0], Role::Bullet).len(), 2);
        assert!(tree.find_role_in(items[1], Role::BulletList).is_empty());
        assert!(tree.find_role_in(items[1], Role::Subtitle).is_empty());

        let binding = tree.get(items[1]).unwrap().motion.magnetic.as_ref().unwrap();
        assert_eq!(binding.region, "experience-1");
        assert_eq!(binding.config.max_tilt_deg, 0.0);
        assert_eq!(binding.config.max_shift_px, 8.0);
    }

    #[test]
    fn test_achievements_optional() {
        let tree = render(PortfolioContent::default());
        assert!(tree.find_role(Role::AchievementList).is_empty());

        let tree = render(PortfolioContent {
            achievements: vec!["Won".into(), "Placed".into()],
            ..PortfolioContent::default()
        });
        assert_eq!(tree.find_role(Role::Achievement).len(), 2);
    }

    #[test]
    fn test_items_stagger_by_index() {
        let tree = render(PortfolioContent {
            education: vec![school("A", None), school("B", None)],
            ..PortfolioContent::default()
        });
        let delays: Vec<u32> = tree
            .find_role(Role::TimelineItem)
            .into_iter()
            .map(|id| {
                tree.get(id).unwrap().motion.entrance.as_ref().unwrap().descriptor.delay_ms
            })
            .collect();
        assert_eq!(delays, vec![0, 100]);
    }

    #[test]
    fn test_repeated_school_keys_stay_unique() {
        let tree = render(PortfolioContent {
            education: vec![school("Same", None), school("Same", Some("Minor"))],
            experience: vec![
                ExperienceEntry {
                    org: "Org".into(),
                    ..ExperienceEntry::default()
                },
                ExperienceEntry {
                    org: "Org".into(),
                    ..ExperienceEntry::default()
                },
            ],
            ..PortfolioContent::default()
        });
        assert!(tree.duplicate_keys().is_empty());
        let keys: Vec<&str> = tree
            .find_role(Role::TimelineItem)
            .into_iter()
            .filter_map(|id| tree.get(id).and_then(|node| node.key.as_deref()))
            .collect();
        assert_eq!(keys, vec!["Same-0", "Same-1", "Org-0", "Org-1"]);
    }
}
