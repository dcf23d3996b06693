//! Skills section: Technical and Professional cards of tag groups

use folio_animation::{AmbientStyle, Entrance, Interaction, StaggerConfig};
use folio_content::ContentStore;

use super::staggered;
use crate::element::{div, heading, section, span, Element};
use crate::page::RenderOptions;
use crate::tree::Role;

const GROUP_STAGGER: StaggerConfig = StaggerConfig::new(0, 100);

pub fn render_skills(store: &ContentStore, options: &RenderOptions) -> Element {
    let (professional, technical): (Vec<_>, Vec<_>) = store
        .skills()
        .iter()
        .partition(|(category, _)| options.is_professional(category));

    let technical_card = (!technical.is_empty()).then(|| {
        card("technical", "Technical", &technical)
            .entrance(Entrance::Left, 0, Some(options.viewport.default_amount))
    });
    let professional_card = (!professional.is_empty()).then(|| {
        card("professional", "Professional", &professional)
            .entrance(Entrance::Right, 0, Some(options.viewport.default_amount))
    });

    section("skills")
        .class("section py-20 relative overflow-hidden")
        .child(drift_blobs(options))
        .child(
            div()
                .class("container mx-auto px-6 relative z-10")
                .child(
                    heading(2, "Skills")
                        .class("text-4xl font-bold mb-12 text-white")
                        .entrance(Entrance::Up, 0, Some(options.viewport.default_amount)),
                )
                .child(
                    div()
                        .class("grid grid-cols-1 lg:grid-cols-3 gap-6")
                        .child_opt(technical_card)
                        .child_opt(professional_card),
                ),
        )
}

fn drift_blobs(options: &RenderOptions) -> Element {
    let blobs = (0..2u64).map(|i| {
        let blob = div()
            .role(Role::Orb)
            .key(format!("blob-{i}"))
            .class("absolute w-96 h-96 rounded-full blur-3xl");
        if options.ambient {
            blob.ambient(AmbientStyle::Drift, i)
        } else {
            blob
        }
    });
    div()
        .class("absolute inset-0 overflow-hidden pointer-events-none opacity-30")
        .children(blobs)
}

fn card(key: &str, title: &str, groups: &[(&str, &[String])]) -> Element {
    let groups: Vec<Element> = groups
        .iter()
        .map(|(category, skills)| skill_group(category, skills))
        .collect();

    div()
        .role(Role::Card)
        .key(key)
        .class("relative group h-full bg-zinc-900 p-8 rounded-2xl shadow-lg")
        .interaction(Interaction::HoverLift)
        .child(heading(3, title).class("text-xl font-semibold mb-6 text-brand-300"))
        .children(staggered(groups, Entrance::Up, &GROUP_STAGGER))
}

/// One category: heading plus one tag per skill, in order
fn skill_group(category: &str, skills: &[String]) -> Element {
    let tags = skills.iter().map(|skill| {
        span(skill.as_str())
            .role(Role::SkillTag)
            .class("px-3 py-1 bg-zinc-800 rounded-lg text-sm cursor-default select-none")
            .interaction(Interaction::HoverScale)
    });

    div()
        .role(Role::SkillGroup)
        .key(category)
        .child(
            heading(4, category)
                .class("text-sm text-zinc-400 uppercase mb-3 font-medium tracking-wide"),
        )
        .child(div().class("flex flex-wrap gap-2").children(tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ViewTree;
    use folio_content::{PortfolioContent, Profile, SkillGroups};

    fn render(skills: SkillGroups, options: &RenderOptions) -> ViewTree {
        let store = ContentStore::new(PortfolioContent {
            profile: Profile {
                name: "Someone".into(),
                ..Profile::default()
            },
            skills,
            ..PortfolioContent::default()
        });
        let mut tree = ViewTree::new();
        render_skills(&store, options).build_into(&mut tree);
        tree
    }

    #[test]
    fn test_languages_group_renders_three_tags_in_order() {
        let skills: SkillGroups = vec![("Languages", vec!["Telugu", "Hindi", "English"])]
            .into_iter()
            .collect();
        let tree = render(skills, &RenderOptions::default());

        let group = tree.find_key("Languages").unwrap();
        let heading_text = tree.get(tree.children(group)[0]).unwrap().text.clone();
        assert_eq!(heading_text.as_deref(), Some("Languages"));

        let tags: Vec<String> = tree
            .find_role_in(group, Role::SkillTag)
            .into_iter()
            .filter_map(|id| tree.get(id).and_then(|n| n.text.clone()))
            .collect();
        assert_eq!(tags, vec!["Telugu", "Hindi", "English"]);
        assert_eq!(tree.find_role(Role::SkillTag).len(), 3);
    }

    #[test]
    fn test_cards_split_by_option() {
        let skills: SkillGroups = vec![
            ("Tools", vec!["Git"]),
            ("Soft Skills", vec!["Teamwork"]),
            ("Cloud", vec!["AWS"]),
        ]
        .into_iter()
        .collect();
        let tree = render(skills, &RenderOptions::default());

        let technical = tree.find_key("technical").unwrap();
        let groups: Vec<&str> = tree
            .find_role_in(technical, Role::SkillGroup)
            .into_iter()
            .filter_map(|id| tree.get(id).and_then(|n| n.key.as_deref()))
            .collect();
        assert_eq!(groups, vec!["Tools", "Cloud"]);

        let professional = tree.find_key("professional").unwrap();
        assert_eq!(tree.find_role_in(professional, Role::SkillGroup).len(), 1);
    }

    #[test]
    fn test_empty_card_omitted() {
        let skills: SkillGroups = vec![("Tools", vec!["Git"])].into_iter().collect();
        let tree = render(skills, &RenderOptions::default());
        assert!(tree.find_key("professional").is_none());
        assert_eq!(tree.find_role(Role::Card).len(), 1);
    }

    #[test]
    fn test_group_stagger_increases() {
        let skills: SkillGroups = vec![("A", vec!["a"]), ("B", vec!["b"]), ("C", vec!["c"])]
            .into_iter()
            .collect();
        let tree = render(skills, &RenderOptions::default());
        let delays: Vec<u32> = tree
            .find_role(Role::SkillGroup)
            .into_iter()
            .map(|id| {
                let entrance = tree.get(id).unwrap().motion.entrance.as_ref().unwrap();
                assert!(entrance.viewport_amount.is_none());
                entrance.descriptor.delay_ms
            })
            .collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]), "{delays:?}");
    }
}
