//! Contact section: email and profile link buttons over drifting particles

use folio_animation::{AmbientStyle, Entrance, Interaction, StaggerConfig};
use folio_content::{is_valid_link, ContentStore};

use super::{present, staggered, CONTACT_REGION, REGION_ATTR};
use crate::element::{div, heading, link, paragraph, section, Element};
use crate::page::RenderOptions;
use crate::tracker::{PointerSample, SpotlightStyle};
use crate::tree::Role;

const PARTICLE_COUNT: usize = 5;

const BLURB: &str = "I'm always open to new opportunities, collaborations, or just a friendly chat. \
                     Feel free to reach out!";

/// Heading, blurb and button row reveal 200ms after the section, 150ms apart
const CONTENT_STAGGER: StaggerConfig = StaggerConfig::new(200, 150);

pub fn render_contact(store: &ContentStore, options: &RenderOptions) -> Element {
    let buttons = contact_buttons(store);
    let stagger = Entrance::Bounce.default_stagger();
    let button_row = (!buttons.is_empty()).then(|| {
        div()
            .class("flex flex-wrap justify-center gap-4")
            .children(staggered(buttons, Entrance::Bounce, &stagger))
    });

    section("contact")
        .class("section py-20 bg-zinc-900 text-white relative overflow-hidden")
        .attr(REGION_ATTR, CONTACT_REGION)
        .child(particles(options))
        .child(
            div()
                .role(Role::Spotlight)
                .class("absolute inset-0 pointer-events-none")
                .attr(
                    "style",
                    format!("background:{}", SpotlightStyle::CONTACT.gradient(&PointerSample::ZERO)),
                )
                .spotlight(CONTACT_REGION, SpotlightStyle::CONTACT),
        )
        .child(
            div()
                .class("container mx-auto px-6 text-center relative z-10")
                .entrance(Entrance::Up, 0, Some(options.viewport.contact))
                .child(
                    heading(2, "Contact")
                        .class("text-4xl font-bold mb-10 text-brand-400 relative inline-block")
                        .entrance_staggered(Entrance::Pop, 0, &CONTENT_STAGGER, None),
                )
                .child(
                    paragraph(BLURB)
                        .role(Role::Blurb)
                        .class("text-zinc-300 max-w-xl mx-auto mb-12 leading-relaxed")
                        .entrance_staggered(Entrance::Up, 1, &CONTENT_STAGGER, None),
                )
                .child_opt(button_row.map(|row| {
                    row.entrance_staggered(Entrance::Up, 2, &CONTENT_STAGGER, None)
                })),
        )
}

fn particles(options: &RenderOptions) -> Element {
    let particles = (0..PARTICLE_COUNT).map(|i| {
        let particle = div()
            .role(Role::Particle)
            .key(format!("particle-{i}"))
            .class("absolute rounded-full");
        if options.ambient {
            particle.ambient(AmbientStyle::Particle, i as u64)
        } else {
            particle
        }
    });
    div()
        .class("absolute inset-0 overflow-hidden pointer-events-none")
        .children(particles)
}

/// Email first, then every valid profile link in order
fn contact_buttons(store: &ContentStore) -> Vec<Element> {
    let profile = store.profile();
    let email = profile
        .email
        .as_deref()
        .and_then(present)
        .map(|email| format!("mailto:{email}"))
        .filter(|href| is_valid_link(href))
        .map(|href| ("email".to_string(), "Email".to_string(), href));

    let links = profile
        .valid_links()
        .map(|(platform, url)| (platform.to_string(), platform_label(platform), url.to_string()));

    email
        .into_iter()
        .chain(links)
        .map(|(key, label, href)| {
            link(href, label.as_str())
                .role(Role::ContactButton)
                .key(key)
                .attr("aria-label", label)
                .class("group relative btn overflow-hidden")
                .interaction(Interaction::HoverScale)
                .interaction(Interaction::TapCompress)
        })
        .collect()
}

/// Display name for a profile platform
fn platform_label(platform: &str) -> String {
    match platform.to_ascii_lowercase().as_str() {
        "github" => "GitHub".to_string(),
        "linkedin" => "LinkedIn".to_string(),
        "gitlab" => "GitLab".to_string(),
        "x" | "twitter" => "X".to_string(),
        _ => {
            let mut chars = platform.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ViewTree;
    use folio_content::{PortfolioContent, Profile};

    fn render(profile: Profile) -> ViewTree {
        let store = ContentStore::new(PortfolioContent {
            profile,
            ..PortfolioContent::default()
        });
        let mut tree = ViewTree::new();
        render_contact(&store, &RenderOptions::default()).build_into(&mut tree);
        tree
    }

    fn labels(tree: &ViewTree) -> Vec<String> {
        tree.find_role(Role::ContactButton)
            .into_iter()
            .filter_map(|id| tree.get(id).and_then(|n| n.text.clone()))
            .collect()
    }

    #[test]
    fn test_buttons_for_present_links() {
        let tree = render(Profile {
            name: "Someone".into(),
            email: Some("someone@example.com".into()),
            links: [
                ("github".to_string(), "https://github.com/someone".to_string()),
                ("linkedin".to_string(), "not a url".to_string()),
            ]
            .into_iter()
            .collect(),
            ..Profile::default()
        });
        assert_eq!(labels(&tree), vec!["Email", "GitHub"]);

        let email = tree.find_key("email").unwrap();
        assert_eq!(
            tree.get(email).unwrap().attr("href"),
            Some("mailto:someone@example.com")
        );
    }

    #[test]
    fn test_no_buttons_no_row() {
        let tree = render(Profile {
            name: "Someone".into(),
            ..Profile::default()
        });
        assert!(labels(&tree).is_empty());
        assert_eq!(tree.find_role(Role::Particle).len(), PARTICLE_COUNT);
        assert_eq!(tree.find_role(Role::Blurb).len(), 1);
    }

    #[test]
    fn test_platform_labels() {
        assert_eq!(platform_label("linkedin"), "LinkedIn");
        assert_eq!(platform_label("mastodon"), "Mastodon");
        assert_eq!(platform_label(""), "");
    }
}
