//! About section: summary card, quick info and a pointer spotlight

use folio_animation::{AmbientStyle, Entrance, Interaction, StaggerConfig};
use folio_content::ContentStore;

use super::{present, staggered, ABOUT_REGION, REGION_ATTR};
use crate::element::{div, heading, link, list, list_item, paragraph, section, Element};
use crate::page::RenderOptions;
use crate::tracker::{PointerSample, SpotlightStyle};
use crate::tree::Role;

const ORB_COUNT: usize = 4;

/// Card text reveals 300ms after the card, 100ms apart
const TEXT_STAGGER: StaggerConfig = StaggerConfig::new(300, 100);
/// Quick-info rows follow the heading
const INFO_STAGGER: StaggerConfig = StaggerConfig::new(500, 150);

pub fn render_about(store: &ContentStore, options: &RenderOptions) -> Element {
    section("about")
        .class("section py-20 text-white relative overflow-hidden")
        .attr(REGION_ATTR, ABOUT_REGION)
        .child(backdrop(options))
        .child(
            div()
                .class("container mx-auto px-6 grid gap-12 items-center relative z-10")
                .child(summary_card(store, options))
                .child(quick_info_card(store, options)),
        )
}

fn backdrop(options: &RenderOptions) -> Element {
    let orbs = (0..ORB_COUNT).map(|i| {
        let size = 200 + i * 50;
        let rgb = if i % 2 == 1 { "59,130,246" } else { "6,182,212" };
        let orb = div()
            .role(Role::Orb)
            .key(format!("orb-{i}"))
            .class("absolute rounded-full")
            .attr(
                "style",
                format!(
                    "width:{size}px;height:{size}px;left:{}%;top:{}%;\
                     background:radial-gradient(circle, rgba({rgb},0.04) 0%, transparent 70%);\
                     filter:blur(40px)",
                    20 + i * 20,
                    10 + i * 20,
                ),
            );
        if options.ambient {
            orb.ambient(AmbientStyle::Orb, i as u64)
        } else {
            orb
        }
    });

    div()
        .class("absolute inset-0 overflow-hidden pointer-events-none")
        .child(
            div()
                .role(Role::Spotlight)
                .class("absolute inset-0")
                .attr("style", format!("background:{}", SpotlightStyle::ABOUT.gradient(&PointerSample::ZERO)))
                .spotlight(ABOUT_REGION, SpotlightStyle::ABOUT),
        )
        .children(orbs)
}

fn summary_card(store: &ContentStore, options: &RenderOptions) -> Element {
    let mut body = vec![heading(2, "About Me").class("text-3xl font-bold text-white mb-4")];
    if let Some(summary) = store.profile().summary.as_deref().and_then(present) {
        body.push(
            paragraph(summary)
                .role(Role::Summary)
                .class("text-zinc-300 leading-relaxed mb-6"),
        );
    }
    body.push(div().class("flex gap-4").child(resume_button(options)));

    div()
        .role(Role::Card)
        .key("summary")
        .class("group relative bg-zinc-900 p-8 rounded-2xl shadow-lg")
        .entrance(Entrance::Flip, 0, Some(options.viewport.about))
        .interaction(Interaction::HoverLift)
        .children(staggered(body, Entrance::Up, &TEXT_STAGGER))
}

fn resume_button(options: &RenderOptions) -> Element {
    link(options.resume_href(), "Download Resume")
        .role(Role::ResumeButton)
        .attr("download", options.resume_file.clone())
        .class("btn flex items-center gap-2 relative overflow-hidden")
        .interaction(Interaction::HoverScale)
        .interaction(Interaction::TapCompress)
}

fn quick_info_card(store: &ContentStore, options: &RenderOptions) -> Element {
    let profile = store.profile();
    let items: Vec<Element> = [
        ("map-pin", profile.location.as_deref()),
        ("mail", profile.email.as_deref()),
        ("phone", profile.phone.as_deref()),
    ]
    .into_iter()
    .filter_map(|(icon, value)| {
        value.and_then(present).map(|text| {
            list_item(text)
                .role(Role::QuickInfo)
                .key(icon)
                .attr("icon", icon)
                .class("flex items-center gap-3 cursor-default")
        })
    })
    .collect();

    let info_list = (!items.is_empty()).then(|| {
        list()
            .class("space-y-4 text-zinc-300")
            .children(staggered(items, Entrance::Slide, &INFO_STAGGER))
    });

    div()
        .role(Role::Card)
        .key("quick-info")
        .class("group relative self-center bg-zinc-900 p-8 rounded-2xl shadow-lg")
        .entrance(Entrance::Flip, 1, Some(options.viewport.about))
        .interaction(Interaction::HoverLift)
        .child(
            heading(3, "Quick Info")
                .class("text-xl font-semibold text-white mb-6")
                .entrance_staggered(Entrance::Up, 0, &TEXT_STAGGER, None),
        )
        .child_opt(info_list)
}
