//! Projects section: one magnetic card per project, alternating sides

use folio_animation::{
    AnimationDescriptor, Easing, Entrance, Interaction, Repeat, StaggerConfig, Timing, VisualState,
};
use folio_content::{ContentStore, ProjectEntry};

use super::{present, project_region, staggered, REGION_ATTR};
use crate::element::{article, div, heading, link, list, list_item, paragraph, section, span, Element};
use crate::page::RenderOptions;
use crate::tree::Role;

/// Card content reveals 300ms after the card, 80ms apart
const CONTENT_STAGGER: StaggerConfig = StaggerConfig::new(300, 80);

/// Hover glows breathe at different rates: (peak scale, full cycle ms)
const GLOW_PULSES: [(f32, u32); 2] = [(1.1, 4_000), (1.2, 3_000)];

/// The link arrow nudges right and back every 1.5s
const ARROW_NUDGE_PX: f32 = 3.0;
const ARROW_CYCLE_MS: u32 = 1_500;

/// Mirrored loop from rest to `peak` and back over `cycle_ms`
fn breathe(peak: VisualState, cycle_ms: u32) -> AnimationDescriptor {
    AnimationDescriptor::new(
        VisualState::SETTLED,
        peak,
        Timing::Eased(Easing::EaseInOut),
        cycle_ms / 2,
    )
    .repeat(Repeat::Loop { mirror: true })
}

fn glow_layers(options: &RenderOptions) -> Vec<Element> {
    GLOW_PULSES
        .iter()
        .enumerate()
        .map(|(i, &(scale, cycle_ms))| {
            let glow = div().role(Role::Glow).key(format!("glow-{i}")).class(
                "pointer-events-none absolute -inset-px rounded-xl opacity-0 \
                 group-hover:opacity-100 transition-opacity duration-500 blur-xl",
            );
            if options.ambient {
                glow.ambient_descriptor(breathe(VisualState::SETTLED.with_scale(scale), cycle_ms))
            } else {
                glow
            }
        })
        .collect()
}

fn link_arrow(options: &RenderOptions) -> Element {
    let arrow = span("\u{2192}").role(Role::LinkArrow).attr("aria-hidden", "true");
    if options.ambient {
        arrow.ambient_descriptor(breathe(
            VisualState::SETTLED.with_translation(ARROW_NUDGE_PX, 0.0),
            ARROW_CYCLE_MS,
        ))
    } else {
        arrow
    }
}

pub fn render_projects(store: &ContentStore, options: &RenderOptions) -> Element {
    let cards = store
        .projects()
        .iter()
        .enumerate()
        .map(|(index, project)| project_card(project, index, options));

    section("projects")
        .class("py-20 px-6 bg-gray-900")
        .child(
            heading(2, "Projects")
                .class("text-4xl font-bold mb-12 text-center text-white")
                .entrance(Entrance::Up, 0, Some(options.viewport.default_amount)),
        )
        .child(div().class("grid md:grid-cols-2 gap-8").children(cards))
}

/// A single card. Even indices enter from the left, odd from the right.
pub fn project_card(project: &ProjectEntry, index: usize, options: &RenderOptions) -> Element {
    let direction = Entrance::alternating(index);
    let side = if direction == Entrance::Left { "left" } else { "right" };
    let region = project_region(index);

    let mut content = vec![div()
        .class("flex flex-col md:flex-row md:items-center md:justify-between gap-2")
        .child(heading(3, project.title.as_str()).class("font-display text-2xl font-semibold text-white"))
        .child_opt(
            present(&project.period)
                .map(|period| span(period).role(Role::Period).class("text-sm text-zinc-400")),
        )];

    if let Some(description) = present(&project.description) {
        content.push(paragraph(description).class("mt-4 text-zinc-300 leading-relaxed"));
    }

    if !project.stack.is_empty() {
        let tags: Vec<Element> = project
            .stack
            .iter()
            .map(|tech| {
                list_item(tech.as_str())
                    .role(Role::StackTag)
                    .class("rounded-full border border-white/10 px-3 py-1 text-zinc-300 cursor-default")
                    .interaction(Interaction::HoverScale)
            })
            .collect();
        let stagger = Entrance::Chip.default_stagger();
        content.push(
            list()
                .role(Role::StackList)
                .class("mt-4 flex flex-wrap gap-2 text-xs")
                .children(staggered(tags, Entrance::Chip, &stagger)),
        );
    }

    if !project.highlights.is_empty() {
        let items: Vec<Element> = project
            .highlights
            .iter()
            .map(|highlight| {
                list_item(highlight.as_str())
                    .role(Role::Highlight)
                    .class("text-zinc-400 flex items-start")
            })
            .collect();
        let stagger = Entrance::Slide.default_stagger();
        content.push(
            list()
                .role(Role::HighlightList)
                .class("mt-4 space-y-1 text-sm")
                .children(staggered(items, Entrance::Slide, &stagger)),
        );
    }

    if let Some(url) = project.valid_link() {
        content.push(
            div().child(
                link(url, "View project")
                    .role(Role::ProjectLink)
                    .class("mt-6 inline-flex items-center gap-2 text-sm font-medium text-teal-400")
                    .child(link_arrow(options)),
            ),
        );
    }

    article()
        .role(Role::ProjectCard)
        .key(project.title.as_str())
        .class("group relative rounded-xl border border-white/10 bg-zinc-900/40 p-6 overflow-hidden")
        .attr(REGION_ATTR, region.as_str())
        .attr("data-side", side)
        .entrance(direction, index, Some(options.viewport.projects))
        .magnetic(region, options.tilt())
        .children(glow_layers(options))
        .child(
            div()
                .class("relative z-10")
                .children(staggered(content, Entrance::Up, &CONTENT_STAGGER)),
        )
}
