use domlab::card::deck;
use domlab::platform::browser::JsHost;
use domlab::sandbox::SandboxRunner;
use domlab::scroll::ScrollAffordance;
use domlab::zoon::*;
use std::rc::Rc;

use crate::lesson_card::LessonCard;
use crate::scroll_top::scroll_top_button;

const PAGE_BACKGROUND: &str = "linear-gradient(160deg, #141414 0%, #1b1f24 55%, #10201e 100%)";

pub fn primary_text_color() -> Rgba {
    color!("#e2e8f0")
}

pub fn accent_color() -> Rgba {
    color!("#00bfa6")
}

pub fn surface_color() -> Rgba {
    color!("rgba(255, 255, 255, 0.04)")
}

/// Page chrome around the lesson list. Built once, by `start_app`.
pub struct Page {
    runner: Rc<SandboxRunner<JsHost>>,
    scroll: ScrollAffordance,
}

impl Page {
    pub fn new() -> impl Element {
        Self {
            runner: Rc::new(SandboxRunner::new(JsHost)),
            scroll: ScrollAffordance::new(),
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Font::new()
                .color(primary_text_color())
                .family([FontFamily::new("Inter"), FontFamily::SansSerif]))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("background", PAGE_BACKGROUND)
                    .style("min-height", "100vh")
            })
            .item(self.header())
            .item(self.container())
            .item(scroll_top_button(self.scroll.clone()))
    }

    fn header(&self) -> impl Element + use<> {
        El::with_tag(Tag::Header)
            .s(Width::fill())
            .s(Padding::new().x(20).top(48).bottom(32))
            .update_raw_el(|raw_el| raw_el.class("header"))
            .child(
                Column::new()
                    .s(Align::new().center_x())
                    .s(Gap::new().y(8))
                    .update_raw_el(|raw_el| raw_el.class("header-content"))
                    .item(
                        El::with_tag(Tag::H1)
                            .s(Align::new().center_x())
                            .s(Font::new().size(40).weight(FontWeight::Bold))
                            .child("Learn JavaScript DOM"),
                    )
                    .item(
                        RawHtmlEl::new("p")
                            .style("margin", "0")
                            .style("text-align", "center")
                            .style("font-size", "18px")
                            .style("color", "#00bfa6")
                            .child("Interactive DOM Practice Platform"),
                    ),
            )
    }

    fn container(&self) -> impl Element + use<> {
        Column::new()
            .s(Align::new().center_x())
            .s(Width::fill().max(900))
            .s(Padding::new().x(20).bottom(40))
            .s(Gap::new().y(24))
            .update_raw_el(|raw_el| raw_el.class("container"))
            .item(demo_element())
            .items(
                deck()
                    .into_iter()
                    .map(|card| LessonCard::new(card, self.runner.clone())),
            )
            .item(footer())
    }
}

/// Target of the lessons' DOM code. Plain DOM, since lessons restyle and
/// rewrite it directly.
fn demo_element() -> impl Element {
    RawHtmlEl::new("div")
        .attr("id", "demoElement")
        .class("section")
        .style("padding", "24px")
        .style("border-radius", "16px")
        .style("text-align", "center")
        .style("background", "rgba(255, 255, 255, 0.04)")
        .child(
            RawHtmlEl::new("div")
                .style("opacity", "0.75")
                .style("font-size", "0.9rem")
                .style("margin-bottom", "8px")
                .child("↓ Practice Element ↓"),
        )
        .child(
            RawHtmlEl::new("div")
                .style("font-size", "1.2rem")
                .style("font-weight", "600")
                .child("Demo Element"),
        )
        .child(
            RawHtmlEl::new("div")
                .style("opacity", "0.75")
                .style("font-size", "0.85rem")
                .style("margin-top", "8px")
                .child("Use the editors below to modify this element"),
        )
}

fn footer() -> impl Element {
    El::with_tag(Tag::Footer)
        .s(Width::fill())
        .s(Padding::new().y(24))
        .s(Font::new().size(14).color(color!("rgba(226, 232, 240, 0.6)")).center())
        .update_raw_el(|raw_el| raw_el.class("site-footer"))
        .child("Created for DOM learners")
}
