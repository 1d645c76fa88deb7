use domlab::platform::browser::{on_window_scroll, scroll_to_top};
use domlab::scroll::ScrollAffordance;
use domlab::zoon::*;

use crate::page::accent_color;

/// Floating "back to top" control, shown once the page is scrolled down.
pub fn scroll_top_button(affordance: ScrollAffordance) -> impl Element {
    on_window_scroll({
        let affordance = affordance.clone();
        move |offset| affordance.on_scroll(offset)
    });
    let visible = affordance.visible;
    Button::new()
        .s(Width::exact(44))
        .s(Height::exact(44))
        .s(RoundedCorners::all(22))
        .s(Background::new().color(accent_color()))
        .s(Font::new().size(20).weight(FontWeight::Bold).color(color!("#052039")).center())
        .update_raw_el(move |raw_el| {
            raw_el
                .class("scroll-top")
                .attr("title", "Scroll to top")
                .style("position", "fixed")
                .style("right", "24px")
                .style("bottom", "24px")
                .style("transition", "opacity 300ms ease")
                .style_signal("opacity", visible.signal().map_bool(|| "1", || "0"))
                .style_signal(
                    "pointer-events",
                    visible.signal().map_bool(|| "auto", || "none"),
                )
        })
        .label(El::new().s(Align::center()).child("↑"))
        .on_press(scroll_to_top)
}
