use domlab::card::CardState;
use domlab::platform::browser::{DomOutput, JsHost};
use domlab::sandbox::{RunOutcome, SandboxRunner};
use domlab::zoon::wasm_bindgen::JsCast;
use domlab::zoon::{eprintln, println, *};
use std::rc::Rc;

use crate::page::{accent_color, surface_color};

const ENTRANCE_TRANSITION: &str = "opacity 500ms ease, transform 500ms ease";

#[derive(Clone)]
pub struct LessonCard {
    state: CardState,
    runner: Rc<SandboxRunner<JsHost>>,
    /// Set once the editor is in the document.
    editor: Mutable<Option<web_sys::HtmlTextAreaElement>>,
    /// Set once the output `<div>` is in the document.
    output: Mutable<Option<DomOutput>>,
    revealed: Mutable<bool>,
}

impl LessonCard {
    pub fn new(state: CardState, runner: Rc<SandboxRunner<JsHost>>) -> impl Element {
        let card = Self {
            state,
            runner,
            editor: Mutable::new(None),
            output: Mutable::new(None),
            revealed: Mutable::new(false),
        };
        card.start_entrance();
        card.root()
    }

    fn start_entrance(&self) {
        let revealed = self.revealed.clone();
        let delay = self.state.entrance_delay();
        Task::start(async move {
            Timer::sleep(delay).await;
            revealed.set_neq(true);
        });
    }

    fn root(&self) -> impl Element + use<> {
        let revealed = self.revealed.clone();
        Column::with_tag(Tag::Section)
            .s(Width::fill())
            .s(Padding::all(24))
            .s(Gap::new().y(14))
            .s(RoundedCorners::all(16))
            .s(Background::new().color(surface_color()))
            .s(Borders::all(
                Border::new().color(color!("rgba(255, 255, 255, 0.06)")).width(1),
            ))
            .update_raw_el(move |raw_el| {
                raw_el
                    .class("section")
                    .style("transition", ENTRANCE_TRANSITION)
                    .style_signal("opacity", revealed.signal().map_bool(|| "1", || "0"))
                    .style_signal(
                        "transform",
                        revealed.signal().map_bool(|| "none", || "translateY(20px)"),
                    )
            })
            .item(
                El::with_tag(Tag::H2)
                    .s(Font::new().size(24).weight(FontWeight::SemiBold))
                    .child(self.state.record.title),
            )
            .item(
                RawHtmlEl::new("p")
                    .style("line-height", "1.6")
                    .child(self.state.record.explanation),
            )
            .item(self.example_block())
            .item(self.practice_area())
    }

    fn example_block(&self) -> impl Element + use<> {
        RawHtmlEl::new("pre")
            .class("example")
            .style("margin", "0")
            .style("padding", "16px")
            .style("overflow-x", "auto")
            .style("border-radius", "12px")
            .style("background", "#1e1e1e")
            .child(
                RawHtmlEl::new("code")
                    .style("font-family", "'JetBrains Mono', monospace")
                    .child(self.state.record.example),
            )
    }

    fn practice_area(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(10))
            .update_raw_el(|raw_el| raw_el.class("practice-area"))
            .item(
                El::new()
                    .update_raw_el(|raw_el| raw_el.style("opacity", "0.8"))
                    .child("Try it yourself:"),
            )
            .item(self.code_input())
            .item(self.run_button())
            .item(self.output_region())
    }

    fn code_input(&self) -> impl Element + use<> {
        RawHtmlEl::new("textarea")
            .class("code-input")
            .attr("spellcheck", "false")
            .attr("rows", "8")
            .style("width", "100%")
            .style("box-sizing", "border-box")
            .style("padding", "12px")
            .style("border-radius", "12px")
            .style("font-family", "'JetBrains Mono', monospace")
            .style("resize", "vertical")
            .child(self.state.editable_code.get_cloned())
            .after_insert({
                let editor = self.editor.clone();
                move |element| match element.dyn_into::<web_sys::HtmlTextAreaElement>() {
                    Ok(textarea) => editor.set(Some(textarea)),
                    Err(_) => eprintln!("Editor element is not a <textarea>"),
                }
            })
            .event_handler({
                let state = self.state.clone();
                move |event: events::Input| {
                    if let Some(textarea) = event.dyn_target::<web_sys::HtmlTextAreaElement>() {
                        state.edit(textarea.value());
                    }
                }
            })
            .event_handler_with_options(EventOptions::new().preventable(), {
                let this = self.clone();
                move |event: events::KeyDown| {
                    if event.repeat() {
                        return;
                    }
                    if event.shift_key() && event.key() == "Enter" {
                        event.prevent_default();
                        this.run();
                    }
                }
            })
    }

    fn run_button(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Align::new().left())
            .s(Padding::new().x(16).y(8))
            .s(RoundedCorners::all(10))
            .s(Font::new().color(color!("#052039")).weight(FontWeight::SemiBold))
            .s(Background::new().color_signal(hovered.signal().map_bool(
                || color!("#33d6c0"),
                accent_color,
            )))
            .update_raw_el(|raw_el| raw_el.class("run-btn"))
            .label(
                Row::new()
                    .s(Align::new().center_y())
                    .s(Gap::new().x(6))
                    .item(play_icon())
                    .item(El::new().s(Font::new().no_wrap()).child("Run Code")),
            )
            .on_hovered_change(move |is_hovered| hovered.set(is_hovered))
            .on_press({
                let this = self.clone();
                move || this.run()
            })
    }

    fn output_region(&self) -> impl Element + use<> {
        RawHtmlEl::new("div")
            .class("output")
            .style("min-height", "24px")
            .style("padding", "12px")
            .style("border-radius", "12px")
            .style("background", "rgba(0, 0, 0, 0.3)")
            .style("font-family", "'JetBrains Mono', monospace")
            .style("white-space", "pre-wrap")
            .after_insert({
                let output = self.output.clone();
                move |element| {
                    let region = DomOutput::new(element);
                    region.show_placeholder();
                    output.set(Some(region));
                }
            })
    }

    fn run(&self) {
        let title = self.state.record.title;
        let Some(output) = self.output.get_cloned() else {
            eprintln!("Output of lesson '{title}' is not mounted yet");
            return;
        };
        // Lesson code may rewrite the editor without firing `input`.
        if let Some(editor) = self.editor.get_cloned() {
            self.state.edit(editor.value());
        }
        match self.state.run(&self.runner, &output) {
            RunOutcome::Failure(message) => eprintln!("Lesson '{title}' failed: {message}"),
            outcome => println!("Lesson '{title}' ran: {outcome:?}"),
        }
    }
}

fn play_icon() -> impl Element {
    RawSvgEl::new("svg")
        .attr("viewBox", "0 0 24 24")
        .attr("width", "16")
        .attr("height", "16")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .child(
            RawSvgEl::new("polygon")
                .attr("points", "5 3 19 12 5 21")
                .attr("fill", "currentColor"),
        )
}
