use web_sys::HtmlElement;
use zoon::eprintln;

use crate::sandbox::{OutputRegion, VisualState};

pub const PLACEHOLDER: &str = "// Output will appear here";

/// A card's output `<div>`.
///
/// The element's children belong to the sandbox, not to the UI framework:
/// executed code appends to it directly through the `output` binding.
#[derive(Clone)]
pub struct DomOutput {
    element: HtmlElement,
}

impl DomOutput {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Dimmed hint shown before the first run.
    pub fn show_placeholder(&self) {
        self.clear();
        self.append("span", PLACEHOLDER, Some("opacity: 0.6"));
    }

    fn append(&self, tag: &str, text: &str, style: Option<&str>) {
        let Some(document) = self.element.owner_document() else {
            return;
        };
        let child = match document.create_element(tag) {
            Ok(child) => child,
            Err(error) => {
                eprintln!("Failed to create output <{tag}>: {error:?}");
                return;
            }
        };
        child.set_text_content(Some(text));
        if let Some(style) = style {
            if let Err(error) = child.set_attribute("style", style) {
                eprintln!("Failed to style output <{tag}>: {error:?}");
            }
        }
        if let Err(error) = self.element.append_child(&child) {
            eprintln!("Failed to append output <{tag}>: {error:?}");
        }
    }
}

impl OutputRegion for DomOutput {
    fn clear(&self) {
        self.element.set_inner_html("");
    }

    fn push_line(&self, line: &str) {
        self.append("div", line, None);
    }

    fn show_error(&self, line: &str) {
        self.element.set_text_content(Some(line));
    }

    fn set_visual_state(&self, state: VisualState) {
        let class_list = self.element.class_list();
        let mut result = class_list.remove_2(
            VisualState::Success.class_name(),
            VisualState::Error.class_name(),
        );
        if result.is_ok() && state != VisualState::Neutral {
            result = class_list.add_1(state.class_name());
        }
        if let Err(error) = result {
            eprintln!("Failed to set output state {state:?}: {error:?}");
        }
    }
}
