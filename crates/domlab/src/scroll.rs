use zoon::Mutable;

/// Vertical offset past which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

pub fn is_scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Visibility of the scroll-to-top control, derived from the last scroll offset.
#[derive(Clone, Default)]
pub struct ScrollAffordance {
    pub visible: Mutable<bool>,
}

impl ScrollAffordance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&self, offset: f64) {
        self.visible.set_neq(is_scroll_top_visible(offset));
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}
