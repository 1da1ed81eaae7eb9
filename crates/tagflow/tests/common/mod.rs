//! Shared test fixture: a chip with deterministic geometry so row-break
//! arithmetic stays readable in assertions.

use tagflow::{Chip, LayoutRect, Size, TagStyle};

/// Width is 10 units per character of the title. Height is 20, or 30 when
/// the title ends with '!' (for pinning the shared-row-height behavior).
pub struct FixedChip {
    title: String,
    style: TagStyle,
    frame: LayoutRect,
    attached: bool,
}

impl FixedChip {
    #[allow(dead_code)]
    pub fn style(&self) -> &TagStyle {
        &self.style
    }
}

impl Chip for FixedChip {
    fn create(title: &str, style: &TagStyle) -> Self {
        Self {
            title: title.to_owned(),
            style: style.clone(),
            frame: LayoutRect::default(),
            attached: false,
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn natural_size(&self) -> Size {
        let height = if self.title.ends_with('!') { 30.0 } else { 20.0 };
        Size { width: self.title.chars().count() as f32 * 10.0, height }
    }

    fn apply_style(&mut self, style: &TagStyle) {
        self.style = style.clone();
    }

    fn set_frame(&mut self, frame: LayoutRect) {
        self.frame = frame;
    }

    fn frame(&self) -> LayoutRect {
        self.frame
    }

    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
