//! A headless reference chip with approximate text metrics.
//!
//! Measurement scales an average glyph advance from a 16 px baseline rather
//! than shaping real glyphs, which keeps the crate free of font I/O while
//! staying proportional to font size. Containers re-measure every chip on
//! every pass, so measured advances go through a small global cache.

use std::collections::HashMap;
use std::sync::Mutex;

use log::trace;
use once_cell::sync::Lazy;
use tagflow::{Chip, LayoutRect, Size, TagStyle};

/// Average glyph advance in pixels at the 16 px baseline.
const CHAR_WIDTH: f32 = 8.0;
/// Line height multiplier applied to the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.1;

/// A tiny global cache for measured advances to avoid repeated work.
/// Keyed by (text, rounded_font_size_px).
type MeasureKey = (String, u32);
static MEASURE_CACHE: Lazy<Mutex<HashMap<MeasureKey, f32>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Approximate the horizontal advance of `text` at `font_size`, scaling a
/// fixed average glyph width from the 16 px baseline.
pub fn measure_text_advance(text: &str, font_size: f32) -> f32 {
    if text.is_empty() {
        return 0.0;
    }

    let key: MeasureKey = (text.to_owned(), font_size.round() as u32);
    if let Ok(cache) = MEASURE_CACHE.lock()
        && let Some(advance) = cache.get(&key)
    {
        return *advance;
    }

    let scale = (font_size / 16.0).max(0.01);
    let advance = text.chars().count() as f32 * CHAR_WIDTH * scale;
    if let Ok(mut cache) = MEASURE_CACHE.lock() {
        cache.insert(key, advance);
    }
    advance
}

/// A pressable text label that fills the chip contract without a GUI host.
/// Carries its style as data for whatever eventually draws it; only the
/// font and paddings feed measurement.
pub struct TextChip {
    title: String,
    style: TagStyle,
    frame: LayoutRect,
    attached: bool,
}

impl TextChip {
    /// Read-only style access for hosts that render the chip.
    pub fn style(&self) -> &TagStyle {
        &self.style
    }
}

impl Chip for TextChip {
    fn create(title: &str, style: &TagStyle) -> Self {
        trace!("create chip title='{title}'");
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
        let advance = measure_text_advance(&self.title, self.style.font.size);
        Size {
            width: advance + 2.0 * self.style.padding_x,
            height: self.style.font.size * LINE_HEIGHT_FACTOR + 2.0 * self.style.padding_y,
        }
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
