//! Style value types applied to every chip a container owns.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRGBA {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRGBA {
    pub const BLACK: ColorRGBA = ColorRGBA { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: ColorRGBA = ColorRGBA { r: 255, g: 255, b: 255, a: 255 };
}

impl Default for ColorRGBA {
    fn default() -> Self { ColorRGBA::BLACK }
}

/// Font request used when measuring chip text. Rendering backends map the
/// family name to an actual face; the container only forwards it.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self { family: "sans-serif".to_owned(), size: 12.0 }
    }
}

/// Container-level chip style defaults. Applied to every chip at creation
/// and re-applied in bulk to all existing chips when a field changes through
/// the container setters.
#[derive(Debug, Clone, PartialEq)]
pub struct TagStyle {
    pub text_color: ColorRGBA,
    pub background_color: ColorRGBA,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: Option<ColorRGBA>,
    /// Horizontal padding inside a chip. Affects natural width.
    pub padding_x: f32,
    /// Vertical padding inside a chip. Affects natural height.
    pub padding_y: f32,
    pub font: FontSpec,
}

impl Default for TagStyle {
    fn default() -> Self {
        Self {
            text_color: ColorRGBA::WHITE,
            background_color: ColorRGBA::BLACK,
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: None,
            padding_x: 5.0,
            padding_y: 2.0,
            font: FontSpec::default(),
        }
    }
}

/// Horizontal and vertical gaps between neighboring chips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpacing {
    pub margin_x: f32,
    pub margin_y: f32,
}

impl Default for LayoutSpacing {
    fn default() -> Self {
        Self { margin_x: 5.0, margin_y: 2.0 }
    }
}
