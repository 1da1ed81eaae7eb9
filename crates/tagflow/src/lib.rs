//! A container that owns an ordered collection of pressable tag chips and
//! arranges them in a flowing, wrapping grid, similar to how text wraps
//! within a paragraph.
//!
//! Chips are reached through the [`Chip`] trait; the container measures
//! them, assigns frames row by row, propagates style defaults, and forwards
//! presses to a single external listener.

use std::time::Instant;

use log::{debug, trace};

pub mod chip;
pub mod geometry;
pub mod layout;
mod printing;
pub mod style;

pub use chip::Chip;
pub use geometry::{LayoutRect, Point, Size};
pub use layout::{FlowSummary, flow_pass};
pub use style::{ColorRGBA, FontSpec, LayoutSpacing, TagStyle};

/// Listener invoked with the pressed chip's displayed text.
type PressListener = Box<dyn FnMut(&str)>;

/// Owns tag chips, their shared style defaults, and the flow layout that
/// positions them inside the container bounds.
///
/// Mutations never re-layout by themselves (except where noted); they mark
/// the container as needing a pass, so any number of mutations between
/// passes cost a single recompute. The embedding host drives passes through
/// [`FlowTagContainer::layout_if_needed`] and reads
/// [`FlowTagContainer::preferred_size`] to allocate vertical space.
pub struct FlowTagContainer<C: Chip> {
    chips: Vec<C>,
    style: TagStyle,
    spacing: LayoutSpacing,
    /// Bounding width supplied by whatever embeds the container. Layout
    /// never grows it.
    bounds_width: f32,
    /// Row count produced by the most recent layout pass.
    rows: usize,
    /// Height of the most recently measured chip in the last pass.
    chip_height: f32,
    /// Global flag indicating that some change requires a layout recompute.
    needs_layout: bool,
    /// Set when a pass changes the row count; consumed by the owner.
    preferred_size_changed: bool,
    /// Monotonic epoch incremented on each change affecting layout.
    last_change_epoch: u64,
    /// Single-slot press listener; last assigned wins.
    press_listener: Option<PressListener>,
    /// Telemetry: total layout passes executed.
    perf_layout_passes: u64,
    /// Telemetry: chips placed by the last pass.
    perf_chips_placed_last: u64,
    /// Telemetry: cumulative chips placed across passes.
    perf_chips_placed_total: u64,
    /// Telemetry: last layout time in milliseconds.
    perf_layout_time_last_ms: u64,
    /// Telemetry: cumulative layout time in milliseconds.
    perf_layout_time_total_ms: u64,
}

impl<C: Chip> Default for FlowTagContainer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chip> FlowTagContainer<C> {
    /// Create an empty container with the default style and spacing.
    pub fn new() -> Self {
        Self {
            chips: Vec::new(),
            style: TagStyle::default(),
            spacing: LayoutSpacing::default(),
            bounds_width: 0.0,
            rows: 0,
            chip_height: 0.0,
            needs_layout: false,
            preferred_size_changed: false,
            last_change_epoch: 0,
            press_listener: None,
            perf_layout_passes: 0,
            perf_chips_placed_last: 0,
            perf_chips_placed_total: 0,
            perf_layout_time_last_ms: 0,
            perf_layout_time_total_ms: 0,
        }
    }

    // ── Tag lifecycle ───────────────────────────────────────────

    /// Append a chip displaying `title`, configured with the container's
    /// current style defaults. Duplicate titles are permitted and produce
    /// independent chips.
    pub fn add_tag(&mut self, title: &str) {
        trace!("add_tag title='{title}'");
        self.chips.push(C::create(title, &self.style));
        self.set_needs_layout();
    }

    /// Detach and drop every chip whose displayed text equals `title`
    /// (zero, one, or many may match), preserving the relative order of the
    /// survivors. Silent no-op when nothing matches.
    pub fn remove_tag(&mut self, title: &str) {
        let before = self.chips.len();
        for chip in self.chips.iter_mut().filter(|chip| chip.title() == title) {
            chip.detach();
        }
        self.chips.retain(|chip| chip.title() != title);
        debug!("remove_tag title='{title}' removed={}", before - self.chips.len());
        self.set_needs_layout();
    }

    /// Detach and drop every chip.
    pub fn remove_all_tags(&mut self) {
        for chip in &mut self.chips {
            chip.detach();
        }
        self.chips.clear();
        self.set_needs_layout();
    }

    /// Displayed texts in layout order.
    pub fn tag_titles(&self) -> Vec<&str> {
        self.chips.iter().map(Chip::title).collect()
    }

    /// Read-only access to the owned chips, in layout order.
    pub fn chips(&self) -> &[C] {
        &self.chips
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Fill the container with a small fixed demo set of tags, purely so a
    /// design-time host has something to render. Not part of runtime
    /// behavior.
    pub fn populate_preview(&mut self) {
        self.add_tag("Welcome");
        self.add_tag("to");
        self.add_tag("tagflow");
    }

    // ── Style and spacing ───────────────────────────────────────

    /// Current container-level style defaults.
    pub fn style(&self) -> &TagStyle {
        &self.style
    }

    pub fn spacing(&self) -> LayoutSpacing {
        self.spacing
    }

    pub fn text_color(&self) -> ColorRGBA {
        self.style.text_color
    }

    /// Set the text color and restyle every existing chip. Does not affect
    /// sizing, so no layout pass is triggered.
    pub fn set_text_color(&mut self, color: ColorRGBA) {
        if self.style.text_color == color {
            return;
        }
        self.style.text_color = color;
        self.propagate_style();
    }

    pub fn background_color(&self) -> ColorRGBA {
        self.style.background_color
    }

    /// Set the chip background color and restyle every existing chip.
    pub fn set_background_color(&mut self, color: ColorRGBA) {
        if self.style.background_color == color {
            return;
        }
        self.style.background_color = color;
        self.propagate_style();
    }

    pub fn corner_radius(&self) -> f32 {
        self.style.corner_radius
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        if self.style.corner_radius == radius {
            return;
        }
        self.style.corner_radius = radius;
        self.propagate_style();
    }

    pub fn border_width(&self) -> f32 {
        self.style.border_width
    }

    pub fn set_border_width(&mut self, width: f32) {
        if self.style.border_width == width {
            return;
        }
        self.style.border_width = width;
        self.propagate_style();
    }

    pub fn border_color(&self) -> Option<ColorRGBA> {
        self.style.border_color
    }

    pub fn set_border_color(&mut self, color: Option<ColorRGBA>) {
        if self.style.border_color == color {
            return;
        }
        self.style.border_color = color;
        self.propagate_style();
    }

    pub fn padding_x(&self) -> f32 {
        self.style.padding_x
    }

    /// Set the horizontal chip padding. Padding feeds every chip's natural
    /// size, so the whole layout is recomputed immediately.
    pub fn set_padding_x(&mut self, padding: f32) {
        if self.style.padding_x == padding {
            return;
        }
        self.style.padding_x = padding;
        self.propagate_style();
        self.set_needs_layout();
        self.layout_if_needed();
    }

    pub fn padding_y(&self) -> f32 {
        self.style.padding_y
    }

    /// Set the vertical chip padding; recomputes the layout immediately.
    pub fn set_padding_y(&mut self, padding: f32) {
        if self.style.padding_y == padding {
            return;
        }
        self.style.padding_y = padding;
        self.propagate_style();
        self.set_needs_layout();
        self.layout_if_needed();
    }

    pub fn font(&self) -> &FontSpec {
        &self.style.font
    }

    /// Set the chip font; affects measurement, so the layout is recomputed
    /// immediately.
    pub fn set_font(&mut self, font: FontSpec) {
        if self.style.font == font {
            return;
        }
        self.style.font = font;
        self.propagate_style();
        self.set_needs_layout();
        self.layout_if_needed();
    }

    pub fn margin_x(&self) -> f32 {
        self.spacing.margin_x
    }

    /// Set the horizontal gap between chips; recomputes the layout
    /// immediately. Margins are container-level, so chips are not restyled.
    pub fn set_margin_x(&mut self, margin: f32) {
        if self.spacing.margin_x == margin {
            return;
        }
        self.spacing.margin_x = margin;
        self.set_needs_layout();
        self.layout_if_needed();
    }

    pub fn margin_y(&self) -> f32 {
        self.spacing.margin_y
    }

    /// Set the vertical gap between rows; recomputes the layout immediately.
    pub fn set_margin_y(&mut self, margin: f32) {
        if self.spacing.margin_y == margin {
            return;
        }
        self.spacing.margin_y = margin;
        self.set_needs_layout();
        self.layout_if_needed();
    }

    /// Re-apply the current style defaults to every owned chip.
    fn propagate_style(&mut self) {
        for chip in &mut self.chips {
            chip.apply_style(&self.style);
        }
    }

    // ── Layout driving ──────────────────────────────────────────

    /// Width of the container bounds as last supplied by the host.
    pub fn bounds_width(&self) -> f32 {
        self.bounds_width
    }

    /// Record the bounding width supplied by the embedding host; marks the
    /// container as needing a pass when the width actually changed.
    pub fn set_bounds_width(&mut self, width: f32) {
        if self.bounds_width == width {
            return;
        }
        self.bounds_width = width;
        self.set_needs_layout();
    }

    /// Mark the container as needing a layout pass and bump the change
    /// epoch. Requests coalesce: any number of mutations before the next
    /// pass cost one recompute.
    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
        self.last_change_epoch = self.last_change_epoch.wrapping_add(1);
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn change_epoch(&self) -> u64 {
        self.last_change_epoch
    }

    /// Run a layout pass only if one is pending.
    pub fn layout_if_needed(&mut self) {
        if self.needs_layout {
            self.layout();
        }
    }

    /// Run a full layout pass over the live chip sequence: detach all chips,
    /// measure and position them row by row, and re-attach them at their
    /// computed frames. Always recomputes from scratch; there is no
    /// incremental diffing.
    pub fn layout(&mut self) {
        let start = Instant::now();
        let summary = layout::flow_pass(&mut self.chips, self.bounds_width, self.spacing);
        if summary.rows != self.rows {
            // Row count is the only internal quantity feeding the computed
            // height, so this is exactly when the owner must re-ask for it.
            self.preferred_size_changed = true;
        }
        self.rows = summary.rows;
        self.chip_height = summary.chip_height;
        self.needs_layout = false;

        self.perf_layout_passes = self.perf_layout_passes.saturating_add(1);
        self.perf_chips_placed_last = summary.chips_placed as u64;
        self.perf_chips_placed_total =
            self.perf_chips_placed_total.saturating_add(self.perf_chips_placed_last);
        let elapsed_ms = start.elapsed().as_millis() as u64;
        self.perf_layout_time_last_ms = elapsed_ms;
        self.perf_layout_time_total_ms = self.perf_layout_time_total_ms.saturating_add(elapsed_ms);

        debug!(
            "layout pass rows={} chips={} bounds_width={}",
            summary.rows, summary.chips_placed, self.bounds_width
        );
    }

    /// Row count from the most recent layout pass.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Chip height recorded by the most recent layout pass.
    pub fn chip_height(&self) -> f32 {
        self.chip_height
    }

    /// The container's self-reported ideal size for the enclosing layout
    /// system: the current bounds width and the stacked row height. The raw
    /// row formula degenerates below zero when no rows exist; that case is
    /// clamped to zero height here, at the component boundary.
    pub fn preferred_size(&self) -> Size {
        let height =
            self.rows as f32 * (self.chip_height + self.spacing.margin_y) - self.spacing.margin_y;
        Size { width: self.bounds_width, height: height.max(0.0) }
    }

    /// Atomically read and clear the flag recording that the last pass
    /// changed the preferred size. Owners poll this after driving layout to
    /// decide whether to reflow around the container.
    pub fn take_preferred_size_changed(&mut self) -> bool {
        let changed = self.preferred_size_changed;
        self.preferred_size_changed = false;
        changed
    }

    // ── Press forwarding ────────────────────────────────────────

    /// Install the press listener. At most one listener exists; assigning a
    /// new one replaces the previous (last assigned wins).
    pub fn on_tag_pressed<F: FnMut(&str) + 'static>(&mut self, listener: F) {
        self.press_listener = Some(Box::new(listener));
    }

    /// Remove the press listener. Subsequent presses are dropped silently.
    pub fn clear_tag_pressed(&mut self) {
        self.press_listener = None;
    }

    /// Hit-test `point` against the attached chips' frames, in layout
    /// order, and forward the hit chip's title to the listener. Returns
    /// whether a chip was hit. Frames come from the most recent layout
    /// pass.
    pub fn press_at(&mut self, point: Point) -> bool {
        let hit = self
            .chips
            .iter()
            .find(|chip| chip.is_attached() && chip.frame().contains(point))
            .map(|chip| chip.title().to_owned());
        match hit {
            Some(title) => {
                self.forward_press(&title);
                true
            }
            None => false,
        }
    }

    /// Forward a chip press to the external listener. Safe no-op when no
    /// listener is registered.
    pub fn forward_press(&mut self, title: &str) {
        if let Some(listener) = self.press_listener.as_mut() {
            listener(title);
        } else {
            trace!("tag '{title}' pressed with no listener registered");
        }
    }

    // ── Telemetry ───────────────────────────────────────────────

    /// Performance counter: total layout passes executed.
    pub fn perf_layout_passes(&self) -> u64 {
        self.perf_layout_passes
    }

    /// Performance counter: chips placed by the last pass.
    pub fn perf_chips_placed_last(&self) -> u64 {
        self.perf_chips_placed_last
    }

    /// Performance counter: cumulative chips placed across passes.
    pub fn perf_chips_placed_total(&self) -> u64 {
        self.perf_chips_placed_total
    }

    /// Performance metric: time spent in the last layout pass in
    /// milliseconds.
    pub fn perf_layout_time_last_ms(&self) -> u64 {
        self.perf_layout_time_last_ms
    }

    /// Performance metric: cumulative layout time in milliseconds.
    pub fn perf_layout_time_total_ms(&self) -> u64 {
        self.perf_layout_time_total_ms
    }
}
