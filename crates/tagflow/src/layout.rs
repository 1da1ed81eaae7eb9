//! The wrapping flow-layout pass: chips run left to right and wrap to a new
//! row when the accumulated row width would overflow the container bounds.

use log::trace;

use crate::chip::Chip;
use crate::geometry::LayoutRect;
use crate::style::LayoutSpacing;

/// Outputs of a single flow pass over the full chip sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowSummary {
    /// Number of rows produced; 0 for an empty sequence.
    pub rows: usize,
    /// Height of the most recently measured chip. Row spacing is derived
    /// from this single value, not from a per-row maximum.
    pub chip_height: f32,
    /// Number of chips positioned and re-attached.
    pub chips_placed: usize,
}

/// Position every chip inside `bounds_width`, wrapping rows as needed.
///
/// All chips are detached first so the pass always starts from a clean
/// slate, then re-attached one by one at their computed frames. The first
/// chip of a row is placed unconditionally, so a chip wider than
/// `bounds_width` still opens its own row at x = 0 and overflows to the
/// right; it is never truncated or shrunk.
pub fn flow_pass<C: Chip>(
    chips: &mut [C],
    bounds_width: f32,
    spacing: LayoutSpacing,
) -> FlowSummary {
    for chip in chips.iter_mut() {
        chip.detach();
    }

    let mut current_row: usize = 0;
    let mut row_chip_count: usize = 0;
    let mut row_width: f32 = 0.0;
    let mut chip_height: f32 = 0.0;

    for chip in chips.iter_mut() {
        let size = chip.natural_size();
        // Last measured chip wins; every row is spaced by this height.
        chip_height = size.height;

        let x = if row_chip_count == 0
            || row_width + size.width + spacing.margin_x > bounds_width
        {
            current_row += 1;
            row_chip_count = 1;
            row_width = size.width + spacing.margin_x;
            0.0
        } else {
            let offset = row_width;
            row_chip_count += 1;
            row_width += size.width + spacing.margin_x;
            offset
        };
        let y = (current_row - 1) as f32 * (chip_height + spacing.margin_y);

        let frame = LayoutRect::from_origin_size(x, y, size);
        trace!("placed '{}' row={current_row} frame={frame:?}", chip.title());
        chip.set_frame(frame);
        chip.attach();
    }

    FlowSummary { rows: current_row, chip_height, chips_placed: chips.len() }
}
