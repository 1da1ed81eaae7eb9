//! The contract between a container and the chip elements it owns.

use crate::geometry::{LayoutRect, Size};
use crate::style::TagStyle;

/// A single pressable tag element.
///
/// The container treats chips as opaque collaborators: it measures them,
/// assigns frames, restyles them in bulk, and moves them in and out of the
/// host visual tree. How a chip draws itself and detects input is the
/// implementor's concern.
pub trait Chip {
    /// Construct a chip displaying `title`, configured with the owning
    /// container's current style defaults.
    fn create(title: &str, style: &TagStyle) -> Self;

    /// The displayed text. Also the natural key used for tag removal;
    /// titles are not required to be unique.
    fn title(&self) -> &str;

    /// Natural size for the current title and style, absent external
    /// constraints. Read-only to the container.
    fn natural_size(&self) -> Size;

    /// Replace the chip's style wholesale. The container re-runs layout
    /// separately when the change affects sizing.
    fn apply_style(&mut self, style: &TagStyle);

    /// Assign the frame computed by the container's layout pass. Chips
    /// never position themselves.
    fn set_frame(&mut self, frame: LayoutRect);

    /// The most recently assigned frame.
    fn frame(&self) -> LayoutRect;

    /// Insert the chip into the host visual tree.
    fn attach(&mut self);

    /// Remove the chip from the host visual tree.
    fn detach(&mut self);

    /// Whether the chip currently sits in the host visual tree.
    fn is_attached(&self) -> bool;
}
