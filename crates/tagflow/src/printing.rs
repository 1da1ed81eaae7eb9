use std::fmt;

use crate::FlowTagContainer;
use crate::chip::Chip;

impl<C: Chip> fmt::Debug for FlowTagContainer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header
        writeln!(
            f,
            "FLOW TAGS rows={} chips={} bounds_width={} needs_layout={}",
            self.rows(),
            self.len(),
            self.bounds_width(),
            self.needs_layout()
        )?;

        fn escape_title(title: &str) -> String {
            let mut out = String::with_capacity(title.len());
            for ch in title.chars() {
                match ch {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    _ => out.push(ch),
                }
            }
            out
        }

        // Group chips by row: a chip at x=0 opens a new row, matching the
        // layout pass's placement rule.
        let mut row = 0usize;
        for chip in self.chips() {
            let frame = chip.frame();
            if frame.x == 0.0 {
                row += 1;
                writeln!(f, "  row {row}")?;
            }
            writeln!(
                f,
                "    \"{}\" x={} y={} w={} h={} attached={}",
                escape_title(chip.title()),
                frame.x,
                frame.y,
                frame.width,
                frame.height,
                chip.is_attached()
            )?;
        }
        Ok(())
    }
}
