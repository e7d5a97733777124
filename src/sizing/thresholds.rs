//! Min-width thresholds derived from a breakpoint table.
//!
//! A breakpoint's value is where its range *ends*, so the next breakpoint's
//! media condition starts one pixel later:
//!
//! ```text
//! s = 640   →  min-width 0
//! m = 1024  →  min-width 641
//! l = 1280  →  min-width 1025
//! ```

use crate::types::BreakpointTable;

/// Project a breakpoint table onto `(name, min_width)` pairs, in table order.
pub fn resolve_min_widths(breakpoints: &BreakpointTable) -> Vec<(String, u32)> {
    let mut previous: Option<u32> = None;
    breakpoints
        .iter()
        .map(|(name, &width)| {
            let min_width = previous.map_or(0, |p| p.saturating_add(1));
            previous = Some(width);
            (name.to_string(), min_width)
        })
        .collect()
}

/// The min-width threshold for one breakpoint, or `None` if it isn't in the table.
pub fn min_width_for(breakpoints: &BreakpointTable, name: &str) -> Option<u32> {
    resolve_min_widths(breakpoints)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, w)| w)
}
