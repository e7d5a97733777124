//! Srcset width calculation.
//!
//! Walks the *breakpoint* table (not the size table) and resolves one pixel
//! width per breakpoint. A breakpoint without its own size inherits the
//! previous one's; before the first breakpoint that is `100vw`.
//!
//! `vw` is evaluated against each breakpoint's own table value (not the
//! derived min-width threshold), so
//! `{ s: 50vw }` on the default table yields half of every breakpoint:
//!
//! ```text
//! s 640 → 320, m 1024 → 512, l 1280 → 640, xl 1920 → 960, xxl 2560 → 1280
//! ```

use super::SizingError;
use super::declaration::parse_declaration;
use crate::types::{BreakpointTable, SizeTable, default_breakpoints};

const INITIAL_DECLARATION: &str = "100vw";

/// Pixel widths for a size table, sorted ascending and de-duplicated.
pub fn srcset_widths(
    sizes: &SizeTable,
    breakpoints: &BreakpointTable,
) -> Result<Vec<u32>, SizingError> {
    let mut previous = INITIAL_DECLARATION;
    let mut widths = Vec::with_capacity(breakpoints.len());

    for (name, &breakpoint_width) in breakpoints.iter() {
        let declaration = match sizes.get(name) {
            Some(d) if !d.is_empty() => d.as_str(),
            _ => previous,
        };
        previous = declaration;

        widths.push(parse_declaration(declaration)?.resolve(breakpoint_width)?);
    }

    widths.sort_unstable();
    widths.dedup();
    Ok(widths)
}

/// [`srcset_widths`] against the default breakpoints.
pub fn srcset_widths_default(sizes: &SizeTable) -> Result<Vec<u32>, SizingError> {
    srcset_widths(sizes, &default_breakpoints())
}
