//! `sizes` attribute composition.
//!
//! Each size-table entry becomes one media condition. The smallest breakpoint
//! (min-width 0) gets no condition at all, so it acts as the fallback. The list
//! is returned largest breakpoint first, which is the order browsers evaluate:
//!
//! ```text
//! sizes = { s: 50vw, l: 320px }
//! →  ["(min-width:1025px) 320px", "50vw"]
//! ```
//!
//! Declarations are passed through verbatim; only the srcset calculator cares
//! about their units.

use super::SizingError;
use super::thresholds::resolve_min_widths;
use crate::types::{BreakpointTable, SizeTable, default_breakpoints};

/// Build the `sizes` strings for a size table against a breakpoint table.
///
/// Fails with [`SizingError::UnknownBreakpoint`] if a size names a breakpoint
/// the table doesn't have.
pub fn img_size_strings(
    sizes: &SizeTable,
    breakpoints: &BreakpointTable,
) -> Result<Vec<String>, SizingError> {
    let thresholds = resolve_min_widths(breakpoints);

    let mut strings = sizes
        .iter()
        .map(|(name, declaration)| {
            let min_width = thresholds
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, w)| *w)
                .ok_or_else(|| SizingError::UnknownBreakpoint {
                    name: name.to_string(),
                })?;

            Ok(if min_width == 0 {
                declaration.clone()
            } else {
                format!("(min-width:{min_width}px) {declaration}")
            })
        })
        .collect::<Result<Vec<_>, SizingError>>()?;

    strings.reverse();
    Ok(strings)
}

/// [`img_size_strings`] against the default breakpoints.
pub fn img_size_strings_default(sizes: &SizeTable) -> Result<Vec<String>, SizingError> {
    img_size_strings(sizes, &default_breakpoints())
}

/// Join composed strings into a single `sizes="…"` attribute value.
pub fn sizes_attribute(strings: &[String]) -> String {
    strings.join(", ")
}
