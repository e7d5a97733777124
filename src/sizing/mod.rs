//! Responsive sizing calculations — pure functions, no I/O.
//!
//! | Component | Function |
//! |---|---|
//! | **Thresholds** | [`resolve_min_widths`] — breakpoint table → `min-width` per name |
//! | **Sizes attribute** | [`img_size_strings`] — `(min-width:…px) 50vw` strings, largest first |
//! | **Srcset widths** | [`srcset_widths`] — size declarations → pixel widths |
//! | **Sampling** | [`sample_widths`] — keep N widths spread by rank |
//! | **Spacing** | [`widths_with_interval`] — drop widths too close to a kept neighbour |
//! | **Density** | [`retina_widths`] — add 2x/3x variants |
//!
//! The module is split into:
//! - **Declaration**: `<int>px` / `<int>vw` parsing and resolution
//! - **Thresholds**: the min-width projection shared by the composer and calculator
//! - **Composer / Srcset**: the two table-driven components
//! - **Calculations**: array-only width math (sampling, spacing, density)
//!
//! Every function returns its result by value and leaves its inputs alone;
//! chaining them (srcset → spacing → sampling → density) is up to the caller,
//! see [`crate::plan`].

mod calculations;
mod composer;
mod declaration;
mod srcset;
mod thresholds;

use thiserror::Error;

pub use calculations::{retina_widths, sample_widths, widths_with_interval};
pub use composer::{img_size_strings, img_size_strings_default, sizes_attribute};
pub use declaration::{SizeDeclaration, Unit, parse_declaration};
pub use srcset::{srcset_widths, srcset_widths_default};
pub use thresholds::{min_width_for, resolve_min_widths};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizingError {
    #[error("{unit} unit is not supported. Only supports px & vw")]
    UnsupportedUnit { unit: String },
    #[error("'{declaration}' does not start with a whole number of pixels or vw")]
    InvalidMagnitude { declaration: String },
    #[error("{declaration} at a {breakpoint_width}px breakpoint exceeds the largest supported width")]
    WidthOverflow {
        declaration: String,
        breakpoint_width: u32,
    },
    #[error("Max ({max}) is greater than the number of sizes ({available})")]
    MaxExceedsAvailable { max: usize, available: usize },
    #[error("Unknown breakpoint '{name}' in sizes")]
    UnknownBreakpoint { name: String },
}
