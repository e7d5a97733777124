//! # srcset-sizes
//!
//! Responsive image sizing from named breakpoints. Given how wide an image
//! renders at each breakpoint, this crate works out the `sizes` attribute for
//! the markup and the pixel widths an image pipeline should produce.
//!
//! ```text
//! breakpoints  s=640  m=1024  l=1280  xl=1920  xxl=2560
//! sizes        s=50vw         l=320px
//!
//! sizes attr   (min-width:1025px) 320px, 50vw
//! widths       320 512
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sizing`] | The calculations: thresholds, `sizes` strings, srcset widths, sampling, spacing, density |
//! | [`types`] | Ordered breakpoint and size tables, default breakpoints |
//! | [`plan`] | Runs the calculations in sequence for one image slot |
//! | [`config`] | `sizes.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Ordered Tables, Not Maps
//!
//! A breakpoint is "the smallest" or "the next one" purely by position, so
//! [`types::BreakpointTable`] and [`types::SizeTable`] are sequences of
//! `(name, value)` pairs. Nothing sorts them by value; list breakpoints
//! smallest first.
//!
//! ## `vw` Is Relative to Each Breakpoint
//!
//! `50vw` at breakpoint `l = 1280` resolves to 640px, at `xl = 1920` to 960px.
//! Each breakpoint's width is the widest viewport it covers, which is the
//! largest image that breakpoint can need.
//!
//! ## Pure Functions
//!
//! Every calculation takes its inputs by reference and returns a new value.
//! There is no global state beyond the [`types::DEFAULT_BREAKPOINTS`]
//! constant, and the library never does I/O outside [`config`].

pub mod config;
pub mod output;
pub mod plan;
pub mod sizing;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
