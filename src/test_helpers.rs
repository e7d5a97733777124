//! Shared test utilities.
//!
//! Table builders that keep test bodies to one line:
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let bps = breakpoints(&[("xs", 320), ("md", 992)]);
//! let table = sizes(&[("xs", "100vw"), ("md", "50vw")]);
//! ```

use crate::config::SizingConfig;
use crate::types::{BreakpointTable, SizeTable};
use std::fs;
use std::path::Path;

/// Breakpoint table from `(name, breakpoint_width)` pairs, order preserved.
pub fn breakpoints(pairs: &[(&str, u32)]) -> BreakpointTable {
    pairs.iter().map(|&(name, width)| (name, width)).collect()
}

/// Size table from `(name, declaration)` pairs, order preserved.
pub fn sizes(pairs: &[(&str, &str)]) -> SizeTable {
    pairs
        .iter()
        .map(|&(name, decl)| (name, decl.to_string()))
        .collect()
}

/// Default config with the given sizes.
pub fn config_with_sizes(pairs: &[(&str, &str)]) -> SizingConfig {
    SizingConfig {
        sizes: sizes(pairs),
        ..SizingConfig::default()
    }
}

/// Write `sizes.toml` into `dir`.
pub fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("sizes.toml"), content).unwrap();
}
