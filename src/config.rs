//! Sizing configuration module.
//!
//! Handles loading and validating `sizes.toml`, which describes one image slot:
//! the breakpoints it is laid out against, how wide it renders at each, and how
//! the resulting widths should be post-processed.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [breakpoints]             # Ordered smallest first; order is significant
//! s = 640
//! m = 1024
//! l = 1280
//! xl = 1920
//! xxl = 2560
//!
//! [sizes]                   # Rendered width per breakpoint ("<int>px" or "<int>vw")
//! s = "100vw"
//!
//! [widths]
//! # max = 5                 # Keep at most this many widths (omit for all)
//! # interval = 100          # Minimum gap in pixels between kept widths
//! densities = []            # Extra pixel densities, e.g. [2.0, 3.0]
//! ```
//!
//! ## Partial Configuration
//!
//! Files are sparse — override just the values you want. A `[breakpoints]`
//! table, when present, replaces the defaults entirely rather than merging
//! with them, since merging would scramble the order.
//!
//! Unknown keys are rejected to catch typos early.

use crate::sizing::parse_declaration;
use crate::types::{BreakpointTable, SizeTable, default_breakpoints};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE: &str = "sizes.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Sizing configuration loaded from `sizes.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizingConfig {
    /// Breakpoint name → breakpoint width in pixels, smallest first.
    #[serde(default = "default_breakpoints")]
    pub breakpoints: BreakpointTable,
    /// Breakpoint name → rendered width declaration.
    #[serde(default = "default_sizes")]
    pub sizes: SizeTable,
    /// Post-processing of the srcset widths.
    pub widths: WidthsConfig,
}

fn default_sizes() -> SizeTable {
    [("s", "100vw")].into_iter().collect()
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            sizes: default_sizes(),
            widths: WidthsConfig::default(),
        }
    }
}

impl SizingConfig {
    /// Validate values before any sizing runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoints.is_empty() {
            return Err(ConfigError::Validation(
                "breakpoints must not be empty".into(),
            ));
        }
        if let Some((name, _)) = self.breakpoints.iter().find(|(_, w)| **w == 0) {
            return Err(ConfigError::Validation(format!(
                "breakpoints.{name} must be greater than 0"
            )));
        }
        for (name, declaration) in self.sizes.iter() {
            if !self.breakpoints.contains(name) {
                return Err(ConfigError::Validation(format!(
                    "sizes.{name} does not match any breakpoint"
                )));
            }
            parse_declaration(declaration)
                .map_err(|e| ConfigError::Validation(format!("sizes.{name}: {e}")))?;
        }
        if self.widths.max == Some(0) {
            return Err(ConfigError::Validation(
                "widths.max must be at least 1".into(),
            ));
        }
        if self.widths.interval == Some(0) {
            return Err(ConfigError::Validation(
                "widths.interval must be at least 1".into(),
            ));
        }
        if self
            .widths
            .densities
            .iter()
            .any(|d| !d.is_finite() || *d <= 0.0)
        {
            return Err(ConfigError::Validation(
                "widths.densities must be positive numbers".into(),
            ));
        }
        Ok(())
    }
}

/// Post-processing applied to srcset widths, in order: interval, max, densities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidthsConfig {
    /// Keep at most this many widths. Ignored when there are already fewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Minimum spacing in pixels between kept widths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Pixel-density multipliers for high-DPI variants.
    pub densities: Vec<f64>,
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse and validate config from a TOML string.
pub fn parse_config(content: &str) -> Result<SizingConfig, ConfigError> {
    let config: SizingConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<SizingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load config from `sizes.toml` in the given directory.
///
/// Returns the stock defaults if no file exists. Returns `Err` if the file
/// exists but is invalid TOML, has unknown keys, or fails validation.
pub fn load_config(dir: &Path) -> Result<SizingConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(SizingConfig::default());
    }
    load_config_file(&path)
}

/// Returns a fully-commented stock `sizes.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# srcset-sizes configuration
# ==========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Breakpoints
# ---------------------------------------------------------------------------
# Name -> width in pixels where the breakpoint ends. List them smallest first:
# each breakpoint's media condition starts one pixel after the previous one.
# Providing this table replaces the defaults entirely.
[breakpoints]
s = 640
m = 1024
l = 1280
xl = 1920
xxl = 2560

# ---------------------------------------------------------------------------
# Sizes
# ---------------------------------------------------------------------------
# How wide the image renders at each breakpoint, as "<int>vw" or "<int>px".
# Breakpoints without an entry reuse the previous breakpoint's size.
# Names must match a breakpoint above.
[sizes]
s = "100vw"

# ---------------------------------------------------------------------------
# Width post-processing
# ---------------------------------------------------------------------------
[widths]
# Keep at most this many widths, evenly spread, always including the largest.
# max = 5

# Drop widths closer than this many pixels to the next larger kept width.
# interval = 100

# Pixel-density multipliers for high-DPI screens, e.g. [2.0] or [2.0, 3.0].
densities = []
"##
}
