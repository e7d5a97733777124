//! Sizing plan — runs the sizing components in the order a consumer needs.
//!
//! ```text
//! sizes table ──► img_size_strings ─────────────────────────────► sizes
//!             └─► srcset_widths ──► interval ──► max ──► densities ► widths
//! ```
//!
//! The plan is what a template (for the `sizes` attribute) and an image
//! pipeline (for the widths to encode) consume. Both halves come from the
//! same [`SizingConfig`], so they can't drift apart.

use crate::config::SizingConfig;
use crate::sizing::{
    SizingError, img_size_strings, retina_widths, sample_widths, sizes_attribute, srcset_widths,
    widths_with_interval,
};
use serde::{Deserialize, Serialize};

/// Everything computed for one image slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingPlan {
    /// `sizes` strings, largest breakpoint first.
    pub sizes: Vec<String>,
    /// Srcset widths straight from the size table, before post-processing.
    pub base_widths: Vec<u32>,
    /// Final widths to generate, ascending.
    pub widths: Vec<u32>,
}

impl SizingPlan {
    /// The `sizes` strings joined for a markup attribute.
    pub fn sizes_attribute(&self) -> String {
        sizes_attribute(&self.sizes)
    }
}

/// Build a [`SizingPlan`] from a config.
///
/// `max` only applies when there are more widths than it allows; a config
/// asking for 5 widths from a 3-breakpoint table just gets all 3.
pub fn plan(config: &SizingConfig) -> Result<SizingPlan, SizingError> {
    let sizes = img_size_strings(&config.sizes, &config.breakpoints)?;
    let base_widths = srcset_widths(&config.sizes, &config.breakpoints)?;

    let mut widths = base_widths.clone();
    if let Some(interval) = config.widths.interval {
        widths = widths_with_interval(&widths, interval);
    }
    if let Some(max) = config.widths.max.filter(|&m| m < widths.len()) {
        widths = sample_widths(&widths, max)?;
    }
    if !config.widths.densities.is_empty() {
        widths = retina_widths(&widths, &config.widths.densities);
        widths.sort_unstable();
    }

    Ok(SizingPlan {
        sizes,
        base_widths,
        widths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidthsConfig;
    use crate::test_helpers::{breakpoints, config_with_sizes, sizes};

    #[test]
    fn default_config_plan() {
        let plan = plan(&SizingConfig::default()).unwrap();
        assert_eq!(plan.sizes, vec!["100vw"]);
        assert_eq!(plan.base_widths, vec![640, 1024, 1280, 1920, 2560]);
        assert_eq!(plan.widths, plan.base_widths);
    }

    #[test]
    fn sizes_attribute_is_joined() {
        let plan = plan(&config_with_sizes(&[("s", "50vw"), ("l", "320px")])).unwrap();
        assert_eq!(plan.sizes_attribute(), "(min-width:1025px) 320px, 50vw");
    }

    #[test]
    fn interval_applies_before_max() {
        let config = SizingConfig {
            widths: WidthsConfig {
                max: Some(2),
                interval: Some(300),
                densities: vec![],
            },
            ..config_with_sizes(&[("s", "95vw"), ("l", "45vw")])
        };
        // 973 and 864 are within 300 of 1152, 576 within 300 of 608.
        // Two widths survive, so max = 2 has nothing left to drop.
        let plan = plan(&config).unwrap();
        assert_eq!(plan.base_widths, vec![576, 608, 864, 973, 1152]);
        assert_eq!(plan.widths, vec![608, 1152]);
    }

    #[test]
    fn max_samples_when_too_many() {
        let config = SizingConfig {
            widths: WidthsConfig {
                max: Some(3),
                ..WidthsConfig::default()
            },
            ..SizingConfig::default()
        };
        // 5 widths, step 2 → ranks 5, 3, 1
        assert_eq!(plan(&config).unwrap().widths, vec![640, 1280, 2560]);
    }

    #[test]
    fn max_larger_than_available_keeps_all() {
        let config = SizingConfig {
            widths: WidthsConfig {
                max: Some(10),
                ..WidthsConfig::default()
            },
            ..SizingConfig::default()
        };
        assert_eq!(plan(&config).unwrap().widths.len(), 5);
    }

    #[test]
    fn densities_are_merged_and_sorted() {
        let config = SizingConfig {
            breakpoints: breakpoints(&[("s", 400), ("m", 800)]),
            sizes: sizes(&[("s", "100vw")]),
            widths: WidthsConfig {
                densities: vec![2.0],
                ..WidthsConfig::default()
            },
        };
        assert_eq!(plan(&config).unwrap().widths, vec![400, 800, 1600]);
    }

    #[test]
    fn unknown_breakpoint_propagates() {
        let err = plan(&config_with_sizes(&[("huge", "50vw")])).unwrap_err();
        assert!(matches!(err, SizingError::UnknownBreakpoint { .. }));
    }

    #[test]
    fn unsupported_unit_propagates() {
        let err = plan(&config_with_sizes(&[("s", "30vh")])).unwrap_err();
        assert!(matches!(err, SizingError::UnsupportedUnit { .. }));
    }

    #[test]
    fn plan_serializes_to_json() {
        let plan = plan(&SizingConfig::default()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["sizes"][0], "100vw");
        assert_eq!(json["widths"].as_array().unwrap().len(), 5);
    }
}
