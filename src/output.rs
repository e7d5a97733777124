//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Plan
//!
//! ```text
//! Breakpoints
//! 001 s (min-width 0px) → 50vw
//! 002 m (min-width 641px) → (50vw)
//! 003 l (min-width 1025px) → 320px
//! 004 xl (min-width 1281px) → (320px)
//! 005 xxl (min-width 1921px) → (320px)
//!
//! Sizes
//!     (min-width:1025px) 320px, 50vw
//!
//! Widths
//! 001 320px
//! 002 512px
//!
//! 2 widths from 5 breakpoints
//! ```
//!
//! ## Widths
//!
//! ```text
//! 001 320px
//! 002 512px
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::config::SizingConfig;
use crate::plan::SizingPlan;
use crate::sizing::resolve_min_widths;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// One line per width, indexed.
pub fn format_widths(widths: &[u32]) -> Vec<String> {
    widths
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{} {}px", format_index(i + 1), w))
        .collect()
}

/// One line per `sizes` entry, in attribute order.
pub fn format_sizes(sizes: &[String]) -> Vec<String> {
    sizes.to_vec()
}

/// Breakpoints with their min-width and the declaration in effect there.
///
/// Breakpoints without their own size show the inherited one in parens.
fn format_breakpoints(config: &SizingConfig) -> Vec<String> {
    let mut inherited: Option<&str> = None;
    resolve_min_widths(&config.breakpoints)
        .iter()
        .enumerate()
        .map(|(i, (name, min_width))| {
            let head = format!(
                "{} {} (min-width {}px)",
                format_index(i + 1),
                name,
                min_width
            );
            match config.sizes.get(name) {
                Some(declaration) => {
                    inherited = Some(declaration.as_str());
                    format!("{head} \u{2192} {declaration}")
                }
                None => format!("{head} \u{2192} ({})", inherited.unwrap_or("100vw")),
            }
        })
        .collect()
}

/// Full plan view: breakpoints, sizes attribute, final widths and a summary.
pub fn format_plan(config: &SizingConfig, plan: &SizingPlan) -> Vec<String> {
    let mut lines = vec!["Breakpoints".to_string()];
    lines.extend(format_breakpoints(config));

    lines.push(String::new());
    lines.push("Sizes".to_string());
    lines.push(format!("{}{}", indent(1), plan.sizes_attribute()));

    lines.push(String::new());
    lines.push("Widths".to_string());
    lines.extend(format_widths(&plan.widths));

    lines.push(String::new());
    lines.push(format!(
        "{} from {}",
        plural(plan.widths.len(), "width"),
        plural(config.breakpoints.len(), "breakpoint")
    ));
    lines
}

pub fn print_widths(widths: &[u32]) {
    for line in format_widths(widths) {
        println!("{}", line);
    }
}

pub fn print_sizes(sizes: &[String]) {
    for line in format_sizes(sizes) {
        println!("{}", line);
    }
}

pub fn print_plan(config: &SizingConfig, plan: &SizingPlan) {
    for line in format_plan(config, plan) {
        println!("{}", line);
    }
}
