//! Parsing for size declarations like `50vw` and `320px`.
//!
//! A declaration is a whole number followed by a two-letter unit. Only two
//! units exist:
//! - `px` — a fixed width, used as-is
//! - `vw` — a percentage of the breakpoint's own width (its table value)
//!
//! `"30"`, `"30vh"` and `"30em"` are all rejected with
//! [`SizingError::UnsupportedUnit`].

use super::SizingError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Vw,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Vw => "vw",
        }
    }
}

/// A parsed size declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeDeclaration {
    pub magnitude: u32,
    pub unit: Unit,
}

impl SizeDeclaration {
    /// Resolve to a pixel width against a breakpoint's table value.
    ///
    /// `px` ignores the breakpoint; `vw` scales it and rounds half up. Fails
    /// with [`SizingError::WidthOverflow`] if the result doesn't fit a `u32`.
    pub fn resolve(self, breakpoint_width: u32) -> Result<u32, SizingError> {
        match self.unit {
            Unit::Px => Ok(self.magnitude),
            Unit::Vw => {
                let scaled = (breakpoint_width as u64 * self.magnitude as u64 + 50) / 100;
                u32::try_from(scaled).map_err(|_| SizingError::WidthOverflow {
                    declaration: self.to_string(),
                    breakpoint_width,
                })
            }
        }
    }
}

impl fmt::Display for SizeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.as_str())
    }
}

impl FromStr for SizeDeclaration {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_declaration(s)
    }
}

/// Parse a declaration: the last two characters are the unit, the rest is the
/// magnitude.
///
/// - `"50vw"` → 50 vw
/// - `"320px"` → 320 px
/// - `"30"` → `UnsupportedUnit { unit: "30" }`
/// - `"30vh"` → `UnsupportedUnit { unit: "vh" }`
/// - `"50vw "` → `UnsupportedUnit { unit: "w " }`
/// - `"abcpx"` → `InvalidMagnitude`
pub fn parse_declaration(declaration: &str) -> Result<SizeDeclaration, SizingError> {
    // Char-aware split so multi-byte input can't land mid-codepoint.
    let split = declaration
        .char_indices()
        .rev()
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let (prefix, unit) = declaration.split_at(split);

    let unit = match unit {
        "px" => Unit::Px,
        "vw" => Unit::Vw,
        other => {
            return Err(SizingError::UnsupportedUnit {
                unit: other.to_string(),
            });
        }
    };

    let magnitude = prefix
        .trim()
        .parse::<u32>()
        .map_err(|_| SizingError::InvalidMagnitude {
            declaration: declaration.to_string(),
        })?;

    Ok(SizeDeclaration { magnitude, unit })
}
