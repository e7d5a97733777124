//! Pure width-set math: sampling, spacing and density variants.
//!
//! All functions here work on plain slices of pixel widths and never touch a
//! breakpoint table.

use super::SizingError;
use std::collections::HashSet;

/// Pick exactly `max` widths spread evenly by rank.
///
/// The largest width is always kept; the rest are taken every
/// `ceil(len / max)` ranks going down. When striding from the top runs past
/// the smallest rank it wraps around and continues upward from the bottom,
/// which is what guarantees `max` results when `len` isn't a multiple of
/// `max`.
///
/// # Examples
/// ```
/// # use srcset_sizes::sizing::sample_widths;
/// let widths: Vec<u32> = (1..=10).collect();
/// assert_eq!(sample_widths(&widths, 5).unwrap(), vec![2, 4, 6, 8, 10]);
/// assert_eq!(sample_widths(&widths, 4).unwrap(), vec![1, 4, 7, 10]);
/// ```
pub fn sample_widths(widths: &[u32], max: usize) -> Result<Vec<u32>, SizingError> {
    let len = widths.len();
    if max > len {
        return Err(SizingError::MaxExceedsAvailable {
            max,
            available: len,
        });
    }
    if max == 0 {
        return Ok(Vec::new());
    }

    let mut ascending = widths.to_vec();
    ascending.sort_unstable();

    let step = len.div_ceil(max);
    let mut picked: Vec<u32> = (0..max)
        .map(|i| {
            let offset = i * step;
            // 1-based rank; offset < 2 * len for every i < max.
            let rank = if offset < len {
                len - offset
            } else {
                offset - len + 1
            };
            ascending[rank - 1]
        })
        .collect();

    picked.sort_unstable();
    Ok(picked)
}

/// Drop widths closer than `interval` to the last kept width above them.
///
/// Works greedily from the largest width down, so the largest is always
/// kept and spacing is measured against what was kept, not the original
/// neighbour.
///
/// # Examples
/// ```
/// # use srcset_sizes::sizing::widths_with_interval;
/// assert_eq!(
///     widths_with_interval(&[100, 150, 200, 350, 400], 100),
///     vec![100, 200, 400]
/// );
/// ```
pub fn widths_with_interval(widths: &[u32], interval: u32) -> Vec<u32> {
    let mut descending = widths.to_vec();
    descending.sort_unstable_by(|a, b| b.cmp(a));

    let mut kept: Vec<u32> = Vec::with_capacity(descending.len());
    for width in descending {
        match kept.last() {
            Some(&last) if last - width < interval => {}
            _ => kept.push(width),
        }
    }

    kept.reverse();
    kept
}

/// Append each width scaled by each multiplier, keeping first occurrences.
///
/// Order is the originals, then everything × the first multiplier, then × the
/// second, and so on. Scaled widths are rounded to the nearest pixel. The
/// result is not sorted.
///
/// # Examples
/// ```
/// # use srcset_sizes::sizing::retina_widths;
/// assert_eq!(retina_widths(&[1, 2, 3], &[2.0]), vec![1, 2, 3, 4, 6]);
/// assert_eq!(retina_widths(&[3], &[2.0, 3.0, 4.0]), vec![3, 6, 9, 12]);
/// ```
pub fn retina_widths(widths: &[u32], multipliers: &[f64]) -> Vec<u32> {
    let scaled = multipliers.iter().flat_map(|&m| {
        widths
            .iter()
            .map(move |&w| (w as f64 * m).round() as u32)
    });

    let mut seen = HashSet::new();
    widths
        .iter()
        .copied()
        .chain(scaled)
        .filter(|w| seen.insert(*w))
        .collect()
}
