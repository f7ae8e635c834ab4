//! Age intervals and free-text age-range extraction.
//!
//! Upstream sources describe audiences as free text ("Ages 2-3",
//! "Toddler", "for ages 3 to 11"). Extraction is best-effort: a fixed
//! priority order of patterns, first match wins, and "no range found"
//! is a legitimate outcome that sends the caller to the next field.

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// Extraction patterns
// ============================================================================

// "ages 4-18", "ages 3 to 11"
static AGES_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ages?\s+(\d+)\s*(?:-|to)\s*(\d+)").expect("Invalid regex")
});
// "for ages 0-5"
static FOR_AGES_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)for\s+ages?\s+(\d+)\s*(?:-|to)\s*(\d+)").expect("Invalid regex")
});
// "4-18 years old"
static YEARS_OLD_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*-\s*(\d+)\s*years?\s+old").expect("Invalid regex")
});
// bare "0-5", for audience fields like "Early Childhood (0-5)"
static BARE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").expect("Invalid regex"));

/// A closed integer age interval `[min, max]`.
///
/// An interval with `min > max` is invalid and cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    min: u32,
    max: u32,
}

impl AgeRange {
    /// Create a range; `None` when `min > max`.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// A single-age range `[age, age]`.
    pub fn single(age: u32) -> Self {
        Self { min: age, max: age }
    }

    /// Parse a caller-supplied age string: a single integer ("3") or a
    /// dash-separated pair ("0-2"). Anything else, including an
    /// inverted pair, is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let parts: Vec<&str> = input.split('-').collect();
        match parts.as_slice() {
            [single] => single.trim().parse().ok().map(Self::single),
            [min, max] => {
                let min = min.trim().parse().ok()?;
                let max = max.trim().parse().ok()?;
                Self::new(min, max)
            }
            _ => None,
        }
    }

    /// Lower bound.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Closed-interval overlap test: true unless one range ends before
    /// the other begins. Touching bounds count as overlap.
    pub fn overlaps(&self, other: &AgeRange) -> bool {
        !(self.max < other.min || self.min > other.max)
    }
}

/// Extracts age intervals from free text by trying an ordered list of
/// patterns and returning on the first match.
pub struct AgeRangeExtractor {
    matchers: Vec<&'static Regex>,
}

impl Default for AgeRangeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AgeRangeExtractor {
    /// Create an extractor with the standard pattern priority order.
    pub fn new() -> Self {
        Self {
            matchers: vec![&*AGES_RANGE, &*FOR_AGES_RANGE, &*YEARS_OLD_RANGE],
        }
    }

    /// Extract an age interval from `text`.
    ///
    /// A pattern whose captured numbers do not form a valid interval
    /// (inverted bounds, overflow) is skipped and the next pattern is
    /// tried. `None` means no pattern yielded a usable interval.
    pub fn extract(&self, text: &str) -> Option<AgeRange> {
        self.matchers
            .iter()
            .find_map(|pattern| range_from_captures(pattern, text))
    }
}

/// Find a bare `N-M` range anywhere in `text`. Used on the audience
/// field, where ranges appear without the "ages" marker.
pub fn bare_range(text: &str) -> Option<AgeRange> {
    range_from_captures(&BARE_RANGE, text)
}

/// Keyword fallback for audience descriptors with no numeric range.
///
/// Keywords map to approximate intervals: toddler `[1,3]`, baby and
/// infant `[0,2]`, preschool `[3,5]`. First keyword found wins.
pub fn keyword_range(audience: &str) -> Option<AgeRange> {
    let folded = audience.to_lowercase();
    let table: [(&str, u32, u32); 4] = [
        ("toddler", 1, 3),
        ("baby", 0, 2),
        ("infant", 0, 2),
        ("preschool", 3, 5),
    ];
    table
        .iter()
        .find(|(keyword, _, _)| folded.contains(keyword))
        .and_then(|(_, min, max)| AgeRange::new(*min, *max))
}

fn range_from_captures(pattern: &Regex, text: &str) -> Option<AgeRange> {
    let caps = pattern.captures(text)?;
    let min = caps.get(1)?.as_str().parse().ok()?;
    let max = caps.get(2)?.as_str().parse().ok()?;
    AgeRange::new(min, max)
}
