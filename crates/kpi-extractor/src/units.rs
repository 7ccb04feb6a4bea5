use regex::Regex;
use std::sync::LazyLock;

// "000" counts only as a standalone column marker, never as the tail of a
// number or a word.
static THOUSANDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:in thousands|k)\b|(?:^|[^\w,.])000s?\b").expect("thousands pattern")
});
static MILLIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:in millions|mm|m)\b").expect("millions pattern"));
static AREA_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bper square metre\b").expect("area unit pattern"));
static BILLIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:in billions|bn|b)\b").expect("billions pattern"));

/// Scale keyword found in a value's unit context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitScale {
    Thousand,
    Million,
    Billion,
}

impl UnitScale {
    pub fn multiplier(&self) -> f64 {
        match self {
            UnitScale::Thousand => 1_000.0,
            UnitScale::Million => 1_000_000.0,
            UnitScale::Billion => 1_000_000_000.0,
        }
    }

    /// Picks at most one scale, checking thousand, then million, then billion.
    pub fn detect(context: &str) -> Option<UnitScale> {
        if THOUSANDS.is_match(context) {
            Some(UnitScale::Thousand)
        } else if MILLIONS.is_match(context) && !AREA_UNIT.is_match(context) {
            Some(UnitScale::Million)
        } else if BILLIONS.is_match(context) {
            Some(UnitScale::Billion)
        } else {
            None
        }
    }
}
