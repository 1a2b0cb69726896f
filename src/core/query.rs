//! Query state - the user-adjustable search, filter, sort and paging parameters.
//!
//! A `QueryState` is a plain value. The catalog store owns one per session and
//! mutates it in response to commands; the pipeline only ever reads it.

use crate::entities::Color;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Lower price bound offered by the filter inputs and restored by a reset.
pub const DEFAULT_MIN_PRICE: i64 = 0;
/// Upper price bound offered by the filter inputs and restored by a reset.
pub const DEFAULT_MAX_PRICE: i64 = 600;

/// Result ordering applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Most recently added first
    #[default]
    Newest,
    /// Cheapest first
    PriceAscending,
    /// Most expensive first
    PriceDescending,
}

impl SortMode {
    /// Label shown next to the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest arrivals",
            Self::PriceAscending => "Price: Low → High",
            Self::PriceDescending => "Price: High → Low",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "price-asc" | "priceasc" | "asc" | "low" => Ok(Self::PriceAscending),
            "price-desc" | "pricedesc" | "desc" | "high" => Ok(Self::PriceDescending),
            other => Err(format!(
                "'{other}' is not a sort mode (expected newest, price-asc or price-desc)"
            )),
        }
    }
}

/// Which end of the price range a bound update targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceBound {
    /// Inclusive lower bound
    Min,
    /// Inclusive upper bound
    Max,
}

/// Inclusive price window. `min > max` is allowed and simply matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PriceRange {
    /// Inclusive lower bound
    pub min: i64,
    /// Inclusive upper bound
    pub max: i64,
}

impl PriceRange {
    /// Whether `price` lies inside the window.
    #[must_use]
    pub fn contains(&self, price: u32) -> bool {
        let price = i64::from(price);
        price >= self.min && price <= self.max
    }

    /// Returns a copy with one bound replaced and the other left untouched.
    #[must_use]
    pub const fn with_bound(self, which: PriceBound, value: i64) -> Self {
        match which {
            PriceBound::Min => Self {
                min: value,
                max: self.max,
            },
            PriceBound::Max => Self {
                min: self.min,
                max: value,
            },
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// Complete set of user-adjustable query parameters for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    /// Raw search text as typed; trimmed and lowercased at match time
    pub search_text: String,
    /// Colors to keep; empty means no color filter
    pub selected_colors: BTreeSet<Color>,
    /// Inclusive price window
    pub price_range: PriceRange,
    /// Ordering of the surviving records
    pub sort_mode: SortMode,
    /// Requested page, 1-based; clamped by the pipeline on read
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_colors: BTreeSet::new(),
            price_range: PriceRange::default(),
            sort_mode: SortMode::default(),
            current_page: 1,
        }
    }
}

impl QueryState {
    /// The part of the state that determines which records match and in what
    /// order. Paging is deliberately excluded.
    #[must_use]
    pub fn selection_key(&self) -> SelectionKey {
        SelectionKey {
            search_text: self.search_text.clone(),
            selected_colors: self.selected_colors.clone(),
            price_range: self.price_range,
            sort_mode: self.sort_mode,
        }
    }
}

/// Snapshot of every query field except the page, used to key cached results.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    search_text: String,
    selected_colors: BTreeSet<Color>,
    price_range: PriceRange,
    sort_mode: SortMode,
}

/// Parses user-entered price text into a whole-unit bound.
///
/// Integers are taken as-is, finite decimals are truncated toward zero, and
/// anything else yields `None` so the caller can leave the bound unchanged.
#[must_use]
pub fn parse_price_input(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    #[allow(clippy::cast_possible_truncation)]
    let truncated = value.trunc() as i64;
    Some(truncated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_default_query_state() {
        let state = QueryState::default();
        assert_eq!(state.search_text, "");
        assert!(state.selected_colors.is_empty());
        assert_eq!(state.price_range, PriceRange { min: 0, max: 600 });
        assert_eq!(state.sort_mode, SortMode::Newest);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_price_range_inclusive_and_inverted() {
        let range = PriceRange { min: 50, max: 100 };
        assert!(range.contains(50));
        assert!(range.contains(100));
        assert!(!range.contains(49));
        assert!(!range.contains(101));

        let inverted = PriceRange { min: 500, max: 100 };
        assert!(!inverted.contains(300));
        assert!(!inverted.contains(100));
        assert!(!inverted.contains(500));
    }

    #[test]
    fn test_with_bound_leaves_other_side() {
        let range = PriceRange::default().with_bound(PriceBound::Min, -20);
        assert_eq!(range, PriceRange { min: -20, max: 600 });
        let range = range.with_bound(PriceBound::Max, 10);
        assert_eq!(range, PriceRange { min: -20, max: 10 });
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input("250"), Some(250));
        assert_eq!(parse_price_input(" -5 "), Some(-5));
        assert_eq!(parse_price_input("99.9"), Some(99));
        assert_eq!(parse_price_input("abc"), None);
        assert_eq!(parse_price_input(""), None);
        assert_eq!(parse_price_input("NaN"), None);
        assert_eq!(parse_price_input("inf"), None);
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("newest".parse::<SortMode>().unwrap(), SortMode::Newest);
        assert_eq!(
            "priceAsc".parse::<SortMode>().unwrap(),
            SortMode::PriceAscending
        );
        assert_eq!(
            "price-desc".parse::<SortMode>().unwrap(),
            SortMode::PriceDescending
        );
        assert!("oldest".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_selection_key_ignores_page() {
        let mut a = QueryState::default();
        let b = QueryState::default();
        a.current_page = 7;
        assert_eq!(a.selection_key(), b.selection_key());

        a.sort_mode = SortMode::PriceDescending;
        assert_ne!(a.selection_key(), b.selection_key());
    }
}
