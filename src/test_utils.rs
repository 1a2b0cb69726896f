//! Shared test utilities for the catalog.
//!
//! This module provides helper functions for building bags and small fixed
//! catalogs with predictable attributes.

use crate::entities::{BagModel, Brand, Color, Size};
use chrono::{DateTime, Duration, Utc};

/// Fixed reference instant so test catalogs are reproducible.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600, 0).unwrap_or_default()
}

/// Creates a test bag with sensible defaults.
///
/// # Defaults
/// * color: Black
/// * price: 100
/// * size: Small, brand: Classic
/// * `created_at`: `base_time() + id minutes`, so higher ids are newer
#[must_use]
pub fn create_test_bag(id: u32) -> BagModel {
    create_custom_bag(id, Color::Black, 100)
}

/// Creates a test bag with custom color and price.
///
/// The description follows the generator's wording, so it mentions the color.
#[must_use]
pub fn create_custom_bag(id: u32, color: Color, price: u32) -> BagModel {
    let size = Size::Small;
    BagModel {
        id,
        name: format!("{} Evening Bag #{id:03}", Brand::Classic),
        color,
        price,
        size,
        brand: Brand::Classic,
        description: format!(
            "Elegant {} {} evening bag.",
            color.as_str().to_lowercase(),
            size.as_str().to_lowercase()
        ),
        image: format!("https://img.test/seed/clutch{id}/600/400"),
        available: true,
        created_at: base_time() + Duration::minutes(i64::from(id)),
    }
}

/// Creates one bag per price, ids starting at 1, all Black.
#[must_use]
pub fn bags_with_prices(prices: &[u32]) -> Vec<BagModel> {
    prices
        .iter()
        .zip(1..)
        .map(|(&price, id)| create_custom_bag(id, Color::Black, price))
        .collect()
}

/// Creates `count` default bags, ids `1..=count`, all matching the default query.
#[must_use]
pub fn create_test_catalog(count: u32) -> Vec<BagModel> {
    (1..=count).map(create_test_bag).collect()
}

/// Pulls the ids out of a slice of bag references, preserving order.
#[must_use]
pub fn ids(bags: &[&BagModel]) -> Vec<u32> {
    bags.iter().map(|b| b.id).collect()
}
