//! Mock inventory generation.
//!
//! Builds the session's catalog once at startup. The distribution only needs to
//! look plausible; callers that want a reproducible catalog pass a seeded RNG.

use crate::entities::{BagModel, Brand, Color, Size};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Cheapest generated daily price.
pub const MIN_GENERATED_PRICE: u32 = 30;
/// Most expensive generated daily price.
pub const MAX_GENERATED_PRICE: u32 = 480;
/// Bags are backdated by up to this many days.
pub const MAX_AGE_DAYS: i64 = 180;

/// Generates `count` bags with ids `1..=count`.
///
/// `now` anchors the `created_at` timestamps and `image_host` is the base URL
/// of the external image host (without a trailing slash).
pub fn generate_bags<R: Rng + ?Sized>(
    count: u32,
    rng: &mut R,
    now: DateTime<Utc>,
    image_host: &str,
) -> Vec<BagModel> {
    let max_age_ms = Duration::days(MAX_AGE_DAYS).num_milliseconds();
    let host = image_host.trim_end_matches('/');

    let bags: Vec<BagModel> = (1..=count)
        .map(|id| {
            let color = *Color::ALL.choose(rng).unwrap_or(&Color::Black);
            let brand = *Brand::ALL.choose(rng).unwrap_or(&Brand::Classic);
            let size = *Size::ALL.choose(rng).unwrap_or(&Size::Medium);
            let price = rng.gen_range(MIN_GENERATED_PRICE..=MAX_GENERATED_PRICE);
            let age = Duration::milliseconds(rng.gen_range(0..max_age_ms));

            BagModel {
                id,
                name: format!("{brand} Evening Bag #{id:03}"),
                color,
                price,
                size,
                brand,
                description: format!(
                    "Elegant {} {} evening bag. Great for weddings, parties and formal events.",
                    color.as_str().to_lowercase(),
                    size.as_str().to_lowercase()
                ),
                image: format!("{host}/seed/clutch{id}/600/400"),
                available: rng.gen_bool(0.95),
                created_at: now - age,
            }
        })
        .collect();

    debug!("Generated {} bags", bags.len());
    bags
}
