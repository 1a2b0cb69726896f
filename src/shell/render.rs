//! Plain-text rendering of catalog pages, the detail view and shop information.
//!
//! Every view is returned as text so the shell loop decides where it goes and
//! tests can assert on the exact output.

use crate::{
    config::{Config, ShopConfig},
    core::{
        pipeline::{PAGE_SIZE, QueryPage},
        query::QueryState,
    },
    entities::{BagModel, Color},
    errors::Result,
};
use std::fmt::Write;

/// Banner printed once at the start of a session.
#[must_use]
pub fn render_banner(config: &Config) -> String {
    let shop = &config.shop;
    format!(
        "{} — {}\n\
         Over {} evening bags available to rent • {}\n\
         Pickup: {} • WhatsApp: {} (placeholder contact)\n\
         Type `help` for commands.\n\n",
        shop.name,
        shop.tagline,
        config.catalog.size,
        shop.pickup_location,
        shop.pickup_location,
        shop.whatsapp
    )
}

/// `"{n} results — page {p} of {t}"`, using the effective (clamped) page.
#[must_use]
pub fn results_line(page: &QueryPage<'_>) -> String {
    format!(
        "{} results — page {} of {}",
        page.total_results, page.effective_page, page.total_pages
    )
}

/// Number of selected colors, or `All` when no color filter is active.
#[must_use]
pub fn color_summary(query: &QueryState) -> String {
    if query.selected_colors.is_empty() {
        "All".to_string()
    } else {
        let names: Vec<&str> = query.selected_colors.iter().map(|c| c.as_str()).collect();
        format!("{} ({})", query.selected_colors.len(), names.join(", "))
    }
}

/// `"Showing RM{min} — RM{max}"`.
#[must_use]
pub fn price_summary(query: &QueryState, currency: &str) -> String {
    format!(
        "Showing {currency}{} — {currency}{}",
        query.price_range.min, query.price_range.max
    )
}

/// Renders the gallery for the current page with filter summaries and paging controls.
///
/// # Errors
/// Returns `Error::Format` if writing into the buffer fails.
pub fn render_page(
    page: &QueryPage<'_>,
    query: &QueryState,
    shop: &ShopConfig,
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Available Bags")?;
    writeln!(out, "{}    Per page: {PAGE_SIZE}", results_line(page))?;

    let search = query.search_text.trim();
    if !search.is_empty() {
        writeln!(out, "Search: \"{search}\"")?;
    }
    writeln!(
        out,
        "Colors: {} | {} | Sort: {}",
        color_summary(query),
        price_summary(query, &shop.currency),
        query.sort_mode
    )?;
    writeln!(out)?;

    if page.items.is_empty() {
        writeln!(out, "  No bags match these filters. Try `reset`.")?;
    }
    for bag in &page.items {
        writeln!(out, "{}", render_card(bag, &shop.currency))?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "  [prev]  {} / {}  [next]",
        page.effective_page, page.total_pages
    )?;
    Ok(out)
}

/// One gallery line for a bag.
#[must_use]
pub fn render_card(bag: &BagModel, currency: &str) -> String {
    format!(
        "  #{:03}  {:<32} {} • {:<7} {currency}{}",
        bag.id, bag.name, bag.brand, bag.size, bag.price
    )
}

/// Full detail view for the selected bag.
#[must_use]
pub fn render_detail(bag: &BagModel, currency: &str) -> String {
    let status = if bag.available {
        "Available"
    } else {
        "Not available"
    };
    format!(
        "{}\n\
         {} • {} • {}\n\
         {}\n\
         {currency}{}    Status: {status}\n\
         Image: {}\n\
         Actions: `book [start end]` (dates as YYYY-MM-DD), `contact`, `close`\n\
         Tip: booking and contact are placeholders; no payment or message is sent.\n",
        bag.name, bag.brand, bag.size, bag.color, bag.description, bag.price, bag.image
    )
}

/// Pickup, payment and rental terms.
///
/// # Errors
/// Returns `Error::Format` if writing into the buffer fails.
pub fn render_info(shop: &ShopConfig) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Pickup & Payment")?;
    writeln!(out, "  Location: {}", shop.pickup_location)?;
    writeln!(
        out,
        "  Pickup by appointment only — timeslot provided after payment confirmation."
    )?;
    writeln!(out, "  Payment methods: {}", shop.payment_methods.join(", "))?;
    writeln!(out)?;
    writeln!(out, "How to rent")?;
    writeln!(
        out,
        "  1. Browse and select a bag. Use `details <id>`, choose rental dates and confirm availability."
    )?;
    writeln!(
        out,
        "  2. Make payment using one of the methods listed. Save the payment receipt."
    )?;
    writeln!(
        out,
        "  3. Send receipt and preferred pickup times via WhatsApp to {}.",
        shop.whatsapp
    )?;
    writeln!(
        out,
        "  4. Collect the bag at {} at the agreed timeslot. Return on agreed date.",
        shop.pickup_location
    )?;
    writeln!(out)?;
    writeln!(out, "Notes")?;
    writeln!(out, "  • Security deposit may be required.")?;
    writeln!(out, "  • Late returns may incur fees.")?;
    writeln!(out, "  • Cleaning fee may apply for heavy stains.")?;
    writeln!(out)?;
    writeln!(out, "Contact & Pickup")?;
    writeln!(out, "  Address: {}", shop.address)?;
    writeln!(out, "  WhatsApp: {} (placeholder number)", shop.whatsapp)?;
    writeln!(
        out,
        "  Provide bag name/ID, pickup date/time, and proof of payment."
    )?;
    Ok(out)
}

/// Command reference.
#[must_use]
pub fn render_help() -> String {
    let colors: Vec<&str> = Color::ALL.iter().map(|c| c.as_str()).collect();
    format!(
        "Commands\n\
         Browsing\n\
         • `list` - Show the current page again.\n\
         • `page <n>`, `next`, `prev` - Move between pages.\n\
         • `details <id>` - Open a bag; `close` returns to the gallery.\n\
         • `clear` - Close the open bag and go back to page 1.\n\n\
         Filters\n\
         • `search [text]` - Match name or description; no text clears the search.\n\
         • `color <name>` - Toggle a color filter ({}).\n\
         • `min <price>`, `max <price>` - Set the price range.\n\
         • `sort <newest|price-asc|price-desc>` - Change ordering.\n\
         • `reset` - Clear every filter and the sort.\n\n\
         Rental\n\
         • `book [start end]` - Placeholder booking for the open bag.\n\
         • `contact` - Placeholder WhatsApp contact for the open bag.\n\
         • `info` - Pickup, payment and rental notes.\n\n\
         • `quit` - End the session.\n",
        colors.join(", ")
    )
}
