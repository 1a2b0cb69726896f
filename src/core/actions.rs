//! Placeholder rental actions.
//!
//! "Book & Pay" and "Contact" only record that the user wanted to do them.
//! Nothing is reserved, charged or sent; the returned notice says so and the
//! intent is logged so an operator can see it happened.

use crate::{
    entities::BagModel,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use std::fmt;
use tracing::info;

/// Requested rental window, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    /// First rental day
    pub start: NaiveDate,
    /// Last rental day
    pub end: NaiveDate,
}

impl RentalPeriod {
    /// Builds a period from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns `Error::InvalidRentalPeriod` if either date does not parse or the
    /// end falls before the start.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
                Error::InvalidRentalPeriod {
                    message: format!("'{s}' is not a YYYY-MM-DD date: {e}"),
                }
            })
        };
        let start = parse(start)?;
        let end = parse(end)?;
        if end < start {
            return Err(Error::InvalidRentalPeriod {
                message: format!("rental end {end} is before rental start {start}"),
            });
        }
        Ok(Self { start, end })
    }

    /// Number of rental days, counting both ends.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Which placeholder action was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderAction {
    /// Book & Pay
    BookAndPay,
    /// Contact via WhatsApp
    Contact,
}

impl fmt::Display for PlaceholderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BookAndPay => f.write_str("Book & Pay"),
            Self::Contact => f.write_str("Contact via WhatsApp"),
        }
    }
}

/// Result of a placeholder action: what was asked for and a message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderNotice {
    /// The action that was requested
    pub action: PlaceholderAction,
    /// Bag the action was requested for
    pub bag_id: u32,
    /// User-facing message; always states that this is a placeholder
    pub message: String,
}

/// Signals the intent to book `bag`. No booking or payment takes place.
#[must_use]
pub fn request_booking(bag: &BagModel, period: Option<RentalPeriod>) -> PlaceholderNotice {
    let window = period.map_or_else(
        || "no dates chosen".to_string(),
        |p| format!("{} to {} ({} days)", p.start, p.end, p.days()),
    );
    info!(
        bag_id = bag.id,
        available = bag.available,
        "Placeholder booking requested for {}: {}",
        bag.name,
        window
    );

    PlaceholderNotice {
        action: PlaceholderAction::BookAndPay,
        bag_id: bag.id,
        message: format!(
            "[placeholder] Proceed to booking flow for '{}' ({window}). \
             Replace with real booking & payment integration.",
            bag.name
        ),
    }
}

/// Signals the intent to contact the shop about `bag`. Nothing is sent.
#[must_use]
pub fn request_contact(bag: &BagModel, whatsapp: &str) -> PlaceholderNotice {
    info!(bag_id = bag.id, "Placeholder contact requested for {}", bag.name);

    PlaceholderNotice {
        action: PlaceholderAction::Contact,
        bag_id: bag.id,
        message: format!(
            "[placeholder] Open WhatsApp ({whatsapp}) or contact form about '{}' (#{}). \
             Replace with real behavior.",
            bag.name, bag.id
        ),
    }
}
