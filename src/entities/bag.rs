//! Bag entity - Represents one rentable evening bag in the catalog.
//!
//! Bags are generated once per session and never mutated afterwards. The
//! enumerated attributes (color, size, brand) are closed sets so the filter
//! layer can match on them without string comparisons.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Bag catalog model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    /// Unique identifier, assigned sequentially from 1 at generation time
    pub id: u32,
    /// Display name (e.g., "Premium Evening Bag #007")
    pub name: String,
    /// Primary color of the bag
    pub color: Color,
    /// Daily rental price in whole currency units
    pub price: u32,
    /// Physical size class
    pub size: Size,
    /// Product line the bag belongs to
    pub brand: Brand,
    /// Free-text description shown in the detail view and matched by search
    pub description: String,
    /// Opaque image URL on the external image host
    pub image: String,
    /// Whether the bag can currently be rented
    pub available: bool,
    /// When the bag was added to the catalog, used for "newest" ordering
    pub created_at: DateTime<Utc>,
}

/// One of the ten catalog colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Black
    Black,
    /// Gold
    Gold,
    /// Silver
    Silver,
    /// Red
    Red,
    /// Blue
    Blue,
    /// Green
    Green,
    /// Champagne
    Champagne,
    /// Pink
    Pink,
    /// White
    White,
    /// Beige
    Beige,
}

impl Color {
    /// Every color, in the order they are offered as filter buttons.
    pub const ALL: [Self; 10] = [
        Self::Black,
        Self::Gold,
        Self::Silver,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Champagne,
        Self::Pink,
        Self::White,
        Self::Beige,
    ];

    /// Display name of the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Champagne => "Champagne",
            Self::Pink => "Pink",
            Self::White => "White",
            Self::Beige => "Beige",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("'{wanted}' is not a catalog color"))
    }
}

/// Size class of a bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    /// Mini
    Mini,
    /// Small
    Small,
    /// Medium
    Medium,
    /// Large
    Large,
}

impl Size {
    /// Every size class.
    pub const ALL: [Self; 4] = [Self::Mini, Self::Small, Self::Medium, Self::Large];

    /// Display name of the size.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mini => "Mini",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product line of a bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Brand {
    /// Designer Inspired
    DesignerInspired,
    /// Premium
    Premium,
    /// Classic
    Classic,
    /// Statement
    Statement,
}

impl Brand {
    /// Every brand.
    pub const ALL: [Self; 4] = [
        Self::DesignerInspired,
        Self::Premium,
        Self::Classic,
        Self::Statement,
    ];

    /// Display name of the brand.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DesignerInspired => "Designer Inspired",
            Self::Premium => "Premium",
            Self::Classic => "Classic",
            Self::Statement => "Statement",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
