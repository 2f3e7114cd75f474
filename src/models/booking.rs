//! Booking models.
//!
//! These are the request-scoped value objects the calculation core
//! consumes. They are built once per pricing request from richer catalog
//! records and discarded afterwards; the engine never mutates them or looks
//! beyond their shape.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ExclusiveType, PriceType, PricingLabel, PricingSlot};

/// A room as priced within one booking.
///
/// The base `price`/`price_type` pair covers portions of the event window
/// that no pricing slot matches. Both may be absent, in which case an
/// unmatched portion makes the room unpriceable. The base exclusivity
/// parameters mirror the slot shape so exclusivity can be policed on
/// base-priced portions too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRoom {
    /// Unique identifier for the room.
    pub id: String,
    /// Base amount charged when no slot matches.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Unit of charge for the base amount.
    #[serde(default)]
    pub price_type: Option<PriceType>,
    /// Display qualifier for the base amount.
    #[serde(default)]
    pub pricing_label: PricingLabel,
    /// Time-scoped price overrides for this room.
    #[serde(default)]
    pub pricing_slots: Vec<PricingSlot>,
    /// Whether this booking reserves the room for sole use.
    #[serde(default)]
    pub exclusive: bool,
    /// Whether exclusive booking is offered under the base pricing.
    #[serde(default)]
    pub exclusive_type: ExclusiveType,
    /// Alternate base amount for exclusive bookings.
    #[serde(default)]
    pub exclusive_price: Option<Decimal>,
    /// Unit of charge for the exclusive base amount.
    #[serde(default)]
    pub exclusive_price_type: Option<PriceType>,
    /// Display qualifier for the exclusive base amount.
    #[serde(default)]
    pub exclusive_pricing_label: Option<PricingLabel>,
}

/// An add-on package within one booking.
///
/// A package contributes to the total only when the booking's headcount
/// falls within `[min_persons, max_persons]` (inclusive); an absent bound
/// is unbounded on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPackage {
    /// Unique identifier for the package.
    pub id: String,
    /// The amount charged for this package.
    pub price: Decimal,
    /// Unit of charge for the amount.
    pub price_type: PriceType,
    /// Display qualifier carried through to the quote line.
    #[serde(default)]
    pub pricing_label: PricingLabel,
    /// Minimum headcount for eligibility (inclusive).
    #[serde(default)]
    pub min_persons: Option<u32>,
    /// Maximum headcount for eligibility (inclusive).
    #[serde(default)]
    pub max_persons: Option<u32>,
}

impl BookingPackage {
    /// Returns whether this package is eligible for the given headcount.
    ///
    /// # Example
    ///
    /// ```
    /// use pricing_engine::models::{BookingPackage, PriceType, PricingLabel};
    /// use rust_decimal::Decimal;
    ///
    /// let package = BookingPackage {
    ///     id: "pkg_catering".to_string(),
    ///     price: Decimal::new(25, 0),
    ///     price_type: PriceType::Person,
    ///     pricing_label: PricingLabel::Exact,
    ///     min_persons: Some(20),
    ///     max_persons: Some(50),
    /// };
    /// assert!(!package.is_eligible(10));
    /// assert!(package.is_eligible(20));
    /// assert!(package.is_eligible(50));
    /// assert!(!package.is_eligible(51));
    /// ```
    pub fn is_eligible(&self, persons: u32) -> bool {
        let above_min = self.min_persons.is_none_or(|min| persons >= min);
        let below_max = self.max_persons.is_none_or(|max| persons <= max);
        above_min && below_max
    }
}

/// The aggregate input for one booking price calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// The start of the event window.
    pub start: NaiveDateTime,
    /// The end of the event window.
    pub end: NaiveDateTime,
    /// Number of persons attending.
    pub persons: u32,
    /// The rooms reserved for this booking.
    pub rooms: Vec<BookingRoom>,
    /// The add-on packages selected for this booking.
    #[serde(default)]
    pub packages: Vec<BookingPackage>,
}
