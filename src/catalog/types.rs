//! Catalog record types and engine-input conversion.
//!
//! This module contains the persisted record shapes exactly as stored in
//! the venue catalog: day-of-week integers 0-6 (0 = Sunday), HH:MM:SS time
//! strings, and free-string price-type, label, and exclusivity tags. The
//! conversion methods are the only place those raw tags and IDs are
//! interpreted; they fail fast on anything unrecognized so a bad record
//! never reaches the calculation core.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BookingPackage, BookingRoom, ExclusiveType, PriceType, PricingLabel, PricingSlot,
};

/// Metadata about the venue.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueRecord {
    /// Unique identifier for the venue.
    pub id: String,
    /// The human-readable name of the venue.
    pub name: String,
    /// ISO currency code echoed into quote responses for presentation.
    pub currency: String,
}

/// A pricing rule row as persisted, attached to a room.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingRuleRecord {
    /// Day of week the window opens, 0-6 with 0 = Sunday.
    pub start_day_of_week: i64,
    /// Day of week the window closes, 0-6 with 0 = Sunday.
    pub end_day_of_week: i64,
    /// Time of day the window opens, HH:MM:SS.
    pub start_time: String,
    /// Time of day the window closes, HH:MM:SS.
    pub end_time: String,
    /// Base amount charged while this rule applies.
    pub price: Decimal,
    /// Price-type tag (day, hour, person, once, consumption, none).
    pub price_type: String,
    /// Pricing-label tag (exact, from); defaults to exact.
    #[serde(default)]
    pub pricing_label: Option<String>,
    /// Exclusivity tag (required, optional, not_available); defaults to
    /// not_available.
    #[serde(default)]
    pub exclusive_type: Option<String>,
    /// Alternate amount for exclusive bookings.
    #[serde(default)]
    pub exclusive_price: Option<Decimal>,
    /// Price-type tag for the exclusive amount.
    #[serde(default)]
    pub exclusive_price_type: Option<String>,
    /// Pricing-label tag for the exclusive amount.
    #[serde(default)]
    pub exclusive_pricing_label: Option<String>,
}

/// A room as persisted in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomRecord {
    /// Unique identifier for the room.
    pub id: String,
    /// The human-readable name of the room.
    pub name: String,
    /// Base amount charged when no pricing rule matches.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Price-type tag for the base amount.
    #[serde(default)]
    pub price_type: Option<String>,
    /// Pricing-label tag for the base amount.
    #[serde(default)]
    pub pricing_label: Option<String>,
    /// Exclusivity tag for the base pricing.
    #[serde(default)]
    pub exclusive_type: Option<String>,
    /// Alternate base amount for exclusive bookings.
    #[serde(default)]
    pub exclusive_price: Option<Decimal>,
    /// Price-type tag for the exclusive base amount.
    #[serde(default)]
    pub exclusive_price_type: Option<String>,
    /// Pricing-label tag for the exclusive base amount.
    #[serde(default)]
    pub exclusive_pricing_label: Option<String>,
    /// Time-scoped pricing rules for this room.
    #[serde(default)]
    pub pricing_rules: Vec<PricingRuleRecord>,
}

/// A package as persisted in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageRecord {
    /// Unique identifier for the package.
    pub id: String,
    /// The human-readable name of the package.
    pub name: String,
    /// The amount charged for this package.
    pub price: Decimal,
    /// Price-type tag for the amount.
    pub price_type: String,
    /// Pricing-label tag; defaults to exact.
    #[serde(default)]
    pub pricing_label: Option<String>,
    /// Minimum headcount for eligibility (inclusive).
    #[serde(default)]
    pub min_persons: Option<u32>,
    /// Maximum headcount for eligibility (inclusive).
    #[serde(default)]
    pub max_persons: Option<u32>,
}

/// rooms.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomsConfig {
    /// All rooms of the venue.
    pub rooms: Vec<RoomRecord>,
}

/// packages.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PackagesConfig {
    /// All packages offered by the venue.
    pub packages: Vec<PackageRecord>,
}

/// Converts a persisted 0-6 day index (0 = Sunday) into a weekday.
fn weekday_from_index(value: i64) -> EngineResult<Weekday> {
    match value {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(EngineError::InvalidDayOfWeek { value }),
    }
}

/// Parses a persisted HH:MM:SS time-of-day string.
fn time_from_string(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S").map_err(|_| EngineError::InvalidTimeOfDay {
        value: value.to_string(),
    })
}

/// Parses an optional pricing-label tag, defaulting to exact.
fn label_from_tag(tag: Option<&str>) -> EngineResult<PricingLabel> {
    tag.map_or(Ok(PricingLabel::Exact), PricingLabel::parse)
}

/// Parses an optional exclusivity tag, defaulting to not_available.
fn exclusive_type_from_tag(tag: Option<&str>) -> EngineResult<ExclusiveType> {
    tag.map_or(Ok(ExclusiveType::NotAvailable), ExclusiveType::parse)
}

impl PricingRuleRecord {
    /// Converts this persisted rule into a typed pricing slot.
    ///
    /// # Errors
    ///
    /// Fails with the matching taxonomy error when a day index, time
    /// string, or tag is unrecognized.
    pub fn to_pricing_slot(&self) -> EngineResult<PricingSlot> {
        Ok(PricingSlot {
            start_day: weekday_from_index(self.start_day_of_week)?,
            end_day: weekday_from_index(self.end_day_of_week)?,
            start_time: time_from_string(&self.start_time)?,
            end_time: time_from_string(&self.end_time)?,
            price: self.price,
            price_type: PriceType::parse(&self.price_type)?,
            pricing_label: label_from_tag(self.pricing_label.as_deref())?,
            exclusive_type: exclusive_type_from_tag(self.exclusive_type.as_deref())?,
            exclusive_price: self.exclusive_price,
            exclusive_price_type: self
                .exclusive_price_type
                .as_deref()
                .map(PriceType::parse)
                .transpose()?,
            exclusive_pricing_label: self
                .exclusive_pricing_label
                .as_deref()
                .map(PricingLabel::parse)
                .transpose()?,
        })
    }
}

impl RoomRecord {
    /// Converts this persisted room into the engine's booking-room shape.
    ///
    /// # Arguments
    ///
    /// * `exclusive` - whether the booking reserves this room for sole use
    ///
    /// # Errors
    ///
    /// Fails with the matching taxonomy error when any tag, day index, or
    /// time string on the room or one of its pricing rules is unrecognized.
    pub fn to_booking_room(&self, exclusive: bool) -> EngineResult<BookingRoom> {
        let pricing_slots = self
            .pricing_rules
            .iter()
            .map(PricingRuleRecord::to_pricing_slot)
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(BookingRoom {
            id: self.id.clone(),
            price: self.price,
            price_type: self.price_type.as_deref().map(PriceType::parse).transpose()?,
            pricing_label: label_from_tag(self.pricing_label.as_deref())?,
            pricing_slots,
            exclusive,
            exclusive_type: exclusive_type_from_tag(self.exclusive_type.as_deref())?,
            exclusive_price: self.exclusive_price,
            exclusive_price_type: self
                .exclusive_price_type
                .as_deref()
                .map(PriceType::parse)
                .transpose()?,
            exclusive_pricing_label: self
                .exclusive_pricing_label
                .as_deref()
                .map(PricingLabel::parse)
                .transpose()?,
        })
    }
}

impl PackageRecord {
    /// Converts this persisted package into the engine's booking-package
    /// shape.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::UnknownPriceType`] or
    /// [`EngineError::UnknownPricingLabel`] on unrecognized tags.
    pub fn to_booking_package(&self) -> EngineResult<BookingPackage> {
        Ok(BookingPackage {
            id: self.id.clone(),
            price: self.price,
            price_type: PriceType::parse(&self.price_type)?,
            pricing_label: label_from_tag(self.pricing_label.as_deref())?,
            min_persons: self.min_persons,
            max_persons: self.max_persons,
        })
    }
}
