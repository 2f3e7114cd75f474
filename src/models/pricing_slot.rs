//! Pricing slot model.
//!
//! A pricing slot is a time-window-scoped price override for a room: it
//! applies to a recurring weekly window given by (day-of-week, time-of-day)
//! endpoints and carries its own price, price type, and exclusivity
//! parameters.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ExclusiveType, PriceType, PricingLabel};

/// A time-scoped price override for a room.
///
/// The window runs from `(start_day, start_time)` to `(end_day, end_time)`
/// within the week. A window whose end lies at or before its start wraps
/// forward across the week boundary (Saturday 22:00 to Sunday 06:00 covers
/// late Saturday and early Sunday); equal endpoints denote a full-week slot.
///
/// # Example
///
/// ```
/// use pricing_engine::models::{ExclusiveType, PriceType, PricingLabel, PricingSlot};
/// use chrono::{NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// // Friday evening into early Saturday
/// let slot = PricingSlot {
///     start_day: Weekday::Fri,
///     end_day: Weekday::Sat,
///     start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
///     price: Decimal::new(120, 0),
///     price_type: PriceType::Hour,
///     pricing_label: PricingLabel::Exact,
///     exclusive_type: ExclusiveType::NotAvailable,
///     exclusive_price: None,
///     exclusive_price_type: None,
///     exclusive_pricing_label: None,
/// };
/// assert_eq!(slot.price_type, PriceType::Hour);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSlot {
    /// The day of week on which the window opens.
    pub start_day: Weekday,
    /// The day of week on which the window closes.
    pub end_day: Weekday,
    /// The time of day at which the window opens.
    pub start_time: NaiveTime,
    /// The time of day at which the window closes.
    pub end_time: NaiveTime,
    /// The base amount charged while this slot applies.
    pub price: Decimal,
    /// The unit of charge for `price`.
    pub price_type: PriceType,
    /// Display qualifier carried through to the quote line.
    #[serde(default)]
    pub pricing_label: PricingLabel,
    /// Whether exclusive booking is offered under this slot.
    #[serde(default)]
    pub exclusive_type: ExclusiveType,
    /// Alternate amount charged when the room is booked exclusively.
    #[serde(default)]
    pub exclusive_price: Option<Decimal>,
    /// Unit of charge for the exclusive amount.
    #[serde(default)]
    pub exclusive_price_type: Option<PriceType>,
    /// Display qualifier for the exclusive amount; falls back to
    /// `pricing_label` when unset.
    #[serde(default)]
    pub exclusive_pricing_label: Option<PricingLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_slot() -> PricingSlot {
        PricingSlot {
            start_day: Weekday::Fri,
            end_day: Weekday::Sat,
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
            price: Decimal::new(120, 0),
            price_type: PriceType::Hour,
            pricing_label: PricingLabel::From,
            exclusive_type: ExclusiveType::Optional,
            exclusive_price: Some(Decimal::new(200, 0)),
            exclusive_price_type: Some(PriceType::Hour),
            exclusive_pricing_label: None,
        }
    }

    #[test]
    fn test_slot_serialization_round_trip() {
        let slot = make_slot();
        let json = serde_json::to_string(&slot).unwrap();
        let deserialized: PricingSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(slot, deserialized);
    }

    #[test]
    fn test_slot_deserialization_defaults() {
        let json = r#"{
            "start_day": "Mon",
            "end_day": "Fri",
            "start_time": "08:00:00",
            "end_time": "18:00:00",
            "price": "450",
            "price_type": "day"
        }"#;

        let slot: PricingSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.pricing_label, PricingLabel::Exact);
        assert_eq!(slot.exclusive_type, ExclusiveType::NotAvailable);
        assert!(slot.exclusive_price.is_none());
        assert!(slot.exclusive_price_type.is_none());
    }
}
