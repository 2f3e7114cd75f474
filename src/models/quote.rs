//! Quote result models.
//!
//! This module contains the [`BookingQuote`] type and its associated
//! structures that capture the itemized output of a booking price
//! calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PriceType, PricingLabel};

/// The kind of entity a price line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSubject {
    /// The line prices a portion of a room reservation.
    Room,
    /// The line prices an add-on package.
    Package,
}

/// A single line item in a booking quote.
///
/// Each room produces one line per pricing run (a maximal stretch of the
/// event window governed by one pricing definition); each eligible package
/// produces exactly one line. Consumption- and none-typed lines appear
/// with a zero amount so the breakdown stays complete.
///
/// # Example
///
/// ```
/// use pricing_engine::models::{LineSubject, PriceLine, PriceType, PricingLabel};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = PriceLine {
///     subject: LineSubject::Room,
///     subject_id: "room_studio".to_string(),
///     price_type: PriceType::Hour,
///     pricing_label: PricingLabel::Exact,
///     unit_price: Decimal::from_str("50").unwrap(),
///     hours: Decimal::from_str("4.5").unwrap(),
///     amount: Decimal::from_str("225.0").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLine {
    /// Whether this line belongs to a room or a package.
    pub subject: LineSubject,
    /// The ID of the room or package.
    pub subject_id: String,
    /// The unit of charge applied on this line.
    pub price_type: PriceType,
    /// Display qualifier, carried unmodified from the pricing definition.
    pub pricing_label: PricingLabel,
    /// The amount per charge unit.
    pub unit_price: Decimal,
    /// The duration this line covers, in hours.
    pub hours: Decimal,
    /// The computed amount for this line.
    pub amount: Decimal,
}

/// Aggregated totals for a booking quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Sum of all room line amounts.
    pub rooms_total: Decimal,
    /// Sum of all eligible package line amounts.
    pub packages_total: Decimal,
    /// The booking total (rooms plus packages).
    pub total: Decimal,
}

/// The complete itemized result of a booking price calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuote {
    /// The individual price lines, rooms first, in input order.
    pub lines: Vec<PriceLine>,
    /// Aggregated totals across all lines.
    pub totals: QuoteTotals,
}
