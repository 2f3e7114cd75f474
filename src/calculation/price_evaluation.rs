//! Price-type evaluation.
//!
//! Given a base amount, a price type, the priced duration, and the
//! headcount, this module computes the monetary amount according to the
//! price type's unit-of-charge semantics. Unknown price-type tags cannot
//! reach this function: they are rejected at the record-conversion
//! boundary, where [`crate::models::PriceType::parse`] fails fast.

use rust_decimal::Decimal;

use crate::models::PriceType;

/// Number of hours in a charge day.
const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Computes the monetary amount for one priced portion.
///
/// # Arguments
///
/// * `amount` - The base amount per charge unit
/// * `price_type` - The unit-of-charge semantics to apply
/// * `duration_hours` - The duration of the priced portion in hours
/// * `persons` - The booking's headcount
///
/// # Semantics
///
/// | price type | formula |
/// |---|---|
/// | `Day` | `amount * ceil(duration_hours / 24)` (partial day counts as a full day) |
/// | `Hour` | `amount * duration_hours` (fractional hours allowed) |
/// | `Person` | `amount * persons` |
/// | `Once` | `amount` |
/// | `Consumption` | `0` (settled outside the quoting flow) |
/// | `None` | `0` |
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::evaluate_price;
/// use pricing_engine::models::PriceType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("50").unwrap();
/// let hours = Decimal::from_str("4.5").unwrap();
/// assert_eq!(
///     evaluate_price(amount, PriceType::Hour, hours, 30),
///     Decimal::from_str("225.0").unwrap()
/// );
/// ```
pub fn evaluate_price(
    amount: Decimal,
    price_type: PriceType,
    duration_hours: Decimal,
    persons: u32,
) -> Decimal {
    match price_type {
        PriceType::Day => amount * (duration_hours / HOURS_PER_DAY).ceil(),
        PriceType::Hour => amount * duration_hours,
        PriceType::Person => amount * Decimal::from(persons),
        PriceType::Once => amount,
        PriceType::Consumption => Decimal::ZERO,
        PriceType::None => Decimal::ZERO,
    }
}
