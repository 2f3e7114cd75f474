//! Per-package price evaluation.
//!
//! Packages are priced over the whole event window and contribute to the
//! total only when the booking's headcount falls within their eligibility
//! bounds. An ineligible package is silently excluded rather than
//! rejected, matching how booking frontends offer packages conditionally.

use rust_decimal::Decimal;

use crate::models::{BookingPackage, LineSubject, PriceLine};

use super::price_evaluation::evaluate_price;

/// Computes the quote line for one package, or `None` when the package is
/// not eligible for the booking's headcount.
///
/// # Arguments
///
/// * `package` - The package to price
/// * `window_hours` - The duration of the whole event window in hours
/// * `persons` - The booking's headcount
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::price_package;
/// use pricing_engine::models::{BookingPackage, PriceType, PricingLabel};
/// use rust_decimal::Decimal;
///
/// let package = BookingPackage {
///     id: "pkg_dj".to_string(),
///     price: Decimal::new(300, 0),
///     price_type: PriceType::Once,
///     pricing_label: PricingLabel::Exact,
///     min_persons: Some(20),
///     max_persons: Some(50),
/// };
///
/// // Below the eligibility window: no line
/// assert!(price_package(&package, Decimal::new(6, 0), 10).is_none());
///
/// let line = price_package(&package, Decimal::new(6, 0), 30).unwrap();
/// assert_eq!(line.amount, Decimal::new(300, 0));
/// ```
pub fn price_package(
    package: &BookingPackage,
    window_hours: Decimal,
    persons: u32,
) -> Option<PriceLine> {
    if !package.is_eligible(persons) {
        return None;
    }

    Some(PriceLine {
        subject: LineSubject::Package,
        subject_id: package.id.clone(),
        price_type: package.price_type,
        pricing_label: package.pricing_label,
        unit_price: package.price,
        hours: window_hours,
        amount: evaluate_price(package.price, package.price_type, window_hours, persons),
    })
}
