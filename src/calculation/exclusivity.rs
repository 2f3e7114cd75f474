//! Exclusivity resolution.
//!
//! When a booking reserves a room for sole use, the alternate exclusive
//! pricing parameters of the governing pricing definition replace the
//! standard ones. A room booked exclusively under a definition that does
//! not offer exclusivity is a configuration error and must surface as
//! such; silently falling back to non-exclusive pricing would under-charge.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{BookingRoom, ExclusiveType, PriceType, PricingLabel, PricingSlot};

/// The pricing parameters that govern one portion of a room reservation
/// after exclusivity has been resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivePricing {
    /// The amount per charge unit.
    pub price: Decimal,
    /// The unit of charge.
    pub price_type: PriceType,
    /// Display qualifier carried through to the quote line.
    pub pricing_label: PricingLabel,
}

/// Resolves the effective pricing for one portion of a room reservation.
///
/// The governing definition is the matched slot when one exists, the
/// room's base pricing otherwise.
///
/// * Non-exclusive booking: the governing definition's standard price and
///   price type are used unchanged. `Ok(None)` when the portion is
///   unmatched and the room carries no usable base price (the portion is
///   unpriceable, not an error).
/// * Exclusive booking: the governing definition must offer exclusivity,
///   meaning its exclusivity mode is not `not_available` and both the
///   exclusive price and exclusive price type are set. The exclusive
///   pricing label falls back to the standard label when unset.
///
/// # Errors
///
/// Returns [`EngineError::ExclusivityUnavailable`] when the room is booked
/// exclusively but the governing definition does not offer exclusivity.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::resolve_pricing;
/// use pricing_engine::models::{BookingRoom, ExclusiveType, PriceType, PricingLabel};
/// use rust_decimal::Decimal;
///
/// let room = BookingRoom {
///     id: "room_saal".to_string(),
///     price: Some(Decimal::new(500, 0)),
///     price_type: Some(PriceType::Once),
///     pricing_label: PricingLabel::Exact,
///     pricing_slots: vec![],
///     exclusive: false,
///     exclusive_type: ExclusiveType::NotAvailable,
///     exclusive_price: None,
///     exclusive_price_type: None,
///     exclusive_pricing_label: None,
/// };
///
/// let pricing = resolve_pricing(&room, None).unwrap().unwrap();
/// assert_eq!(pricing.price, Decimal::new(500, 0));
/// assert_eq!(pricing.price_type, PriceType::Once);
/// ```
pub fn resolve_pricing(
    room: &BookingRoom,
    matched_slot: Option<&PricingSlot>,
) -> EngineResult<Option<EffectivePricing>> {
    if room.exclusive {
        let (exclusive_type, price, price_type, label, standard_label) = match matched_slot {
            Some(slot) => (
                slot.exclusive_type,
                slot.exclusive_price,
                slot.exclusive_price_type,
                slot.exclusive_pricing_label,
                slot.pricing_label,
            ),
            None => (
                room.exclusive_type,
                room.exclusive_price,
                room.exclusive_price_type,
                room.exclusive_pricing_label,
                room.pricing_label,
            ),
        };

        if exclusive_type == ExclusiveType::NotAvailable {
            return Err(EngineError::ExclusivityUnavailable {
                room_id: room.id.clone(),
            });
        }
        let (Some(price), Some(price_type)) = (price, price_type) else {
            return Err(EngineError::ExclusivityUnavailable {
                room_id: room.id.clone(),
            });
        };

        return Ok(Some(EffectivePricing {
            price,
            price_type,
            pricing_label: label.unwrap_or(standard_label),
        }));
    }

    match matched_slot {
        Some(slot) => Ok(Some(EffectivePricing {
            price: slot.price,
            price_type: slot.price_type,
            pricing_label: slot.pricing_label,
        })),
        None => match (room.price, room.price_type) {
            (Some(price), Some(price_type)) => Ok(Some(EffectivePricing {
                price,
                price_type,
                pricing_label: room.pricing_label,
            })),
            // No slot and no usable base price: unpriceable, not an error
            _ => Ok(None),
        },
    }
}
