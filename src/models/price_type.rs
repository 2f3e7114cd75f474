//! Closed enumerations for price semantics tags.
//!
//! Persisted records carry price types, pricing labels, and exclusivity
//! modes as free strings. These enums are the typed form; the `parse`
//! constructors are used at the conversion boundary so an unrecognized tag
//! fails fast instead of silently corrupting a financial total.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The unit of charge for a priced entity.
///
/// Exactly one price type applies per priced entity. `None` always yields
/// zero regardless of duration or headcount; `Consumption` charges are
/// settled outside the quoting flow and also contribute zero to the
/// computed total.
///
/// # Example
///
/// ```
/// use pricing_engine::models::PriceType;
///
/// assert_eq!(PriceType::parse("hour").unwrap(), PriceType::Hour);
/// assert!(PriceType::parse("per_minute").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// Charged per started 24-hour day (a partial day counts as a full day).
    Day,
    /// Charged per hour, fractional hours allowed.
    Hour,
    /// Charged per person attending.
    Person,
    /// Flat charge, independent of duration and headcount.
    Once,
    /// Pay-as-you-go billing settled outside the quoting flow; contributes
    /// zero to the computed total.
    Consumption,
    /// No charge.
    None,
}

impl PriceType {
    /// Parses a persisted price-type tag.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPriceType`] for any tag outside the
    /// enumerated set. The engine never defaults an unknown tag to zero or
    /// to a guessed type.
    pub fn parse(tag: &str) -> EngineResult<Self> {
        match tag {
            "day" => Ok(PriceType::Day),
            "hour" => Ok(PriceType::Hour),
            "person" => Ok(PriceType::Person),
            "once" => Ok(PriceType::Once),
            "consumption" => Ok(PriceType::Consumption),
            "none" => Ok(PriceType::None),
            _ => Err(EngineError::UnknownPriceType {
                tag: tag.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PriceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            PriceType::Day => "day",
            PriceType::Hour => "hour",
            PriceType::Person => "person",
            PriceType::Once => "once",
            PriceType::Consumption => "consumption",
            PriceType::None => "none",
        };
        write!(f, "{}", tag)
    }
}

/// Display qualifier for a quoted price.
///
/// `From` marks an "at least" estimate ("ab €500"), `Exact` a firm quote.
/// The label never affects the numeric result; it is carried through every
/// calculation unmodified so the presentation layer can format correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingLabel {
    /// The quoted amount is the exact price.
    Exact,
    /// The quoted amount is a lower bound.
    From,
}

impl PricingLabel {
    /// Parses a persisted pricing-label tag.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPricingLabel`] for unrecognized tags.
    pub fn parse(tag: &str) -> EngineResult<Self> {
        match tag {
            "exact" => Ok(PricingLabel::Exact),
            "from" => Ok(PricingLabel::From),
            _ => Err(EngineError::UnknownPricingLabel {
                tag: tag.to_string(),
            }),
        }
    }
}

impl Default for PricingLabel {
    fn default() -> Self {
        PricingLabel::Exact
    }
}

/// Whether a pricing definition supports exclusive booking of its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusiveType {
    /// The room is always booked exclusively under this pricing.
    Required,
    /// The customer may choose exclusive booking at the alternate price.
    Optional,
    /// Exclusive booking is not offered under this pricing.
    NotAvailable,
}

impl ExclusiveType {
    /// Parses a persisted exclusivity tag.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownExclusiveType`] for unrecognized tags.
    pub fn parse(tag: &str) -> EngineResult<Self> {
        match tag {
            "required" => Ok(ExclusiveType::Required),
            "optional" => Ok(ExclusiveType::Optional),
            "not_available" => Ok(ExclusiveType::NotAvailable),
            _ => Err(EngineError::UnknownExclusiveType {
                tag: tag.to_string(),
            }),
        }
    }
}

impl Default for ExclusiveType {
    fn default() -> Self {
        ExclusiveType::NotAvailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_price_types() {
        assert_eq!(PriceType::parse("day").unwrap(), PriceType::Day);
        assert_eq!(PriceType::parse("hour").unwrap(), PriceType::Hour);
        assert_eq!(PriceType::parse("person").unwrap(), PriceType::Person);
        assert_eq!(PriceType::parse("once").unwrap(), PriceType::Once);
        assert_eq!(
            PriceType::parse("consumption").unwrap(),
            PriceType::Consumption
        );
        assert_eq!(PriceType::parse("none").unwrap(), PriceType::None);
    }

    #[test]
    fn test_parse_unknown_price_type_fails() {
        let err = PriceType::parse("per_minute").unwrap_err();
        assert!(matches!(
            err,
            crate::error::EngineError::UnknownPriceType { tag } if tag == "per_minute"
        ));
    }

    #[test]
    fn test_parse_price_type_is_case_sensitive() {
        // Persisted tags are lowercase; anything else is a data error.
        assert!(PriceType::parse("Day").is_err());
        assert!(PriceType::parse("HOUR").is_err());
        assert!(PriceType::parse("").is_err());
    }

    #[test]
    fn test_price_type_display_round_trips() {
        for tag in ["day", "hour", "person", "once", "consumption", "none"] {
            let price_type = PriceType::parse(tag).unwrap();
            assert_eq!(price_type.to_string(), tag);
        }
    }

    #[test]
    fn test_price_type_serde_uses_snake_case() {
        let json = serde_json::to_string(&PriceType::Consumption).unwrap();
        assert_eq!(json, "\"consumption\"");

        let deserialized: PriceType = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(deserialized, PriceType::Day);
    }

    #[test]
    fn test_parse_pricing_labels() {
        assert_eq!(PricingLabel::parse("exact").unwrap(), PricingLabel::Exact);
        assert_eq!(PricingLabel::parse("from").unwrap(), PricingLabel::From);
        assert!(PricingLabel::parse("approx").is_err());
    }

    #[test]
    fn test_pricing_label_defaults_to_exact() {
        assert_eq!(PricingLabel::default(), PricingLabel::Exact);
    }

    #[test]
    fn test_parse_exclusive_types() {
        assert_eq!(
            ExclusiveType::parse("required").unwrap(),
            ExclusiveType::Required
        );
        assert_eq!(
            ExclusiveType::parse("optional").unwrap(),
            ExclusiveType::Optional
        );
        assert_eq!(
            ExclusiveType::parse("not_available").unwrap(),
            ExclusiveType::NotAvailable
        );
        assert!(ExclusiveType::parse("always").is_err());
    }

    #[test]
    fn test_exclusive_type_defaults_to_not_available() {
        assert_eq!(ExclusiveType::default(), ExclusiveType::NotAvailable);
    }
}
