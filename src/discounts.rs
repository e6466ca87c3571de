//! Discounts
//!
//! Output model handed back to the host: a strategy plus zero or more
//! discount descriptors, serialized with the host's field names.

use rust_decimal::Decimal;
use serde::Serialize;

/// How the host applies the returned discounts when several are present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountApplicationStrategy {
    /// Apply only the first discount.
    First,

    /// Apply only the discount with the largest value.
    Maximum,

    /// Apply every discount.
    All,
}

/// Value of a discount.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountValue {
    /// Percentage off, expressed in percent points (e.g. `10` for 10%).
    Percentage {
        /// Percent points
        #[serde(with = "rust_decimal::serde::float")]
        value: Decimal,
    },
}

impl DiscountValue {
    /// Create a percentage value.
    pub fn percentage(value: Decimal) -> Self {
        DiscountValue::Percentage { value }
    }
}

/// What a discount applies to.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    /// The whole order subtotal, less any excluded variants.
    #[serde(rename_all = "camelCase")]
    OrderSubtotal {
        /// Variant identifiers excluded from the subtotal
        excluded_variant_ids: Vec<String>,
    },
}

impl Target {
    /// The whole order subtotal with no exclusions.
    pub fn whole_order() -> Self {
        Target::OrderSubtotal {
            excluded_variant_ids: Vec::new(),
        }
    }
}

/// A single discount descriptor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Discount {
    /// Customer-facing message
    pub message: String,

    /// Discount value
    pub value: DiscountValue,

    /// Discount targets
    pub targets: Vec<Target>,
}

/// Result of a single evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRunResult {
    /// Application strategy
    pub discount_application_strategy: DiscountApplicationStrategy,

    /// Discounts to apply, possibly none
    pub discounts: Vec<Discount>,
}

impl FunctionRunResult {
    /// A result applying no discount.
    pub fn empty() -> Self {
        Self {
            discount_application_strategy: DiscountApplicationStrategy::First,
            discounts: Vec::new(),
        }
    }

    /// A result applying exactly one discount.
    pub fn single(discount: Discount) -> Self {
        Self {
            discount_application_strategy: DiscountApplicationStrategy::First,
            discounts: vec![discount],
        }
    }

    /// Check if no discount is applied.
    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }
}
