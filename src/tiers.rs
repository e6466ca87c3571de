//! Tiered Discount
//!
//! Percentage discount that grows with the number of distinct products in the
//! cart: [`DISCOUNT_PER_PRODUCT`] percent per product once at least
//! [`MIN_UNIQUE_PRODUCTS`] are present, capped at [`MAX_DISCOUNT`] percent.
//!
//! The product count shown in the message is derived from the applied
//! percentage rather than the true count, so a capped discount reports the
//! number of products needed to reach the cap (five products at the default
//! rates read "Buy 4 unique products and get 20% off").

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::Cart,
    discounts::{Discount, DiscountValue, FunctionRunResult, Target},
};

/// Minimum number of distinct products required for a discount.
pub const MIN_UNIQUE_PRODUCTS: usize = 2;

/// Percent points granted per distinct product.
pub const DISCOUNT_PER_PRODUCT: u32 = 5;

/// Maximum percent points granted.
pub const MAX_DISCOUNT: u32 = 20;

/// Errors for invalid tier constants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierError {
    /// The minimum distinct product count is zero.
    #[error("minimum unique products must be greater than zero")]
    ZeroMinimum,

    /// The per-product rate is zero.
    #[error("discount per product must be greater than zero")]
    ZeroRate,

    /// The cap is lower than a single product's rate (cap, rate).
    #[error("maximum discount {0}% is below the per-product rate of {1}%")]
    CapBelowRate(u32, u32),

    /// The cap exceeds 100%.
    #[error("maximum discount {0}% exceeds 100%")]
    CapAboveHundred(u32),
}

/// Distinct-product tiered discount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TieredDiscount {
    min_unique_products: usize,
    discount_per_product: u32,
    max_discount: u32,
}

impl Default for TieredDiscount {
    fn default() -> Self {
        Self {
            min_unique_products: MIN_UNIQUE_PRODUCTS,
            discount_per_product: DISCOUNT_PER_PRODUCT,
            max_discount: MAX_DISCOUNT,
        }
    }
}

impl TieredDiscount {
    /// Create a tiered discount from explicit constants.
    ///
    /// # Errors
    ///
    /// - [`TierError::ZeroMinimum`]: `min_unique_products` is zero.
    /// - [`TierError::ZeroRate`]: `discount_per_product` is zero.
    /// - [`TierError::CapBelowRate`]: `max_discount` is below `discount_per_product`.
    /// - [`TierError::CapAboveHundred`]: `max_discount` is above 100.
    pub fn new(
        min_unique_products: usize,
        discount_per_product: u32,
        max_discount: u32,
    ) -> Result<Self, TierError> {
        if min_unique_products == 0 {
            return Err(TierError::ZeroMinimum);
        }

        if discount_per_product == 0 {
            return Err(TierError::ZeroRate);
        }

        if max_discount < discount_per_product {
            return Err(TierError::CapBelowRate(max_discount, discount_per_product));
        }

        if max_discount > 100 {
            return Err(TierError::CapAboveHundred(max_discount));
        }

        Ok(Self {
            min_unique_products,
            discount_per_product,
            max_discount,
        })
    }

    /// Return the minimum distinct product count.
    pub const fn min_unique_products(&self) -> usize {
        self.min_unique_products
    }

    /// Return the per-product rate in percent points.
    pub const fn discount_per_product(&self) -> u32 {
        self.discount_per_product
    }

    /// Return the cap in percent points.
    pub const fn max_discount(&self) -> u32 {
        self.max_discount
    }

    /// Percent points earned by `unique_products` distinct products, or `None`
    /// below the minimum.
    pub fn percentage_for(&self, unique_products: usize) -> Option<Decimal> {
        if unique_products < self.min_unique_products {
            return None;
        }

        let earned = Decimal::from(unique_products) * Decimal::from(self.discount_per_product);

        Some(earned.min(Decimal::from(self.max_discount)))
    }

    /// Product count advertised for a given percentage.
    pub fn display_count(&self, percentage: Decimal) -> Decimal {
        (percentage / Decimal::from(self.discount_per_product)).normalize()
    }

    /// Customer-facing message for a given percentage.
    pub fn message(&self, percentage: Decimal) -> String {
        format!(
            "Buy {} unique products and get {}% off",
            self.display_count(percentage),
            percentage.normalize()
        )
    }

    /// Evaluate the cart, returning at most one whole-order discount.
    pub fn evaluate(&self, cart: &Cart) -> FunctionRunResult {
        let unique_products = cart.unique_products().len();

        let Some(percentage) = self.percentage_for(unique_products) else {
            debug!(
                unique_products,
                minimum = self.min_unique_products,
                "not enough unique products for a discount"
            );

            return FunctionRunResult::empty();
        };

        debug!(unique_products, %percentage, "applying tiered discount");

        FunctionRunResult::single(Discount {
            message: self.message(percentage),
            value: DiscountValue::percentage(percentage),
            targets: vec![Target::whole_order()],
        })
    }
}
