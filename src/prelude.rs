//! Tiered discounts prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, RunInput},
    discounts::{Discount, DiscountApplicationStrategy, DiscountValue, FunctionRunResult, Target},
    merchandise::{Merchandise, ProductVariant},
    products::{Product, ProductId},
    run::run,
    runner::{OutputFormat, RunnerError, execute},
    tiers::{DISCOUNT_PER_PRODUCT, MAX_DISCOUNT, MIN_UNIQUE_PRODUCTS, TierError, TieredDiscount},
};
