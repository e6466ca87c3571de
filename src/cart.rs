//! Cart

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

use crate::{merchandise::Merchandise, products::ProductId};

/// Input supplied by the host for a single evaluation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RunInput {
    /// Cart snapshot being evaluated
    pub cart: Cart,
}

impl RunInput {
    /// Wrap a cart snapshot as run input.
    pub fn new(cart: Cart) -> Self {
        Self { cart }
    }
}

/// A single entry in the cart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CartLine {
    /// Merchandise referenced by this line
    pub merchandise: Merchandise,
}

impl CartLine {
    /// Create a line for the given merchandise.
    pub fn new(merchandise: Merchandise) -> Self {
        Self { merchandise }
    }

    /// Create a line for a variant of the given product.
    pub fn for_product(product: impl Into<ProductId>) -> Self {
        Self::new(Merchandise::variant_of(product))
    }
}

/// Read-only snapshot of the cart's lines, in host order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a cart with the given lines.
    pub fn with_lines(lines: impl Into<Vec<CartLine>>) -> Self {
        Self {
            lines: lines.into(),
        }
    }

    /// Returns the cart lines.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Distinct parent product identifiers referenced by the cart.
    ///
    /// Lines whose merchandise has no parent product are skipped.
    pub fn unique_products(&self) -> FxHashSet<&ProductId> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let product = line.merchandise.product_id();

                if product.is_none() {
                    debug!(line = index, "skipping cart line without a parent product");
                }

                product
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_cart_has_no_products() {
        let cart = Cart::default();

        assert!(cart.is_empty());
        assert!(cart.unique_products().is_empty());
    }

    #[test]
    fn unique_products_deduplicates_lines() {
        let cart = Cart::with_lines([
            CartLine::for_product("a"),
            CartLine::for_product("a"),
            CartLine::for_product("b"),
            CartLine::for_product("b"),
            CartLine::for_product("c"),
        ]);

        let products = cart.unique_products();

        assert_eq!(cart.len(), 5);
        assert_eq!(products.len(), 3);
        assert!(products.contains(&ProductId::new("a")));
        assert!(products.contains(&ProductId::new("b")));
        assert!(products.contains(&ProductId::new("c")));
    }

    #[test]
    fn unique_products_skips_other_merchandise() {
        let cart = Cart::with_lines([
            CartLine::for_product("a"),
            CartLine::new(Merchandise::Other),
        ]);

        assert_eq!(cart.unique_products().len(), 1);
    }

    #[test]
    fn deserializes_run_input() -> TestResult {
        let input: RunInput = serde_json::from_str(
            r#"{
                "cart": {
                    "lines": [
                        { "merchandise": { "product": { "id": "gid://shopify/Product/1" } } },
                        { "merchandise": { "__typename": "CustomProduct" } }
                    ]
                }
            }"#,
        )?;

        assert_eq!(
            input,
            RunInput::new(Cart::with_lines([
                CartLine::for_product("gid://shopify/Product/1"),
                CartLine::new(Merchandise::Other),
            ]))
        );

        Ok(())
    }
}
