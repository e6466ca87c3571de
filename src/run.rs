//! Function entry point

use tracing::instrument;

use crate::{cart::RunInput, discounts::FunctionRunResult, tiers::TieredDiscount};

/// Evaluate the host's input with the fixed tier constants.
#[instrument(level = "debug", skip_all, fields(lines = input.cart.len()))]
pub fn run(input: &RunInput) -> FunctionRunResult {
    TieredDiscount::default().evaluate(&input.cart)
}

#[cfg(test)]
mod tests {
    use crate::cart::{Cart, CartLine};

    use super::*;

    #[test]
    fn run_on_empty_cart_is_empty() {
        let result = run(&RunInput::new(Cart::default()));

        assert!(result.is_empty());
    }

    #[test]
    fn run_matches_default_tiers() {
        let input = RunInput::new(Cart::with_lines([
            CartLine::for_product("a"),
            CartLine::for_product("b"),
            CartLine::for_product("c"),
        ]));

        assert_eq!(run(&input), TieredDiscount::default().evaluate(&input.cart));
    }
}
