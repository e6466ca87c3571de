//! Tiered Discounts
//!
//! A cart discount function: the more distinct products in the cart, the larger
//! the percentage taken off the order subtotal, up to a fixed cap.
//!
//! The host supplies a [`RunInput`](cart::RunInput) and receives a
//! [`FunctionRunResult`](discounts::FunctionRunResult) from [`run`](run::run).

pub mod cart;
pub mod config;
pub mod discounts;
pub mod merchandise;
pub mod observability;
pub mod prelude;
pub mod products;
pub mod run;
pub mod runner;
pub mod tiers;
