//! Merchandise
//!
//! The host describes each cart line's merchandise as a union. Only product
//! variants carry a parent product; merchandise sent without a `product`
//! object (custom products, for instance) becomes [`Merchandise::Other`] and
//! never contributes to the distinct product count. A `product` object that is
//! present but malformed is a decode error.

use serde::Deserialize;

use crate::products::{Product, ProductId};

/// A product variant, belonging to exactly one parent product.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductVariant {
    /// Parent product
    pub product: Product,
}

/// Merchandise referenced by a cart line.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "MerchandiseFields")]
pub enum Merchandise {
    /// A variant of a catalogue product.
    ProductVariant(ProductVariant),

    /// Any merchandise without a parent product.
    Other,
}

/// Wire shape of a merchandise object; `product` is optional, but strict when present.
#[derive(Deserialize)]
struct MerchandiseFields {
    product: Option<Product>,
}

impl From<MerchandiseFields> for Merchandise {
    fn from(fields: MerchandiseFields) -> Self {
        match fields.product {
            Some(product) => Merchandise::ProductVariant(ProductVariant { product }),
            None => Merchandise::Other,
        }
    }
}

impl Merchandise {
    /// Create product variant merchandise for the given parent product.
    pub fn variant_of(product: impl Into<ProductId>) -> Self {
        Merchandise::ProductVariant(ProductVariant {
            product: Product::new(product),
        })
    }

    /// Returns the parent product identifier, if this is a product variant.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            Merchandise::ProductVariant(variant) => Some(&variant.product.id),
            Merchandise::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn variant_exposes_parent_product() {
        let merchandise = Merchandise::variant_of("gid://shopify/Product/1");

        assert_eq!(
            merchandise.product_id(),
            Some(&ProductId::new("gid://shopify/Product/1"))
        );
    }

    #[test]
    fn other_has_no_product() {
        assert_eq!(Merchandise::Other.product_id(), None);
    }

    #[test]
    fn deserializes_variant_ignoring_extra_fields() -> TestResult {
        let merchandise: Merchandise = serde_json::from_str(
            r#"{"__typename":"ProductVariant","id":"gid://shopify/ProductVariant/9","product":{"id":"gid://shopify/Product/1"}}"#,
        )?;

        assert_eq!(merchandise, Merchandise::variant_of("gid://shopify/Product/1"));

        Ok(())
    }

    #[test]
    fn deserializes_custom_product_as_other() -> TestResult {
        let tagged: Merchandise = serde_json::from_str(r#"{"__typename":"CustomProduct"}"#)?;
        let empty: Merchandise = serde_json::from_str("{}")?;

        assert_eq!(tagged, Merchandise::Other);
        assert_eq!(empty, Merchandise::Other);

        Ok(())
    }

    #[test]
    fn rejects_product_with_non_string_id() {
        let result = serde_json::from_str::<Merchandise>(
            r#"{"__typename":"ProductVariant","product":{"id":42}}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn rejects_product_without_id() {
        let result = serde_json::from_str::<Merchandise>(r#"{"product":{}}"#);

        assert!(result.is_err());
    }
}
