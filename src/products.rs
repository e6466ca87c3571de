//! Products

use std::fmt;

use serde::Deserialize;

/// Globally unique product identifier, as supplied by the host (e.g. `gid://shopify/Product/1`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Parent product of a product variant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,
}

impl Product {
    /// Create a product with the given identifier.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_id_displays_raw_identifier() {
        let id = ProductId::new("gid://shopify/Product/1");

        assert_eq!(id.to_string(), "gid://shopify/Product/1");
    }

    #[test]
    fn product_deserializes_from_host_shape() -> TestResult {
        let product: Product = serde_json::from_str(r#"{"id":"gid://shopify/Product/7"}"#)?;

        assert_eq!(product, Product::new("gid://shopify/Product/7"));

        Ok(())
    }
}
