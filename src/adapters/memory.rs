use crate::domain::model::Product;
use crate::domain::ports::{CategorySource, ProductSource};
use crate::utils::error::Result;
use async_trait::async_trait;

/// In-memory listing and category services over a fixed product list.
/// Keeps the listing order it was constructed with.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Builds a catalog from a JSON array of products, the same shape
    /// the HTTP listing endpoint returns.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self {
            products: serde_json::from_str(json)?,
        })
    }
}

#[async_trait]
impl ProductSource for StaticCatalog {
    async fn fetch_products(
        &self,
        _item_type: &str,
        categories: Option<&[String]>,
    ) -> Result<Vec<Product>> {
        Ok(match categories {
            None => self.products.clone(),
            Some(filter) => self
                .products
                .iter()
                .filter(|p| p.categories.iter().any(|c| filter.contains(c)))
                .cloned()
                .collect(),
        })
    }
}

#[async_trait]
impl CategorySource for StaticCatalog {
    async fn categories_for(&self, product_id: u64) -> Result<Vec<String>> {
        Ok(self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.categories.clone())
            .unwrap_or_default())
    }
}
