use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Listing service: returns the ordered product collection, fetched
/// fresh on every call. When `categories` is given the listing is
/// restricted to products carrying at least one of those tags.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(
        &self,
        item_type: &str,
        categories: Option<&[String]>,
    ) -> Result<Vec<Product>>;
}

/// Category service: the tag slugs attached to a product.
#[async_trait]
pub trait CategorySource: Send + Sync {
    async fn categories_for(&self, product_id: u64) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn item_type(&self) -> &str;
    fn date_format(&self) -> &str;
}
