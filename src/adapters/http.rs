use crate::domain::model::Product;
use crate::domain::ports::{CategorySource, ProductSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Listing and category services backed by a JSON-over-HTTP catalog API.
///
/// `GET <base>/products?type=<t>[&categories=a,b]` returns the ordered
/// product array; `GET <base>/products/<id>/categories` returns the tag
/// slugs for one product. A non-success status is treated as an empty
/// listing, which downstream resolution reports as "no neighbor".
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: std::time::Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProductSource for HttpCatalog {
    async fn fetch_products(
        &self,
        item_type: &str,
        categories: Option<&[String]>,
    ) -> Result<Vec<Product>> {
        let mut request = self
            .client
            .get(format!("{}/products", self.base_url))
            .query(&[("type", item_type)]);
        if let Some(categories) = categories {
            request = request.query(&[("categories", categories.join(","))]);
        }

        tracing::debug!("fetching product listing from {}/products", self.base_url);
        let response = request.send().await?;
        tracing::debug!("listing response status: {}", response.status());

        if !response.status().is_success() {
            return Ok(Vec::new());
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CategorySource for HttpCatalog {
    async fn categories_for(&self, product_id: u64) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/products/{}/categories", self.base_url, product_id))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(Vec::new());
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let catalog = HttpCatalog::new("https://shop.example.com/api/");
        assert_eq!(catalog.base_url, "https://shop.example.com/api");
    }

    #[tokio::test]
    async fn test_fetch_products_passes_item_type() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([
            {
                "id": 1,
                "title": "Alpha",
                "date": "2024-03-01T00:00:00Z",
                "categories": ["widgets"],
                "permalink": "https://shop.example.com/products/1"
            },
            {
                "id": 2,
                "title": "Beta",
                "date": "2024-03-02T00:00:00Z",
                "categories": ["gadgets"],
                "permalink": "https://shop.example.com/products/2"
            }
        ]);

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/products").query_param("type", "product");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let catalog = HttpCatalog::new(server.base_url());
        let products = catalog.fetch_products("product", None).await.unwrap();

        api_mock.assert();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].title, "Beta");
    }

    #[tokio::test]
    async fn test_fetch_products_joins_category_filter() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/products")
                .query_param("type", "product")
                .query_param("categories", "widgets,gadgets");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let catalog = HttpCatalog::new(server.base_url());
        let filter = vec!["widgets".to_string(), "gadgets".to_string()];
        let products = catalog
            .fetch_products("product", Some(&filter))
            .await
            .unwrap();

        api_mock.assert();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_products_error_status_yields_empty_listing() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(500);
        });

        let catalog = HttpCatalog::new(server.base_url());
        let products = catalog.fetch_products("product", None).await.unwrap();

        api_mock.assert();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_categories_for_product() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/products/7/categories");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!(["widgets", "sale"]));
        });

        let catalog = HttpCatalog::new(server.base_url());
        let categories = catalog.categories_for(7).await.unwrap();

        api_mock.assert();
        assert_eq!(categories, vec!["widgets".to_string(), "sale".to_string()]);
    }

    #[tokio::test]
    async fn test_categories_for_missing_product_is_empty() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/products/99/categories");
            then.status(404);
        });

        let catalog = HttpCatalog::new(server.base_url());
        let categories = catalog.categories_for(99).await.unwrap();

        api_mock.assert();
        assert!(categories.is_empty());
    }
}
