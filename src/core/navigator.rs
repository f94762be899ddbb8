use std::io::Write;

use crate::core::formatter::render_adjacent_link;
use crate::core::hooks::FilterRegistry;
use crate::core::resolver::adjacent_in;
use crate::domain::model::{Direction, Product};
use crate::domain::ports::{CategorySource, ConfigProvider, ProductSource};
use crate::utils::error::Result;

pub const DEFAULT_NEXT_FORMAT: &str = "%link »";
pub const DEFAULT_PREVIOUS_FORMAT: &str = "« %link";
pub const DEFAULT_LINK_TEMPLATE: &str = "%title";

/// Ties the listing and category services to the resolver and
/// formatter. One resolution per call, nothing cached between calls.
pub struct Navigator<S: ProductSource, C: CategorySource, F: ConfigProvider> {
    source: S,
    categories: C,
    config: F,
    filters: FilterRegistry,
}

impl<S: ProductSource, C: CategorySource, F: ConfigProvider> Navigator<S, C, F> {
    pub fn new(source: S, categories: C, config: F) -> Self {
        Self {
            source,
            categories,
            config,
            filters: FilterRegistry::new(),
        }
    }

    /// Registers a named post-processing callback. The rendered link
    /// runs through `"<next|previous>_<item_type>_link"` before it is
    /// returned or emitted; the anchor title runs through `"title"`.
    pub fn set_filter<G>(&mut self, name: impl Into<String>, filter: G)
    where
        G: Fn(String) -> String + Send + Sync + 'static,
    {
        self.filters.set_filter(name, filter);
    }

    /// Fetches the listing (restricted to the current product's
    /// categories when `in_same_category` is set) and resolves the
    /// neighbor in the given direction. `None` for every no-neighbor
    /// outcome: no current product, empty listing, current absent or at
    /// the first position, or the step landing past either end.
    pub async fn resolve(
        &self,
        current: Option<&Product>,
        in_same_category: bool,
        direction: Direction,
    ) -> Result<Option<Product>> {
        let Some(current) = current else {
            return Ok(None);
        };

        let category_filter = if in_same_category {
            Some(self.categories.categories_for(current.id).await?)
        } else {
            None
        };

        let items = self
            .source
            .fetch_products(self.config.item_type(), category_filter.as_deref())
            .await?;
        tracing::debug!("fetched {} products for adjacency lookup", items.len());

        Ok(adjacent_in(current, &items, direction).cloned())
    }

    /// Resolves and renders the link, then applies the direction's named
    /// filter hook once. `Ok(None)` when there is no neighbor to render.
    pub async fn render(
        &self,
        current: Option<&Product>,
        format: &str,
        link: &str,
        in_same_category: bool,
        direction: Direction,
    ) -> Result<Option<String>> {
        let Some(item) = self.resolve(current, in_same_category, direction).await? else {
            return Ok(None);
        };

        let rendered = render_adjacent_link(
            &item,
            format,
            link,
            direction,
            self.config.date_format(),
            &self.filters,
        );

        let hook = format!(
            "{}_{}_link",
            direction.hook_slug(),
            self.config.item_type()
        );
        Ok(Some(self.filters.apply(&hook, rendered)))
    }

    /// Template-helper contract: emits the rendered link to `out`, or
    /// nothing at all. A listing fetch failure is treated the same as
    /// "no neighbor" and only logged.
    pub async fn write_adjacent_link(
        &self,
        out: &mut dyn Write,
        current: Option<&Product>,
        format: &str,
        link: &str,
        in_same_category: bool,
        direction: Direction,
    ) -> Result<()> {
        match self
            .render(current, format, link, in_same_category, direction)
            .await
        {
            Ok(Some(rendered)) => {
                out.write_all(rendered.as_bytes())?;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::warn!("adjacent product lookup failed: {}", e);
                Ok(())
            }
        }
    }

    /// Emits the link to the product one position earlier in the
    /// listing, restricted to the current product's categories.
    pub async fn next_product_link(
        &self,
        out: &mut dyn Write,
        current: Option<&Product>,
    ) -> Result<()> {
        self.write_adjacent_link(
            out,
            current,
            DEFAULT_NEXT_FORMAT,
            DEFAULT_LINK_TEMPLATE,
            true,
            Direction::Next,
        )
        .await
    }

    /// Emits the link to the product one position later in the listing,
    /// restricted to the current product's categories.
    pub async fn previous_product_link(
        &self,
        out: &mut dyn Write,
        current: Option<&Product>,
    ) -> Result<()> {
        self.write_adjacent_link(
            out,
            current,
            DEFAULT_PREVIOUS_FORMAT,
            DEFAULT_LINK_TEMPLATE,
            true,
            Direction::Previous,
        )
        .await
    }
}
