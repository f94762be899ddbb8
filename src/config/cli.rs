use crate::core::navigator::{DEFAULT_LINK_TEMPLATE, DEFAULT_NEXT_FORMAT, DEFAULT_PREVIOUS_FORMAT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_template, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "product-nav")]
#[command(about = "Render next/previous product navigation links")]
pub struct CliConfig {
    #[arg(long, default_value = "https://shop.example.com/api")]
    pub api_endpoint: String,

    #[arg(long, default_value = "product")]
    pub item_type: String,

    /// ID of the currently displayed product. Without it nothing is
    /// rendered.
    #[arg(long)]
    pub current: Option<u64>,

    #[arg(long, default_value = "%Y-%m-%d")]
    pub date_format: String,

    #[arg(long, default_value = DEFAULT_NEXT_FORMAT)]
    pub next_format: String,

    #[arg(long, default_value = DEFAULT_PREVIOUS_FORMAT)]
    pub previous_format: String,

    #[arg(long, default_value = DEFAULT_LINK_TEMPLATE)]
    pub link: String,

    /// Pick neighbors from the whole listing instead of restricting to
    /// products sharing a category with the current one.
    #[arg(long)]
    pub all_categories: bool,

    /// Path to a TOML configuration file; its values take precedence.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn item_type(&self) -> &str {
        &self.item_type
    }

    fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("item_type", &self.item_type)?;
        validate_template("next_format", &self.next_format, "%link")?;
        validate_template("previous_format", &self.previous_format, "%link")?;
        Ok(())
    }
}
