use crate::core::navigator::{DEFAULT_LINK_TEMPLATE, DEFAULT_NEXT_FORMAT, DEFAULT_PREVIOUS_FORMAT};
use crate::domain::model::Direction;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{NavError, Result};
use crate::utils::validation::{validate_required_field, validate_template, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub navigation: Option<NavigationConfig>,
    pub source: Option<SourceConfig>,
    pub templates: Option<TemplatesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    pub item_type: Option<String>,
    pub date_format: Option<String>,
    pub in_same_category: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    pub next: Option<TemplateConfig>,
    pub previous: Option<TemplateConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub format: Option<String>,
    pub link: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NavError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NavError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with the environment value;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let source = validate_required_field("source", &self.source)?;
        validate_url("source.endpoint", &source.endpoint)?;

        validate_template(
            "templates.next.format",
            self.format_for(Direction::Next),
            "%link",
        )?;
        validate_template(
            "templates.previous.format",
            self.format_for(Direction::Previous),
            "%link",
        )?;

        Ok(())
    }

    pub fn endpoint(&self) -> Result<&str> {
        let source = validate_required_field("source", &self.source)?;
        Ok(&source.endpoint)
    }

    pub fn item_type(&self) -> &str {
        self.navigation
            .as_ref()
            .and_then(|n| n.item_type.as_deref())
            .unwrap_or("product")
    }

    pub fn date_format(&self) -> &str {
        self.navigation
            .as_ref()
            .and_then(|n| n.date_format.as_deref())
            .unwrap_or("%Y-%m-%d")
    }

    pub fn in_same_category(&self) -> bool {
        self.navigation
            .as_ref()
            .and_then(|n| n.in_same_category)
            .unwrap_or(true)
    }

    fn template_for(&self, direction: Direction) -> Option<&TemplateConfig> {
        let templates = self.templates.as_ref()?;
        match direction {
            Direction::Next => templates.next.as_ref(),
            Direction::Previous => templates.previous.as_ref(),
        }
    }

    pub fn format_for(&self, direction: Direction) -> &str {
        self.template_for(direction)
            .and_then(|t| t.format.as_deref())
            .unwrap_or(match direction {
                Direction::Next => DEFAULT_NEXT_FORMAT,
                Direction::Previous => DEFAULT_PREVIOUS_FORMAT,
            })
    }

    pub fn link_for(&self, direction: Direction) -> &str {
        self.template_for(direction)
            .and_then(|t| t.link.as_deref())
            .unwrap_or(DEFAULT_LINK_TEMPLATE)
    }
}

impl ConfigProvider for TomlConfig {
    fn item_type(&self) -> &str {
        self.item_type()
    }

    fn date_format(&self) -> &str {
        self.date_format()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
