use crate::domain::model::QuantityPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_required_field,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storefront: StorefrontSection,
    pub catalog: CatalogSection,
    pub cart: CartSection,
    pub session: SessionSection,
    pub notifications: Option<NotificationsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontSection {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// "api" or "file".
    pub source: String,
    pub endpoint: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSection {
    /// "api" or "file".
    pub source: String,
    pub endpoint: Option<String>,
    pub file: Option<String>,
    pub quantity_policy: Option<QuantityPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSection {
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsSection {
    pub enabled: Option<bool>,
}

impl TomlConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("storefront.name", &self.storefront.name)?;

        match self.catalog.source.as_str() {
            "api" => {
                let endpoint =
                    validate_required_field("catalog.endpoint", &self.catalog.endpoint)?;
                validate_url("catalog.endpoint", endpoint)?;
            }
            "file" => {
                let file = validate_required_field("catalog.file", &self.catalog.file)?;
                validate_path("catalog.file", file)?;
                validate_file_extension("catalog.file", file, &["csv"])?;
            }
            other => {
                return Err(StorefrontError::InvalidConfigValueError {
                    field: "catalog.source".to_string(),
                    value: other.to_string(),
                    reason: "Expected 'api' or 'file'".to_string(),
                });
            }
        }

        match self.cart.source.as_str() {
            "api" => {
                let endpoint = validate_required_field("cart.endpoint", &self.cart.endpoint)?;
                validate_url("cart.endpoint", endpoint)?;
            }
            "file" => {
                let file = validate_required_field("cart.file", &self.cart.file)?;
                validate_path("cart.file", file)?;
                validate_file_extension("cart.file", file, &["json"])?;
            }
            other => {
                return Err(StorefrontError::InvalidConfigValueError {
                    field: "cart.source".to_string(),
                    value: other.to_string(),
                    reason: "Expected 'api' or 'file'".to_string(),
                });
            }
        }

        validate_path("session.file", &self.session.file)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn quantity_policy(&self) -> QuantityPolicy {
        self.cart.quantity_policy.unwrap_or_default()
    }

    fn notifications_enabled(&self) -> bool {
        self.notifications
            .as_ref()
            .and_then(|n| n.enabled)
            .unwrap_or(false)
    }
}
