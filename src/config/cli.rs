use crate::domain::model::QuantityPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-cart")]
#[command(about = "Render a storefront cart from a catalog and cart source")]
pub struct CliConfig {
    /// Load the full configuration from a TOML file instead of flags.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub catalog_endpoint: Option<String>,

    #[arg(long)]
    pub catalog_file: Option<String>,

    #[arg(long, default_value = "./cart.json")]
    pub cart_file: String,

    #[arg(long, default_value = "./session.json")]
    pub session_file: String,

    #[arg(long, default_value = "allow")]
    pub quantity_policy: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    fn parsed_policy(&self) -> Option<QuantityPolicy> {
        match self.quantity_policy.as_str() {
            "allow" => Some(QuantityPolicy::Allow),
            "clamp" => Some(QuantityPolicy::Clamp),
            "reject" => Some(QuantityPolicy::Reject),
            _ => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // With --config, the TOML file carries everything else.
        if self.config.is_some() {
            return Ok(());
        }

        match (&self.catalog_endpoint, &self.catalog_file) {
            (Some(endpoint), None) => validate_url("catalog-endpoint", endpoint)?,
            (None, Some(file)) => {
                validate_path("catalog-file", file)?;
                validate_file_extension("catalog-file", file, &["csv"])?;
            }
            (Some(_), Some(_)) => {
                return Err(StorefrontError::ConfigError {
                    message: "Pass either --catalog-endpoint or --catalog-file, not both"
                        .to_string(),
                });
            }
            (None, None) => {
                return Err(StorefrontError::MissingConfigError {
                    field: "catalog-endpoint | catalog-file".to_string(),
                });
            }
        }

        validate_path("cart-file", &self.cart_file)?;
        validate_file_extension("cart-file", &self.cart_file, &["json"])?;
        validate_path("session-file", &self.session_file)?;

        if self.parsed_policy().is_none() {
            return Err(StorefrontError::InvalidConfigValueError {
                field: "quantity-policy".to_string(),
                value: self.quantity_policy.clone(),
                reason: "Expected 'allow', 'clamp' or 'reject'".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn quantity_policy(&self) -> QuantityPolicy {
        self.parsed_policy().unwrap_or_default()
    }

    fn notifications_enabled(&self) -> bool {
        false
    }
}
