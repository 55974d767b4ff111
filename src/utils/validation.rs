use crate::utils::error::{Result, StorefrontError};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(StorefrontError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Product and cart ids: alphanumerics plus `-` and `_`, nothing else.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    let pattern =
        Regex::new(r"^[A-Za-z0-9_-]+$").map_err(|e| StorefrontError::ValidationError {
            message: format!("identifier pattern failed to compile: {e}"),
        })?;

    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Identifiers may only contain letters, digits, '-' and '_'".to_string(),
        })
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !(value >= 0.0) {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    if let Some(extension) = std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        if allowed_extensions.contains(&extension) {
            Ok(())
        } else {
            Err(StorefrontError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.to_string(),
                reason: format!(
                    "Unsupported file extension: {}. Allowed extensions: {}",
                    extension,
                    allowed_extensions.join(", ")
                ),
            })
        }
    } else {
        Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        })
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| StorefrontError::MissingConfigError {
            field: field_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("catalog_endpoint", "https://example.com").is_ok());
        assert!(validate_url("catalog_endpoint", "http://example.com").is_ok());
        assert!(validate_url("catalog_endpoint", "").is_err());
        assert!(validate_url("catalog_endpoint", "invalid-url").is_err());
        assert!(validate_url("catalog_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("product_id", "prod-001").is_ok());
        assert!(validate_identifier("product_id", "SKU_42").is_ok());
        assert!(validate_identifier("product_id", "").is_err());
        assert!(validate_identifier("product_id", "a b").is_err());
        assert!(validate_identifier("product_id", "a/b").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rating", 4u8, 0, 5).is_ok());
        assert!(validate_range("rating", 6u8, 0, 5).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("cost", 0.0).is_ok());
        assert!(validate_non_negative("cost", 19.99).is_ok());
        assert!(validate_non_negative("cost", -1.0).is_err());
        assert!(validate_non_negative("cost", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("catalog_file", "catalog.csv", &["csv"]).is_ok());
        assert!(validate_file_extension("catalog_file", "catalog.txt", &["csv"]).is_err());
        assert!(validate_file_extension("catalog_file", "catalog", &["csv"]).is_err());
    }
}
