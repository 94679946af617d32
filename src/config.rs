//! Demo configuration, read from the environment.

use anyhow::anyhow;
use std::env;

/// How the demo prints each cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON snapshot
    Json,
    /// One line, e.g. `2x Apple, 1x Orange`
    Summary,
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub log_filter: String,
    pub output: OutputFormat,
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(env::var("CART_LOG").ok(), env::var("CART_OUTPUT").ok())
    }

    fn from_values(log_filter: Option<String>, output: Option<String>) -> anyhow::Result<Self> {
        let output = match output.as_deref() {
            None | Some("json") => OutputFormat::Json,
            Some("summary") => OutputFormat::Summary,
            Some(other) => {
                return Err(anyhow!(
                    "CART_OUTPUT must be `json` or `summary`, got `{}`",
                    other
                ))
            }
        };

        Ok(Self {
            log_filter: log_filter.unwrap_or_else(|| "info".to_string()),
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_values(None, None).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_explicit_values() {
        let config =
            DemoConfig::from_values(Some("shopping_cart=debug".into()), Some("summary".into()))
                .unwrap();
        assert_eq!(config.log_filter, "shopping_cart=debug");
        assert_eq!(config.output, OutputFormat::Summary);
    }

    #[test]
    fn test_rejects_unknown_output() {
        let err = DemoConfig::from_values(None, Some("xml".into())).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }
}
