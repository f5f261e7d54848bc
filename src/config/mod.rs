// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::builder::BuildOptions;
use crate::constants::DEFAULT_SIGNATURE_SIZE;
use crate::error::UrlError;
use crate::signer::SigningKey;

/// Shared settings for every URL built by an application
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Prefix for produced URLs, e.g. `https://imgproxy.example.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Embed source paths literally instead of base64url-encoding them
    #[serde(default)]
    pub plain: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureConfig>,
}

/// Signing material; key and salt are hex strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureConfig {
    pub key: String,
    pub salt: String,
    /// Digest bytes kept in the signature (default: 32)
    #[serde(default = "default_signature_size")]
    pub size: usize,
}

fn default_signature_size() -> usize {
    DEFAULT_SIGNATURE_SIZE
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, UrlError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| UrlError::Config(e.to_string()))?;

        let mut missing = None;
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            })
        });

        if let Some(var_name) = missing {
            return Err(UrlError::Config(format!(
                "Environment variable '{}' is referenced but not set",
                var_name
            )));
        }

        let config: Config =
            serde_yaml::from_str(&substituted).map_err(|e| UrlError::Config(e.to_string()))?;

        tracing::debug!(
            base_url = config.base_url.as_deref().unwrap_or(""),
            plain = config.plain,
            signed = config.signature.is_some(),
            "Configuration loaded"
        );

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, UrlError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| UrlError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml_with_env(&yaml)
    }

    /// Check that the signing material decodes and the size is usable
    pub fn validate(&self) -> Result<(), UrlError> {
        if let Some(base_url) = &self.base_url {
            if base_url.is_empty() {
                return Err(UrlError::Config("base_url cannot be empty".to_string()));
            }
        }

        if let Some(signature) = &self.signature {
            signature
                .signing_key()
                .map_err(|e| UrlError::Config(format!("Invalid signature settings: {}", e)))?;
        }

        Ok(())
    }

    /// Build options for one source path using these settings
    pub fn build_options(&self, path: impl Into<String>) -> BuildOptions {
        let mut options = BuildOptions::new(path).plain(self.plain);
        if let Some(base_url) = &self.base_url {
            options = options.base_url(base_url.clone());
        }
        if let Some(signature) = &self.signature {
            options = options.signature(
                signature.key.clone(),
                signature.salt.clone(),
                Some(signature.size),
            );
        }
        options
    }
}

impl SignatureConfig {
    pub fn signing_key(&self) -> Result<SigningKey, UrlError> {
        SigningKey::from_hex(&self.key, &self.salt, self.size)
    }
}
