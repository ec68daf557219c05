//! Product branding metadata for the CodeFlare shell.
//!
//! The tray tooltip, menu labels and URL actions are all driven by the
//! product name, version, homepage and bug tracker defined here. The
//! baked-in defaults describe the stock CodeFlare distribution; a TOML
//! override shipped next to the application can rebrand any subset of
//! the fields.

use std::path::Path;

use serde::Deserialize;

/// Errors produced while loading a product metadata override file.
#[derive(Debug, thiserror::Error)]
pub enum ProductInfoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid product metadata: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read-only branding constants for the running product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductInfo {
    /// Product name shown in the tray tooltip and menu labels.
    #[serde(default = "default_name")]
    pub name: String,

    /// Version string advertised by the first menu entry.
    #[serde(default = "default_version")]
    pub version: String,

    /// Project homepage opened when the version entry is clicked.
    #[serde(default = "default_homepage")]
    pub homepage: String,

    /// Issue tracker opened by the "Report a Bug" entry.
    #[serde(default = "default_bugs_url")]
    pub bugs_url: String,
}

fn default_name() -> String {
    "CodeFlare".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_homepage() -> String {
    "https://github.com/project-codeflare/codeflare-cli".to_string()
}

fn default_bugs_url() -> String {
    "https://github.com/project-codeflare/codeflare-cli/issues".to_string()
}

impl Default for ProductInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            homepage: default_homepage(),
            bugs_url: default_bugs_url(),
        }
    }
}

impl ProductInfo {
    /// Parses a TOML override. Fields absent from the document keep
    /// their default values.
    pub fn from_toml(content: &str) -> Result<Self, ProductInfoError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads an override file, falling back to the defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ProductInfoError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let info = Self::from_toml(&content)?;
            tracing::debug!(path = %path.display(), name = %info.name, "product metadata loaded");
            Ok(info)
        } else {
            Ok(Self::default())
        }
    }
}
