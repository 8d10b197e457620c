use crate::domain::payment::{DEFAULT_CURRENCY, validate_currency};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CURRENCY_LABEL: &str = "Kč";
pub const DEFAULT_FILE_PREFIX: &str = "faktura";
pub const DEFAULT_QR_SIZE: u32 = 200;

/// Runtime settings for invoice generation.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// currency = "CZK"
/// output_dir = "out"
/// file_prefix = "novak_faktura"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ISO code placed in the payment code.
    pub currency: String,
    /// Suffix used when amounts are printed on the document.
    pub currency_label: String,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    /// Minimum edge of the rendered QR code in pixels.
    pub qr_size: u32,
    /// Line printed under the provider block.
    pub provider_note: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            qr_size: DEFAULT_QR_SIZE,
            provider_note: "Fyzická osoba zapsaná v živnostenském rejstříku".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        validate_currency(&self.currency)?;
        Ok(())
    }

    /// `<prefix>_<invoice_number>.<extension>`
    pub fn file_name(&self, invoice_number: &str, extension: &str) -> String {
        format!("{}_{}.{}", self.file_prefix, invoice_number, extension)
    }
}
