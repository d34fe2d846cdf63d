use crate::error::{ConvertError, Result};
use crate::parser::{DialectSelection, DEFAULT_SYMBOLIC_SENDER};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Solidity,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solidity => "solidity",
            Self::Json => "json",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "solidity" | "sol" => Some(Self::Solidity),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub dialect: DialectSelection,
    pub output_format: OutputFormat,
    pub default_sender: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            dialect: DialectSelection::Auto,
            output_format: OutputFormat::Solidity,
            default_sender: DEFAULT_SYMBOLIC_SENDER.to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validated placeholder sender; hex senders are stored checksummed so they
/// render as address literals.
fn normalize_default_sender(raw: &str) -> Result<String> {
    if raw.starts_with("0x") {
        return crate::utils::hex::to_checksum_address(raw).map_err(|err| {
            ConvertError::InvalidConfig(format!("CONVERTER_DEFAULT_SENDER: {err}"))
        });
    }
    let mut chars = raw.chars();
    let valid_head = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if valid_head && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        Ok(raw.to_string())
    } else {
        Err(ConvertError::InvalidConfig(format!(
            "CONVERTER_DEFAULT_SENDER must be a Solidity identifier or 0x address, got `{raw}`"
        )))
    }
}

impl ConverterConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = non_empty_var("CONVERTER_DIALECT") {
            config.dialect = DialectSelection::parse(&raw).ok_or_else(|| {
                ConvertError::InvalidConfig(format!(
                    "CONVERTER_DIALECT must be one of auto|medusa|echidna|both, got `{raw}`"
                ))
            })?;
        }
        if let Some(raw) = non_empty_var("CONVERTER_OUTPUT_FORMAT") {
            config.output_format = OutputFormat::parse(&raw).ok_or_else(|| {
                ConvertError::InvalidConfig(format!(
                    "CONVERTER_OUTPUT_FORMAT must be solidity or json, got `{raw}`"
                ))
            })?;
        }
        if let Some(raw) = non_empty_var("CONVERTER_DEFAULT_SENDER") {
            config.default_sender = normalize_default_sender(&raw)?;
        }
        Ok(config)
    }
}
