//! Per-field configuration as set by the administrator in the schema designer.

use crate::error::{FieldError, Result};
use multiselect_codec::Delimiter;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The attribute the host passes for one field instance.
///
/// Only `options` is read; anything else the host sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAttribute {
    #[serde(default)]
    pub options: AttributeOptions,
}

impl FieldAttribute {
    /// Parses an attribute from the host's JSON representation.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(FieldError::InvalidAttribute)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(FieldError::InvalidAttribute)
    }
}

/// Raw options as stored in the schema. Either key may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl AttributeOptions {
    pub fn new(available_options: Vec<String>, delimiter: impl Into<String>) -> Self {
        Self {
            available_options: Some(available_options),
            delimiter: Some(delimiter.into()),
        }
    }

    /// Applies the fallbacks: no available options, and `,` as delimiter.
    ///
    /// The host cannot enforce that these options are set, so a missing or
    /// empty delimiter resolves to the default instead of failing.
    pub fn resolve(&self) -> ResolvedOptions {
        let delimiter = match self.delimiter.as_deref() {
            None => Delimiter::default(),
            Some(raw) => Delimiter::new(raw).unwrap_or_else(|e| {
                warn!(error = %e, fallback = Delimiter::DEFAULT, "Ignoring configured delimiter");
                Delimiter::default()
            }),
        };

        ResolvedOptions {
            available_options: self.available_options.clone().unwrap_or_default(),
            delimiter,
        }
    }
}

/// Options with defaults applied, ready for the codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub available_options: Vec<String>,
    pub delimiter: Delimiter,
}
