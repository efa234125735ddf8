//! Supported export formats.

use crate::error::{BrandforgeError, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The closed set of strategy export formats.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Pptx,
    Json,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Pptx => "pptx",
            Self::Json => "json",
        }
    }

    /// Parses a format name.
    ///
    /// # Errors
    ///
    /// Returns `BrandforgeError::UnsupportedFormat` for any value outside
    /// the supported set. This is a contract violation, not a retryable
    /// condition.
    pub fn parse(value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_| BrandforgeError::unsupported_format(value))
    }
}
