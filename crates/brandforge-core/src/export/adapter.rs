//! Strategy export adapter.

use super::format::ExportFormat;
use crate::error::Result;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// The serialized outcome of an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    /// Suggested download filename, `brand-strategy-<slug>.<ext>`.
    pub filename: String,
    /// Payload size in bytes.
    pub size_estimate: usize,
    /// The serialized container bytes.
    pub payload: Vec<u8>,
}

/// Serializes a composed strategy into a container format.
///
/// JSON is a faithful serialization of the strategy. The document formats
/// (pdf/docx/pptx) are stubs: the container payload is a rendered
/// plain-text report, without real document layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExportAdapter;

impl ExportAdapter {
    /// Exports a strategy in the given format.
    ///
    /// Never mutates the strategy.
    ///
    /// # Errors
    ///
    /// Returns `BrandforgeError::Serialization` if JSON encoding fails.
    pub fn export(strategy: &Strategy, format: ExportFormat) -> Result<ExportResult> {
        let payload = match format {
            ExportFormat::Json => serde_json::to_vec_pretty(strategy)?,
            ExportFormat::Pdf | ExportFormat::Docx | ExportFormat::Pptx => {
                Self::render_text(strategy).into_bytes()
            }
        };

        Ok(ExportResult {
            filename: format!(
                "brand-strategy-{}.{}",
                slug(&strategy.brand_identity.name),
                format.extension()
            ),
            size_estimate: payload.len(),
            payload,
        })
    }

    /// Exports a strategy in a format named by string.
    ///
    /// # Errors
    ///
    /// Returns `BrandforgeError::UnsupportedFormat` when the name is not in
    /// the supported set; the strategy is untouched.
    pub fn export_named(strategy: &Strategy, format: &str) -> Result<ExportResult> {
        let format = ExportFormat::parse(format)?;
        Self::export(strategy, format)
    }

    /// Renders the strategy as a plain-text report.
    fn render_text(strategy: &Strategy) -> String {
        let identity = &strategy.brand_identity;
        let mut out = String::new();

        out.push_str(&format!("{} Brand Strategy\n\n", identity.name));
        out.push_str(&format!("Description: {}\n", identity.description));
        out.push_str(&format!("Archetype: {}\n", identity.archetype));
        out.push_str(&format!("Values: {}\n", identity.values.join(", ")));
        out.push_str(&format!("Positioning: {}\n\n", identity.positioning));

        out.push_str(&format!(
            "Primary audience: {}\n",
            strategy.target_audience.primary
        ));
        out.push_str(&format!(
            "Pain points: {}\n\n",
            strategy.target_audience.pain_points.join("; ")
        ));

        out.push_str(&format!(
            "Core message: {}\n",
            strategy.messaging.core_message
        ));
        out.push_str(&format!(
            "Tone of voice: {}\n\n",
            strategy.messaging.tone_of_voice
        ));

        out.push_str("Timeline:\n");
        for entry in &strategy.timeline {
            out.push_str(&format!("  {}: {}\n", entry.period, entry.activity));
        }

        out
    }
}

/// Lowercases and hyphenates a brand name for use in a filename.
fn slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Draft;
    use crate::strategy::{FixedChooser, StrategyComposer};

    fn strategy() -> Strategy {
        StrategyComposer::with_chooser(FixedChooser(0)).compose(&Draft::default())
    }

    #[test]
    fn test_json_export_round_trips() {
        let strategy = strategy();
        let result = ExportAdapter::export(&strategy, ExportFormat::Json).unwrap();

        assert_eq!(result.filename, "brand-strategy-your-brand.json");
        assert_eq!(result.size_estimate, result.payload.len());

        let decoded: Strategy = serde_json::from_slice(&result.payload).unwrap();
        assert_eq!(decoded, strategy);
    }

    #[test]
    fn test_document_formats_render_stub_report() {
        let strategy = strategy();
        let result = ExportAdapter::export(&strategy, ExportFormat::Pdf).unwrap();

        assert_eq!(result.filename, "brand-strategy-your-brand.pdf");
        let text = String::from_utf8(result.payload).unwrap();
        assert!(text.starts_with("Your Brand Brand Strategy"));
        assert!(text.contains("Week 1-2"));
    }

    #[test]
    fn test_unsupported_format_leaves_strategy_untouched() {
        let strategy = strategy();
        let before = strategy.clone();

        let err = ExportAdapter::export_named(&strategy, "xml").unwrap_err();
        assert!(err.is_unsupported_format());
        assert_eq!(strategy, before);
    }

    #[test]
    fn test_filename_slug_handles_spacing() {
        let mut strategy = strategy();
        strategy.brand_identity.name = "Acme  Rocket Co".to_string();

        let result = ExportAdapter::export(&strategy, ExportFormat::Docx).unwrap();
        assert_eq!(result.filename, "brand-strategy-acme-rocket-co.docx");
    }
}
