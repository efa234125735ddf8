//! Export domain module.
//!
//! Serializes a composed strategy into one of the supported container
//! formats. This is a thin I/O boundary: the JSON payload is the real
//! serialization, while the document formats are stub containers holding a
//! rendered plain-text report.
//!
//! # Module Structure
//!
//! - `format`: The closed set of supported formats (`ExportFormat`)
//! - `adapter`: Strategy serialization (`ExportAdapter`, `ExportResult`)

mod adapter;
mod format;

// Re-export public API
pub use adapter::{ExportAdapter, ExportResult};
pub use format::ExportFormat;
