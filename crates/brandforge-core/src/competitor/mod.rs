//! Competitor domain module.
//!
//! # Module Structure
//!
//! - `model`: Competitor entity and the competitive matrix read model
//! - `repository`: Repository trait for competitor tracking

mod model;
mod repository;

// Re-export public API
pub use model::{
    Competitor, CompetitiveMatrix, CompetitorMetrics, MatrixRow, NewCompetitor, NewsItem,
};
pub use repository::CompetitorRepository;
