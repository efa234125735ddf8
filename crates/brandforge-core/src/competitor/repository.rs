//! Competitor repository trait.
//!
//! Defines the interface for competitor tracking operations.

use super::model::{Competitor, CompetitiveMatrix, NewCompetitor};
use crate::error::Result;

/// An abstract provider for tracked competitors and the competitive
/// matrix read model.
#[async_trait::async_trait]
pub trait CompetitorRepository: Send + Sync {
    /// Retrieves all tracked competitors.
    async fn list(&self) -> Result<Vec<Competitor>>;

    /// Retrieves a competitor by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no competitor has the given id.
    async fn get(&self, id: u64) -> Result<Competitor>;

    /// Adds a competitor to tracking and returns the stored record.
    async fn create(&self, competitor: NewCompetitor) -> Result<Competitor>;

    /// Removes a competitor from tracking.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no competitor has the given id.
    async fn delete(&self, id: u64) -> Result<()>;

    /// Builds the competitive matrix across all tracked competitors.
    async fn matrix(&self) -> Result<CompetitiveMatrix>;
}
