//! Competitor domain model.

use serde::{Deserialize, Serialize};

/// Scored attributes tracked per competitor (0-100 scale).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorMetrics {
    pub brand_awareness: u32,
    pub customer_satisfaction: u32,
    pub market_position: u32,
    pub innovation: u32,
    pub pricing: u32,
}

/// A dated headline about a competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub date: String,
}

/// A tracked competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: u64,
    pub name: String,
    pub industry: String,
    pub market_share: f64,
    /// Composite strength score on a 0-10 scale.
    pub brand_strength: f64,
    pub social_followers: u64,
    pub monthly_traffic: u64,
    pub key_strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recent_news: Vec<NewsItem>,
    pub metrics: CompetitorMetrics,
}

/// Payload for adding a competitor to tracking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompetitor {
    pub name: String,
    pub industry: String,
    pub market_share: f64,
    pub brand_strength: f64,
    pub social_followers: u64,
    pub monthly_traffic: u64,
    pub key_strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// One scored row of the competitive matrix.
///
/// `competitor_id` is `None` for the "Your Brand" row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub competitor_id: Option<u64>,
    pub name: String,
    /// One score per matrix category, 0-10 scale.
    pub scores: Vec<f64>,
}

/// The competitive matrix read model: category labels plus one scored row
/// per tracked competitor and one for the user's own brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveMatrix {
    pub categories: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

impl CompetitiveMatrix {
    /// The row representing the user's own brand, if present.
    pub fn own_brand_row(&self) -> Option<&MatrixRow> {
        self.rows.iter().find(|row| row.competitor_id.is_none())
    }
}
