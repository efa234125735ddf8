//! The composed strategy report.
//!
//! A `Strategy` is created once per wizard completion and never mutated
//! afterward; it can be exported or discarded.

use super::archetype::ArchetypeProfile;
use crate::draft::{CompetitorEntry, Demographics, Psychographics};
use serde::{Deserialize, Serialize};

/// Who the brand is: name, archetype, values, positioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandIdentity {
    pub name: String,
    pub description: String,
    pub archetype: String,
    pub values: Vec<String>,
    pub positioning: String,
}

/// Who the brand speaks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAudience {
    pub primary: String,
    pub demographics: Demographics,
    pub psychographics: Psychographics,
    pub pain_points: Vec<String>,
}

/// The competitive landscape and where the brand wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    pub main_competitors: Vec<CompetitorEntry>,
    pub market_gaps: Vec<String>,
    pub differentiators: Vec<String>,
}

/// How the brand speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingFramework {
    pub core_message: String,
    pub key_messages: Vec<String>,
    pub tone_of_voice: String,
}

/// One rollout period and its planned activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub period: String,
    pub activity: String,
}

/// The complete brand strategy report.
///
/// Always fully populated: the composer substitutes documented fallbacks
/// for every field the draft leaves empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub brand_identity: BrandIdentity,
    pub target_audience: TargetAudience,
    pub competitive_analysis: CompetitiveAnalysis,
    /// Visual and verbal direction derived from the chosen archetype.
    pub archetype_profile: ArchetypeProfile,
    pub messaging: MessagingFramework,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
}
