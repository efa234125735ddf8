//! Per-step draft records.
//!
//! Each wizard step owns one record in the composite [`Draft`]. All fields
//! default to empty values; the wizard never validates them. The composer
//! substitutes documented fallbacks for whatever is left empty at
//! completion time.

use serde::{Deserialize, Serialize};

/// Company basics collected by the first step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoDraft {
    pub name: String,
    pub industry: String,
    /// Company size bracket, e.g. "1-10" or "500+".
    pub size: String,
    pub description: String,
    pub goals: String,
}

/// Audience demographic attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_range: String,
    pub gender: String,
    pub location: String,
    pub income: String,
    pub education: String,
}

impl Demographics {
    /// Whether no demographic attribute has been filled in.
    pub fn is_empty(&self) -> bool {
        self.age_range.is_empty()
            && self.gender.is_empty()
            && self.location.is_empty()
            && self.income.is_empty()
            && self.education.is_empty()
    }
}

/// Audience psychographic attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Psychographics {
    pub interests: Vec<String>,
    pub values: Vec<String>,
}

/// Target audience description collected by the audience step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceDraft {
    pub primary_audience: String,
    pub demographics: Demographics,
    pub psychographics: Psychographics,
    pub pain_points: Vec<String>,
}

/// A single competitor identified during the competitor step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorEntry {
    pub name: String,
    pub website: String,
    pub positioning: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Competitor list collected by the competitor step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorsDraft {
    pub competitors: Vec<CompetitorEntry>,
}

/// Brand values, mission and personality collected by the values step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesDraft {
    pub core_values: Vec<String>,
    pub mission: String,
    pub vision: String,
    pub personality: Vec<String>,
}

/// Archetype selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeDraft {
    pub selected_archetype: String,
}

/// Market positioning collected by the positioning step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningDraft {
    pub statement: String,
    pub value_proposition: String,
    pub differentiators: Vec<String>,
    pub target_segment: String,
}

/// Messaging framework inputs collected by the messaging step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingDraft {
    pub tagline: String,
    pub voice: Vec<String>,
    pub tone: Vec<String>,
    pub key_messages: Vec<String>,
    pub communication_style: String,
}

/// The composite draft document accumulated across all wizard steps.
///
/// Created empty at session start, mutated by whichever step is active,
/// and discarded on reset or on successful completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub company_info: CompanyInfoDraft,
    pub audience: AudienceDraft,
    pub competitors: CompetitorsDraft,
    pub values: ValuesDraft,
    pub archetype: ArchetypeDraft,
    pub positioning: PositioningDraft,
    pub messaging: MessagingDraft,
}
