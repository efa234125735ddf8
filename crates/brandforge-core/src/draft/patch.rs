//! Partial step updates.
//!
//! A patch carries only the top-level fields a step edit actually touched.
//! Applying a patch overwrites exactly those fields and leaves the rest of
//! the step record untouched (later patches win per field, in call order).
//! Nested records (demographics, psychographics) are replaced wholesale;
//! merging inside them is the caller's responsibility.

use super::model::{CompetitorEntry, Demographics, Draft, Psychographics};
use crate::wizard::WizardStep;
use serde::{Deserialize, Serialize};

/// Overwrites each target field for which the patch carries a value.
macro_rules! apply_fields {
    ($target:expr, $patch:expr, [$($field:ident),+ $(,)?]) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoPatch {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub goals: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudiencePatch {
    pub primary_audience: Option<String>,
    pub demographics: Option<Demographics>,
    pub psychographics: Option<Psychographics>,
    pub pain_points: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorsPatch {
    pub competitors: Option<Vec<CompetitorEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesPatch {
    pub core_values: Option<Vec<String>>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub personality: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypePatch {
    pub selected_archetype: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningPatch {
    pub statement: Option<String>,
    pub value_proposition: Option<String>,
    pub differentiators: Option<Vec<String>>,
    pub target_segment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingPatch {
    pub tagline: Option<String>,
    pub voice: Option<Vec<String>>,
    pub tone: Option<Vec<String>>,
    pub key_messages: Option<Vec<String>>,
    pub communication_style: Option<String>,
}

/// A partial update addressed to one wizard step's slice of the draft.
///
/// The variant selects the step record; the payload selects the fields.
/// Applying a patch is total over its input domain - there are no error
/// conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", content = "fields", rename_all = "camelCase")]
pub enum DraftPatch {
    CompanyInfo(CompanyInfoPatch),
    Audience(AudiencePatch),
    Competitors(CompetitorsPatch),
    Values(ValuesPatch),
    Archetype(ArchetypePatch),
    Positioning(PositioningPatch),
    Messaging(MessagingPatch),
}

impl DraftPatch {
    /// The wizard step whose record this patch addresses.
    pub fn step(&self) -> WizardStep {
        match self {
            Self::CompanyInfo(_) => WizardStep::CompanyInfo,
            Self::Audience(_) => WizardStep::Audience,
            Self::Competitors(_) => WizardStep::Competitors,
            Self::Values(_) => WizardStep::Values,
            Self::Archetype(_) => WizardStep::Archetype,
            Self::Positioning(_) => WizardStep::Positioning,
            Self::Messaging(_) => WizardStep::Messaging,
        }
    }
}

impl Draft {
    /// Applies a partial update, overwriting only the fields present in the
    /// patch at the top level of the addressed step record.
    pub fn apply(&mut self, patch: DraftPatch) {
        match patch {
            DraftPatch::CompanyInfo(p) => {
                apply_fields!(self.company_info, p, [name, industry, size, description, goals]);
            }
            DraftPatch::Audience(p) => {
                apply_fields!(
                    self.audience,
                    p,
                    [primary_audience, demographics, psychographics, pain_points]
                );
            }
            DraftPatch::Competitors(p) => {
                apply_fields!(self.competitors, p, [competitors]);
            }
            DraftPatch::Values(p) => {
                apply_fields!(self.values, p, [core_values, mission, vision, personality]);
            }
            DraftPatch::Archetype(p) => {
                apply_fields!(self.archetype, p, [selected_archetype]);
            }
            DraftPatch::Positioning(p) => {
                apply_fields!(
                    self.positioning,
                    p,
                    [statement, value_proposition, differentiators, target_segment]
                );
            }
            DraftPatch::Messaging(p) => {
                apply_fields!(
                    self.messaging,
                    p,
                    [tagline, voice, tone, key_messages, communication_style]
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut draft = Draft::default();

        draft.apply(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            industry: Some("Technology".to_string()),
            ..Default::default()
        }));
        draft.apply(DraftPatch::CompanyInfo(CompanyInfoPatch {
            industry: Some("Retail".to_string()),
            ..Default::default()
        }));

        // Later patches win per top-level field; untouched fields survive.
        assert_eq!(draft.company_info.name, "Acme");
        assert_eq!(draft.company_info.industry, "Retail");
        assert_eq!(draft.company_info.description, "");
    }

    #[test]
    fn test_apply_leaves_other_steps_untouched() {
        let mut draft = Draft::default();

        draft.apply(DraftPatch::Messaging(MessagingPatch {
            tagline: Some("Ship it".to_string()),
            ..Default::default()
        }));

        assert_eq!(draft.messaging.tagline, "Ship it");
        assert_eq!(draft.company_info, Default::default());
        assert_eq!(draft.values, Default::default());
    }

    #[test]
    fn test_nested_records_replaced_wholesale() {
        let mut draft = Draft::default();

        draft.apply(DraftPatch::Audience(AudiencePatch {
            demographics: Some(Demographics {
                age_range: "25-34".to_string(),
                location: "Berlin".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }));
        draft.apply(DraftPatch::Audience(AudiencePatch {
            demographics: Some(Demographics {
                age_range: "35-44".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }));

        // Whole nested record is replaced, so location is gone.
        assert_eq!(draft.audience.demographics.age_range, "35-44");
        assert_eq!(draft.audience.demographics.location, "");
    }

    #[test]
    fn test_patch_step_addressing() {
        let patch = DraftPatch::Values(ValuesPatch::default());
        assert_eq!(patch.step(), WizardStep::Values);
    }
}
