//! Draft-to-strategy composition.
//!
//! Composition is a pure function of the draft snapshot: every empty field
//! is substituted with a documented fallback, so a strategy can be built
//! from any draft, however sparse. The only non-determinism - picking one
//! of the canned tagline templates - sits behind the injectable
//! [`Chooser`] seam.

use super::archetype::{DEFAULT_ARCHETYPE, profile_for};
use super::model::{
    BrandIdentity, CompetitiveAnalysis, MessagingFramework, Strategy, TargetAudience,
    TimelineEntry,
};
use crate::draft::{Demographics, Draft};
use rand::Rng;

// ============================================================================
// Documented fallbacks (applied per field when the draft leaves it empty)
// ============================================================================

pub(crate) const FALLBACK_NAME: &str = "Your Brand";
pub(crate) const FALLBACK_DESCRIPTION: &str = "A forward-thinking company";
pub(crate) const FALLBACK_POSITIONING: &str = "Leading the market with innovation";
pub(crate) const FALLBACK_PRIMARY_AUDIENCE: &str = "Tech-savvy professionals";
pub(crate) const FALLBACK_CORE_MESSAGE: &str = "Empowering success through innovation";
pub(crate) const FALLBACK_TONE_OF_VOICE: &str = "Professional, confident, approachable";

const FALLBACK_VALUES: [&str; 3] = ["Innovation", "Quality", "Trust"];
const FALLBACK_PAIN_POINTS: [&str; 3] = [
    "Complex workflows",
    "Time-consuming processes",
    "Lack of automation",
];
const FALLBACK_KEY_MESSAGES: [&str; 3] = [
    "Innovation that matters",
    "Results you can trust",
    "Experience the difference",
];
const MARKET_GAPS: [&str; 3] = [
    "Premium segment opportunity",
    "Mobile-first approach",
    "Sustainability focus",
];
const DIFFERENTIATORS: [&str; 3] = [
    "Superior user experience",
    "Innovative technology",
    "Customer-centric approach",
];
const RECOMMENDATIONS: [&str; 5] = [
    "Focus on digital marketing channels",
    "Develop thought leadership content",
    "Build strategic partnerships",
    "Invest in customer experience",
    "Monitor competitor activities closely",
];
const NEXT_STEPS: [&str; 5] = [
    "Finalize brand guidelines",
    "Develop marketing materials",
    "Launch brand awareness campaign",
    "Set up tracking and analytics",
    "Create content calendar",
];
const TIMELINE: [(&str, &str); 4] = [
    ("Week 1-2", "Brand guidelines and asset creation"),
    ("Week 3-4", "Website and digital presence setup"),
    ("Week 5-6", "Marketing campaign launch"),
    ("Week 7-8", "Performance monitoring and optimization"),
];

/// Picks an index into a list of canned options.
///
/// Implementations must return a value strictly less than `len` for any
/// `len >= 1`.
pub trait Chooser: Send + Sync {
    fn choose(&self, len: usize) -> usize;
}

/// Uniform random choice. The production chooser.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformChooser;

impl Chooser for UniformChooser {
    fn choose(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same index (modulo the option count). For tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Composes a read-only [`Strategy`] from a draft snapshot.
pub struct StrategyComposer {
    chooser: Box<dyn Chooser>,
}

impl Default for StrategyComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyComposer {
    /// Creates a composer with uniform random tagline choice.
    pub fn new() -> Self {
        Self {
            chooser: Box::new(UniformChooser),
        }
    }

    /// Creates a composer with an injected chooser, pinning the tagline
    /// suggestion for deterministic tests.
    pub fn with_chooser(chooser: impl Chooser + 'static) -> Self {
        Self {
            chooser: Box::new(chooser),
        }
    }

    /// Composes a strategy from the draft.
    ///
    /// Pure with respect to the input: the draft is never mutated, and two
    /// calls with the same snapshot yield structurally equal output. Every
    /// empty field receives its documented fallback; there are no failure
    /// modes.
    pub fn compose(&self, draft: &Draft) -> Strategy {
        let archetype = non_empty(&draft.archetype.selected_archetype, DEFAULT_ARCHETYPE);

        let brand_identity = BrandIdentity {
            name: non_empty(&draft.company_info.name, FALLBACK_NAME),
            description: non_empty(&draft.company_info.description, FALLBACK_DESCRIPTION),
            archetype: archetype.clone(),
            values: non_empty_list(&draft.values.core_values, &FALLBACK_VALUES),
            positioning: non_empty(&draft.positioning.statement, FALLBACK_POSITIONING),
        };

        let target_audience = TargetAudience {
            primary: non_empty(&draft.audience.primary_audience, FALLBACK_PRIMARY_AUDIENCE),
            demographics: if draft.audience.demographics.is_empty() {
                fallback_demographics()
            } else {
                draft.audience.demographics.clone()
            },
            psychographics: draft.audience.psychographics.clone(),
            pain_points: non_empty_list(&draft.audience.pain_points, &FALLBACK_PAIN_POINTS),
        };

        let competitive_analysis = CompetitiveAnalysis {
            main_competitors: draft.competitors.competitors.clone(),
            market_gaps: to_strings(&MARKET_GAPS),
            differentiators: to_strings(&DIFFERENTIATORS),
        };

        let messaging = MessagingFramework {
            core_message: non_empty(&draft.messaging.tagline, FALLBACK_CORE_MESSAGE),
            key_messages: non_empty_list(&draft.messaging.key_messages, &FALLBACK_KEY_MESSAGES),
            tone_of_voice: tone_of_voice(draft),
        };

        Strategy {
            brand_identity,
            target_audience,
            competitive_analysis,
            archetype_profile: profile_for(&archetype).clone(),
            messaging,
            recommendations: to_strings(&RECOMMENDATIONS),
            next_steps: to_strings(&NEXT_STEPS),
            timeline: TIMELINE
                .iter()
                .map(|(period, activity)| TimelineEntry {
                    period: period.to_string(),
                    activity: activity.to_string(),
                })
                .collect(),
        }
    }

    /// Suggests a tagline from the canned template list, interpolating the
    /// company name where a template calls for it.
    ///
    /// Uniform choice over the list via the injected chooser; with a
    /// [`FixedChooser`] the suggestion is deterministic.
    pub fn suggest_tagline(&self, draft: &Draft) -> String {
        let name = non_empty(&draft.company_info.name, "Your Company");
        let options = [
            format!("{name}: Innovation That Matters"),
            "Transforming Tomorrow, Today".to_string(),
            "Excellence in Every Detail".to_string(),
            "Your Success, Our Mission".to_string(),
            "Building the Future Together".to_string(),
        ];
        let index = self.chooser.choose(options.len()).min(options.len() - 1);
        options[index].clone()
    }
}

/// Audience demographics used when the draft supplies none.
fn fallback_demographics() -> Demographics {
    Demographics {
        age_range: "25-45".to_string(),
        income: "$50k-$100k".to_string(),
        education: "College+".to_string(),
        ..Default::default()
    }
}

fn non_empty(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn non_empty_list(values: &[String], fallback: &[&str]) -> Vec<String> {
    if values.is_empty() {
        to_strings(fallback)
    } else {
        values.to_vec()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Derives the tone of voice from the selected voice/tone descriptors,
/// falling back to the canned phrase when none were picked.
fn tone_of_voice(draft: &Draft) -> String {
    let descriptors: Vec<&str> = draft
        .messaging
        .voice
        .iter()
        .chain(draft.messaging.tone.iter())
        .map(String::as_str)
        .collect();
    if descriptors.is_empty() {
        FALLBACK_TONE_OF_VOICE.to_string()
    } else {
        descriptors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{
        ArchetypePatch, AudiencePatch, CompanyInfoPatch, DraftPatch, MessagingPatch,
    };

    fn composer() -> StrategyComposer {
        StrategyComposer::with_chooser(FixedChooser(0))
    }

    #[test]
    fn test_compose_empty_draft_yields_all_fallbacks() {
        let strategy = composer().compose(&Draft::default());

        assert_eq!(strategy.brand_identity.name, FALLBACK_NAME);
        assert_eq!(strategy.brand_identity.description, FALLBACK_DESCRIPTION);
        assert_eq!(strategy.brand_identity.archetype, DEFAULT_ARCHETYPE);
        assert_eq!(strategy.brand_identity.values, to_strings(&FALLBACK_VALUES));
        assert_eq!(strategy.brand_identity.positioning, FALLBACK_POSITIONING);

        assert_eq!(strategy.target_audience.primary, FALLBACK_PRIMARY_AUDIENCE);
        assert_eq!(strategy.target_audience.demographics.age_range, "25-45");
        assert_eq!(
            strategy.target_audience.pain_points,
            to_strings(&FALLBACK_PAIN_POINTS)
        );

        assert!(strategy.competitive_analysis.main_competitors.is_empty());
        assert_eq!(
            strategy.competitive_analysis.market_gaps,
            to_strings(&MARKET_GAPS)
        );

        assert_eq!(strategy.messaging.core_message, FALLBACK_CORE_MESSAGE);
        assert_eq!(strategy.messaging.tone_of_voice, FALLBACK_TONE_OF_VOICE);

        assert_eq!(strategy.recommendations.len(), 5);
        assert_eq!(strategy.next_steps.len(), 5);
        assert_eq!(strategy.timeline.len(), 4);
        assert_eq!(strategy.timeline[0].period, "Week 1-2");
    }

    #[test]
    fn test_compose_is_pure_and_repeatable() {
        let mut draft = Draft::default();
        draft.apply(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            ..Default::default()
        }));
        let before = draft.clone();

        let composer = composer();
        let first = composer.compose(&draft);
        let second = composer.compose(&draft);

        assert_eq!(first, second);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_compose_prefers_draft_values() {
        let mut draft = Draft::default();
        draft.apply(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            description: Some("Rocket-powered logistics".to_string()),
            ..Default::default()
        }));
        draft.apply(DraftPatch::Archetype(ArchetypePatch {
            selected_archetype: Some("The Caregiver".to_string()),
        }));
        draft.apply(DraftPatch::Messaging(MessagingPatch {
            voice: Some(vec!["Friendly".to_string()]),
            tone: Some(vec!["Optimistic".to_string()]),
            ..Default::default()
        }));

        let strategy = composer().compose(&draft);

        assert_eq!(strategy.brand_identity.name, "Acme");
        assert_eq!(strategy.brand_identity.archetype, "The Caregiver");
        assert_eq!(
            strategy.archetype_profile.messaging_tone,
            "Warm, caring, trustworthy"
        );
        assert_eq!(strategy.messaging.tone_of_voice, "Friendly, Optimistic");
    }

    #[test]
    fn test_supplied_demographics_pass_through() {
        let mut draft = Draft::default();
        draft.apply(DraftPatch::Audience(AudiencePatch {
            demographics: Some(crate::draft::Demographics {
                age_range: "18-24".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }));

        let strategy = composer().compose(&draft);
        assert_eq!(strategy.target_audience.demographics.age_range, "18-24");
        assert_eq!(strategy.target_audience.demographics.income, "");
    }

    #[test]
    fn test_suggest_tagline_pinned_by_chooser() {
        let mut draft = Draft::default();
        draft.apply(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            ..Default::default()
        }));

        let composer = StrategyComposer::with_chooser(FixedChooser(0));
        assert_eq!(composer.suggest_tagline(&draft), "Acme: Innovation That Matters");
        assert_eq!(composer.suggest_tagline(&draft), "Acme: Innovation That Matters");

        let composer = StrategyComposer::with_chooser(FixedChooser(1));
        assert_eq!(composer.suggest_tagline(&draft), "Transforming Tomorrow, Today");
    }

    #[test]
    fn test_suggest_tagline_fallback_company() {
        let composer = StrategyComposer::with_chooser(FixedChooser(0));
        assert_eq!(
            composer.suggest_tagline(&Draft::default()),
            "Your Company: Innovation That Matters"
        );
    }
}
