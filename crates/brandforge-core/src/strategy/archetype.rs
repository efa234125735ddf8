//! Brand archetype catalog and profile lookup.
//!
//! The catalog lists the twelve classic archetypes offered for selection.
//! Full visual/verbal profiles exist for the archetypes the strategy
//! templates cover; unknown or unprofiled selections fall back to the
//! default profile.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Archetype used whenever the draft leaves the selection empty or names
/// an archetype without a profile.
pub const DEFAULT_ARCHETYPE: &str = "The Innovator";

/// A selectable brand archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: Vec<&'static str>,
    pub examples: Vec<&'static str>,
    pub motivation: &'static str,
}

/// Visual and verbal direction for an archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeProfile {
    pub description: String,
    pub characteristics: Vec<String>,
    pub messaging_tone: String,
    pub color_palette: Vec<String>,
    pub typography: String,
    pub imagery: String,
}

static PROFILES: Lazy<HashMap<&'static str, ArchetypeProfile>> = Lazy::new(|| {
    let mut profiles = HashMap::new();
    profiles.insert(
        "The Innovator",
        ArchetypeProfile {
            description: "Brands that push boundaries and create new solutions".to_string(),
            characteristics: vec![
                "Forward-thinking".to_string(),
                "Risk-taking".to_string(),
                "Visionary".to_string(),
            ],
            messaging_tone: "Confident, inspiring, future-focused".to_string(),
            color_palette: vec![
                "#6366F1".to_string(),
                "#8B5CF6".to_string(),
                "#EC4899".to_string(),
            ],
            typography: "Modern, clean, geometric".to_string(),
            imagery: "Futuristic, tech-focused, dynamic".to_string(),
        },
    );
    profiles.insert(
        "The Caregiver",
        ArchetypeProfile {
            description: "Brands that nurture and support their customers".to_string(),
            characteristics: vec![
                "Compassionate".to_string(),
                "Reliable".to_string(),
                "Supportive".to_string(),
            ],
            messaging_tone: "Warm, caring, trustworthy".to_string(),
            color_palette: vec![
                "#10B981".to_string(),
                "#059669".to_string(),
                "#F59E0B".to_string(),
            ],
            typography: "Soft, approachable, rounded".to_string(),
            imagery: "Natural, people-focused, authentic".to_string(),
        },
    );
    profiles
});

/// Looks up the visual/verbal profile for an archetype name.
///
/// Falls back to the [`DEFAULT_ARCHETYPE`] profile for unknown names, so
/// lookup is total.
pub fn profile_for(name: &str) -> &'static ArchetypeProfile {
    PROFILES
        .get(name)
        .or_else(|| PROFILES.get(DEFAULT_ARCHETYPE))
        .expect("default archetype profile is always present")
}

/// The twelve classic archetypes offered by the selection step.
pub fn archetypes() -> Vec<Archetype> {
    vec![
        Archetype {
            name: "The Innocent",
            description: "Optimistic, honest, and pure",
            characteristics: vec!["Optimistic", "Honest", "Pure", "Simple"],
            examples: vec!["Coca-Cola", "McDonald's", "Nintendo"],
            motivation: "To be happy and pure",
        },
        Archetype {
            name: "The Sage",
            description: "Wise, knowledgeable, and thoughtful",
            characteristics: vec!["Wise", "Knowledgeable", "Thoughtful", "Mentor"],
            examples: vec!["Google", "Harvard", "BBC"],
            motivation: "To understand the world",
        },
        Archetype {
            name: "The Explorer",
            description: "Free-spirited, adventurous, and pioneering",
            characteristics: vec!["Adventurous", "Free-spirited", "Pioneering", "Authentic"],
            examples: vec!["North Face", "Jeep", "National Geographic"],
            motivation: "To experience freedom and find yourself",
        },
        Archetype {
            name: "The Hero",
            description: "Courageous, determined, and inspiring",
            characteristics: vec!["Courageous", "Determined", "Inspiring", "Triumphant"],
            examples: vec!["Nike", "BMW", "FedEx"],
            motivation: "To prove worth through courageous action",
        },
        Archetype {
            name: "The Rebel",
            description: "Revolutionary, unconventional, and disruptive",
            characteristics: vec!["Revolutionary", "Unconventional", "Disruptive", "Bold"],
            examples: vec!["Harley-Davidson", "Apple", "Tesla"],
            motivation: "To overturn what isn't working",
        },
        Archetype {
            name: "The Magician",
            description: "Visionary, inventive, and transformative",
            characteristics: vec!["Visionary", "Inventive", "Transformative", "Charismatic"],
            examples: vec!["Disney", "Apple", "Tesla"],
            motivation: "To make dreams come true",
        },
        Archetype {
            name: "The Regular Guy",
            description: "Relatable, down-to-earth, and authentic",
            characteristics: vec!["Relatable", "Down-to-earth", "Authentic", "Friendly"],
            examples: vec!["IKEA", "Home Depot", "Walmart"],
            motivation: "To belong and connect with others",
        },
        Archetype {
            name: "The Lover",
            description: "Passionate, committed, and intimate",
            characteristics: vec!["Passionate", "Committed", "Intimate", "Romantic"],
            examples: vec!["Victoria's Secret", "Hallmark", "Godiva"],
            motivation: "To find and give love",
        },
        Archetype {
            name: "The Jester",
            description: "Playful, humorous, and lighthearted",
            characteristics: vec!["Playful", "Humorous", "Lighthearted", "Irreverent"],
            examples: vec!["Old Spice", "M&M's", "Dollar Shave Club"],
            motivation: "To live in the moment with full enjoyment",
        },
        Archetype {
            name: "The Caregiver",
            description: "Nurturing, supportive, and protective",
            characteristics: vec!["Compassionate", "Reliable", "Supportive", "Generous"],
            examples: vec!["Johnson & Johnson", "Volvo", "UNICEF"],
            motivation: "To protect and care for others",
        },
        Archetype {
            name: "The Creator",
            description: "Imaginative, expressive, and original",
            characteristics: vec!["Imaginative", "Expressive", "Original", "Artistic"],
            examples: vec!["Lego", "Adobe", "Crayola"],
            motivation: "To create things of enduring value",
        },
        Archetype {
            name: "The Ruler",
            description: "Authoritative, responsible, and organized",
            characteristics: vec!["Authoritative", "Responsible", "Organized", "Prestigious"],
            examples: vec!["Mercedes-Benz", "Rolex", "Microsoft"],
            motivation: "To create prosperity and success",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_known() {
        let profile = profile_for("The Caregiver");
        assert_eq!(profile.messaging_tone, "Warm, caring, trustworthy");
        assert_eq!(profile.color_palette.len(), 3);
    }

    #[test]
    fn test_profile_lookup_falls_back_to_default() {
        let unknown = profile_for("The Time Traveler");
        let default = profile_for(DEFAULT_ARCHETYPE);
        assert_eq!(unknown, default);
        assert_eq!(default.typography, "Modern, clean, geometric");
    }

    #[test]
    fn test_catalog_has_twelve_archetypes() {
        let catalog = archetypes();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.iter().any(|a| a.name == "The Sage"));
    }
}
