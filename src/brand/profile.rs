//! Brand profile types: industry, voice, and the profile record.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::error::BrandError;

/// Industry vertical a brand operates in.
///
/// Each industry selects a hook bank and a hashtag bank. Unknown input
/// falls back to [`Industry::General`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Industry {
    /// Online retail and dropshipping.
    Ecommerce,
    /// Software-as-a-service and startups.
    Saas,
    /// Fitness, gyms, and wellness.
    Fitness,
    /// Food, recipes, and restaurants.
    Food,
    /// Fashion and style.
    Fashion,
    /// Marketing agencies and consultants.
    Marketing,
    /// Catch-all for everything else.
    #[default]
    General,
}

impl Industry {
    /// Parse an industry string, falling back to `General` on unknown input.
    pub fn parse_or_general(s: &str) -> Self {
        Industry::from_str(s.trim()).unwrap_or(Industry::General)
    }
}

/// Tone applied to generated copy for a brand.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BrandVoice {
    /// Authoritative, polished.
    Professional,
    /// Casual and fun.
    Playful,
    /// Aspirational, exclusive.
    Luxury,
    /// Bold, contrarian.
    Edgy,
    /// Warm and approachable.
    #[default]
    Friendly,
}

impl BrandVoice {
    /// Parse a voice string, falling back to `Friendly` on unknown input.
    pub fn parse_or_friendly(s: &str) -> Self {
        BrandVoice::from_str(s.trim()).unwrap_or(BrandVoice::Friendly)
    }
}

/// Curated five-color palettes assigned to new brands.
const COLOR_PALETTES: &[&[&str]] = &[
    &["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7"],
    &["#6C5CE7", "#A29BFE", "#74B9FF", "#0984E3", "#00B894"],
    &["#FD79A8", "#FDCB6E", "#6C5CE7", "#00B894", "#E17055"],
    &["#2D3436", "#636E72", "#B2BEC3", "#DFE6E9", "#00B894"],
    &["#E74C3C", "#E67E22", "#F1C40F", "#27AE60", "#2980B9"],
];

/// Pick a cohesive color scheme from the curated palettes.
pub fn generate_colors<R: Rng>(rng: &mut R) -> Vec<String> {
    COLOR_PALETTES
        .choose(rng)
        .map(|palette| palette.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default()
}

/// Brand configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Brand name, used as the Instagram handle in captions.
    pub name: String,
    /// Industry vertical.
    pub industry: Industry,
    /// Copy tone.
    pub voice: BrandVoice,
    /// Audience description, keys the posting-time lookup.
    pub target_audience: String,
    /// Hex color scheme.
    pub color_scheme: Vec<String>,
    /// Recurring topics the calendar cycles through.
    pub content_pillars: Vec<String>,
    /// Posts per week.
    pub posting_frequency: u32,
}

impl BrandProfile {
    /// Build a validated profile, generating a color scheme when none given.
    pub fn new<R: Rng>(
        name: impl Into<String>,
        industry: Industry,
        voice: BrandVoice,
        target_audience: impl Into<String>,
        content_pillars: Vec<String>,
        posting_frequency: u32,
        rng: &mut R,
    ) -> Result<Self, BrandError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BrandError::InvalidProfile("name must not be empty".into()));
        }
        if content_pillars.is_empty() {
            return Err(BrandError::InvalidProfile(
                "at least one content pillar is required".into(),
            ));
        }
        if posting_frequency == 0 {
            return Err(BrandError::InvalidProfile(
                "posting frequency must be at least 1 per week".into(),
            ));
        }

        Ok(Self {
            name,
            industry,
            voice,
            target_audience: target_audience.into(),
            color_scheme: generate_colors(rng),
            content_pillars,
            posting_frequency,
        })
    }
}
