//! The content generation engine.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

use crate::brand::BrandProfile;
use crate::content::caption::{generate_caption, single_post_caption};
use crate::content::hashtags::generate_hashtags;
use crate::content::hooks::generate_hook;
use crate::content::templates::{generate_slides, select_cta, TemplateKind};
use crate::content::types::{ContentPiece, ContentType, Slide, SlideKind};
use crate::engagement;
use crate::error::ContentError;
use crate::utils::title_case;

/// Single-image post flavor. Unknown input falls back to `Educational`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PostType {
    /// Quick tip.
    #[default]
    Educational,
    /// Daily-reminder style.
    Motivational,
    /// Product/service plug.
    Promotional,
    /// Question prompt.
    Engagement,
}

impl PostType {
    /// Parse a post type, falling back to `Educational` on unknown input.
    pub fn parse_or_educational(s: &str) -> Self {
        PostType::from_str(s.trim()).unwrap_or(PostType::Educational)
    }
}

/// Export format for generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    /// Pretty-printed JSON of the full piece.
    Json,
    /// Caption followed by the hashtag line.
    Caption,
    /// Numbered slide texts.
    Slides,
}

impl ExportFormat {
    /// Parse an export format, erroring on unknown input.
    pub fn parse(s: &str) -> Result<Self, ContentError> {
        ExportFormat::from_str(s.trim())
            .map_err(|_| ContentError::UnknownExportFormat(s.to_string()))
    }
}

/// Content generation engine.
///
/// Stateless apart from the configured slide-count bounds; every generation
/// call takes an RNG so callers (and tests) control determinism.
#[derive(Debug, Clone)]
pub struct ContentForge {
    min_slides: usize,
    max_slides: usize,
}

impl ContentForge {
    /// Create an engine with the given slide-count bounds.
    pub fn new(min_slides: usize, max_slides: usize) -> Self {
        Self {
            min_slides,
            max_slides,
        }
    }

    /// Create an engine from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.min_slides, config.max_slides)
    }

    fn check_topic(topic: &str) -> Result<(), ContentError> {
        if topic.trim().is_empty() {
            return Err(ContentError::EmptyTopic);
        }
        Ok(())
    }

    /// Generate a complete carousel post for a brand.
    ///
    /// The requested slide count is clamped into the configured range and
    /// the template structure is truncated to it.
    pub fn generate_carousel<R: Rng>(
        &self,
        brand: &BrandProfile,
        topic: &str,
        kind: TemplateKind,
        num_slides: usize,
        rng: &mut R,
    ) -> Result<ContentPiece, ContentError> {
        Self::check_topic(topic)?;
        let num_slides = num_slides.clamp(self.min_slides, self.max_slides);

        let hook = generate_hook(brand.industry, topic, rng);
        let slides = generate_slides(kind, topic, num_slides);
        let caption = generate_caption(brand, topic, &hook, rng);
        let hashtags = generate_hashtags(brand.industry, topic, rng);
        let cta = select_cta(topic, rng);
        let engagement_score = engagement::score_carousel(&hook, &slides, &hashtags);
        let best_posting_time = engagement::optimal_posting_time(&brand.target_audience);
        let title = kind.generate_title(topic, rng);

        Ok(ContentPiece {
            content_type: ContentType::Carousel,
            title,
            slides,
            caption,
            hashtags,
            hook,
            cta,
            engagement_score,
            best_posting_time: best_posting_time.to_string(),
            brand_voice: brand.voice,
        })
    }

    /// Generate a standalone caption with a matching hashtag set.
    pub fn generate_caption<R: Rng>(
        &self,
        brand: &BrandProfile,
        topic: &str,
        rng: &mut R,
    ) -> Result<(String, Vec<String>), ContentError> {
        Self::check_topic(topic)?;

        let hook = generate_hook(brand.industry, topic, rng);
        let caption = generate_caption(brand, topic, &hook, rng);
        let hashtags = generate_hashtags(brand.industry, topic, rng);
        Ok((caption, hashtags))
    }

    /// Generate a single-image post for a brand.
    pub fn generate_single<R: Rng>(
        &self,
        brand: &BrandProfile,
        topic: &str,
        post_type: PostType,
        rng: &mut R,
    ) -> Result<ContentPiece, ContentError> {
        Self::check_topic(topic)?;

        let hook = generate_hook(brand.industry, topic, rng);
        let caption = single_post_caption(&post_type.to_string(), topic);
        let hashtags = generate_hashtags(brand.industry, topic, rng);
        let cta = select_cta(topic, rng);

        Ok(ContentPiece {
            content_type: ContentType::Single,
            title: format!("{} {}", title_case(topic), title_case(&post_type.to_string())),
            slides: vec![Slide {
                kind: SlideKind::Single,
                number: None,
                title: None,
                text: None,
                style: Some(post_type.to_string()),
            }],
            caption,
            hashtags,
            hook,
            cta,
            engagement_score: rng.gen_range(60..=90),
            best_posting_time: engagement::optimal_posting_time(&brand.target_audience)
                .to_string(),
            brand_voice: brand.voice,
        })
    }

    /// Export a content piece in the given format.
    pub fn export(
        &self,
        content: &ContentPiece,
        format: ExportFormat,
    ) -> Result<String, crate::ForgeError> {
        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(content)?),
            ExportFormat::Caption => {
                Ok(format!("{}\n\n{}", content.caption, content.hashtags.join(" ")))
            }
            ExportFormat::Slides => {
                let sections: Vec<String> = content
                    .slides
                    .iter()
                    .enumerate()
                    .map(|(i, slide)| format!("Slide {}:\n{}", i + 1, slide.display_text(i + 1)))
                    .collect();
                Ok(sections.join("\n\n"))
            }
        }
    }
}

impl Default for ContentForge {
    fn default() -> Self {
        Self::new(5, 10)
    }
}
