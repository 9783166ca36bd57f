//! Core content types: pieces, slides, and their tags.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::brand::BrandVoice;

/// Instagram post format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentType {
    /// Multi-slide post (5-10 slides).
    #[default]
    Carousel,
    /// Single image post.
    Single,
    /// Short-form video.
    Reel,
    /// 24-hour story.
    Story,
}

/// Structural role a slide plays within a carousel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SlideKind {
    /// Attention-grabbing opener.
    Hook,
    /// Plain text slide.
    Text,
    /// Numbered tip.
    Tip,
    /// Numbered mistake/warning.
    Warning,
    /// Numbered step.
    Step,
    /// Bonus pro tip.
    Bonus,
    /// The fix after a list of mistakes.
    Solution,
    /// Outcome slide.
    Result,
    /// Pain-point opener.
    Pain,
    /// Call-to-action closer.
    Cta,
    /// Placeholder for single-image posts.
    Single,
}

/// A single carousel slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Structural role.
    #[serde(rename = "type")]
    pub kind: SlideKind,
    /// Position within a numbered sequence (tips, steps, mistakes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Slide headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Rendering style hint (bold, normal, cta).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Slide {
    /// Text shown for this slide in exports: body text, else title, else a
    /// positional placeholder.
    pub fn display_text(&self, position: usize) -> String {
        self.text
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| format!("Slide {}", position))
    }
}

/// A single piece of generated content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPiece {
    /// Post format.
    pub content_type: ContentType,
    /// Post title.
    pub title: String,
    /// Carousel slides (one placeholder slide for singles).
    pub slides: Vec<Slide>,
    /// Full caption text.
    pub caption: String,
    /// Deduplicated hashtag set.
    pub hashtags: Vec<String>,
    /// Opening hook.
    pub hook: String,
    /// Call to action.
    pub cta: String,
    /// Predicted engagement, 0-100.
    pub engagement_score: u8,
    /// Recommended posting window for the target audience.
    pub best_posting_time: String,
    /// Voice the copy was written in.
    pub brand_voice: BrandVoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn content_type_round_trips() {
        assert_eq!(ContentType::from_str("carousel").unwrap(), ContentType::Carousel);
        assert_eq!(ContentType::Reel.to_string(), "reel");
    }

    #[test]
    fn slide_display_text_fallbacks() {
        let slide = Slide {
            kind: SlideKind::Tip,
            number: Some(1),
            title: Some("Start with research".to_string()),
            text: None,
            style: None,
        };
        assert_eq!(slide.display_text(3), "Start with research");

        let empty = Slide {
            kind: SlideKind::Single,
            number: None,
            title: None,
            text: None,
            style: None,
        };
        assert_eq!(empty.display_text(3), "Slide 3");
    }

    #[test]
    fn slide_serializes_kind_as_type_tag() {
        let slide = Slide {
            kind: SlideKind::Cta,
            number: None,
            title: None,
            text: Some("Follow for more".to_string()),
            style: Some("cta".to_string()),
        };

        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json["type"], "cta");
        assert!(json.get("number").is_none());
    }
}
