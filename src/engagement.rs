//! Engagement scoring and past-performance analysis.

use serde::{Deserialize, Serialize};

use crate::content::Slide;
use crate::error::ContentError;

/// Emojis that mark a high-energy hook.
const HIGH_ENERGY_EMOJI: &[char] = &['🔥', '💡', '😱', '👇'];

/// Predict engagement potential for a carousel, 0-100.
///
/// Heuristic: base 50, +10 for a high-energy emoji in the hook, +5 for a
/// hook under 60 characters, +15 for 5-10 slides, +10 for 8-15 hashtags.
pub fn score_carousel(hook: &str, slides: &[Slide], hashtags: &[String]) -> u8 {
    let mut score: i32 = 50;

    if hook.chars().any(|c| HIGH_ENERGY_EMOJI.contains(&c)) {
        score += 10;
    }
    if hook.chars().count() < 60 {
        score += 5;
    }

    if (5..=10).contains(&slides.len()) {
        score += 15;
    }

    if (8..=15).contains(&hashtags.len()) {
        score += 10;
    }

    score.clamp(0, 100) as u8
}

/// Recommended posting window keyed by target audience, with a general
/// fallback.
pub fn optimal_posting_time(target_audience: &str) -> &'static str {
    match target_audience.trim().to_lowercase().as_str() {
        "professionals" => "Tuesday/Thursday 12:00 PM or 5:00 PM",
        "entrepreneurs" => "Monday/Wednesday 8:00 AM or 6:00 PM",
        "students" => "Weekdays 7:00 PM - 9:00 PM",
        "parents" => "Weekdays 10:00 AM or 8:00 PM",
        _ => "Tuesday-Thursday 11:00 AM - 1:00 PM",
    }
}

/// One historical post, as submitted for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Post topic.
    pub topic: String,
    /// Observed or predicted engagement score, 0-100.
    pub engagement_score: u8,
}

/// Aggregated performance insights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceInsights {
    /// Number of posts analyzed.
    pub total_posts: usize,
    /// Mean engagement score, one decimal.
    pub average_engagement_score: f64,
    /// Topic of the highest-scoring post.
    pub best_performing_topic: String,
    /// Score of the highest-scoring post.
    pub best_score: u8,
    /// Actionable recommendations.
    pub recommendations: Vec<String>,
}

/// Analyze past content performance. Errors on an empty history.
pub fn analyze_performance(history: &[ContentRecord]) -> Result<PerformanceInsights, ContentError> {
    if history.is_empty() {
        return Err(ContentError::EmptyHistory);
    }

    let total: u64 = history.iter().map(|r| r.engagement_score as u64).sum();
    let avg = total as f64 / history.len() as f64;
    let avg_rounded = (avg * 10.0).round() / 10.0;

    let best = history
        .iter()
        .max_by_key(|r| r.engagement_score)
        .ok_or(ContentError::EmptyHistory)?;

    Ok(PerformanceInsights {
        total_posts: history.len(),
        average_engagement_score: avg_rounded,
        best_performing_topic: best.topic.clone(),
        best_score: best.engagement_score,
        recommendations: vec![
            format!("Your content scores an average of {:.0}/100", avg),
            format!(
                "'{}' performs best - create more content on this",
                best.topic
            ),
            "Consider posting more carousels - they typically perform 2x better".to_string(),
            "Add more emojis to your hooks for higher engagement".to_string(),
        ],
    })
}
