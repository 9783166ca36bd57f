//! Content calendar planning.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Duration, OffsetDateTime};

use crate::brand::BrandProfile;
use crate::content::{ContentForge, ContentType, TemplateKind};
use crate::error::{CalendarError, ForgeError};

/// Template kinds used when filling a calendar.
const CALENDAR_TEMPLATES: &[TemplateKind] = &[
    TemplateKind::Tips,
    TemplateKind::Mistakes,
    TemplateKind::Steps,
];

/// Default slide count for calendar carousels.
const CALENDAR_SLIDES: usize = 7;

/// One scheduled post in a content calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Scheduled date, YYYY-MM-DD.
    pub date: String,
    /// Weekday name.
    pub day: String,
    /// Post format.
    pub content_type: ContentType,
    /// Post title.
    pub title: String,
    /// Content pillar the post covers.
    pub topic: String,
    /// Predicted engagement, 0-100.
    pub engagement_score: u8,
    /// Recommended posting window.
    pub best_time: String,
    /// First 100 characters of the caption.
    pub caption_preview: String,
    /// Hashtag set.
    pub hashtags: Vec<String>,
}

/// Plans content calendars within configured bounds.
#[derive(Debug, Clone)]
pub struct CalendarPlanner {
    max_weeks: u32,
    max_posts_per_week: u32,
}

impl CalendarPlanner {
    /// Create a planner with the given bounds.
    pub fn new(max_weeks: u32, max_posts_per_week: u32) -> Self {
        Self {
            max_weeks,
            max_posts_per_week,
        }
    }

    /// Create a planner from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.max_calendar_weeks, config.max_posts_per_week)
    }

    /// Plan `weeks * posts_per_week` posts on consecutive days starting
    /// today (UTC), cycling through the brand's content pillars.
    pub fn plan<R: Rng>(
        &self,
        forge: &ContentForge,
        brand: &BrandProfile,
        weeks: u32,
        posts_per_week: u32,
        rng: &mut R,
    ) -> Result<Vec<CalendarEntry>, ForgeError> {
        if weeks == 0 || weeks > self.max_weeks {
            return Err(CalendarError::InvalidWeeks {
                requested: weeks,
                max: self.max_weeks,
            }
            .into());
        }
        if posts_per_week == 0 || posts_per_week > self.max_posts_per_week {
            return Err(CalendarError::InvalidPostsPerWeek {
                requested: posts_per_week,
                max: self.max_posts_per_week,
            }
            .into());
        }

        let date_format = format_description!("[year]-[month]-[day]");
        let start = OffsetDateTime::now_utc();
        let total_posts = (weeks * posts_per_week) as usize;

        let mut calendar = Vec::with_capacity(total_posts);

        for i in 0..total_posts {
            let date = start + Duration::days(i as i64);
            let pillar = &brand.content_pillars[i % brand.content_pillars.len()];

            let kind = CALENDAR_TEMPLATES
                .choose(rng)
                .copied()
                .unwrap_or(TemplateKind::Tips);

            let content = forge.generate_carousel(brand, pillar, kind, CALENDAR_SLIDES, rng)?;

            let date_str = date
                .format(&date_format)
                .map_err(|e| CalendarError::DateFormat(e.to_string()))?;

            calendar.push(CalendarEntry {
                date: date_str,
                day: date.weekday().to_string(),
                content_type: content.content_type,
                title: content.title,
                topic: pillar.clone(),
                engagement_score: content.engagement_score,
                best_time: content.best_posting_time,
                caption_preview: preview(&content.caption, 100),
                hashtags: content.hashtags,
            });
        }

        Ok(calendar)
    }
}

impl Default for CalendarPlanner {
    fn default() -> Self {
        Self::new(12, 7)
    }
}

/// First `limit` characters of the text, with an ellipsis when truncated.
fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(limit).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::{BrandVoice, Industry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_brand() -> BrandProfile {
        let mut rng = StdRng::seed_from_u64(6);
        BrandProfile::new(
            "BlazeIgnite",
            Industry::Marketing,
            BrandVoice::Professional,
            "entrepreneurs",
            vec![
                "email marketing".to_string(),
                "shopify growth".to_string(),
                "facebook ads".to_string(),
            ],
            5,
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn calendar_has_weeks_times_posts_entries() {
        let planner = CalendarPlanner::default();
        let forge = ContentForge::default();
        let mut rng = StdRng::seed_from_u64(13);

        let calendar = planner
            .plan(&forge, &test_brand(), 2, 3, &mut rng)
            .unwrap();
        assert_eq!(calendar.len(), 6);
    }

    #[test]
    fn pillars_cycle_through_entries() {
        let planner = CalendarPlanner::default();
        let forge = ContentForge::default();
        let mut rng = StdRng::seed_from_u64(13);

        let calendar = planner
            .plan(&forge, &test_brand(), 2, 2, &mut rng)
            .unwrap();

        assert_eq!(calendar[0].topic, "email marketing");
        assert_eq!(calendar[1].topic, "shopify growth");
        assert_eq!(calendar[2].topic, "facebook ads");
        assert_eq!(calendar[3].topic, "email marketing");
    }

    #[test]
    fn dates_are_iso_formatted() {
        let planner = CalendarPlanner::default();
        let forge = ContentForge::default();
        let mut rng = StdRng::seed_from_u64(13);

        let calendar = planner
            .plan(&forge, &test_brand(), 1, 2, &mut rng)
            .unwrap();

        for entry in &calendar {
            assert_eq!(entry.date.len(), 10);
            assert_eq!(entry.date.as_bytes()[4], b'-');
            assert_eq!(entry.date.as_bytes()[7], b'-');
            assert!(!entry.day.is_empty());
        }
    }

    #[test]
    fn zero_weeks_is_rejected() {
        let planner = CalendarPlanner::default();
        let forge = ContentForge::default();
        let mut rng = StdRng::seed_from_u64(13);

        let result = planner.plan(&forge, &test_brand(), 0, 3, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn excessive_posts_per_week_is_rejected() {
        let planner = CalendarPlanner::default();
        let forge = ContentForge::default();
        let mut rng = StdRng::seed_from_u64(13);

        let result = planner.plan(&forge, &test_brand(), 1, 99, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn preview_truncates_long_captions() {
        let text = "a".repeat(150);
        let p = preview(&text, 100);
        assert_eq!(p.chars().count(), 103);
        assert!(p.ends_with("..."));

        assert_eq!(preview("short", 100), "short");
    }
}
