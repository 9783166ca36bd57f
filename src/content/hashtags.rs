//! Hashtag banks and optimized set generation.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::brand::Industry;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]").expect("valid regex"));

const ECOMMERCE_TAGS: &[&str] = &[
    "#ecommerce",
    "#shopify",
    "#onlineshop",
    "#smallbusiness",
    "#entrepreneur",
    "#digitalmarketing",
    "#onlinestore",
    "#dropshipping",
    "#ecommercebusiness",
    "#marketing",
];

const SAAS_TAGS: &[&str] = &[
    "#saas",
    "#startup",
    "#tech",
    "#software",
    "#b2b",
    "#growthhacking",
    "#productivity",
    "#automation",
    "#businesstools",
    "#entrepreneurship",
];

const FITNESS_TAGS: &[&str] = &[
    "#fitness",
    "#workout",
    "#health",
    "#gym",
    "#wellness",
    "#fitnessmotivation",
    "#healthylifestyle",
    "#training",
    "#fitnessjourney",
    "#strong",
];

const FOOD_TAGS: &[&str] = &[
    "#foodie",
    "#foodblogger",
    "#recipe",
    "#homemade",
    "#cooking",
    "#foodphotography",
    "#instafood",
    "#healthyfood",
    "#foodstagram",
    "#yummy",
];

const FASHION_TAGS: &[&str] = &[
    "#fashion",
    "#style",
    "#ootd",
    "#outfit",
    "#fashionblogger",
    "#streetstyle",
    "#instafashion",
    "#fashionista",
    "#styleinspo",
    "#lookbook",
];

const MARKETING_TAGS: &[&str] = &[
    "#marketing",
    "#digitalmarketing",
    "#socialmedia",
    "#branding",
    "#contentmarketing",
    "#marketingtips",
    "#growth",
    "#socialmediamarketing",
    "#marketingstrategy",
    "#seo",
];

const GENERAL_TAGS: &[&str] = &[
    "#instagood",
    "#photooftheday",
    "#love",
    "#instadaily",
    "#follow",
    "#like",
    "#picoftheday",
    "#beautiful",
    "#happy",
    "#life",
];

/// Hashtag bank for an industry.
pub fn hashtag_bank(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Ecommerce => ECOMMERCE_TAGS,
        Industry::Saas => SAAS_TAGS,
        Industry::Fitness => FITNESS_TAGS,
        Industry::Food => FOOD_TAGS,
        Industry::Fashion => FASHION_TAGS,
        Industry::Marketing => MARKETING_TAGS,
        Industry::General => GENERAL_TAGS,
    }
}

/// Lowercase the topic and strip everything that cannot appear in a hashtag.
pub fn sanitize_topic(topic: &str) -> String {
    NON_ALPHANUMERIC
        .replace_all(&topic.to_lowercase(), "")
        .into_owned()
}

/// Generate an optimized hashtag set: a sample of popular industry tags,
/// topic-derived tags, and a couple of broad-reach general tags.
/// Deduplicated, insertion order preserved.
pub fn generate_hashtags<R: Rng>(industry: Industry, topic: &str, rng: &mut R) -> Vec<String> {
    let industry_tags = hashtag_bank(industry);
    let top = &industry_tags[..5.min(industry_tags.len())];

    let mut selected: Vec<String> = top
        .choose_multiple(rng, 3.min(top.len()))
        .map(|t| t.to_string())
        .collect();

    let base = sanitize_topic(topic);
    if !base.is_empty() {
        selected.push(format!("#{base}"));
        selected.push(format!("#{base}tips"));
        selected.push(format!("#{base}strategy"));
    }

    selected.extend(
        GENERAL_TAGS[..5]
            .choose_multiple(rng, 2)
            .map(|t| t.to_string()),
    );

    dedup_preserving_order(selected)
}

fn dedup_preserving_order(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter().filter(|t| seen.insert(t.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sanitize_strips_spaces_and_punctuation() {
        assert_eq!(sanitize_topic("Email Marketing"), "emailmarketing");
        assert_eq!(sanitize_topic("B2B SaaS!"), "b2bsaas");
        assert_eq!(sanitize_topic("  "), "");
    }

    #[test]
    fn hashtags_include_topic_tags() {
        let mut rng = StdRng::seed_from_u64(8);
        let tags = generate_hashtags(Industry::Ecommerce, "email marketing", &mut rng);

        assert!(tags.contains(&"#emailmarketing".to_string()));
        assert!(tags.contains(&"#emailmarketingtips".to_string()));
        assert!(tags.contains(&"#emailmarketingstrategy".to_string()));
    }

    #[test]
    fn hashtags_are_deduplicated() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let tags = generate_hashtags(Industry::Marketing, "marketing", &mut rng);
            let mut unique = tags.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(tags.len(), unique.len(), "duplicate tag in {tags:?}");
        }
    }

    #[test]
    fn empty_topic_yields_only_bank_tags() {
        let mut rng = StdRng::seed_from_u64(8);
        let tags = generate_hashtags(Industry::Fitness, "!!!", &mut rng);

        assert!(tags.iter().all(|t| t.starts_with('#')));
        assert!(!tags.iter().any(|t| t == "#"));
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn all_tags_start_with_hash() {
        let mut rng = StdRng::seed_from_u64(8);
        let tags = generate_hashtags(Industry::Food, "meal prep", &mut rng);
        assert!(tags.iter().all(|t| t.starts_with('#')));
    }
}
