//! Hook template banks and placeholder substitution.
//!
//! Hooks are short attention-grabbing openers picked from an industry bank.
//! Templates carry `{variable}` placeholders that are filled from a fixed
//! topic-derived map; placeholders with no mapping lose their braces.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::brand::Industry;
use crate::utils::title_case;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("valid regex"));

/// Hook templates for ecommerce brands.
const ECOMMERCE_HOOKS: &[&str] = &[
    "Stop scrolling if you want to {benefit} 🔥",
    "The {product} that changed everything for me...",
    "POV: You finally found {solution}",
    "3 {things} I wish I knew before {action}",
    "Unpopular opinion: {opinion} 👇",
    "Save this if you're struggling with {problem}",
    "This {product} went viral for a reason...",
    "The truth about {topic} nobody talks about",
    "Wait for the transformation... 😱",
    "Which one are you choosing? {options}",
];

/// Hook templates for SaaS brands.
const SAAS_HOOKS: &[&str] = &[
    "The {tool} that saved me {time} every week",
    "Stop doing {task} manually (do this instead)",
    "If you're not using {tool}, you're working too hard",
    "This automation changed my business forever",
    "The $0 → ${amount} journey (thread) 🧵",
    "Bookmark this for your next {project}",
    "Free tools that work better than paid ones:",
    "The workflow that 10x'd my productivity",
];

/// Hook templates for fitness brands.
const FITNESS_HOOKS: &[&str] = &[
    "The only {exercise} you need for {goal}",
    "3 months ago vs now 💪",
    "Stop making these {number} mistakes...",
    "Your {body_part} will thank you for this",
    "The {number} minute workout that actually works",
    "Transformation Tuesday hits different when...",
    "This changed my relationship with {topic}",
];

/// Hook templates for food brands.
const FOOD_HOOKS: &[&str] = &[
    "The {number} ingredient {dish} everyone needs",
    "POV: You finally mastered {recipe}",
    "Stop ordering takeout and make this instead 👨\u{200d}🍳",
    "This {dish} recipe broke the internet...",
    "Meal prep Sunday just got easier",
    "The secret ingredient you never knew you needed",
    "Restaurant-quality {dish} at home 🏠",
];

/// Hook templates for fashion brands.
const FASHION_HOOKS: &[&str] = &[
    "The {item} that goes with EVERYTHING",
    "How to style {item} {number} ways",
    "This outfit cost less than your coffee ☕",
    "The trend I'm taking into {season}",
    "Capsule wardrobe essentials you actually need",
    "From desk to dinner in one outfit ✨",
    "The color combination nobody saw coming",
];

/// Catch-all hook templates.
const GENERAL_HOOKS: &[&str] = &[
    "The {number} things I learned from {experience}",
    "Unpopular opinion that might help you: 👇",
    "If you're reading this, it's a sign to {action}",
    "The {topic} guide I wish I had sooner",
    "Stop scrolling and {action} 🔥",
    "This mindset shift changed everything",
    "Bookmark this for when you need it 📌",
];

/// Hook bank for an industry. Industries without a dedicated bank use the
/// general bank.
pub fn hook_bank(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Ecommerce => ECOMMERCE_HOOKS,
        Industry::Saas => SAAS_HOOKS,
        Industry::Fitness => FITNESS_HOOKS,
        Industry::Food => FOOD_HOOKS,
        Industry::Fashion => FASHION_HOOKS,
        Industry::Marketing | Industry::General => GENERAL_HOOKS,
    }
}

/// Substitute `{variable}` placeholders from the map. Unknown placeholders
/// are stripped of their braces, leaving the bare name.
pub fn fill_placeholders(template: &str, variables: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            variables
                .get(name)
                .cloned()
                .unwrap_or_else(|| name.to_string())
        })
        .into_owned()
}

/// Topic-derived variable map used to fill hook templates.
fn hook_variables(topic: &str) -> HashMap<&'static str, String> {
    HashMap::from([
        ("benefit", format!("{topic} faster")),
        ("product", topic.to_string()),
        ("solution", format!("the perfect {topic} strategy")),
        ("things", "secrets".to_string()),
        ("action", format!("starting {topic}")),
        ("opinion", format!("{topic} is overrated")),
        ("problem", format!("{topic} struggles")),
        ("topic", topic.to_string()),
        ("tool", topic.to_string()),
        ("task", topic.to_string()),
        ("time", "10+ hours".to_string()),
        ("amount", "10K".to_string()),
        ("project", topic.to_string()),
        ("exercise", topic.to_string()),
        ("goal", format!("better {topic}")),
        ("number", "5".to_string()),
        ("body_part", "body".to_string()),
        ("dish", topic.to_string()),
        ("recipe", topic.to_string()),
        ("item", topic.to_string()),
        ("season", "next year".to_string()),
        ("experience", topic.to_string()),
        ("start", "zero".to_string()),
        ("end", "hero".to_string()),
        ("cost", "money".to_string()),
        ("options", "1, 2, or 3?".to_string()),
    ])
}

/// Variable map used to fill carousel title templates.
pub fn title_variables<R: Rng>(topic: &str, rng: &mut R) -> HashMap<&'static str, String> {
    let number = ["3", "5", "7", "10"]
        .choose(rng)
        .copied()
        .unwrap_or("5")
        .to_string();

    HashMap::from([
        ("number", number),
        ("topic", title_case(topic)),
        ("goal", format!("Master {topic}")),
        ("start", "Beginner".to_string()),
        ("end", "Pro".to_string()),
        ("problem", format!("{topic} issues")),
        ("action", topic.to_string()),
        ("cost", "thousands".to_string()),
    ])
}

/// Generate an attention-grabbing hook for the industry and topic.
pub fn generate_hook<R: Rng>(industry: Industry, topic: &str, rng: &mut R) -> String {
    let bank = hook_bank(industry);
    let template = bank.choose(rng).copied().unwrap_or(GENERAL_HOOKS[0]);
    fill_placeholders(template, &hook_variables(topic))
}
