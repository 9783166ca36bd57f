//! Carousel template kinds, slide structures, title banks, and CTAs.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::content::hooks::{fill_placeholders, title_variables};
use crate::content::types::{Slide, SlideKind};

/// Carousel template kind. Unknown input falls back to `Tips`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TemplateKind {
    /// Numbered tips with a bonus slide.
    #[default]
    Tips,
    /// Common mistakes and the fix.
    Mistakes,
    /// Step-by-step walkthrough.
    Steps,
    /// Pain point, mistakes, then the turnaround.
    MistakesToSuccess,
}

impl TemplateKind {
    /// Parse a template string, falling back to `Tips` on unknown input.
    pub fn parse_or_tips(s: &str) -> Self {
        s.trim().parse().unwrap_or(TemplateKind::Tips)
    }
}

/// Structural role of a slide within a template, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRole {
    Hook,
    Intro,
    Tip(u32),
    Mistake(u32),
    Step(u32),
    Bonus,
    Solution,
    Result,
    PainPoint,
    Results,
    Cta,
}

const TIPS_STRUCTURE: &[SlideRole] = &[
    SlideRole::Hook,
    SlideRole::Intro,
    SlideRole::Tip(1),
    SlideRole::Tip(2),
    SlideRole::Tip(3),
    SlideRole::Bonus,
    SlideRole::Cta,
];

const MISTAKES_STRUCTURE: &[SlideRole] = &[
    SlideRole::Hook,
    SlideRole::Intro,
    SlideRole::Mistake(1),
    SlideRole::Mistake(2),
    SlideRole::Mistake(3),
    SlideRole::Solution,
    SlideRole::Cta,
];

const STEPS_STRUCTURE: &[SlideRole] = &[
    SlideRole::Hook,
    SlideRole::Intro,
    SlideRole::Step(1),
    SlideRole::Step(2),
    SlideRole::Step(3),
    SlideRole::Step(4),
    SlideRole::Result,
    SlideRole::Cta,
];

const MISTAKES_TO_SUCCESS_STRUCTURE: &[SlideRole] = &[
    SlideRole::Hook,
    SlideRole::PainPoint,
    SlideRole::Mistake(1),
    SlideRole::Mistake(2),
    SlideRole::Solution,
    SlideRole::Results,
    SlideRole::Cta,
];

const TIPS_TITLES: &[&str] = &[
    "{number} {topic} Tips That Actually Work",
    "Save These {topic} Hacks 📌",
    "The {topic} Guide You Need",
];

const MISTAKES_TITLES: &[&str] = &[
    "Stop Making These {topic} Mistakes 🚫",
    "{number} Things Ruining Your {topic}",
    "Mistakes Costing You {cost}",
];

const STEPS_TITLES: &[&str] = &[
    "How to {goal} in {number} Steps",
    "The {topic} Blueprint 🗺️",
    "From {start} to {end} (Step-by-Step)",
];

const MISTAKES_TO_SUCCESS_TITLES: &[&str] = &[
    "How I Fixed My {problem}",
    "I Was {action} Wrong for Years 😅",
    "The {topic} Glow-Up Strategy",
];

impl TemplateKind {
    /// Ordered slide structure for this template.
    pub fn structure(self) -> &'static [SlideRole] {
        match self {
            TemplateKind::Tips => TIPS_STRUCTURE,
            TemplateKind::Mistakes => MISTAKES_STRUCTURE,
            TemplateKind::Steps => STEPS_STRUCTURE,
            TemplateKind::MistakesToSuccess => MISTAKES_TO_SUCCESS_STRUCTURE,
        }
    }

    /// Title template bank for this template.
    pub fn titles(self) -> &'static [&'static str] {
        match self {
            TemplateKind::Tips => TIPS_TITLES,
            TemplateKind::Mistakes => MISTAKES_TITLES,
            TemplateKind::Steps => STEPS_TITLES,
            TemplateKind::MistakesToSuccess => MISTAKES_TO_SUCCESS_TITLES,
        }
    }

    /// Pick and fill a title for the topic.
    pub fn generate_title<R: Rng>(self, topic: &str, rng: &mut R) -> String {
        let template = self.titles().choose(rng).copied().unwrap_or(TIPS_TITLES[0]);
        fill_placeholders(template, &title_variables(topic, rng))
    }
}

fn slide(kind: SlideKind, text: impl Into<String>, style: Option<&str>) -> Slide {
    Slide {
        kind,
        number: None,
        title: None,
        text: Some(text.into()),
        style: style.map(str::to_string),
    }
}

fn numbered_slide(
    kind: SlideKind,
    number: u32,
    title: impl Into<String>,
    text: impl Into<String>,
) -> Slide {
    Slide {
        kind,
        number: Some(number),
        title: Some(title.into()),
        text: Some(text.into()),
        style: None,
    }
}

fn titled_slide(kind: SlideKind, title: impl Into<String>, text: impl Into<String>) -> Slide {
    Slide {
        kind,
        number: None,
        title: Some(title.into()),
        text: Some(text.into()),
        style: None,
    }
}

/// Render the slide body for a structural role, parameterized by topic.
fn slide_for_role(role: SlideRole, topic: &str) -> Slide {
    match role {
        SlideRole::Hook => slide(
            SlideKind::Hook,
            format!("The {topic} secrets\neveryone needs 🔥"),
            Some("bold"),
        ),
        SlideRole::Intro => slide(
            SlideKind::Text,
            format!("Here are the {topic}\nstrategies that\nactually work 👇"),
            Some("normal"),
        ),
        SlideRole::Tip(1) => numbered_slide(
            SlideKind::Tip,
            1,
            "Start with research",
            format!("Understand your {topic} before taking action"),
        ),
        SlideRole::Tip(2) => numbered_slide(
            SlideKind::Tip,
            2,
            "Create systems",
            format!("Build repeatable {topic} processes"),
        ),
        SlideRole::Tip(3) => numbered_slide(
            SlideKind::Tip,
            3,
            "Measure results",
            format!("Track what works in {topic}"),
        ),
        SlideRole::Tip(n) => numbered_slide(
            SlideKind::Tip,
            n,
            "Scale winners",
            format!("Double down on {topic} successes"),
        ),
        SlideRole::Mistake(1) => numbered_slide(
            SlideKind::Warning,
            1,
            "❌ Random guessing",
            format!("Never approach {topic} without a plan"),
        ),
        SlideRole::Mistake(2) => numbered_slide(
            SlideKind::Warning,
            2,
            "❌ Ignoring data",
            format!("{topic} without metrics is just guessing"),
        ),
        SlideRole::Mistake(n) => numbered_slide(
            SlideKind::Warning,
            n,
            "❌ Giving up early",
            format!("{topic} takes time - be patient"),
        ),
        SlideRole::Step(1) => numbered_slide(
            SlideKind::Step,
            1,
            "Research Phase",
            format!("Analyze your {topic} situation thoroughly"),
        ),
        SlideRole::Step(2) => numbered_slide(
            SlideKind::Step,
            2,
            "Strategy Phase",
            format!("Create your {topic} action plan"),
        ),
        SlideRole::Step(3) => numbered_slide(
            SlideKind::Step,
            3,
            "Execution Phase",
            format!("Implement your {topic} strategy daily"),
        ),
        SlideRole::Step(n) => numbered_slide(
            SlideKind::Step,
            n,
            "Optimization",
            format!("Refine your {topic} approach weekly"),
        ),
        SlideRole::Bonus => titled_slide(
            SlideKind::Bonus,
            "💡 Pro Tip",
            format!("The best {topic} pros do this daily"),
        ),
        SlideRole::Solution => titled_slide(
            SlideKind::Solution,
            "✅ The Fix",
            format!("Use this proven {topic} framework instead"),
        ),
        SlideRole::Result => titled_slide(
            SlideKind::Result,
            "🎉 Results",
            format!("Consistent {topic} growth within 90 days"),
        ),
        SlideRole::PainPoint => titled_slide(
            SlideKind::Pain,
            format!("Struggling with {topic}?"),
            "You're not alone - here's why...",
        ),
        SlideRole::Results => titled_slide(
            SlideKind::Result,
            "The Results 📈",
            format!("{topic} transformation in just 30 days"),
        ),
        SlideRole::Cta => slide(
            SlideKind::Cta,
            format!("Follow for more\n{topic} tips 🔥"),
            Some("cta"),
        ),
    }
}

/// Generate carousel slides: the template structure truncated to
/// `num_slides`, each role rendered for the topic.
pub fn generate_slides(kind: TemplateKind, topic: &str, num_slides: usize) -> Vec<Slide> {
    kind.structure()
        .iter()
        .take(num_slides)
        .map(|role| slide_for_role(*role, topic))
        .collect()
}

/// Call-to-action templates.
const CTAS: &[&str] = &[
    "Save this for later 📌",
    "Drop a 🔥 if you agree",
    "Which one will you try first? 👇",
    "Share this with someone who needs to see it",
    "Comment '{keyword}' for the full guide",
    "Link in bio for more 👆",
    "Follow for daily {topic} tips",
    "Tag someone who's struggling with {problem}",
    "Double tap if this helped you ❤️",
    "What's your biggest {topic} challenge? Tell me below 👇",
];

/// Select and fill a call-to-action for the topic.
pub fn select_cta<R: Rng>(topic: &str, rng: &mut R) -> String {
    let template = CTAS.choose(rng).copied().unwrap_or(CTAS[0]);
    let keyword: String = topic.chars().take(5).collect::<String>().to_uppercase();

    template
        .replace("{topic}", topic)
        .replace("{keyword}", &keyword)
        .replace("{problem}", &format!("{topic} struggles"))
}
