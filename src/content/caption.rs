//! Instagram caption assembly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::brand::BrandProfile;

const INTROS: &[&str] = &[
    "Let's talk about {topic}... 👇",
    "Here's what nobody tells you about {topic}:",
    "The {topic} game just changed 🔥",
    "Real talk about {topic}:",
];

const VALUE_PROPS: &[&str] = &[
    "These {topic} strategies have worked for 100+ {audience}.",
    "I spent years figuring out {topic} so you don't have to.",
    "This is the exact {topic} system we use.",
    "Stop overcomplicating {topic}. Start here 👇",
];

/// Assemble a caption: hook, intro, value proposition, save-this line, and
/// a follow line referencing the brand handle.
pub fn generate_caption<R: Rng>(
    brand: &BrandProfile,
    topic: &str,
    hook: &str,
    rng: &mut R,
) -> String {
    let intro = INTROS
        .choose(rng)
        .copied()
        .unwrap_or(INTROS[0])
        .replace("{topic}", topic);

    let value = VALUE_PROPS
        .choose(rng)
        .copied()
        .unwrap_or(VALUE_PROPS[0])
        .replace("{topic}", topic)
        .replace("{audience}", &brand.target_audience);

    let follow = format!("Follow @{} for daily {} tips!", brand.name, topic);

    [
        hook,
        "",
        intro.as_str(),
        "",
        value.as_str(),
        "",
        "Save this post and come back to it when you need it 📌",
        "",
        follow.as_str(),
    ]
    .join("\n")
}

/// Caption template for single-image posts, by post type key.
pub fn single_post_caption(post_type: &str, topic: &str) -> String {
    match post_type {
        "motivational" => format!(
            "Your daily reminder:\n\n🔥 [Insert motivational message about {topic}]\n\nTag someone who needs to hear this 👇"
        ),
        "promotional" => format!(
            "Introducing [Product/Service]\n\n✨ The {topic} solution you've been waiting for\n\nLink in bio to learn more 👆"
        ),
        "engagement" => format!(
            "Question for you:\n\n❓ [Insert engaging question about {topic}]\n\nDrop your answer below! 👇"
        ),
        // educational and anything unknown
        _ => format!(
            "Quick {topic} tip:\n\n💡 [Insert educational content here]\n\nSave this for later! 📌"
        ),
    }
}
