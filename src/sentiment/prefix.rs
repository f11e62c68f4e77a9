use super::SentimentResult;
use super::emotion::EmotionTag;
use super::scorer::SentimentLabel;

/// One entry in the prefix priority table.
pub struct PrefixRule {
    pub name: &'static str,
    pub matches: fn(&SentimentResult) -> bool,
    pub prefix: &'static str,
}

/// Evaluated top to bottom; the first rule that matches wins.
/// `hopeful` deliberately has no rule of its own and falls through to the
/// label rules.
pub static PREFIX_RULES: [PrefixRule; 6] = [
    PrefixRule {
        name: "stressed",
        matches: |r| r.emotions.contains(EmotionTag::Stressed),
        prefix: "I understand this is stressful. Let's work through this together. ",
    },
    PrefixRule {
        name: "frustrated",
        matches: |r| r.emotions.contains(EmotionTag::Frustrated),
        prefix: "I can sense your frustration. Let me help you find a solution. ",
    },
    PrefixRule {
        name: "confused",
        matches: |r| r.emotions.contains(EmotionTag::Confused),
        prefix: "Let me clarify this for you in a simple way. ",
    },
    PrefixRule {
        name: "grateful",
        matches: |r| r.emotions.contains(EmotionTag::Grateful),
        prefix: "You're welcome! I'm happy to help. ",
    },
    PrefixRule {
        name: "negative",
        matches: |r| r.sentiment == SentimentLabel::Negative,
        prefix: "I hear you, and I'm here to help. ",
    },
    PrefixRule {
        name: "positive",
        matches: |r| r.sentiment == SentimentLabel::Positive,
        prefix: "Great! I'm glad to hear that. ",
    },
];

/// The rule that fires for `result`, if any.
pub fn matching_rule(result: &SentimentResult) -> Option<&'static PrefixRule> {
    PREFIX_RULES.iter().find(|rule| (rule.matches)(result))
}

/// Empathetic prefix for a result; empty when nothing matches.
pub fn select_prefix(result: &SentimentResult) -> &'static str {
    matching_rule(result).map(|rule| rule.prefix).unwrap_or("")
}
