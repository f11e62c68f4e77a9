//! Lexicon sentiment scoring.
//!
//! The primary score comes from VADER, which is tuned for short informal
//! text; a second, independent pattern lexicon supplies polarity and
//! subjectivity for display. Only the VADER compound score decides the label.

use serde::{Deserialize, Serialize};
use std::fmt;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::pattern::{PatternAnalyzer, PatternScore};

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub const fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😟",
            SentimentLabel::Neutral => "😐",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Raw scorer output before emotions and timestamp are attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconScores {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub secondary: PatternScore,
}

impl LexiconScores {
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_compound(self.compound)
    }
}

pub struct LexiconScorer {
    vader: SentimentIntensityAnalyzer<'static>,
    pattern: PatternAnalyzer,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            vader: SentimentIntensityAnalyzer::new(),
            pattern: PatternAnalyzer::new(),
        }
    }

    /// Score any string. There is no error path; text without a single
    /// scorable token comes back fully neutral.
    pub fn score(&self, text: &str) -> LexiconScores {
        let scores = self.vader.polarity_scores(text);
        let get = |k: &str| scores.get(k).copied().unwrap_or(0.0);

        let (pos, neg) = (get("pos"), get("neg"));
        // Punctuation emphasis only amplifies existing valence. The crate
        // subtracts it when the token sum is exactly zero, so a plain "?" or
        // "!" would otherwise read as negative.
        let compound = if pos <= 0.0 && neg <= 0.0 {
            0.0
        } else {
            get("compound").clamp(-1.0, 1.0)
        };
        let (positive, negative, neutral) = normalize_proportions(pos, neg, get("neu"));

        LexiconScores {
            compound,
            positive,
            negative,
            neutral,
            secondary: self.pattern.score(text),
        }
    }
}

/// VADER rounds each proportion independently and reports all zeros when it
/// finds no tokens; rescale so the three always sum to 1.
fn normalize_proportions(pos: f64, neg: f64, neu: f64) -> (f64, f64, f64) {
    let pos = pos.max(0.0);
    let neg = neg.max(0.0);
    let neu = neu.max(0.0);
    let total = pos + neg + neu;
    if total <= f64::EPSILON {
        return (0.0, 0.0, 1.0);
    }
    (pos / total, neg / total, neu / total)
}
