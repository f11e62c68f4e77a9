//! Secondary polarity/subjectivity estimate.
//!
//! A pattern-style analyzer: each known adjective or affect word carries a
//! polarity in [-1, 1] and a subjectivity in [0, 1]; the message score is the
//! mean over every hit, after intensifiers and negation have been applied to
//! the word that follows them. The result is informational only.

use serde::{Deserialize, Serialize};

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("hopeful", 0.5, 0.7),
    ("grateful", 0.6, 0.8),
    ("thankful", 0.5, 0.8),
    ("nice", 0.6, 1.0),
    ("love", 0.5, 0.6),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.23, 0.55),
    ("safe", 0.5, 0.5),
    ("secure", 0.4, 0.6),
    ("stable", 0.2, 0.4),
    ("strong", 0.43, 0.73),
    ("profitable", 0.5, 0.6),
    ("easy", 0.43, 0.83),
    ("clear", 0.1, 0.38),
    ("helpful", 0.5, 0.4),
    ("much", 0.2, 0.2),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("upset", -0.4, 0.7),
    ("annoyed", -0.4, 0.8),
    ("frustrated", -0.7, 0.4),
    ("frustrating", -0.4, 0.7),
    ("worried", -0.3, 0.7),
    ("anxious", -0.25, 0.75),
    ("scared", -0.5, 0.8),
    ("stressful", -0.4, 0.9),
    ("confused", -0.4, 0.7),
    ("confusing", -0.3, 0.5),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("lost", -0.2, 0.4),
    ("unclear", -0.2, 0.4),
    ("risky", -0.4, 0.6),
    ("expensive", -0.5, 0.7),
    ("broke", -0.3, 0.5),
    ("negative", -0.3, 0.4),
    ("hate", -0.8, 0.9),
    ("wrong", -0.5, 0.9),
    ("debt", -0.1, 0.3),
];

/// (word, multiplier) applied to the next lexicon hit
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("super", 1.4),
    ("incredibly", 1.5),
    ("totally", 1.3),
    ("quite", 1.1),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const NEGATIONS: &[&str] = &["not", "never", "no", "nor", "without"];

/// Polarity flips and halves under negation, mirroring how pattern lexicons
/// soften a negated opinion ("not good" is mildly negative, not "bad").
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str) -> PatternScore {
        let lowered = text.to_lowercase();
        let mut hits: Vec<(f64, f64)> = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0_f64;

        for token in tokens(&lowered) {
            if NEGATIONS.contains(&token) || token.ends_with("n't") {
                negated = true;
                continue;
            }
            if let Some((_, m)) = INTENSIFIERS.iter().find(|(w, _)| *w == token) {
                intensity *= m;
                continue;
            }
            if let Some((_, polarity, subjectivity)) = LEXICON.iter().find(|(w, _, _)| *w == token)
            {
                let mut p = (polarity * intensity).clamp(-1.0, 1.0);
                if negated {
                    p *= NEGATION_FACTOR;
                }
                let s = (subjectivity * intensity).clamp(0.0, 1.0);
                hits.push((p, s));
            }
            // Modifiers reach only the word right after them.
            negated = false;
            intensity = 1.0;
        }

        if hits.is_empty() {
            return PatternScore {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        let n = hits.len() as f64;
        let polarity = hits.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = hits.iter().map(|(_, s)| s).sum::<f64>() / n;
        PatternScore {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
}
