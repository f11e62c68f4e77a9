//! Emotion-aware response pipeline: lexicon scoring, keyword emotion
//! detection, empathetic prefix selection and a per-analyzer history log.

pub mod emotion;
pub mod history;
pub mod pattern;
pub mod prefix;
pub mod scorer;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use emotion::{EmotionSet, EmotionTag, detect_emotions};
pub use history::{HistoryEntry, HistorySummary, HistoryTracker, MoodSummary};
pub use prefix::select_prefix;
pub use scorer::{LexiconScorer, SentimentLabel};

/// Full analysis of one message. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    pub emoji: String,
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub polarity: f64,
    pub subjectivity: f64,
    pub emotions: EmotionSet,
    pub timestamp: DateTime<Utc>,
}

/// Owns the scorers and the conversation history for one deployment.
///
/// Shared across request handlers behind an `Arc`; only the history append
/// takes a lock.
#[derive(Default)]
pub struct SentimentAnalyzer {
    scorer: LexiconScorer,
    history: HistoryTracker,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score and tag `text` without touching the history.
    pub fn evaluate(&self, text: &str) -> SentimentResult {
        let scores = self.scorer.score(text);
        let label = scores.label();
        let emotions = detect_emotions(&text.to_lowercase());

        SentimentResult {
            sentiment: label,
            emoji: label.emoji().to_string(),
            compound: scores.compound,
            positive: scores.positive,
            negative: scores.negative,
            neutral: scores.neutral,
            polarity: scores.secondary.polarity,
            subjectivity: scores.secondary.subjectivity,
            emotions,
            timestamp: Utc::now(),
        }
    }

    /// Score, tag and record `text`.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let result = self.evaluate(text);
        tracing::debug!(
            sentiment = %result.sentiment,
            compound = result.compound,
            emotions = result.emotions.len(),
            "analyzed message"
        );
        self.history.record(text, &result);
        result
    }

    pub fn empathetic_prefix(&self, result: &SentimentResult) -> &'static str {
        select_prefix(result)
    }

    pub fn summary(&self) -> HistorySummary {
        self.history.summarize()
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worried_message_gets_stress_prefix() {
        let analyzer = SentimentAnalyzer::new();
        let r = analyzer.analyze("I'm so worried about my debt");
        assert!(r.emotions.contains(EmotionTag::Stressed));
        assert_eq!(
            analyzer.empathetic_prefix(&r),
            "I understand this is stressful. Let's work through this together. "
        );
    }

    #[test]
    fn thanks_for_help_collides_with_confused() {
        let analyzer = SentimentAnalyzer::new();
        let r = analyzer.analyze("Thank you so much for your help!");
        assert!(r.emotions.contains(EmotionTag::Grateful));
        assert!(r.emotions.contains(EmotionTag::Confused));
        assert_eq!(
            analyzer.empathetic_prefix(&r),
            "Let me clarify this for you in a simple way. "
        );
    }

    #[test]
    fn excitement_is_hopeful_and_uses_label_prefix() {
        let analyzer = SentimentAnalyzer::new();
        let r = analyzer.analyze("I'm excited to start investing!");
        assert_eq!(r.emotions.iter().collect::<Vec<_>>(), vec![EmotionTag::Hopeful]);
        assert_eq!(r.sentiment, SentimentLabel::Positive);
        assert_eq!(analyzer.empathetic_prefix(&r), "Great! I'm glad to hear that. ");
    }

    #[test]
    fn plain_requests_and_questions_get_no_prefix() {
        let analyzer = SentimentAnalyzer::new();
        for text in ["Show me my portfolio!", "What is an index fund?"] {
            let r = analyzer.evaluate(text);
            assert_eq!(r.compound, 0.0, "{text:?}");
            assert_eq!(r.sentiment, SentimentLabel::Neutral, "{text:?}");
            assert!(r.emotions.is_empty(), "{text:?}");
            assert_eq!(analyzer.empathetic_prefix(&r), "", "{text:?}");
        }
    }

    #[test]
    fn emotions_come_from_keywords_not_scores() {
        let analyzer = SentimentAnalyzer::new();
        let r = analyzer.evaluate("I THINK I NEED TO CHECK MY BALANCE");
        assert!(r.emotions.is_empty());
        assert_eq!(r.emoji, r.sentiment.emoji());
    }

    #[test]
    fn analyze_records_and_evaluate_does_not() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.summary().is_empty());

        analyzer.evaluate("I hate fees");
        assert!(analyzer.history().is_empty());

        let r = analyzer.analyze("I hate fees");
        let entries = analyzer.history().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "I hate fees");
        assert_eq!(entries[0].sentiment, r.sentiment);
        assert_eq!(entries[0].compound, r.compound);
        assert!(!analyzer.summary().is_empty());
    }

    #[test]
    fn result_serializes_with_lowercase_labels() {
        let analyzer = SentimentAnalyzer::new();
        let r = analyzer.evaluate("I'm so worried about my debt");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["sentiment"], "negative");
        assert_eq!(v["emotions"], serde_json::json!(["stressed"]));
        assert!(v["timestamp"].is_string());
    }
}
