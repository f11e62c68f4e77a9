use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

use super::SentimentResult;
use super::scorer::SentimentLabel;

/// Characters of the original message kept per entry.
pub const SNIPPET_CHARS: usize = 50;
const ELLIPSIS: &str = "...";

/// Mean compound score above/below which the conversation reads as
/// positive/negative overall.
pub const MOOD_THRESHOLD: f64 = 0.1;

pub const NO_HISTORY_MESSAGE: &str = "No conversation history yet.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub compound: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    pub total_messages: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub average_sentiment: f64,
    pub overall_mood: SentimentLabel,
}

/// `Empty` is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HistorySummary {
    Empty { message: &'static str },
    Summary(MoodSummary),
}

impl HistorySummary {
    pub fn empty() -> Self {
        HistorySummary::Empty {
            message: NO_HISTORY_MESSAGE,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HistorySummary::Empty { .. })
    }
}

/// Append-only log of analysed messages. Entries are never evicted, so the
/// log grows for the lifetime of the process.
#[derive(Debug, Default)]
pub struct HistoryTracker {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HistoryEntry>> {
        // Entries are pushed whole, so a poisoned lock still holds a valid log.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn record(&self, text: &str, result: &SentimentResult) {
        let entry = HistoryEntry {
            text: snippet(text),
            sentiment: result.sentiment,
            compound: result.compound,
            timestamp: result.timestamp,
        };
        self.lock().push(entry);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot in insertion order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.lock().clone()
    }

    pub fn summarize(&self) -> HistorySummary {
        let entries = self.lock();
        if entries.is_empty() {
            return HistorySummary::empty();
        }

        let count = |label: SentimentLabel| entries.iter().filter(|e| e.sentiment == label).count();
        let average = entries.iter().map(|e| e.compound).sum::<f64>() / entries.len() as f64;
        let overall_mood = if average > MOOD_THRESHOLD {
            SentimentLabel::Positive
        } else if average < -MOOD_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        HistorySummary::Summary(MoodSummary {
            total_messages: entries.len(),
            positive: count(SentimentLabel::Positive),
            negative: count(SentimentLabel::Negative),
            neutral: count(SentimentLabel::Neutral),
            average_sentiment: average,
            overall_mood,
        })
    }
}

/// First `SNIPPET_CHARS` characters, plus "..." when anything was cut.
pub fn snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::emotion::EmotionSet;

    fn result(compound: f64) -> SentimentResult {
        let label = SentimentLabel::from_compound(compound);
        SentimentResult {
            sentiment: label,
            emoji: label.emoji().to_string(),
            compound,
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            polarity: 0.0,
            subjectivity: 0.0,
            emotions: EmotionSet::default(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_history_returns_sentinel() {
        let tracker = HistoryTracker::new();
        let summary = tracker.summarize();
        assert!(summary.is_empty());
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            serde_json::json!({ "message": "No conversation history yet." })
        );
    }

    #[test]
    fn snippet_truncates_by_characters() {
        assert_eq!(snippet("short"), "short");
        let exact = "a".repeat(50);
        assert_eq!(snippet(&exact), exact);
        let long = "b".repeat(51);
        assert_eq!(snippet(&long), format!("{}...", "b".repeat(50)));
        // multibyte characters are not split
        let accents = "é".repeat(60);
        assert_eq!(snippet(&accents).chars().count(), 53);
    }

    #[test]
    fn summary_counts_and_mood() {
        let tracker = HistoryTracker::new();
        tracker.record("great", &result(0.8));
        tracker.record("fine", &result(0.6));
        tracker.record("meh", &result(0.0));
        tracker.record("bad", &result(-0.4));

        match tracker.summarize() {
            HistorySummary::Summary(s) => {
                assert_eq!(s.total_messages, 4);
                assert_eq!(s.positive, 2);
                assert_eq!(s.negative, 1);
                assert_eq!(s.neutral, 1);
                assert!((s.average_sentiment - 0.25).abs() < 1e-9);
                assert_eq!(s.overall_mood, SentimentLabel::Positive);
            }
            other => panic!("expected a summary, got {other:?}"),
        }
    }

    #[test]
    fn mood_thresholds_are_exclusive() {
        let tracker = HistoryTracker::new();
        tracker.record("x", &result(0.1));
        match tracker.summarize() {
            HistorySummary::Summary(s) => assert_eq!(s.overall_mood, SentimentLabel::Neutral),
            other => panic!("expected a summary, got {other:?}"),
        }

        let tracker = HistoryTracker::new();
        tracker.record("x", &result(-0.3));
        match tracker.summarize() {
            HistorySummary::Summary(s) => assert_eq!(s.overall_mood, SentimentLabel::Negative),
            other => panic!("expected a summary, got {other:?}"),
        }
    }

    #[test]
    fn entries_keep_insertion_order() {
        let tracker = HistoryTracker::new();
        for i in 0..5 {
            tracker.record(&format!("message {i}"), &result(0.0));
        }
        let texts: Vec<_> = tracker.entries().into_iter().map(|e| e.text).collect();
        assert_eq!(
            texts,
            ["message 0", "message 1", "message 2", "message 3", "message 4"]
        );
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let tracker = std::sync::Arc::new(HistoryTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let t = tracker.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        t.record("hello", &result(0.2));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(tracker.len(), 400);
    }
}
