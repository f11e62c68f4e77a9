use anyhow::Result;
use colored::*;

use empathic_finance::sentiment::{SentimentAnalyzer, SentimentLabel, SentimentResult};

const SAMPLE_MESSAGES: [&str; 6] = [
    "I'm so worried about my debt",
    "Thank you so much for your help!",
    "I don't understand how to budget",
    "This is really frustrating, I can't save any money",
    "I'm excited to start investing!",
    "I think I need to check my balance",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Messages on the command line replace the built-in samples
    let args: Vec<String> = std::env::args().skip(1).collect();
    let messages: Vec<&str> = if args.is_empty() {
        SAMPLE_MESSAGES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let analyzer = SentimentAnalyzer::new();

    println!("{}\n", "=== Sentiment Analysis Test ===".bright_cyan().bold());
    for msg in messages {
        let result = analyzer.analyze(msg);
        display_result(msg, &result, analyzer.empathetic_prefix(&result));
    }

    println!("{}", "=== Conversation Summary ===".bright_cyan().bold());
    println!("{}", serde_json::to_string_pretty(&analyzer.summary())?);
    Ok(())
}

fn display_result(msg: &str, result: &SentimentResult, prefix: &str) {
    let label = match result.sentiment {
        SentimentLabel::Positive => result.sentiment.to_string().green(),
        SentimentLabel::Negative => result.sentiment.to_string().red(),
        SentimentLabel::Neutral => result.sentiment.to_string().white(),
    };
    let emotions = if result.emotions.is_empty() {
        "None detected".dimmed().to_string()
    } else {
        result
            .emotions
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ")
            .yellow()
            .to_string()
    };

    println!("{} {}", "Message:".bold(), msg);
    println!(
        "{} {} {} (compound: {:.2})",
        "Sentiment:".bold(),
        label,
        result.emoji,
        result.compound
    );
    println!("{} {}", "Emotions:".bold(), emotions);
    println!("{} {}", "Response Prefix:".bold(), prefix.bright_yellow());
    println!();
}
