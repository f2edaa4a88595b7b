use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

mod chart;
mod lexicon;
mod nlp;

use nlp::sentiment::{self, Polarity, SentimentScores};

#[derive(Parser)]
#[command(
    name = "emograph",
    about = "Chart the emotional vocabulary of a text file and report its sentiment"
)]
struct Cli {
    /// Text file to analyze (plain text, or PDF)
    #[arg(short, long, default_value = "read.txt")]
    text: PathBuf,
    /// Emotion lexicon file, one `word:emotion` entry per line
    #[arg(short, long, default_value = "emotions.txt")]
    lexicon: PathBuf,
    /// Language used for stopword filtering
    #[arg(long, default_value = "english")]
    language: String,
    /// Output path for the rendered bar chart
    #[arg(short, long, default_value = "graph.png")]
    out: PathBuf,
    /// Write a JSON report of the analysis to this path
    #[arg(short, long)]
    report: Option<PathBuf>,
}

#[derive(Serialize, Debug)]
struct EmotionEntry {
    emotion: String,
    count: usize,
    polarity: Polarity,
}

#[derive(Serialize, Debug)]
struct DocumentSentiment {
    label: String,
    scores: SentimentScores,
}

#[derive(Serialize, Debug)]
struct Report {
    emotions: Vec<EmotionEntry>,
    average: Option<f64>,
    document: DocumentSentiment,
}

fn read_file_content(p: &Path) -> Result<String> {
    let ext = p.extension().and_then(|s| s.to_str()).unwrap_or("");
    if ext == "pdf" {
        pdf_extract::extract_text(p)
            .map_err(|e| anyhow!("PDF extraction failed for {}: {}", p.display(), e))
    } else {
        fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
    }
}

fn document_polarity(scores: &SentimentScores) -> Polarity {
    if scores.neg > scores.pos {
        Polarity::Negative
    } else if scores.pos > scores.neg {
        Polarity::Positive
    } else {
        Polarity::Neutral
    }
}

fn sentiment_label(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Positive => "Positive Sentiment",
        Polarity::Negative => "Negative Sentiment",
        Polarity::Neutral => "Neutral Sentiment",
    }
}

fn print_sentiment(label: &str, polarity: Polarity) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let color = match polarity {
        Polarity::Positive => Color::Green,
        Polarity::Negative => Color::Red,
        Polarity::Neutral => Color::Ansi256(8),
    };
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    writeln!(stdout, "{}", label)?;
    stdout.reset()?;
    Ok(())
}

fn average_count(counts: &[(String, usize)]) -> Option<f64> {
    if counts.is_empty() {
        None
    } else {
        Some(counts.iter().map(|(_, c)| *c as f64).sum::<f64>() / counts.len() as f64)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_file_content(&cli.text)?;

    let tokens = nlp::tokenize(&text);
    let filtered = nlp::filter_stopwords(tokens, &cli.language)?;
    log::debug!("{} tokens survived stopword filtering", filtered.len());
    let kept: HashSet<String> = filtered.into_iter().collect();

    let emotions = lexicon::parse_emotions(&cli.lexicon, &kept)?;
    let counts = lexicon::count_emotions(&emotions);
    let polarities: Vec<Polarity> = counts
        .iter()
        .map(|(emotion, _)| sentiment::classify(emotion))
        .collect();

    if counts.is_empty() {
        println!("No emotions were found to calculate the average.");
    }
    chart::render(&counts, &polarities, &cli.out)?;
    println!("Wrote chart to {}", cli.out.display());

    let scores = sentiment::polarity_scores(&text);
    let polarity = document_polarity(&scores);
    let label = sentiment_label(polarity);
    print_sentiment(label, polarity)?;

    if let Some(report_path) = &cli.report {
        let report = Report {
            emotions: counts
                .iter()
                .zip(&polarities)
                .map(|((emotion, count), polarity)| EmotionEntry {
                    emotion: emotion.clone(),
                    count: *count,
                    polarity: *polarity,
                })
                .collect(),
            average: average_count(&counts),
            document: DocumentSentiment {
                label: label.to_string(),
                scores,
            },
        };
        let fout = fs::File::create(report_path)
            .with_context(|| format!("failed to create {}", report_path.display()))?;
        serde_json::to_writer_pretty(fout, &report)?;
        println!("Wrote report to {}", report_path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(&cli)
}
