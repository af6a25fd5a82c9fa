mod commands;
mod env;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "narrate", about = "Subtitle and speaker-script tooling for narration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a subtitle file: renumber cues and drop malformed blocks.
    Srt {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the speaker segments of a script and the voice slot each uses.
    Speakers {
        input: PathBuf,
        /// Number of configured voices.
        #[arg(long, default_value_t = 2)]
        slots: usize,
    },
    /// Turn word-boundary events (JSON) into subtitles.
    Segment {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Prefix every cue with `[LABEL]`.
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        max_words: Option<usize>,
        #[arg(long)]
        pause_break_ms: Option<u64>,
    },
    /// Lay pre-rendered segment audio onto a subtitle timeline and encode it.
    Mix {
        /// Subtitle file; cue `i` pairs with the `i`-th audio file.
        #[arg(long)]
        srt: PathBuf,
        /// Directory of segment audio files, taken in file-name order.
        #[arg(long)]
        segments: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let env = env::Env::load()?;
    let config = env.pipeline_config();

    match Cli::parse().command {
        Command::Srt { input, output } => commands::srt::run(&input, output.as_deref()),
        Command::Speakers { input, slots } => commands::speakers::run(&input, slots),
        Command::Segment {
            input,
            output,
            label,
            max_words,
            pause_break_ms,
        } => {
            let mut segmenter = config.timeline.segmenter;
            if let Some(max_words) = max_words {
                segmenter.max_words = max_words;
            }
            if let Some(pause_break_ms) = pause_break_ms {
                segmenter.pause_break_ms = pause_break_ms;
            }
            commands::segment::run(&input, output.as_deref(), label.as_deref(), segmenter)
        }
        Command::Mix {
            srt,
            segments,
            output,
        } => commands::mix::run(&srt, &segments, &output, &config),
    }
}
