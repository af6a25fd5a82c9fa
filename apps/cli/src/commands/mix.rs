use std::path::{Path, PathBuf};

use anyhow::Context;

use hypr_audio_utils::AudioFormat;
use hypr_pipeline::PipelineConfig;
use hypr_timeline::{SynthesizedSegment, TimelinePolicy};

use crate::output;

pub fn run(
    srt: &Path,
    segments_dir: &Path,
    output_path: &Path,
    config: &PipelineConfig,
) -> anyhow::Result<()> {
    let format = AudioFormat::from_path(output_path).unwrap_or(config.output_format);
    let encoded = mix(srt, segments_dir, format, config)?;
    tracing::info!(content_type = format.content_type(), "mix_encoded");
    output::write_atomic(output_path, &encoded)
}

fn mix(
    srt: &Path,
    segments_dir: &Path,
    format: AudioFormat,
    config: &PipelineConfig,
) -> anyhow::Result<bytes::Bytes> {
    let document = hypr_srt::parse(&super::read_text(srt)?);
    for skipped in &document.skipped {
        tracing::warn!(%skipped, "subtitle_block_skipped");
    }

    let files = segment_files(segments_dir)?;
    if files.len() != document.cues.len() {
        anyhow::bail!(
            "{} has {} cues but {} holds {} audio files",
            srt.display(),
            document.cues.len(),
            segments_dir.display(),
            files.len()
        );
    }

    let segments = files
        .iter()
        .map(|path| {
            std::fs::read(path)
                .map(|audio| SynthesizedSegment::new(audio.into()))
                .with_context(|| format!("reading {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let timeline = hypr_timeline::assemble(
        TimelinePolicy::Overlay(document.cues),
        segments,
        &config.timeline,
    )?;
    Ok(hypr_audio_utils::encode(&timeline.audio, format)?)
}

fn segment_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && is_audio(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            matches!(
                e.to_ascii_lowercase().as_str(),
                "wav" | "ogg" | "mp3" | "flac" | "m4a"
            )
        })
}
