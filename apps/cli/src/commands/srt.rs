use std::path::Path;

use crate::output;

pub fn run(input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let content = super::read_text(input)?;
    let document = hypr_srt::parse(&content);

    for skipped in &document.skipped {
        tracing::warn!(%skipped, "subtitle_block_skipped");
    }
    if document.cues.is_empty() {
        anyhow::bail!("{} contains no usable cues", input.display());
    }

    tracing::info!(
        cues = document.cues.len(),
        skipped = document.skipped.len(),
        "subtitles_normalized"
    );
    output::emit(output, &hypr_srt::serialize(&document.cues))
}
