use std::path::Path;

use hypr_phrase::{PhraseSegmenter, SegmenterConfig};
use hypr_tts_interface::WordEvent;

use crate::output;

pub fn run(
    input: &Path,
    output: Option<&Path>,
    label: Option<&str>,
    config: SegmenterConfig,
) -> anyhow::Result<()> {
    let json = super::read_text(input)?;
    let srt = render(&json, label, config)?;
    output::emit(output, &srt)
}

fn render(json: &str, label: Option<&str>, config: SegmenterConfig) -> anyhow::Result<String> {
    let events: Vec<WordEvent> = serde_json::from_str(json)?;
    let cues = PhraseSegmenter::new(config).segment(&events, label);

    tracing::info!(events = events.len(), cues = cues.len(), "words_segmented");
    Ok(hypr_srt::serialize(&cues))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_become_cues() {
        let json = r#"[
            {"token": "Hello", "offset": 0, "duration": 5000000},
            {"token": "world", "offset": 5000000, "duration": 4000000},
            {"token": ".", "offset": 9000000, "duration": 1000000}
        ]"#;

        assert_eq!(
            render(json, Some("Speaker1"), SegmenterConfig::default()).unwrap(),
            "1\n00:00:00,000 --> 00:00:01,000\n[Speaker1] Hello world.\n\n"
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(render("{", None, SegmenterConfig::default()).is_err());
    }
}
