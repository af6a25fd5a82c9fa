use std::path::Path;

use serde::Deserialize;

use hypr_audio_utils::AudioFormat;
use hypr_pipeline::PipelineConfig;

pub const PREFIX: &str = "NARRATE_";

/// `NARRATE_*` overrides, all optional.
#[derive(Debug, Default, Deserialize)]
pub struct Env {
    pub max_words: Option<usize>,
    pub pause_break_ms: Option<u64>,
    pub tail_padding_ms: Option<u64>,
    pub max_duration_ms: Option<u64>,
    pub output_format: Option<AudioFormat>,
    pub max_concurrency: Option<usize>,
}

impl Env {
    pub fn load() -> anyhow::Result<Self> {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_path(manifest_dir.join(".env"));
        let _ = dotenvy::dotenv();

        Ok(envy::prefixed(PREFIX).from_env()?)
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();

        if let Some(v) = self.max_words {
            config.timeline.segmenter.max_words = v;
        }
        if let Some(v) = self.pause_break_ms {
            config.timeline.segmenter.pause_break_ms = v;
        }
        if let Some(v) = self.tail_padding_ms {
            config.timeline.tail_padding_ms = v;
        }
        if let Some(v) = self.max_duration_ms {
            config.timeline.max_duration_ms = v;
        }
        if let Some(v) = self.output_format {
            config.output_format = v;
        }
        if let Some(v) = self.max_concurrency {
            config.max_concurrency = v;
        }

        config
    }
}
