use hypr_audio_utils::AudioFormat;
use hypr_timeline::TimelineConfig;
use serde::Deserialize;

const DEFAULT_MAX_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub output_format: AudioFormat,
    /// Upper bound on synthesis calls in flight for one conversion.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

fn default_max_concurrency() -> usize {
    DEFAULT_MAX_CONCURRENCY
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            output_format: AudioFormat::default(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}
