use hypr_phrase::SegmenterConfig;
use serde::Deserialize;

const DEFAULT_TAIL_PADDING_MS: u64 = 1_000;
const DEFAULT_MAX_DURATION_MS: u64 = 4 * 60 * 60 * 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineConfig {
    /// Silence kept after the latest cue end in overlay mode.
    #[serde(default = "default_tail_padding_ms")]
    pub tail_padding_ms: u64,
    /// Longest overlay timeline that will be allocated.
    #[serde(default = "default_max_duration_ms")]
    pub max_duration_ms: u64,
    #[serde(default)]
    pub segmenter: SegmenterConfig,
}

fn default_tail_padding_ms() -> u64 {
    DEFAULT_TAIL_PADDING_MS
}

fn default_max_duration_ms() -> u64 {
    DEFAULT_MAX_DURATION_MS
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            tail_padding_ms: DEFAULT_TAIL_PADDING_MS,
            max_duration_ms: DEFAULT_MAX_DURATION_MS,
            segmenter: SegmenterConfig::default(),
        }
    }
}
