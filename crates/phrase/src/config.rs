use serde::Deserialize;

const DEFAULT_MAX_WORDS: usize = 5;
const DEFAULT_PAUSE_BREAK_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SegmenterConfig {
    /// A phrase holding this many events is closed.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// A silence longer than this before the next event closes the phrase.
    #[serde(default = "default_pause_break_ms")]
    pub pause_break_ms: u64,
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

fn default_pause_break_ms() -> u64 {
    DEFAULT_PAUSE_BREAK_MS
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            pause_break_ms: DEFAULT_PAUSE_BREAK_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: SegmenterConfig = serde_json::from_str(r#"{"max_words": 8}"#).unwrap();
        assert_eq!(config.max_words, 8);
        assert_eq!(config.pause_break_ms, 300);
    }
}
