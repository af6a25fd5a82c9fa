use hypr_srt::Cue;
use hypr_tts_interface::{WordEvent, ticks_to_ms};

use crate::rules::{BreakContext, break_rule};
use crate::SegmenterConfig;

const ATTACHING_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ':', ';'];

#[derive(Debug, Clone, Default)]
pub struct PhraseSegmenter {
    config: SegmenterConfig,
}

impl PhraseSegmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Turn one segment's word events into cues.
    ///
    /// Event timing is in ticks and cue timing in milliseconds. With a
    /// `speaker_label`, cue text is prefixed with `"[label] "`. Cues are
    /// numbered from 1; callers concatenating several segments renumber.
    pub fn segment(&self, events: &[WordEvent], speaker_label: Option<&str>) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut phrase = Phrase::default();

        for (i, event) in events.iter().enumerate() {
            phrase.push(event);

            let ctx = BreakContext {
                token: &event.token,
                phrase_len: phrase.len,
                event_end: event.end(),
                next_offset: events.get(i + 1).map(|next| next.offset),
            };

            if break_rule(&ctx, &self.config).is_some()
                && let Some(mut cue) = phrase.take(speaker_label)
            {
                cue.index = cues.len() + 1;
                cues.push(cue);
            }
        }

        cues
    }
}

#[derive(Debug, Default)]
struct Phrase {
    len: usize,
    text: String,
    start: u64,
    end: u64,
}

impl Phrase {
    fn push(&mut self, event: &WordEvent) {
        if self.len == 0 {
            self.start = event.offset;
        }
        self.len += 1;
        self.end = event.end();

        if event.token.starts_with(ATTACHING_PUNCTUATION) {
            self.text.truncate(self.text.trim_end().len());
        }
        self.text.push_str(&event.token);
        self.text.push(' ');
    }

    /// Close the phrase and reset. Phrases whose text is blank yield nothing.
    fn take(&mut self, speaker_label: Option<&str>) -> Option<Cue> {
        let phrase = std::mem::take(self);
        let text = phrase.text.trim();
        if text.is_empty() {
            return None;
        }

        let start_ms = ticks_to_ms(phrase.start);
        let end_ms = ticks_to_ms(phrase.end).max(start_ms + 1);
        let text = match speaker_label {
            Some(label) => format!("[{label}] {text}"),
            None => text.to_string(),
        };

        Some(Cue::new(start_ms, end_ms, text))
    }
}
