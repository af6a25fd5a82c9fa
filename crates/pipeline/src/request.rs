use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Voice, rate and pitch for one speaker slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Short name or `"ShortName - Locale (Gender)"` label. Empty means
    /// "not selected".
    pub voice: String,
    #[serde(default)]
    pub rate_percent: i32,
    #[serde(default)]
    pub pitch_hz: i32,
}

impl VoiceSettings {
    pub fn new(voice: impl Into<String>) -> Self {
        Self {
            voice: voice.into(),
            ..Default::default()
        }
    }

    pub fn with_rate(mut self, rate_percent: i32) -> Self {
        self.rate_percent = rate_percent;
        self
    }

    pub fn with_pitch(mut self, pitch_hz: i32) -> Self {
        self.pitch_hz = pitch_hz;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content: Bytes,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn has_srt_extension(&self) -> bool {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("srt"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestedMode {
    /// Pick subtitle, speaker or plain handling from the input's shape.
    #[default]
    Auto,
    /// Always treat the text as a speaker script.
    MultiSpeaker,
}

#[derive(Debug, Clone, Default)]
pub struct ConversionRequest {
    pub text: String,
    pub upload: Option<Upload>,
    /// Slot 0 voices plain and subtitle input; speaker `N` uses slot `N-1`.
    pub voices: Vec<VoiceSettings>,
    pub generate_subtitles: bool,
    pub mode: RequestedMode,
}

impl ConversionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_voice(mut self, voice: VoiceSettings) -> Self {
        self.voices.push(voice);
        self
    }

    pub fn with_upload(mut self, upload: Upload) -> Self {
        self.upload = Some(upload);
        self
    }

    pub fn with_subtitles(mut self, generate: bool) -> Self {
        self.generate_subtitles = generate;
        self
    }

    pub fn multi_speaker(mut self) -> Self {
        self.mode = RequestedMode::MultiSpeaker;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srt_extension_is_case_insensitive() {
        assert!(Upload::new("talk.SRT", "").has_srt_extension());
        assert!(Upload::new("dir/talk.srt", "").has_srt_extension());
        assert!(!Upload::new("talk.txt", "").has_srt_extension());
        assert!(!Upload::new("srt", "").has_srt_extension());
    }
}
