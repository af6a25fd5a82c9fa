use crate::{Error, PITCH_HZ_RANGE, RATE_PERCENT_RANGE, VoiceId};

/// One unit of work for the synthesis engine. Immutable once built; the
/// signed `+N%` / `+NHz` strings are only produced at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRequest {
    text: String,
    voice: VoiceId,
    rate_percent: i32,
    pitch_hz: i32,
}

impl SegmentRequest {
    pub fn new(
        text: impl Into<String>,
        voice: VoiceId,
        rate_percent: i32,
        pitch_hz: i32,
    ) -> Result<Self, Error> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        if !(RATE_PERCENT_RANGE.0..=RATE_PERCENT_RANGE.1).contains(&rate_percent) {
            return Err(Error::RateOutOfRange(rate_percent));
        }
        if !(PITCH_HZ_RANGE.0..=PITCH_HZ_RANGE.1).contains(&pitch_hz) {
            return Err(Error::PitchOutOfRange(pitch_hz));
        }

        Ok(Self {
            text,
            voice,
            rate_percent,
            pitch_hz,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> &VoiceId {
        &self.voice
    }

    pub fn rate_percent(&self) -> i32 {
        self.rate_percent
    }

    pub fn pitch_hz(&self) -> i32 {
        self.pitch_hz
    }

    pub fn rate_str(&self) -> String {
        format!("{:+}%", self.rate_percent)
    }

    pub fn pitch_str(&self) -> String {
        format!("{:+}Hz", self.pitch_hz)
    }
}
