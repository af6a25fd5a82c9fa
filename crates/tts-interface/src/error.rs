#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("rate {0}% is outside [-50, 50]")]
    RateOutOfRange(i32),
    #[error("pitch {0}Hz is outside [-20, 20]")]
    PitchOutOfRange(i32),
    #[error("segment text is empty")]
    EmptyText,
    #[error("voice is empty")]
    EmptyVoice,
}

pub const RATE_PERCENT_RANGE: (i32, i32) = (-50, 50);
pub const PITCH_HZ_RANGE: (i32, i32) = (-20, 20);
