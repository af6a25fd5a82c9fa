use serde::{Deserialize, Serialize};

/// 100-nanosecond ticks per millisecond, the unit synthesis engines report
/// word boundaries in.
pub const TICKS_PER_MS: u64 = 10_000;

/// Timing of one spoken token, as reported by the synthesis engine.
///
/// `offset` and `duration` are in 100ns ticks relative to the start of the
/// segment that produced the event. Within one segment offsets are
/// non-decreasing in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEvent {
    pub token: String,
    pub offset: u64,
    pub duration: u64,
}

impl WordEvent {
    pub fn new(token: impl Into<String>, offset: u64, duration: u64) -> Self {
        Self {
            token: token.into(),
            offset,
            duration,
        }
    }

    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.duration)
    }

    /// Move the event later on the timeline by `ms` milliseconds.
    pub fn shifted_ms(mut self, ms: u64) -> Self {
        self.offset = self.offset.saturating_add(ms.saturating_mul(TICKS_PER_MS));
        self
    }
}

pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks / TICKS_PER_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_converts_ms_to_ticks() {
        let event = WordEvent::new("hi", 5_000_000, 1_000_000).shifted_ms(1_500);
        assert_eq!(event.offset, 20_000_000);
        assert_eq!(event.duration, 1_000_000);
        assert_eq!(ticks_to_ms(event.offset), 2_000);
    }

    #[test]
    fn end_is_offset_plus_duration() {
        assert_eq!(WordEvent::new("x", 10, 5).end(), 15);
        assert_eq!(WordEvent::new("x", u64::MAX, 5).end(), u64::MAX);
    }

    #[test]
    fn ticks_truncate_to_whole_ms() {
        assert_eq!(ticks_to_ms(9_999), 0);
        assert_eq!(ticks_to_ms(10_000), 1);
        assert_eq!(ticks_to_ms(25_001), 2);
    }
}
