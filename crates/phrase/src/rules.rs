use hypr_tts_interface::TICKS_PER_MS;

use crate::SegmenterConfig;

const CLOSING_PUNCTUATION: [char; 6] = ['.', '!', '?', ':', ';', ','];

/// Why a phrase was closed. Variants are listed in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakRule {
    Punctuation,
    LastEvent,
    MaxWords,
    Pause,
}

/// State seen by the break decision right after an event was appended.
#[derive(Debug, Clone, Copy)]
pub struct BreakContext<'a> {
    pub token: &'a str,
    /// Events in the phrase, including the one just appended.
    pub phrase_len: usize,
    /// End of the event just appended, in ticks.
    pub event_end: u64,
    /// Offset of the following event in ticks, `None` for the last event.
    pub next_offset: Option<u64>,
}

/// First matching rule, or `None` to keep accumulating.
pub fn break_rule(ctx: &BreakContext<'_>, config: &SegmenterConfig) -> Option<BreakRule> {
    if ctx.token.ends_with(CLOSING_PUNCTUATION) {
        return Some(BreakRule::Punctuation);
    }

    let Some(next_offset) = ctx.next_offset else {
        return Some(BreakRule::LastEvent);
    };

    if ctx.phrase_len >= config.max_words {
        return Some(BreakRule::MaxWords);
    }

    let pause_ticks = config.pause_break_ms.saturating_mul(TICKS_PER_MS);
    if next_offset.saturating_sub(ctx.event_end) > pause_ticks {
        return Some(BreakRule::Pause);
    }

    None
}

pub fn should_break(ctx: &BreakContext<'_>, config: &SegmenterConfig) -> bool {
    break_rule(ctx, config).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = TICKS_PER_MS;

    fn ctx(token: &str, phrase_len: usize, event_end_ms: u64, next_ms: Option<u64>) -> BreakContext<'_> {
        BreakContext {
            token,
            phrase_len,
            event_end: event_end_ms * MS,
            next_offset: next_ms.map(|n| n * MS),
        }
    }

    fn rule(c: BreakContext<'_>) -> Option<BreakRule> {
        break_rule(&c, &SegmenterConfig::default())
    }

    #[test]
    fn punctuation_wins_over_everything() {
        assert_eq!(rule(ctx("end.", 9, 100, Some(10_000))), Some(BreakRule::Punctuation));
        assert_eq!(rule(ctx("well,", 1, 100, None)), Some(BreakRule::Punctuation));
        for token in ["a!", "b?", "c:", "d;", ","] {
            assert_eq!(rule(ctx(token, 1, 0, Some(0))), Some(BreakRule::Punctuation));
        }
    }

    #[test]
    fn leading_punctuation_does_not_break() {
        assert_eq!(rule(ctx(".5", 1, 0, Some(0))), None);
    }

    #[test]
    fn last_event_breaks() {
        assert_eq!(rule(ctx("word", 1, 100, None)), Some(BreakRule::LastEvent));
    }

    #[test]
    fn word_cap_before_pause() {
        assert_eq!(rule(ctx("w", 4, 100, Some(100))), None);
        assert_eq!(rule(ctx("w", 5, 100, Some(100))), Some(BreakRule::MaxWords));
        assert_eq!(rule(ctx("w", 5, 100, Some(1_000))), Some(BreakRule::MaxWords));
    }

    #[test]
    fn pause_must_exceed_threshold() {
        assert_eq!(rule(ctx("w", 1, 100, Some(400))), None);
        assert_eq!(
            break_rule(
                &BreakContext {
                    token: "w",
                    phrase_len: 1,
                    event_end: 100 * MS,
                    next_offset: Some(400 * MS + 1),
                },
                &SegmenterConfig::default()
            ),
            Some(BreakRule::Pause)
        );
    }

    #[test]
    fn overlapping_next_event_is_not_a_pause() {
        assert_eq!(rule(ctx("w", 1, 500, Some(200))), None);
    }

    #[test]
    fn overrides_apply() {
        let config = SegmenterConfig {
            max_words: 2,
            pause_break_ms: 50,
        };
        assert!(should_break(&ctx("w", 2, 0, Some(0)), &config));
        assert!(should_break(&ctx("w", 1, 0, Some(51)), &config));
        assert!(!should_break(&ctx("w", 1, 0, Some(50)), &config));
    }
}
