use std::sync::LazyLock;

use regex::Regex;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

pub(crate) const TIMESTAMP: &str = r"[0-9]{2,}:[0-9]{2}:[0-9]{2},[0-9]{3}";

static TIMESTAMP_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2,}):([0-9]{2}):([0-9]{2}),([0-9]{3})$").unwrap());

/// `HH:MM:SS,mmm`, zero padded. Hours widen past two digits instead of
/// wrapping.
pub fn format_time(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Inverse of [`format_time`]. Returns `None` for anything that is not a
/// fixed-width SRT timestamp or that overflows.
pub fn time_to_ms(timestamp: &str) -> Option<u64> {
    let caps = TIMESTAMP_PARTS.captures(timestamp.trim())?;
    let field = |i: usize| caps[i].parse::<u64>().ok();

    field(1)?
        .checked_mul(MS_PER_HOUR)?
        .checked_add(field(2)? * MS_PER_MINUTE)?
        .checked_add(field(3)? * MS_PER_SECOND)?
        .checked_add(field(4)?)
}
