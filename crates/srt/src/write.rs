use std::fmt::Write;

use crate::Cue;
use crate::time::format_time;

/// Render cues as SRT. Stored `index` values are ignored; blocks are
/// numbered from 1 in slice order.
pub fn serialize(cues: &[Cue]) -> String {
    let mut out = String::new();
    for (i, cue) in cues.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_time(cue.start_ms),
            format_time(cue.end_ms),
            cue.text
        );
    }
    out
}
