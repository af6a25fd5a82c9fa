use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, SpeakerId, SpeakerSegment};

static SPEAKER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Speaker\s*[0-9]+|S[0-9]+)\s*:\s*(.*)$").unwrap());

/// Split `Speaker1: …` / `S2: …` annotated text into segments in document
/// order.
///
/// A speaker line starts a new segment; following unannotated lines extend
/// it. Blank lines never end a segment. Text before the first speaker line
/// and segments that end up empty are dropped.
pub fn parse(text: &str) -> Vec<SpeakerSegment> {
    let mut segments = Vec::new();
    let mut current: Option<(SpeakerId, Vec<&str>)> = None;

    for line in text.lines().map(str::trim) {
        if let Some(caps) = SPEAKER_LINE.captures(line) {
            flush(&mut segments, current.take());

            let speaker = SpeakerId::from_label(&caps[1]);
            let rest = caps.get(2).map_or("", |m| m.as_str().trim());
            let fragments = if rest.is_empty() { vec![] } else { vec![rest] };
            current = Some((speaker, fragments));
        } else if !line.is_empty()
            && let Some((_, fragments)) = current.as_mut()
        {
            fragments.push(line);
        }
    }

    flush(&mut segments, current);
    segments
}

/// Like [`parse`], but an input without any usable segment is an error.
pub fn parse_script(text: &str) -> Result<Vec<SpeakerSegment>, Error> {
    let segments = parse(text);
    if segments.is_empty() {
        return Err(Error::NoSegments);
    }
    Ok(segments)
}

fn flush(segments: &mut Vec<SpeakerSegment>, pending: Option<(SpeakerId, Vec<&str>)>) {
    let Some((speaker, fragments)) = pending else {
        return;
    };

    let text = fragments.join(" ");
    if !text.is_empty() {
        segments.push(SpeakerSegment { speaker, text });
    }
}
