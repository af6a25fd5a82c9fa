use std::sync::LazyLock;

use regex::Regex;

use crate::time::{TIMESTAMP, time_to_ms};
use crate::{Cue, SkipReason, SkippedBlock};

static TIMING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({TIMESTAMP})\s*-->\s*({TIMESTAMP})")).unwrap()
});

static SUBTITLE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^[0-9]+\s*\n{TIMESTAMP}\s*-->\s*{TIMESTAMP}")).unwrap()
});

/// Result of [`parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrtDocument {
    /// Every cue's text in file order, joined by single spaces.
    pub text: String,
    pub cues: Vec<Cue>,
    pub skipped: Vec<SkippedBlock>,
}

/// Whether `content` contains, at the start of some line, an index line
/// directly followed by a timing line.
pub fn is_subtitle_shaped(content: &str) -> bool {
    SUBTITLE_SHAPE.is_match(strip_bom(content))
}

pub fn parse(content: &str) -> SrtDocument {
    let lines: Vec<&str> = strip_bom(content).split('\n').collect();

    let mut cues: Vec<Cue> = Vec::new();
    let mut skipped = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_index_line(lines[i]) {
            i += 1;
            continue;
        }

        let index_line = i + 1;
        i += 1;
        let Some(timing) = lines.get(i) else {
            break;
        };

        // The timing line is left unconsumed on failure: it may itself be
        // the index line of the next block.
        let Some((start_ms, end_ms)) = parse_timing_line(timing) else {
            skipped.push(SkippedBlock {
                line: index_line,
                reason: SkipReason::MalformedTiming,
            });
            continue;
        };
        i += 1;

        let mut fragments = Vec::new();
        while let Some(line) = lines.get(i).map(|l| l.trim())
            && !line.is_empty()
        {
            fragments.push(line);
            i += 1;
        }

        let reason = if fragments.is_empty() {
            Some(SkipReason::MissingText)
        } else if end_ms <= start_ms {
            Some(SkipReason::EndNotAfterStart)
        } else {
            None
        };

        if let Some(reason) = reason {
            skipped.push(SkippedBlock {
                line: index_line,
                reason,
            });
            continue;
        }

        cues.push(Cue {
            index: cues.len() + 1,
            start_ms,
            end_ms,
            text: fragments.join(" "),
        });
    }

    let text = cues
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    SrtDocument {
        text,
        cues,
        skipped,
    }
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

fn is_index_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

fn parse_timing_line(line: &str) -> Option<(u64, u64)> {
    let caps = TIMING_LINE.captures(line)?;
    Some((time_to_ms(&caps[1])?, time_to_ms(&caps[2])?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_blocks_and_joins_multiline_text() {
        let doc = parse(indoc! {"
            1
            00:00:00,112 --> 00:00:01,647
            Hello how
              are you doing

            2
            00:00:01,617 --> 00:00:02,000
            I'm fine
        "});

        assert!(doc.skipped.is_empty());
        assert_eq!(
            doc.cues,
            vec![
                Cue {
                    index: 1,
                    start_ms: 112,
                    end_ms: 1_647,
                    text: "Hello how are you doing".into(),
                },
                Cue {
                    index: 2,
                    start_ms: 1_617,
                    end_ms: 2_000,
                    text: "I'm fine".into(),
                },
            ]
        );
        assert_eq!(doc.text, "Hello how are you doing I'm fine");
    }

    #[test]
    fn malformed_timing_block_is_skipped() {
        let doc = parse("1\nnot-a-timestamp\ntext\n\n");
        assert!(doc.cues.is_empty());
        assert_eq!(
            doc.skipped,
            vec![SkippedBlock {
                line: 1,
                reason: SkipReason::MalformedTiming,
            }]
        );
    }

    #[test]
    fn malformed_block_does_not_hide_following_block() {
        let doc = parse(indoc! {"
            1
            garbage
            2
            00:00:01,000 --> 00:00:02,000
            kept
        "});
        assert_eq!(doc.cues.len(), 1);
        assert_eq!(doc.cues[0].text, "kept");
        assert_eq!(doc.cues[0].index, 1);
        assert_eq!(doc.skipped.len(), 1);
    }

    #[test]
    fn stray_lines_are_ignored() {
        let doc = parse(indoc! {"
            WEBVTT-ish header


            7
            00:00:05,000 --> 00:00:06,500
            only cue
            trailing
        "});
        assert_eq!(doc.cues.len(), 1);
        assert_eq!(doc.cues[0].text, "only cue trailing");
        assert!(doc.skipped.is_empty());
    }

    #[test]
    fn empty_and_inverted_blocks_are_skipped() {
        let doc = parse(indoc! {"
            1
            00:00:01,000 --> 00:00:02,000

            2
            00:00:03,000 --> 00:00:03,000
            zero length
        "});
        assert!(doc.cues.is_empty());
        assert_eq!(
            doc.skipped.iter().map(|s| s.reason).collect::<Vec<_>>(),
            vec![SkipReason::MissingText, SkipReason::EndNotAfterStart]
        );
        assert_eq!(doc.skipped[1].line, 4);
    }

    #[test]
    fn accepts_crlf_and_bom() {
        let doc = parse("\u{feff}1\r\n00:00:00,000 --> 00:00:01,000\r\nHi\r\n\r\n");
        assert_eq!(doc.cues.len(), 1);
        assert_eq!(doc.cues[0].text, "Hi");
        assert_eq!(doc.cues[0].end_ms, 1_000);
    }

    #[test]
    fn index_on_last_line_is_ignored() {
        let doc = parse("1\n00:00:00,000 --> 00:00:01,000\nHi\n\n2");
        assert_eq!(doc.cues.len(), 1);
        assert!(doc.skipped.is_empty());
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), SrtDocument::default());
    }

    #[test]
    fn detects_subtitle_shape() {
        assert!(is_subtitle_shaped(
            "1\n00:00:00,112 --> 00:00:01,647\nHello\n"
        ));
        assert!(is_subtitle_shaped(
            "intro text\n12 \n00:01:00,000 --> 00:01:02,000\nx"
        ));
        assert!(is_subtitle_shaped(
            "\u{feff}1\r\n00:00:00,000 --> 00:00:01,000\r\nHi"
        ));

        assert!(!is_subtitle_shaped("Hello world."));
        assert!(!is_subtitle_shaped("Speaker1: 00:00:00,000 --> 00:00:01,000"));
        assert!(!is_subtitle_shaped("1\nnot-a-timestamp\ntext"));
    }

    #[test]
    fn non_ascii_digits_are_not_indices() {
        let arabic_indic = "\u{661}\n00:00:00,000 --> 00:00:01,000\nHi\n";
        assert!(!is_subtitle_shaped(arabic_indic));
        assert!(parse(arabic_indic).cues.is_empty());

        let wide_timing = "1\n\u{660}\u{660}:00:00,000 --> 00:00:01,000\nHi\n";
        assert!(!is_subtitle_shaped(wide_timing));
    }
}
