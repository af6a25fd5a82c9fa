#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("segment {segment}: {source}")]
    Decode {
        segment: usize,
        #[source]
        source: hypr_audio_utils::Error,
    },
    #[error("{cues} cues for {segments} audio segments")]
    CueCountMismatch { cues: usize, segments: usize },
    #[error("timeline of {end_ms} ms plus {padding_ms} ms padding exceeds the {limit_ms} ms limit")]
    TimelineTooLong {
        end_ms: u64,
        padding_ms: u64,
        limit_ms: u64,
    },
    #[error("nothing to assemble")]
    Empty,
}
