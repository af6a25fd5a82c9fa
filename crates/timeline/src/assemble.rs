use bytes::Bytes;
use hypr_audio_utils::{PcmBuffer, decode};
use hypr_phrase::PhraseSegmenter;
use hypr_srt::{Cue, renumber};
use hypr_tts_interface::WordEvent;

use crate::{Error, TimelineConfig};

/// One synthesized piece of the final timeline.
#[derive(Debug, Clone)]
pub struct SynthesizedSegment {
    /// Compressed audio as returned by the engine.
    pub audio: Bytes,
    /// Word boundaries relative to the start of this segment. Empty when no
    /// subtitles were requested.
    pub events: Vec<WordEvent>,
    /// Speaker label prefixed to this segment's cues.
    pub label: Option<String>,
}

impl SynthesizedSegment {
    pub fn new(audio: Bytes) -> Self {
        Self {
            audio,
            events: Vec::new(),
            label: None,
        }
    }

    pub fn with_events(mut self, events: Vec<WordEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// How segments are placed on the timeline.
#[derive(Debug, Clone)]
pub enum TimelinePolicy {
    /// Segment `i` starts at `cues[i].start_ms`; segments may overlap. The
    /// cues are the output subtitles.
    Overlay(Vec<Cue>),
    /// Segments play back to back in order; subtitles come from each
    /// segment's word events, shifted by the audio that precedes it.
    Sequential,
}

impl TimelinePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Overlay(_) => "overlay",
            Self::Sequential => "sequential",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Timeline {
    pub audio: PcmBuffer,
    pub cues: Vec<Cue>,
}

impl Timeline {
    pub fn duration_ms(&self) -> u64 {
        self.audio.duration_ms()
    }
}

/// Start offset of every segment when played back to back.
pub fn sequential_offsets(durations_ms: &[u64]) -> Vec<u64> {
    durations_ms
        .iter()
        .scan(0u64, |acc, d| {
            let start = *acc;
            *acc = acc.saturating_add(*d);
            Some(start)
        })
        .collect()
}

/// Merge `segments` into one buffer and one cue list. Consumes the inputs;
/// any segment that fails to decode aborts the whole assembly.
pub fn assemble(
    policy: TimelinePolicy,
    segments: Vec<SynthesizedSegment>,
    config: &TimelineConfig,
) -> Result<Timeline, Error> {
    let policy_name = policy.name();
    let segment_count = segments.len();

    let timeline = match policy {
        TimelinePolicy::Overlay(cues) => overlay(cues, segments, config)?,
        TimelinePolicy::Sequential => sequential(segments, config)?,
    };

    tracing::info!(
        policy = policy_name,
        segments = segment_count,
        cues = timeline.cues.len(),
        duration_ms = timeline.duration_ms(),
        "timeline_assembled"
    );

    Ok(timeline)
}

fn decode_all(segments: &[SynthesizedSegment]) -> Result<Vec<PcmBuffer>, Error> {
    segments
        .iter()
        .enumerate()
        .map(|(segment, s)| decode(&s.audio).map_err(|source| Error::Decode { segment, source }))
        .collect()
}

fn overlay(
    mut cues: Vec<Cue>,
    segments: Vec<SynthesizedSegment>,
    config: &TimelineConfig,
) -> Result<Timeline, Error> {
    if cues.len() != segments.len() {
        return Err(Error::CueCountMismatch {
            cues: cues.len(),
            segments: segments.len(),
        });
    }

    let decoded = decode_all(&segments)?;
    drop(segments);

    let Some(first) = decoded.first() else {
        return Err(Error::Empty);
    };

    let max_end = cues.iter().map(|c| c.end_ms).max().unwrap_or(0);
    let too_long = || Error::TimelineTooLong {
        end_ms: max_end,
        padding_ms: config.tail_padding_ms,
        limit_ms: config.max_duration_ms,
    };
    let total_ms = max_end
        .checked_add(config.tail_padding_ms)
        .filter(|&ms| ms <= config.max_duration_ms)
        .ok_or_else(too_long)?;
    let mut audio = PcmBuffer::silent(total_ms, first.metadata()).map_err(|_| too_long())?;

    for (pcm, cue) in decoded.iter().zip(&cues) {
        if pcm.duration_ms() > cue.duration_ms() {
            tracing::debug!(
                cue = cue.index,
                cue_ms = cue.duration_ms(),
                audio_ms = pcm.duration_ms(),
                "segment_overruns_cue"
            );
        }
        audio.overlay(pcm, cue.start_ms);
    }

    cues.sort_by_key(|c| c.start_ms);
    renumber(&mut cues);

    Ok(Timeline { audio, cues })
}

fn sequential(
    segments: Vec<SynthesizedSegment>,
    config: &TimelineConfig,
) -> Result<Timeline, Error> {
    let decoded = decode_all(&segments)?;
    let durations: Vec<u64> = decoded.iter().map(PcmBuffer::duration_ms).collect();
    let offsets = sequential_offsets(&durations);
    let segmenter = PhraseSegmenter::new(config.segmenter.clone());

    let mut cues = Vec::new();
    for (segment, offset_ms) in segments.into_iter().zip(&offsets) {
        let events: Vec<WordEvent> = segment
            .events
            .into_iter()
            .map(|e| e.shifted_ms(*offset_ms))
            .collect();
        cues.extend(segmenter.segment(&events, segment.label.as_deref()));
    }
    renumber(&mut cues);

    let mut pieces = decoded.into_iter();
    let Some(mut audio) = pieces.next() else {
        return Err(Error::Empty);
    };
    for pcm in pieces {
        audio.append(pcm);
    }

    Ok(Timeline { audio, cues })
}
