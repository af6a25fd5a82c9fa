use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use futures_util::{StreamExt, TryStreamExt, stream};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use hypr_audio_utils::AudioFormat;
use hypr_timeline::{SynthesizedSegment, TimelinePolicy};
use hypr_tts_interface::{SegmentRequest, SynthesisChunk, SynthesisError, Synthesizer};

use crate::{
    ConversionRequest, Error, InputError, InputMode, InputPlan, PipelineConfig, VoiceCatalog,
    VoiceSettings, detect,
};

const EXCERPT_CHARS: usize = 40;

/// Where a conversion currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    DetectingFormat,
    Planned(InputMode),
    Synthesizing,
    Assembling,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::DetectingFormat => f.write_str("detecting_format"),
            Self::Planned(mode) => write!(f, "{mode}"),
            Self::Synthesizing => f.write_str("synthesizing"),
            Self::Assembling => f.write_str("assembling"),
            Self::Done => f.write_str("done"),
        }
    }
}

/// What a successful conversion hands back to the caller.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub audio: Bytes,
    pub format: AudioFormat,
    /// Present only when subtitles were requested.
    pub subtitles: Option<String>,
    pub warning: Option<String>,
    pub mode: InputMode,
    pub duration_ms: u64,
}

struct SegmentJob {
    request: SegmentRequest,
    /// Speaker or cue plus a text excerpt, for error messages.
    context: String,
    label: Option<String>,
}

pub struct Orchestrator {
    synthesizer: Arc<dyn Synthesizer>,
    voices: VoiceCatalog,
    config: PipelineConfig,
}

impl Orchestrator {
    pub fn new(
        synthesizer: Arc<dyn Synthesizer>,
        voices: VoiceCatalog,
        config: PipelineConfig,
    ) -> Self {
        Self {
            synthesizer,
            voices,
            config,
        }
    }

    pub fn voices(&self) -> &VoiceCatalog {
        &self.voices
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub async fn convert(
        &self,
        request: ConversionRequest,
        cancel: CancellationToken,
    ) -> Result<Artifacts, Error> {
        let (progress, _) = watch::channel(Stage::Idle);
        self.convert_with_progress(request, cancel, &progress).await
    }

    /// Runs one conversion, publishing every stage change on `progress`.
    ///
    /// Nothing partial is returned: a failing or cancelled segment drops
    /// every other in-flight synthesis and all buffers collected so far.
    pub async fn convert_with_progress(
        &self,
        request: ConversionRequest,
        cancel: CancellationToken,
        progress: &watch::Sender<Stage>,
    ) -> Result<Artifacts, Error> {
        let enter = |stage: Stage| {
            tracing::debug!(%stage, "pipeline_stage");
            progress.send_replace(stage);
        };

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        enter(Stage::DetectingFormat);
        let detection = detect(&request)?;
        let mode = detection.plan.mode();
        enter(Stage::Planned(mode));

        let (policy, jobs, streaming) = self.plan(detection.plan, &request)?;
        tracing::info!(
            %mode,
            segments = jobs.len(),
            streaming,
            "conversion_planned"
        );

        enter(Stage::Synthesizing);
        let synthesis = stream::iter(jobs.iter().enumerate())
            .map(|(segment, job)| self.synthesize(segment, job, streaming))
            .buffered(self.config.max_concurrency.max(1))
            .try_collect::<Vec<_>>();

        let segments = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(stage = %Stage::Synthesizing, "conversion_cancelled");
                return Err(Error::Cancelled);
            }
            segments = synthesis => segments?,
        };

        enter(Stage::Assembling);
        let format = self.config.output_format;
        let timeline_config = self.config.timeline.clone();
        let assembly = tokio::task::spawn_blocking(move || -> Result<_, Error> {
            let timeline = hypr_timeline::assemble(policy, segments, &timeline_config)?;
            let duration_ms = timeline.duration_ms();
            let audio = hypr_audio_utils::encode(&timeline.audio, format)?;
            Ok((audio, timeline.cues, duration_ms))
        });

        let (audio, cues, duration_ms) = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(stage = %Stage::Assembling, "conversion_cancelled");
                return Err(Error::Cancelled);
            }
            joined = assembly => joined??,
        };

        let subtitles = request
            .generate_subtitles
            .then(|| hypr_srt::serialize(&cues));
        let warning = (!detection.warnings.is_empty()).then(|| detection.warnings.join("\n"));

        enter(Stage::Done);
        tracing::info!(
            %mode,
            %format,
            duration_ms,
            cues = cues.len(),
            bytes = audio.len(),
            "conversion_done"
        );

        Ok(Artifacts {
            audio,
            format,
            subtitles,
            warning,
            mode,
            duration_ms,
        })
    }

    fn plan(
        &self,
        plan: InputPlan,
        request: &ConversionRequest,
    ) -> Result<(TimelinePolicy, Vec<SegmentJob>, bool), InputError> {
        match plan {
            InputPlan::Subtitles(document) => {
                let settings = primary_voice(&request.voices)?;
                let jobs = document
                    .cues
                    .iter()
                    .map(|cue| {
                        let context = format!("cue {}: {}", cue.index, excerpt(&cue.text));
                        self.job(&cue.text, settings, context, None)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((TimelinePolicy::Overlay(document.cues), jobs, false))
            }
            InputPlan::Speakers(segments) => {
                let jobs = segments
                    .iter()
                    .map(|segment| {
                        let speaker = segment.speaker.to_string();
                        let settings = &request.voices[segment.speaker.slot(request.voices.len())?];
                        if settings.voice.trim().is_empty() {
                            return Err(InputError::NoVoice(speaker));
                        }
                        let context = format!("{speaker}: {}", excerpt(&segment.text));
                        self.job(&segment.text, settings, context, Some(speaker))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((TimelinePolicy::Sequential, jobs, request.generate_subtitles))
            }
            InputPlan::Plain(text) => {
                let settings = primary_voice(&request.voices)?;
                let job = self.job(&text, settings, excerpt(&text), None)?;
                Ok((
                    TimelinePolicy::Sequential,
                    vec![job],
                    request.generate_subtitles,
                ))
            }
        }
    }

    fn job(
        &self,
        text: &str,
        settings: &VoiceSettings,
        context: String,
        label: Option<String>,
    ) -> Result<SegmentJob, InputError> {
        let voice = self.voices.resolve(&settings.voice)?;
        let request = SegmentRequest::new(text, voice, settings.rate_percent, settings.pitch_hz)
            .map_err(|source| InputError::Segment {
                context: context.clone(),
                source,
            })?;

        Ok(SegmentJob {
            request,
            context,
            label,
        })
    }

    async fn synthesize(
        &self,
        segment: usize,
        job: &SegmentJob,
        streaming: bool,
    ) -> Result<SynthesizedSegment, Error> {
        let fail = |source: SynthesisError| {
            tracing::warn!(segment, context = %job.context, error = %source, "segment_synthesis_failed");
            Error::Synthesis {
                segment,
                context: job.context.clone(),
                source,
            }
        };

        let (audio, events) = if streaming {
            let mut chunks = self.synthesizer.synthesize_streaming(&job.request);
            let mut audio = BytesMut::new();
            let mut events = Vec::new();

            while let Some(chunk) = chunks.next().await {
                match chunk.map_err(fail)? {
                    SynthesisChunk::Audio(bytes) => audio.extend_from_slice(&bytes),
                    SynthesisChunk::WordBoundary(event) => events.push(event),
                }
            }

            (audio.freeze(), events)
        } else {
            let audio = self
                .synthesizer
                .synthesize(&job.request)
                .await
                .map_err(fail)?;
            (audio, Vec::new())
        };

        if audio.is_empty() {
            return Err(fail("synthesizer returned no audio".into()));
        }

        tracing::debug!(
            segment,
            bytes = audio.len(),
            events = events.len(),
            voice = %job.request.voice(),
            "segment_synthesized"
        );

        let mut synthesized = SynthesizedSegment::new(audio).with_events(events);
        if let Some(label) = &job.label {
            synthesized = synthesized.with_label(label.clone());
        }
        Ok(synthesized)
    }
}

fn primary_voice(voices: &[VoiceSettings]) -> Result<&VoiceSettings, InputError> {
    voices
        .first()
        .filter(|v| !v.voice.trim().is_empty())
        .ok_or(InputError::NoVoices)
}

fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("\"{head}...\"")
    } else {
        format!("\"{head}\"")
    }
}
