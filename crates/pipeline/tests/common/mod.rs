#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Mutex;

use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};

use hypr_tts_interface::{
    BoxFuture, SegmentRequest, SynthesisChunk, SynthesisError, Synthesizer, TICKS_PER_MS, Voice,
    VoiceDirectory, WordEvent,
};

pub const SAMPLE_RATE: u32 = 8_000;
/// Every word renders as this much audio.
pub const WORD_MS: u64 = 250;
/// Spoken part of each word slot; the rest is a gap before the next word.
pub const SPOKEN_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub text: String,
    pub voice: String,
    pub rate: String,
    pub pitch: String,
    pub streaming: bool,
}

/// Renders a square-wave WAV of `WORD_MS` per whitespace token.
///
/// Text containing `FAIL` errors, text containing `HANG` never completes.
#[derive(Default)]
pub struct FakeSynthesizer {
    calls: Mutex<Vec<Call>>,
}

impl FakeSynthesizer {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, request: &SegmentRequest, streaming: bool) {
        self.calls.lock().unwrap().push(Call {
            text: request.text().to_string(),
            voice: request.voice().to_string(),
            rate: request.rate_str(),
            pitch: request.pitch_str(),
            streaming,
        });
    }
}

fn render(text: &str) -> Result<(Bytes, Vec<WordEvent>), SynthesisError> {
    if text.contains("FAIL") {
        return Err("engine rejected the segment".into());
    }

    let events: Vec<WordEvent> = text
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            WordEvent::new(
                word,
                i as u64 * WORD_MS * TICKS_PER_MS,
                SPOKEN_MS * TICKS_PER_MS,
            )
        })
        .collect();

    Ok((tone_wav(events.len() as u64 * WORD_MS), events))
}

pub fn tone_wav(duration_ms: u64) -> Bytes {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
    let frames = SAMPLE_RATE as u64 * duration_ms / 1000;
    for i in 0..frames {
        let sample: i16 = if i % 16 < 8 { 3_000 } else { -3_000 };
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    Bytes::from(cursor.into_inner())
}

impl Synthesizer for FakeSynthesizer {
    fn synthesize<'a>(
        &'a self,
        request: &'a SegmentRequest,
    ) -> BoxFuture<'a, Result<Bytes, SynthesisError>> {
        Box::pin(async move {
            self.record(request, false);
            if request.text().contains("HANG") {
                std::future::pending::<()>().await;
            }
            render(request.text()).map(|(audio, _)| audio)
        })
    }

    fn synthesize_streaming<'a>(
        &'a self,
        request: &'a SegmentRequest,
    ) -> BoxStream<'a, Result<SynthesisChunk, SynthesisError>> {
        self.record(request, true);

        match render(request.text()) {
            Ok((audio, events)) => {
                // Audio arrives in two pieces around the word boundaries.
                let split = audio.len() / 2;
                let mut chunks = vec![SynthesisChunk::Audio(audio.slice(..split))];
                chunks.extend(events.into_iter().map(SynthesisChunk::WordBoundary));
                chunks.push(SynthesisChunk::Audio(audio.slice(split..)));
                stream::iter(chunks.into_iter().map(Ok)).boxed()
            }
            Err(e) => stream::iter([Err(e)]).boxed(),
        }
    }
}

pub struct FakeDirectory(pub Vec<Voice>);

impl VoiceDirectory for FakeDirectory {
    fn list_voices(&self) -> BoxFuture<'_, Result<Vec<Voice>, SynthesisError>> {
        let voices = self.0.clone();
        Box::pin(async move { Ok(voices) })
    }
}

pub fn voice(short_name: &str, locale: &str, gender: &str) -> Voice {
    Voice {
        short_name: short_name.into(),
        locale: locale.into(),
        gender: gender.into(),
    }
}
