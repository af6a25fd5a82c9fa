use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::stream::BoxStream;

use crate::{SegmentRequest, Voice, WordEvent};

pub type SynthesisError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One item of a streaming synthesis response. Audio chunks concatenate to
/// the complete compressed segment; word boundaries arrive interleaved.
#[derive(Debug, Clone)]
pub enum SynthesisChunk {
    Audio(Bytes),
    WordBoundary(WordEvent),
}

/// Text-to-speech engine contract.
///
/// `synthesize` returns one complete compressed audio buffer.
/// `synthesize_streaming` additionally yields word-boundary timing, which is
/// what subtitle generation needs. Both are object-safe through the boxed
/// return types so callers can hold an `Arc<dyn Synthesizer>`.
///
/// Retries, if any, are the implementation's business. Callers treat any
/// `Err` as final for that segment.
pub trait Synthesizer: Send + Sync {
    fn synthesize<'a>(
        &'a self,
        request: &'a SegmentRequest,
    ) -> BoxFuture<'a, Result<Bytes, SynthesisError>>;

    fn synthesize_streaming<'a>(
        &'a self,
        request: &'a SegmentRequest,
    ) -> BoxStream<'a, Result<SynthesisChunk, SynthesisError>>;
}

/// Source of the engine's available voices.
pub trait VoiceDirectory: Send + Sync {
    fn list_voices(&self) -> BoxFuture<'_, Result<Vec<Voice>, SynthesisError>>;
}
