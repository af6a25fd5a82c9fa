//! Decoded-audio primitives used to build a timeline: decode compressed
//! buffers, lay them over silence or end to end, and encode the result.

use std::convert::TryFrom;
use std::io::Cursor;

use bytes::Bytes;
use rodio::Source;

mod error;
mod pcm;
mod resampler;
mod vorbis;
mod wav;

pub use error::*;
pub use pcm::*;
pub use resampler::*;
pub use vorbis::*;
pub use wav::*;

pub use hypr_audio_mime::AudioFormat;

const I16_SCALE: f32 = 32768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioMetadata {
    pub sample_rate: u32,
    pub channels: u8,
}

pub fn f32_to_i16_samples(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&sample| {
            let scaled = (sample * I16_SCALE).clamp(-I16_SCALE, I16_SCALE - 1.0);
            scaled as i16
        })
        .collect()
}

pub fn mix_sample_f32(base: f32, layer: f32) -> f32 {
    (base + layer).clamp(-1.0, 1.0)
}

/// Decode any container/codec rodio understands (mp3, ogg, wav, flac, ...).
pub fn decode(data: &[u8]) -> Result<PcmBuffer, crate::Error> {
    let decoder = rodio::Decoder::new(Cursor::new(data.to_vec()))?;
    let metadata = metadata_from_source(&decoder)?;
    let samples: Vec<f32> = decoder.collect();

    Ok(PcmBuffer::new(samples, metadata))
}

pub fn encode(pcm: &PcmBuffer, format: AudioFormat) -> Result<Bytes, crate::Error> {
    match format {
        AudioFormat::Ogg => encode_ogg(pcm),
        AudioFormat::Wav => encode_wav(pcm),
    }
}

fn metadata_from_source<S>(source: &S) -> Result<AudioMetadata, crate::Error>
where
    S: Source,
{
    let sample_rate = source.sample_rate();
    if sample_rate == 0 {
        return Err(crate::Error::InvalidSampleRate(sample_rate));
    }

    let channels_u16 = source.channels();
    if channels_u16 == 0 {
        return Err(crate::Error::UnsupportedChannelCount {
            count: channels_u16,
        });
    }
    let channels =
        u8::try_from(channels_u16).map_err(|_| crate::Error::UnsupportedChannelCount {
            count: channels_u16,
        })?;

    Ok(AudioMetadata {
        sample_rate,
        channels,
    })
}
