use std::num::{NonZeroU8, NonZeroU32};

use bytes::Bytes;
use vorbis_rs::VorbisEncoderBuilder;

use crate::PcmBuffer;

const BLOCK_FRAMES: usize = 4096;

/// Ogg Vorbis at the encoder's default quality.
pub fn encode_ogg(pcm: &PcmBuffer) -> Result<Bytes, crate::Error> {
    let metadata = pcm.metadata();
    let sample_rate = NonZeroU32::new(metadata.sample_rate)
        .ok_or(crate::Error::InvalidSampleRate(metadata.sample_rate))?;
    let channels = NonZeroU8::new(metadata.channels).ok_or(
        crate::Error::UnsupportedChannelCount {
            count: metadata.channels as u16,
        },
    )?;

    let mut out = Vec::new();
    let mut encoder = VorbisEncoderBuilder::new(sample_rate, channels, &mut out)?.build()?;
    for block in pcm.planar_blocks(BLOCK_FRAMES) {
        encoder.encode_audio_block(&block)?;
    }
    encoder.finish()?;

    Ok(Bytes::from(out))
}
