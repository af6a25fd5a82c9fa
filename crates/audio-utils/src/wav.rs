use std::io::Cursor;

use bytes::Bytes;

use crate::{PcmBuffer, f32_to_i16_samples};

/// 16-bit PCM WAV.
pub fn encode_wav(pcm: &PcmBuffer) -> Result<Bytes, crate::Error> {
    let metadata = pcm.metadata();
    let spec = hound::WavSpec {
        channels: metadata.channels as u16,
        sample_rate: metadata.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for sample in f32_to_i16_samples(pcm.samples()) {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(Bytes::from(cursor.into_inner()))
}
