use dasp::{Signal, interpolate::linear::Linear, signal};

use crate::{AudioMetadata, PcmBuffer};

/// Convert `pcm` to `target`'s channel layout and sample rate.
///
/// Down-mixing to mono averages channels, up-mixing from mono duplicates;
/// other layouts map channel `c` to source channel `c % source_channels`.
/// Rate conversion is linear interpolation, which is adequate for speech.
pub fn conform(pcm: PcmBuffer, target: AudioMetadata) -> PcmBuffer {
    let source = pcm.metadata();
    if source == target {
        return pcm;
    }

    let source_channels = pcm.channels();
    let target_channels = target.channels.max(1) as usize;
    let frames = pcm.frames();
    let samples = pcm.into_samples();

    let mut planes: Vec<Vec<f32>> = (0..target_channels)
        .map(|c| {
            (0..frames)
                .map(|f| {
                    let frame = &samples[f * source_channels..(f + 1) * source_channels];
                    if target_channels == 1 {
                        frame.iter().sum::<f32>() / source_channels as f32
                    } else {
                        frame[c % source_channels]
                    }
                })
                .collect()
        })
        .collect();

    if source.sample_rate != target.sample_rate && source.sample_rate > 0 {
        planes = planes
            .iter()
            .map(|plane| resample_plane(plane, source.sample_rate, target.sample_rate))
            .collect();
    }

    let out_frames = planes.first().map_or(0, Vec::len);
    let mut interleaved = Vec::with_capacity(out_frames * target_channels);
    for f in 0..out_frames {
        for plane in &planes {
            interleaved.push(plane[f]);
        }
    }

    tracing::trace!(
        from_rate = source.sample_rate,
        to_rate = target.sample_rate,
        from_channels = source.channels,
        to_channels = target.channels,
        "pcm_conformed"
    );

    PcmBuffer::new(interleaved, target)
}

fn resample_plane(plane: &[f32], from_hz: u32, to_hz: u32) -> Vec<f32> {
    if plane.is_empty() {
        return Vec::new();
    }

    let out_len = (plane.len() as u64 * to_hz as u64 / from_hz as u64) as usize;
    let mut source = signal::from_iter(plane.iter().copied());
    let left = source.next();
    let right = source.next();

    source
        .from_hz_to_hz(Linear::new(left, right), from_hz as f64, to_hz as f64)
        .take(out_len)
        .collect()
}
