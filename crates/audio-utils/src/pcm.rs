use crate::{AudioMetadata, conform, mix_sample_f32};

/// Largest sample count a `Vec<f32>` can hold.
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f32>();

/// Number of whole frames covering `ms` milliseconds (rounded up, so that
/// `duration_ms` of a buffer built from it reports `ms` again).
pub fn frames_for_ms(ms: u64, sample_rate: u32) -> usize {
    let frames = (ms as u128 * sample_rate as u128).div_ceil(1000);
    frames.min(usize::MAX as u128) as usize
}

/// Interleaved `f32` samples plus their format. Owns its data; combining
/// buffers consumes or borrows the other side, never aliases it.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    samples: Vec<f32>,
    metadata: AudioMetadata,
}

impl PcmBuffer {
    pub fn new(samples: Vec<f32>, metadata: AudioMetadata) -> Self {
        Self { samples, metadata }
    }

    pub fn silent(duration_ms: u64, metadata: AudioMetadata) -> Result<Self, crate::Error> {
        let len = frames_for_ms(duration_ms, metadata.sample_rate)
            .checked_mul(metadata.channels as usize)
            .filter(|&len| len <= MAX_SAMPLES)
            .ok_or(crate::Error::BufferTooLarge { duration_ms })?;

        Ok(Self {
            samples: vec![0.0; len],
            metadata,
        })
    }

    pub fn metadata(&self) -> AudioMetadata {
        self.metadata
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn channels(&self) -> usize {
        self.metadata.channels.max(1) as usize
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels()
    }

    pub fn duration_ms(&self) -> u64 {
        if self.metadata.sample_rate == 0 {
            return 0;
        }
        (self.frames() as u64 * 1000) / self.metadata.sample_rate as u64
    }

    /// Sum `layer` into this buffer starting at `position_ms`. The layer is
    /// converted to this buffer's format first; anything past the end of
    /// this buffer is cut off, so the length never changes.
    pub fn overlay(&mut self, layer: &PcmBuffer, position_ms: u64) {
        let layer = conform(layer.clone(), self.metadata);
        let channels = self.channels();
        let start_frame = (position_ms as u128 * self.metadata.sample_rate as u128 / 1000)
            .min(usize::MAX as u128) as usize;
        let start = start_frame.saturating_mul(channels);

        if start >= self.samples.len() {
            tracing::debug!(position_ms, "overlay_past_end");
            return;
        }

        for (dst, src) in self.samples[start..].iter_mut().zip(layer.samples.iter()) {
            *dst = mix_sample_f32(*dst, *src);
        }
    }

    /// Append `tail` after the last frame of this buffer.
    pub fn append(&mut self, tail: PcmBuffer) {
        let tail = conform(tail, self.metadata);
        self.samples.extend(tail.samples);
    }

    /// Split into per-channel blocks of at most `block_frames` frames.
    pub fn planar_blocks(&self, block_frames: usize) -> Vec<Vec<Vec<f32>>> {
        let channels = self.channels();
        self.samples
            .chunks(block_frames.max(1) * channels)
            .map(|chunk| {
                (0..channels)
                    .map(|c| chunk.iter().skip(c).step_by(channels).copied().collect())
                    .collect()
            })
            .collect()
    }
}
