#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error(transparent)]
    Wav(#[from] hound::Error),
    #[error(transparent)]
    Vorbis(#[from] vorbis_rs::VorbisError),
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(u32),
    #[error("unsupported channel count: {count}")]
    UnsupportedChannelCount { count: u16 },
    #[error("{duration_ms} ms of audio does not fit in memory")]
    BufferTooLarge { duration_ms: u64 },
}
