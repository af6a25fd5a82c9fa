use hypr_tts_interface::SynthesisError;

/// Problems with what the caller asked for. Raised before any synthesis.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("enter text or upload a file to convert")]
    Empty,
    #[error("select a voice")]
    NoVoices,
    #[error("no voice selected for {0}")]
    NoVoice(String),
    #[error("voice {0} is not in the voice directory")]
    UnknownVoice(String),
    #[error("uploaded file {0} is not valid UTF-8")]
    UploadEncoding(String),
    #[error("subtitle input contains no usable cues")]
    NoCues,
    #[error("{context}: {source}")]
    Segment {
        context: String,
        #[source]
        source: hypr_tts_interface::Error,
    },
    #[error(transparent)]
    Speakers(#[from] hypr_speaker_text::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("synthesis failed for segment {segment} ({context}): {source}")]
    Synthesis {
        segment: usize,
        context: String,
        #[source]
        source: SynthesisError,
    },
    #[error("failed to load voice directory: {0}")]
    VoiceDirectory(#[source] SynthesisError),
    #[error(transparent)]
    Assembly(#[from] hypr_timeline::Error),
    #[error("failed to encode output audio: {0}")]
    Encode(#[from] hypr_audio_utils::Error),
    #[error("assembly task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("conversion cancelled")]
    Cancelled,
}

impl Error {
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
