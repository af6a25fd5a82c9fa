use std::sync::{PoisonError, RwLock};

use hypr_tts_interface::{Voice, VoiceDirectory, VoiceId};

use crate::{Error, InputError};

/// The voices a conversion may use. An empty catalog accepts any voice
/// name, so the pipeline works before the directory has been fetched.
#[derive(Debug, Default)]
pub struct VoiceCatalog {
    voices: RwLock<Vec<Voice>>,
}

impl VoiceCatalog {
    pub fn new(voices: Vec<Voice>) -> Self {
        let catalog = Self::default();
        catalog.replace(voices);
        catalog
    }

    pub async fn refresh(&self, directory: &dyn VoiceDirectory) -> Result<usize, Error> {
        let voices = directory
            .list_voices()
            .await
            .map_err(Error::VoiceDirectory)?;
        let count = voices.len();
        self.replace(voices);

        tracing::info!(count, "voice_directory_refreshed");
        Ok(count)
    }

    pub fn is_empty(&self) -> bool {
        self.voices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn voices(&self) -> Vec<Voice> {
        self.voices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `"ShortName - Locale (Gender)"` for every voice, sorted by short name.
    pub fn labels(&self) -> Vec<String> {
        self.voices().iter().map(Voice::label).collect()
    }

    /// Turns a short name or display label into an engine voice id.
    pub fn resolve(&self, label: &str) -> Result<VoiceId, InputError> {
        let id = VoiceId::from_label(label).map_err(|_| InputError::NoVoice(label.to_string()))?;

        let voices = self.voices.read().unwrap_or_else(PoisonError::into_inner);
        if !voices.is_empty() && !voices.iter().any(|v| v.id() == id) {
            return Err(InputError::UnknownVoice(id.to_string()));
        }

        Ok(id)
    }

    fn replace(&self, mut voices: Vec<Voice>) {
        voices.sort_by(|a, b| a.short_name.cmp(&b.short_name));
        voices.dedup_by(|a, b| a.short_name == b.short_name);
        *self.voices.write().unwrap_or_else(PoisonError::into_inner) = voices;
    }
}
