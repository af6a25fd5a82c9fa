use serde::{Deserialize, Serialize};

use crate::Error;

/// Engine-facing voice identifier (the `ShortName`, e.g. `en-US-AriaNeural`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceId(String);

impl VoiceId {
    /// Accepts either a bare short name or a display label of the form
    /// `"ShortName - Locale (Gender)"`; only the short name is kept.
    pub fn from_label(label: &str) -> Result<Self, Error> {
        let short = label.split(" - ").next().unwrap_or(label).trim();
        if short.is_empty() {
            return Err(Error::EmptyVoice);
        }
        Ok(Self(short.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the engine's voice directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voice {
    pub short_name: String,
    pub locale: String,
    pub gender: String,
}

impl Voice {
    pub fn id(&self) -> VoiceId {
        VoiceId(self.short_name.clone())
    }

    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.short_name, self.locale, self.gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trips_to_short_name() {
        let voice = Voice {
            short_name: "en-GB-SoniaNeural".into(),
            locale: "en-GB".into(),
            gender: "Female".into(),
        };
        assert_eq!(voice.label(), "en-GB-SoniaNeural - en-GB (Female)");
        assert_eq!(VoiceId::from_label(&voice.label()).unwrap(), voice.id());
    }

    #[test]
    fn empty_label_rejected() {
        assert_eq!(VoiceId::from_label(""), Err(Error::EmptyVoice));
        assert_eq!(VoiceId::from_label("   "), Err(Error::EmptyVoice));
    }

    #[test]
    fn deserializes_directory_entry() {
        let json = r#"{"ShortName":"de-DE-KatjaNeural","Locale":"de-DE","Gender":"Female","Extra":1}"#;
        let voice: Voice = serde_json::from_str(json).unwrap();
        assert_eq!(voice.short_name, "de-DE-KatjaNeural");
        assert_eq!(voice.locale, "de-DE");
    }
}
