use hypr_speaker_text::SpeakerSegment;
use hypr_srt::SrtDocument;
use serde::Serialize;

use crate::{ConversionRequest, InputError, RequestedMode, Upload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    SubtitleDriven,
    SpeakerDriven,
    PlainText,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SubtitleDriven => "subtitle_driven",
            Self::SpeakerDriven => "speaker_driven",
            Self::PlainText => "plain_text",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPlan {
    Subtitles(SrtDocument),
    Speakers(Vec<SpeakerSegment>),
    Plain(String),
}

impl InputPlan {
    pub fn mode(&self) -> InputMode {
        match self {
            Self::Subtitles(_) => InputMode::SubtitleDriven,
            Self::Speakers(_) => InputMode::SpeakerDriven,
            Self::Plain(_) => InputMode::PlainText,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub plan: InputPlan,
    pub warnings: Vec<String>,
}

/// Decides how a request is handled.
///
/// Subtitle-shaped inline text wins over everything else, then a subtitle
/// upload (unless it has no cues and the inline text is usable), then
/// speaker lines, then plain text. A forced multi-speaker
/// request skips subtitle detection and fails when no speaker line parses.
pub fn detect(request: &ConversionRequest) -> Result<Detection, InputError> {
    let upload = request.upload.as_ref().map(decode_upload).transpose()?;
    let mut warnings = Vec::new();

    if request.mode == RequestedMode::Auto {
        if hypr_srt::is_subtitle_shaped(&request.text) {
            if let Some((upload, _)) = &upload {
                warnings.push(format!(
                    "uploaded file {} was ignored because the text box already holds subtitles",
                    upload.file_name
                ));
            }
            return subtitles(&request.text, warnings);
        }

        if let Some((upload, content)) = &upload
            && (upload.has_srt_extension() || hypr_srt::is_subtitle_shaped(content))
        {
            let document = hypr_srt::parse(content);
            if !document.cues.is_empty() || request.text.trim().is_empty() {
                return from_document(document, warnings);
            }
            warnings.push(format!(
                "uploaded file {} has no usable subtitle cues and was ignored",
                upload.file_name
            ));
        }
    }

    let text = match &upload {
        Some((_, content)) if request.text.trim().is_empty() => content.as_str(),
        _ => request.text.as_str(),
    };

    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let plan = match request.mode {
        RequestedMode::MultiSpeaker => InputPlan::Speakers(hypr_speaker_text::parse_script(text)?),
        RequestedMode::Auto => {
            let segments = hypr_speaker_text::parse(text);
            if segments.is_empty() {
                InputPlan::Plain(text.trim().to_string())
            } else {
                InputPlan::Speakers(segments)
            }
        }
    };

    Ok(Detection { plan, warnings })
}

fn decode_upload(upload: &Upload) -> Result<(&Upload, String), InputError> {
    let content = std::str::from_utf8(&upload.content)
        .map_err(|_| InputError::UploadEncoding(upload.file_name.clone()))?;
    Ok((upload, content.to_string()))
}

fn subtitles(content: &str, warnings: Vec<String>) -> Result<Detection, InputError> {
    from_document(hypr_srt::parse(content), warnings)
}

fn from_document(
    document: SrtDocument,
    mut warnings: Vec<String>,
) -> Result<Detection, InputError> {
    if document.cues.is_empty() {
        return Err(InputError::NoCues);
    }

    if !document.skipped.is_empty() {
        let lines: Vec<String> = document.skipped.iter().map(|s| s.to_string()).collect();
        warnings.push(format!(
            "skipped {} malformed subtitle block(s): {}",
            document.skipped.len(),
            lines.join("; ")
        ));
    }

    Ok(Detection {
        plan: InputPlan::Subtitles(document),
        warnings,
    })
}
