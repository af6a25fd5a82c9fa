//! Drives a text-to-speech conversion end to end: detect what kind of input
//! was given, synthesize every segment, lay the audio out on one timeline
//! and produce the final `(audio, subtitles)` pair.

mod config;
mod detect;
mod error;
mod orchestrator;
mod request;
mod voices;

pub use config::*;
pub use detect::*;
pub use error::*;
pub use orchestrator::*;
pub use request::*;
pub use voices::*;

pub use tokio_util::sync::CancellationToken;
