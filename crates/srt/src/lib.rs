//! SubRip (`.srt`) subtitle codec.
//!
//! Parsing is permissive: anything that is not a well-formed cue block is
//! skipped and reported in [`SrtDocument::skipped`] instead of failing the
//! whole document. Serialization always renumbers cues from 1.

mod cue;
mod parse;
mod time;
mod write;

pub use cue::*;
pub use parse::*;
pub use time::*;
pub use write::*;
