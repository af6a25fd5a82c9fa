//! Groups synthesis word-boundary events into subtitle-sized phrases.

mod config;
mod rules;
mod segmenter;

pub use config::SegmenterConfig;
pub use rules::{BreakContext, BreakRule, break_rule, should_break};
pub use segmenter::PhraseSegmenter;
