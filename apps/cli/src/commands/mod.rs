pub mod mix;
pub mod segment;
pub mod speakers;
pub mod srt;

use std::path::Path;

use anyhow::Context;

pub(crate) fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
