use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Writes `contents` to `path` via a sibling temp file and a rename, so a
/// failed run never leaves a truncated file behind.
pub fn write_atomic(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    file.write_all(contents)?;
    file.persist(path)
        .with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "output_written");
    Ok(())
}

/// Writes to `path` when given, otherwise to stdout.
pub fn emit(path: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => write_atomic(path, contents.as_bytes()),
        None => {
            std::io::stdout().write_all(contents.as_bytes())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.srt");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
