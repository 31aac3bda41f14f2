//! Plain-text result files.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncWriteExt, BufWriter};

/// Writes one entry per line, each newline-terminated, replacing `path`.
///
/// The file is created even when `lines` is empty. Returns the number of
/// lines written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub async fn write_lines<'a, I>(path: &Path, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for line in lines {
        writer
            .write_all(line.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writer
            .write_all(b"\n")
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        count += 1;
    }
    writer
        .flush()
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(count)
}
