//! Domain list input.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Reads every line of a UTF-8 domain list.
///
/// Lines are returned as read (minus the line terminator); blank lines and a
/// header line are kept and left to fail resolution like any other entry.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8.
pub async fn read_domain_lines(path: &Path) -> Result<Vec<String>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open domains file {}", path.display()))?;

    let mut lines = BufReader::new(file).lines();
    let mut domains = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read domains file {}", path.display()))?
    {
        domains.push(line);
    }
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_reads_all_lines_including_blank_and_header() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "Domain\nexample.com\n\nhttps://example.org/\n").expect("write");

        let lines = read_domain_lines(file.path()).await.expect("read");
        assert_eq!(
            lines,
            vec!["Domain", "example.com", "", "https://example.org/"]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error_with_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.txt");

        let err = read_domain_lines(&missing).await.expect_err("missing file");
        assert!(format!("{err:#}").contains("nope.txt"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"example.com\n\xff\xfe\n").expect("write");

        assert!(read_domain_lines(file.path()).await.is_err());
    }
}
