// Shared helpers for the small JSON files the bot keeps on disk.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Read and decode a JSON file. A missing file is `Ok(None)`; a corrupt one is an error.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> io::Result<Option<T>> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let value = serde_json::from_str(&text)?;
    Ok(Some(value))
}

/// Write `value` next to `path` and rename it into place, so a crash mid-write
/// never leaves a half-written file behind.
pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let text = serde_json::to_string_pretty(value)?;
    let tmp = temp_path(path);
    fs::write(&tmp, text).await?;
    fs::rename(&tmp, path).await
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let value: Option<Vec<u64>> = read_json(&dir.path().join("nope.json")).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn write_creates_parent_dirs_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("list.json");

        write_json_atomic(&path, &vec![1u64, 2, 3]).await.unwrap();

        let value: Option<Vec<u64>> = read_json(&path).await.unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let result: io::Result<Option<Vec<u64>>> = read_json(&path).await;
        assert!(result.is_err());
    }
}
