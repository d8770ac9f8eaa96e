//! Image upload storage

use chrono::Utc;
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// URL prefix under which saved uploads are served
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to save upload to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Saves uploaded files into the public uploads directory
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the file and return the public path it will be served from
    pub async fn save(
        &self,
        field_name: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, UploadError> {
        let file_name = unique_file_name(field_name, original_name);
        let path = self.dir.join(&file_name);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| UploadError::Write {
                path: self.dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| UploadError::Write {
                path: path.clone(),
                source,
            })?;

        info!("Saved upload {} ({} bytes)", path.display(), bytes.len());
        Ok(format!("{}/{}", UPLOAD_URL_PREFIX, file_name))
    }

    /// Delete a file previously returned by [`save`](Self::save).
    ///
    /// Only plain file names under the upload prefix are touched. Failures
    /// are logged and otherwise ignored.
    pub async fn remove(&self, public_path: &str) {
        let Some(file_name) = public_path
            .strip_prefix(UPLOAD_URL_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| is_plain_file_name(name))
        else {
            warn!("Not removing {:?}: not an upload path", public_path);
            return;
        };

        let path = self.dir.join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => debug!("Removed unused upload {}", path.display()),
            Err(e) => warn!("Failed to remove upload {}: {}", path.display(), e),
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

/// `<field>-<unix millis>-<random>.<ext>`, keeping the original extension
fn unique_file_name(field_name: &str, original_name: &str) -> String {
    let suffix = rand::thread_rng().gen_range(0..1_000_000_000u32);
    format!(
        "{}-{}-{}{}",
        field_name,
        Utc::now().timestamp_millis(),
        suffix,
        extension(original_name)
    )
}

fn extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}
