//! Résumé file handle selected in the application form.
//!
//! The accepted extensions and the 5MB limit are advertised to the user as hints only.
//! Nothing here rejects a file; out-of-hint files are logged and still submitted.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.doc,.docx,.txt";
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];
pub const SOFT_SIZE_LIMIT_BYTES: usize = 5 * 1024 * 1024;
pub const UPLOAD_PROMPT: &str = "Click to upload your resume";
pub const UPLOAD_HINT: &str = "PDF, DOC, DOCX, or TXT (Max 5MB)";

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Could not read resume file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resume path '{}' has no file name", .0.display())]
    MissingFileName(PathBuf),
}

/// In-memory résumé: file name, raw bytes and the MIME type sent with the upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    file_name: String,
    content: Bytes,
    mime_type: String,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            content: content.into(),
            mime_type,
        }
    }

    /// Reads a résumé from disk, logging when it falls outside the advertised hints.
    pub async fn load(path: &Path) -> Result<Self, ResumeError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ResumeError::MissingFileName(path.to_path_buf()))?;

        let content = tokio::fs::read(path)
            .await
            .map_err(|source| ResumeError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let resume = Self::new(file_name, content);
        resume.warn_outside_hints();
        Ok(resume)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_accepted_extension(&self) -> bool {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                ACCEPTED_EXTENSIONS
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    pub fn exceeds_soft_limit(&self) -> bool {
        self.len() > SOFT_SIZE_LIMIT_BYTES
    }

    fn warn_outside_hints(&self) {
        if self.is_empty() {
            warn!("Resume '{}' is empty; submitting anyway", self.file_name);
        }
        if !self.has_accepted_extension() {
            warn!(
                "Resume '{}' is not one of {}; submitting anyway",
                self.file_name, ACCEPT_ATTRIBUTE
            );
        }
        if self.exceeds_soft_limit() {
            warn!(
                "Resume '{}' is {} bytes, above the advertised 5MB limit; submitting anyway",
                self.file_name,
                self.len()
            );
        }
    }
}
