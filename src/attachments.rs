use crate::{
    applications::ApplicationRecord,
    error::{Result, TrackerError},
};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    CoverLetter,
    Screenshot,
}

impl Attachment {
    pub fn path_of(self, record: &ApplicationRecord) -> &Path {
        match self {
            Attachment::CoverLetter => Path::new(&record.cover_letter_path),
            Attachment::Screenshot => Path::new(&record.screenshot_path),
        }
    }
}

/// Checks an attachment is still on disk before handing it to a viewer.
pub fn ensure_exists(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_owned())
    } else {
        warn!(path = %path.display(), "attachment missing");
        Err(TrackerError::AttachmentNotFound(path.to_owned()))
    }
}
