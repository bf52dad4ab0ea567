use std::path::PathBuf;
use thiserror::Error;

/// Reasons a set of fields is refused at save time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("comment is {len} characters long, the limit is {max}")]
    CommentTooLong { len: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no application at position {index} (store holds {len})")]
    Index { index: usize, len: usize },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid applications file", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("attachment not found: {}", .0.display())]
    AttachmentNotFound(PathBuf),

    #[error("could not locate the home directory")]
    HomeDirNotFound,
}

pub type Result<T> = std::result::Result<T, TrackerError>;
