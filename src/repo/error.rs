use std::path::PathBuf;

use thiserror::Error;

use crate::object::{self, Id, ParseIdError};

/// Describes the potential error conditions that might arise from `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid object ID: {0}")]
    InvalidIdentifier(#[from] ParseIdError),

    #[error("object {0} not found")]
    NotFound(Id),

    #[error(transparent)]
    Object(#[from] object::Error),

    #[error("object {id} is a {type_tag}, not a tree")]
    NotATree { id: Id, type_tag: String },

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("work dir {0} doesn't exist")]
    WorkDirDoesntExist(PathBuf),

    #[error("git dir {0} doesn't exist")]
    GitDirDoesntExist(PathBuf),

    #[error("git dir {0} already exists")]
    GitDirShouldntExist(PathBuf),
}

impl Error {
    /// A process exit code that stays the same for each class of failure,
    /// so scripts can tell "not found" from "corrupt" from "bad input".
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidIdentifier(_) => 2,
            Error::NotFound(_) => 3,
            Error::Object(object::Error::CorruptStream(_)) => 4,
            Error::Object(object::Error::MalformedHeader)
            | Error::Object(object::Error::InvalidSize(_)) => 5,
            Error::Object(object::Error::MalformedEntry { .. })
            | Error::Object(object::Error::TruncatedEntry { .. })
            | Error::NotATree { .. } => 6,
            Error::IoError(_) => 7,
            Error::WorkDirDoesntExist(_)
            | Error::GitDirDoesntExist(_)
            | Error::GitDirShouldntExist(_) => 1,
        }
    }
}

/// A specialized `Result` type for `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
