//! Error types shared by the extractor, the batch converter and the configuration layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a source document into text.
///
/// The batch converter does not branch on the variant; it only prints the message.
/// The variants exist so that logs and tests can tell the cases apart.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("file is empty, not a docx archive")]
    EmptyFile,

    #[error("not a docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("archive has no {0} part")]
    MissingPart(&'static str),

    #[error("{part} is not valid UTF-8")]
    Encoding { part: String },

    #[error("malformed XML in {part}: {source}")]
    Xml {
        part: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("cannot create image directory {}: {source}", dir.display())]
    ImageDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to export image {name} to {}: {source}", dir.display())]
    Image {
        name: String,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single conversion job.
#[derive(Error, Debug)]
pub enum JobError {
    #[error("{0}")]
    Extract(#[from] ExtractError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl JobError {
    pub fn is_write(&self) -> bool {
        matches!(self, JobError::Write { .. })
    }
}

/// Errors raised while loading or validating a [`crate::BatchConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
