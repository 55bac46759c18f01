use serde::Deserialize;
use std::path::PathBuf;

/// One (source document, destination text file) pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConversionJob {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// The documents converted when no jobs are configured, in processing order.
pub const DEFAULT_JOBS: [(&str, &str); 3] = [
    ("MHMS_SRS_v1.docx", "MHMS_SRS_v1.txt"),
    ("Design Document.docx", "Design_Document.txt"),
    ("DEVELOPMENT PLAN.docx", "DEVELOPMENT_PLAN.txt"),
];

pub fn default_jobs() -> Vec<ConversionJob> {
    DEFAULT_JOBS
        .iter()
        .map(|(src, dst)| ConversionJob::new(*src, *dst))
        .collect()
}
