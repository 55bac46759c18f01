//! Batch configuration: which documents to convert and where extra output goes.
//!
//! With no config file the three default jobs from [`crate::core::job::DEFAULT_JOBS`] run.

use crate::core::extractor::DocxExtractor;
use crate::core::job::{default_jobs, ConversionJob};
use crate::error::ConfigError;
use log::warn;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    #[serde(default = "default_jobs")]
    pub jobs: Vec<ConversionJob>,
    /// Directory that receives images embedded in the source documents.
    #[serde(default)]
    pub image_dir: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
            image_dir: None,
        }
    }
}

impl BatchConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jobs.is_empty() {
            return Err(ConfigError::validation("no conversion jobs configured"));
        }

        let mut destinations = HashSet::new();
        for (i, job) in self.jobs.iter().enumerate() {
            if job.source.as_os_str().is_empty() {
                return Err(ConfigError::validation(format!("job {} has an empty source", i + 1)));
            }
            if job.destination.as_os_str().is_empty() {
                return Err(ConfigError::validation(format!(
                    "job {} has an empty destination",
                    i + 1
                )));
            }
            if without_cur_dir(&job.source) == without_cur_dir(&job.destination) {
                return Err(ConfigError::validation(format!(
                    "job {} would overwrite its source {}",
                    i + 1,
                    job.source.display()
                )));
            }
            if !destinations.insert(&job.destination) {
                warn!(
                    "{} is the destination of more than one job; the last one wins",
                    job.destination.display()
                );
            }
        }
        Ok(())
    }

    /// The extractor this configuration asks for.
    pub fn extractor(&self) -> DocxExtractor {
        match &self.image_dir {
            Some(dir) => DocxExtractor::new().with_image_dir(dir),
            None => DocxExtractor::new(),
        }
    }
}

/// `./a.docx` and `a.docx` name the same file.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
