use crate::config::BatchConfig;
use crate::core::job::ConversionJob;
use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Convert .docx documents to plain-text files.
///
/// Without arguments the default document set in the working directory is converted.
#[derive(Parser, Debug)]
#[command(name = "convert_docs")]
#[command(version)]
pub struct Cli {
    /// JSON file listing the conversion jobs
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Convert SOURCE into DEST; repeat for more jobs. Replaces the configured job list.
    #[arg(short, long = "job", num_args = 2, value_names = ["SOURCE", "DEST"])]
    pub jobs: Vec<PathBuf>,

    /// Copy images embedded in the documents into this directory
    #[arg(long, value_name = "DIR")]
    pub image_dir: Option<PathBuf>,

    /// Only log errors (status lines are still printed)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Info
        }
    }

    /// Build the effective configuration: config file (or defaults), then command-line overrides.
    pub fn to_config(&self) -> Result<BatchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::load_from_file(path)?,
            None => BatchConfig::default(),
        };

        if !self.jobs.is_empty() {
            config.jobs = self
                .jobs
                .chunks_exact(2)
                .map(|pair| ConversionJob::new(pair[0].clone(), pair[1].clone()))
                .collect();
        }
        if let Some(dir) = &self.image_dir {
            config.image_dir = Some(dir.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
