pub mod core {
    pub mod extractor;
    pub mod job;
    pub mod report;
    pub mod writer;
}

pub mod utils {
    pub mod batch_converter;
    pub mod mmap_reader;
}

pub mod cli;
pub mod config;
pub mod error;

pub use crate::config::BatchConfig;
pub use crate::core::extractor::{DocxExtractor, Extractor};
pub use crate::core::job::ConversionJob;
pub use crate::core::report::{BatchReport, JobOutcome, JobStatus};
pub use crate::core::writer::{TextFileWriter, Writer};
pub use crate::error::{ConfigError, ExtractError, JobError};
pub use crate::utils::batch_converter::BatchConverter;
