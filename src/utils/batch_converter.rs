use crate::core::extractor::{DocxExtractor, Extractor};
use crate::core::job::ConversionJob;
use crate::core::report::{BatchReport, JobOutcome, JobStatus};
use crate::core::writer::{TextFileWriter, Writer};
use crate::error::JobError;
use log::{debug, error, info};
use std::io::{self, Write};

pub const COMPLETION_MESSAGE: &str = "All conversions completed!";

pub struct BatchConverter<E = DocxExtractor, W = TextFileWriter> {
    extractor: E,
    writer: W,
}

impl BatchConverter {
    pub fn new() -> Self {
        Self::with_parts(DocxExtractor::new(), TextFileWriter)
    }
}

impl Default for BatchConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Extractor, W: Writer> BatchConverter<E, W> {
    pub fn with_parts(extractor: E, writer: W) -> Self {
        Self { extractor, writer }
    }

    /// Convert every job in order, printing one status line per job to `console`
    /// and the completion message once at the end.
    ///
    /// A failing job never stops the batch; only a failure to write to `console`
    /// itself is returned as an error.
    pub fn run<C: Write>(&self, jobs: &[ConversionJob], console: &mut C) -> io::Result<BatchReport> {
        info!("Starting batch of {} conversion job(s)", jobs.len());

        let mut report = BatchReport::new();
        for job in jobs {
            let outcome = self.convert(job);
            writeln!(console, "{}", outcome)?;
            report.push(outcome);
        }

        writeln!(console, "\n{}", COMPLETION_MESSAGE)?;
        console.flush()?;

        info!(
            "Completed batch: {} converted, {} failed",
            report.converted(),
            report.failed()
        );
        Ok(report)
    }

    /// Convert a single job. The destination is only opened once extraction succeeded.
    pub fn convert(&self, job: &ConversionJob) -> JobOutcome {
        debug!("Processing file: {}", job.source.display());

        let status = match self.try_convert(job) {
            Ok(chars) => {
                info!(
                    "Converted {} to {} ({} chars)",
                    job.source.display(),
                    job.destination.display(),
                    chars
                );
                JobStatus::Converted { chars }
            }
            Err(e) => {
                error!("Failed to convert {}: {}", job.source.display(), e);
                JobStatus::Failed(e)
            }
        };

        JobOutcome {
            job: job.clone(),
            status,
        }
    }

    fn try_convert(&self, job: &ConversionJob) -> Result<usize, JobError> {
        let text = self.extractor.extract(&job.source)?;
        self.writer
            .write_text(&job.destination, &text)
            .map_err(|source| JobError::Write {
                path: job.destination.clone(),
                source,
            })?;
        Ok(text.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// Serves canned text per source path; unknown paths fail like a missing file.
    struct CannedExtractor(HashMap<PathBuf, String>);

    impl Extractor for CannedExtractor {
        fn extract<P: AsRef<Path>>(&self, path: P) -> Result<String, ExtractError> {
            self.0.get(path.as_ref()).cloned().ok_or_else(|| {
                ExtractError::Io(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
            })
        }
    }

    /// Records writes in memory; destinations named `readonly*` fail.
    #[derive(Default)]
    struct MemoryWriter(RefCell<Vec<(PathBuf, String)>>);

    impl Writer for MemoryWriter {
        fn write_text<P: AsRef<Path>>(&self, path: P, text: &str) -> io::Result<()> {
            let path = path.as_ref();
            if path.to_string_lossy().starts_with("readonly") {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"));
            }
            self.0.borrow_mut().push((path.to_path_buf(), text.to_string()));
            Ok(())
        }
    }

    fn converter(docs: &[(&str, &str)]) -> BatchConverter<CannedExtractor, MemoryWriter> {
        let canned = docs
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect();
        BatchConverter::with_parts(CannedExtractor(canned), MemoryWriter::default())
    }

    fn run(conv: &BatchConverter<CannedExtractor, MemoryWriter>, jobs: &[ConversionJob]) -> (BatchReport, String) {
        let mut console = Vec::new();
        let report = conv.run(jobs, &mut console).unwrap();
        (report, String::from_utf8(console).unwrap())
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let conv = converter(&[("a.docx", "alpha"), ("c.docx", "gamma")]);
        let jobs = [
            ConversionJob::new("a.docx", "a.txt"),
            ConversionJob::new("b.docx", "b.txt"),
            ConversionJob::new("c.docx", "c.txt"),
        ];

        let (report, console) = run(&conv, &jobs);

        assert_eq!(
            console,
            "[OK] Converted a.docx to a.txt\n\
             [ERROR] Error converting b.docx: No such file or directory\n\
             [OK] Converted c.docx to c.txt\n\
             \n\
             All conversions completed!\n"
        );
        assert_eq!(report.converted(), 2);
        assert_eq!(report.failed(), 1);
        let written: Vec<_> = conv.writer.0.borrow().iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(written, [PathBuf::from("a.txt"), PathBuf::from("c.txt")]);
    }

    #[test]
    fn write_failure_is_reported_and_batch_continues() {
        let conv = converter(&[("a.docx", "alpha"), ("b.docx", "beta")]);
        let jobs = [
            ConversionJob::new("a.docx", "readonly/a.txt"),
            ConversionJob::new("b.docx", "b.txt"),
        ];

        let (report, console) = run(&conv, &jobs);

        let lines: Vec<_> = console.lines().collect();
        assert_eq!(
            lines[0],
            "[ERROR] Error converting a.docx: failed to write readonly/a.txt: Permission denied"
        );
        assert_eq!(lines[1], "[OK] Converted b.docx to b.txt");
        assert!(report.outcomes[0].error().unwrap().is_write());
        assert_eq!(report.exit_status(), 1);
    }

    #[test]
    fn empty_batch_still_prints_completion() {
        let conv = converter(&[]);
        let (report, console) = run(&conv, &[]);
        assert!(report.is_empty());
        assert!(report.all_succeeded());
        assert_eq!(console, "\nAll conversions completed!\n");
    }

    #[test]
    fn converted_char_count_is_recorded() {
        let conv = converter(&[("a.docx", "héllo")]);
        let outcome = conv.convert(&ConversionJob::new("a.docx", "a.txt"));
        assert!(matches!(outcome.status, JobStatus::Converted { chars: 5 }));
    }
}
