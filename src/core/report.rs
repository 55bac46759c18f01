use crate::core::job::ConversionJob;
use crate::error::JobError;
use std::fmt;
use std::process::ExitCode;

/// Result of attempting one job.
#[derive(Debug)]
pub enum JobStatus {
    Converted { chars: usize },
    Failed(JobError),
}

#[derive(Debug)]
pub struct JobOutcome {
    pub job: ConversionJob,
    pub status: JobStatus,
}

impl JobOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self.status, JobStatus::Converted { .. })
    }

    pub fn error(&self) -> Option<&JobError> {
        match &self.status {
            JobStatus::Failed(err) => Some(err),
            JobStatus::Converted { .. } => None,
        }
    }
}

/// The console status line: `[OK] Converted <src> to <dst>` or
/// `[ERROR] Error converting <src>: <message>`.
impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            JobStatus::Converted { .. } => write!(
                f,
                "[OK] Converted {} to {}",
                self.job.source.display(),
                self.job.destination.display()
            ),
            JobStatus::Failed(err) => write!(
                f,
                "[ERROR] Error converting {}: {}",
                self.job.source.display(),
                err
            ),
        }
    }
}

/// Outcomes of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: JobOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.converted()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// 0 when every job converted, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
