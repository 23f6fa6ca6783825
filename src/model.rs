use crate::extract::ReviewMetadata;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SCHEMA_VERSION: u32 = 1;

/// One `<logentry>` of the svn history together with the review tags found
/// in its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    revision: String,
    author: String,
    date: String,
    changed_paths: Vec<String>,
    message: String,
    reviewer: Option<String>,
    project: Option<String>,
    work_package: Option<String>,
}

impl CommitRecord {
    pub fn new(
        revision: String,
        author: String,
        date: String,
        changed_paths: Vec<String>,
        message: String,
        metadata: ReviewMetadata,
    ) -> Self {
        Self {
            revision,
            author,
            date,
            changed_paths,
            message,
            reviewer: metadata.reviewer,
            project: metadata.project,
            work_package: metadata.work_package,
        }
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Date text exactly as svn printed it.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// `"<action> <path>"` lines in log order.
    pub fn changed_paths(&self) -> &[String] {
        &self.changed_paths
    }

    pub fn changed_file_count(&self) -> usize {
        self.changed_paths.len()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn reviewer(&self) -> Option<&str> {
        self.reviewer.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn work_package(&self) -> Option<&str> {
        self.work_package.as_deref()
    }

    /// The commit date, if svn printed it as RFC 3339.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewCriteria {
    pub reviewer: Option<String>,
    pub project: Option<String>,
    pub work_package: Option<String>,
}

impl ReviewCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviewer(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewer = Some(reviewer.into());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_work_package(mut self, work_package: impl Into<String>) -> Self {
        self.work_package = Some(work_package.into());
        self
    }
}

/// The commits one reviewer is responsible for, in log order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    criteria: ReviewCriteria,
    commits: Vec<CommitRecord>,
}

impl Report {
    pub fn new(criteria: ReviewCriteria, commits: Vec<CommitRecord>) -> Self {
        Self { criteria, commits }
    }

    pub fn criteria(&self) -> &ReviewCriteria {
        &self.criteria
    }

    pub fn reviewer(&self) -> Option<&str> {
        self.criteria.reviewer.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.criteria.project.as_deref()
    }

    pub fn work_package(&self) -> Option<&str> {
        self.criteria.work_package.as_deref()
    }

    pub fn commits(&self) -> &[CommitRecord] {
        &self.commits
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportOutput<'a> {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source_path: String,
    pub revision_range: Option<String>,
    pub reports: &'a [Report],
}
