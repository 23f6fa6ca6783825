use crate::error::Result;
use crate::extract::MetadataExtractor;
use crate::filter::filter_commits;
use crate::model::{CommitRecord, Report, ReviewCriteria};
use crate::svn::{fetch_commits, LogSource};
use tracing::info;

/// One report per reviewer, all cut from the same commit list.
pub fn build_reports(
    commits: &[CommitRecord],
    reviewers: &[String],
    project: Option<&str>,
    work_package: Option<&str>,
) -> Vec<Report> {
    reviewers
        .iter()
        .map(|reviewer| {
            let criteria = ReviewCriteria {
                reviewer: Some(reviewer.clone()),
                project: project.map(str::to_string),
                work_package: work_package.map(str::to_string),
            };
            let matched = filter_commits(commits, &criteria);
            info!(reviewer = %reviewer, commits = matched.len(), "built report");
            Report::new(criteria, matched)
        })
        .collect()
}

/// Everything needed to turn one svn location into reviewer reports.
#[derive(Debug, Clone)]
pub struct ReportJob {
    pub location: String,
    pub revisions: Option<String>,
    pub reviewers: Vec<String>,
    pub project: Option<String>,
    pub work_package: Option<String>,
}

/// What a run produced: the full log and the reports cut from it.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub commits: Vec<CommitRecord>,
    pub reports: Vec<Report>,
}

impl ReportJob {
    /// Fetches the log exactly once, however many reviewers there are.
    pub fn run(&self, source: &dyn LogSource, extractor: &MetadataExtractor) -> Result<JobOutcome> {
        let commits = fetch_commits(
            source,
            &self.location,
            self.revisions.as_deref(),
            extractor,
        )?;
        let reports = build_reports(
            &commits,
            &self.reviewers,
            self.project.as_deref(),
            self.work_package.as_deref(),
        );
        Ok(JobOutcome { commits, reports })
    }
}
