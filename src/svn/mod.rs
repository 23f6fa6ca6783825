pub mod parser;
pub mod source;

pub use parser::parse_log;
pub use source::{LogSource, SvnLog, SVN_COMMAND};

use crate::error::Result;
use crate::extract::MetadataExtractor;
use crate::model::CommitRecord;
use tracing::info;

/// Fetch the log of `location` once and parse it.
pub fn fetch_commits(
    source: &dyn LogSource,
    location: &str,
    revisions: Option<&str>,
    extractor: &MetadataExtractor,
) -> Result<Vec<CommitRecord>> {
    let xml = source.fetch(location, revisions)?;
    let commits = parse_log(&xml, extractor)?;
    info!(location, count = commits.len(), "parsed svn log");
    Ok(commits)
}
