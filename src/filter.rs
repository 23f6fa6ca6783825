//! Which commits belong in a reviewer's record.
//!
//! Project and work package are wildcards when left out. The reviewer is
//! not: without a reviewer only untagged commits match, and a named reviewer
//! never matches an untagged commit.

use crate::model::{CommitRecord, ReviewCriteria};

/// Compares the lowercase forms of both strings.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn reviewer_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match (wanted, actual) {
        (None, None) => true,
        (Some(w), Some(a)) => eq_ignore_case(w, a),
        _ => false,
    }
}

pub fn optional_field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match (wanted, actual) {
        (None, _) => true,
        (Some(w), Some(a)) => eq_ignore_case(w, a),
        (Some(_), None) => false,
    }
}

pub fn matches(commit: &CommitRecord, criteria: &ReviewCriteria) -> bool {
    reviewer_matches(criteria.reviewer.as_deref(), commit.reviewer())
        && optional_field_matches(criteria.project.as_deref(), commit.project())
        && optional_field_matches(criteria.work_package.as_deref(), commit.work_package())
}

pub fn filter_commits(commits: &[CommitRecord], criteria: &ReviewCriteria) -> Vec<CommitRecord> {
    commits
        .iter()
        .filter(|commit| matches(commit, criteria))
        .cloned()
        .collect()
}
