//! Review tags embedded in commit messages.
//!
//! Reviewers are written as `<name>`, projects as `[pjNN]` and work packages
//! as `[wpNN]`. Only the first occurrence of each tag counts.

use crate::error::Result;
use regex::Regex;
use serde::Serialize;

const REVIEWER_PATTERN: &str = r"<.*?>";
const PROJECT_PATTERN: &str = r"(?i)\[pj.*?\]";
const WORK_PACKAGE_PATTERN: &str = r"(?i)\[wp.*?\]";

/// How many characters to drop from each end of a matched tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub leading: usize,
    pub trailing: usize,
}

impl Strip {
    pub const fn new(leading: usize, trailing: usize) -> Self {
        Self { leading, trailing }
    }

    /// Counts characters, not bytes. A span too short for both ends yields "".
    pub fn apply<'a>(&self, span: &'a str) -> &'a str {
        let len = span.chars().count();
        if self.leading + self.trailing >= len {
            return "";
        }
        let start = span
            .char_indices()
            .nth(self.leading)
            .map(|(i, _)| i)
            .unwrap_or(span.len());
        let end = span
            .char_indices()
            .nth(len - self.trailing)
            .map(|(i, _)| i)
            .unwrap_or(span.len());
        &span[start..end]
    }
}

#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pattern: Regex,
    strip: Strip,
}

impl ExtractionRule {
    pub fn new(pattern: &str, strip: Strip) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            strip,
        })
    }

    pub fn reviewer() -> Result<Self> {
        Self::new(REVIEWER_PATTERN, Strip::new(1, 1))
    }

    pub fn project() -> Result<Self> {
        Self::new(PROJECT_PATTERN, Strip::new(3, 1))
    }

    pub fn work_package() -> Result<Self> {
        Self::new(WORK_PACKAGE_PATTERN, Strip::new(3, 1))
    }

    pub fn extract_first(&self, message: Option<&str>) -> Option<String> {
        let message = message?;
        let found = self.pattern.find(message)?;
        Some(self.strip.apply(found.as_str()).to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewMetadata {
    pub reviewer: Option<String>,
    pub project: Option<String>,
    pub work_package: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    reviewer: ExtractionRule,
    project: ExtractionRule,
    work_package: ExtractionRule,
}

impl MetadataExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self::with_rules(
            ExtractionRule::reviewer()?,
            ExtractionRule::project()?,
            ExtractionRule::work_package()?,
        ))
    }

    pub fn with_rules(
        reviewer: ExtractionRule,
        project: ExtractionRule,
        work_package: ExtractionRule,
    ) -> Self {
        Self {
            reviewer,
            project,
            work_package,
        }
    }

    pub fn extract(&self, message: Option<&str>) -> ReviewMetadata {
        ReviewMetadata {
            reviewer: self.reviewer.extract_first(message),
            project: self.project.extract_first(message),
            work_package: self.work_package.extract_first(message),
        }
    }
}
