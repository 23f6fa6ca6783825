//! Review records from tagged Subversion history.
//!
//! Commit messages name their reviewer as `<name>` and may carry project
//! `[pjNN]` and work package `[wpNN]` tags. The log of a location is read
//! once with `svn log -v --xml`, then cut into one report per reviewer.
//!
//! - [`svn`]: running the log source and parsing its XML
//! - [`extract`]: review tag rules
//! - [`filter`]: commit matching
//! - [`report`]: per-reviewer reports
//! - [`render`], [`output`], [`pdf`]: writing records

pub mod cli;
pub mod error;
pub mod extract;
pub mod filter;
pub mod model;
pub mod output;
pub mod pdf;
pub mod render;
pub mod report;
pub mod svn;
pub mod util;
