use crate::extract::MetadataExtractor;
use crate::output::{output_json, output_summary, write_reports};
use crate::render::RenderContext;
use crate::report::ReportJob;
use crate::svn::{SvnLog, SVN_COMMAND};
use anyhow::{Context, Result};
use chrono::Local;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use console::Term;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "review-record")]
#[command(about = "Generate code inspection records per reviewer from tagged svn history")]
#[command(version)]
pub struct Cli {
    #[arg(long = "rev", value_name = "FROM:TO", value_parser = parse_revision_range, help = "Valid revision range")]
    pub revision: Option<String>,

    #[arg(short = 'd', long, value_name = "DIRECTORY", help = "svn directory of source code")]
    pub directory: Option<String>,

    #[arg(
        short = 'r',
        long,
        value_name = "NAME1,NAME2,...",
        value_delimiter = ',',
        help = "List of reviewer names"
    )]
    pub reviewers: Option<Vec<String>>,

    #[arg(short = 'p', long, value_name = "PROJECT", help = "Project name, used in file name (e.g. Pj117)")]
    pub project: Option<String>,

    #[arg(short = 'k', long, value_name = "PACKAGE", help = "Generate records (only) for this work package")]
    pub package: Option<String>,

    #[arg(long, help = "Convert each record to PDF as well")]
    pub pdf: bool,

    #[arg(short = 'o', long, value_name = "DIR", default_value = ".", help = "Directory the records are written to")]
    pub output_dir: PathBuf,

    #[arg(long, value_name = "PROGRAM", default_value = SVN_COMMAND, help = "svn executable to read the log with")]
    pub svn: String,

    #[arg(long, help = "Print the reports as JSON instead of writing record files")]
    pub json: bool,

    #[arg(short, long, action = ArgAction::Count, help = "More log output (-v info, -vv debug)")]
    pub verbose: u8,
}

/// Passed to `svn log -r` as a single argument; svn itself judges the syntax.
pub fn parse_revision_range(s: &str) -> std::result::Result<String, String> {
    if s.is_empty() {
        return Err("revision range must not be empty".to_string());
    }
    Ok(s.to_string())
}

impl Cli {
    /// Parse argv. Syntax errors print the error and usage, then exit with status 2.
    pub fn parse() -> Self {
        match <Self as Parser>::try_parse() {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
            Err(e) => {
                eprintln!("{}", e.render());
                eprintln!("{}", Self::command().render_help());
                std::process::exit(2);
            }
        }
    }

    /// Reviewer names with empty list items (`-r bob,`) dropped.
    pub fn reviewer_names(&self) -> Option<Vec<String>> {
        let names: Vec<String> = self
            .reviewers
            .iter()
            .flatten()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect();
        (!names.is_empty()).then_some(names)
    }

    pub fn missing_options(&self) -> Vec<&'static str> {
        missing_option_names(self.directory.as_deref(), self.reviewer_names().as_deref())
    }

    pub fn execute(self) -> Result<()> {
        let reviewers = self.reviewer_names();
        let (directory, reviewers) = match (self.directory, reviewers) {
            (Some(directory), Some(reviewers)) => (directory, reviewers),
            (directory, reviewers) => {
                let missing = missing_option_names(directory.as_deref(), reviewers.as_deref());
                println!("Missing options: {}", missing.join(", "));
                println!("{}", Self::command().render_help());
                return Ok(());
            }
        };

        let job = ReportJob {
            location: directory,
            revisions: self.revision,
            reviewers,
            project: self.project,
            work_package: self.package,
        };

        let source = SvnLog::with_program(self.svn).with_progress(Term::stderr().is_term());
        let extractor = MetadataExtractor::new().context("Failed to compile review tag patterns")?;
        let outcome = job
            .run(&source, &extractor)
            .with_context(|| format!("Failed to read svn log of {}", job.location))?;

        if self.json {
            if self.pdf {
                warn!("--pdf is ignored together with --json");
            }
            return output_json(&outcome.reports, &job.location, job.revisions.as_deref());
        }

        let ctx = RenderContext {
            generated_at: Local::now(),
            source_path: &job.location,
        };
        write_reports(&self.output_dir, &outcome.reports, &ctx, self.pdf)
            .with_context(|| format!("Failed to write report in {}", self.output_dir.display()))?;

        output_summary(&outcome.commits, &outcome.reports)
    }
}

fn missing_option_names(directory: Option<&str>, reviewers: Option<&[String]>) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if directory.is_none() {
        missing.push("directory");
    }
    if reviewers.is_none() {
        missing.push("reviewers");
    }
    missing
}
