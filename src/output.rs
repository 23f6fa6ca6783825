use crate::error::Result;
use crate::model::{CommitRecord, Report, ReportOutput, SCHEMA_VERSION};
use crate::pdf::convert_to_pdf;
use crate::render::{render_report, report_id, RenderContext};
use chrono::{DateTime, Local, Utc};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub fn report_file_name(report: &Report, generated_at: &DateTime<Local>) -> String {
    format!("{}.txt", report_id(report, generated_at))
}

/// Render `report` into `dir`, replacing any file of the same name.
pub fn write_report(dir: &Path, report: &Report, ctx: &RenderContext) -> Result<PathBuf> {
    let path = dir.join(report_file_name(report, &ctx.generated_at));
    fs::write(&path, render_report(report, ctx))?;
    debug!(path = %path.display(), "wrote report");
    Ok(path)
}

/// Write every report in order and, with `pdf`, convert each one right after it.
///
/// A failed text write aborts. A failed PDF conversion only warns; the text
/// report stays and the remaining reports are still written.
pub fn write_reports(dir: &Path, reports: &[Report], ctx: &RenderContext, pdf: bool) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        let path = write_report(dir, report, ctx)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("Generated Report {file_name}");

        if pdf {
            match convert_to_pdf(&path) {
                Ok(pdf) => info!(path = %pdf.display(), "converted report to pdf"),
                Err(e) => warn!("PDF conversion of {file_name} failed, text report kept: {e}"),
            }
        }
        written.push(path);
    }
    Ok(written)
}

pub fn output_json(
    reports: &[Report],
    source_path: &str,
    revision_range: Option<&str>,
) -> anyhow::Result<()> {
    let output = ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source_path: source_path.to_string(),
        revision_range: revision_range.map(str::to_string),
        reports,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_summary(commits: &[CommitRecord], reports: &[Report]) -> anyhow::Result<()> {
    println!("{}", style("Review Summary").bold());
    println!("{}", "─".repeat(50));
    println!("Commits in log: {}", style(commits.len()).cyan());

    for report in reports {
        println!(
            "  {:<24} {}",
            report.reviewer().unwrap_or(""),
            style(report.commits().len()).green()
        );
    }

    let untagged = commits.iter().filter(|c| c.reviewer().is_none()).count();
    if untagged > 0 {
        println!("Commits without reviewer: {}", style(untagged).yellow());
    }

    let mut stamps = commits.iter().filter_map(CommitRecord::timestamp);
    if let Some(first) = stamps.next() {
        let (earliest, latest) = stamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
        println!(
            "Date range: {} to {}",
            style(earliest.format("%Y-%m-%d")).dim(),
            style(latest.format("%Y-%m-%d")).dim()
        );
    }

    Ok(())
}
