//! The review record text.

use crate::model::{CommitRecord, Report};
use crate::util::{collapse_escaped_newlines, file_stamp};
use chrono::{DateTime, Local};

const HEADER_RULE: &str = "-----------------------------------------------------------------------";
const BODY_RULE: &str = "----------------------------------------------------------------------";

pub struct RenderContext<'a> {
    pub generated_at: DateTime<Local>,
    pub source_path: &'a str,
}

/// `<project>-CIR-<stamp>-<reviewer>`, shared by the record id and the file name.
pub fn report_id(report: &Report, generated_at: &DateTime<Local>) -> String {
    format!(
        "{}-CIR-{}-{}",
        report.project().unwrap_or(""),
        file_stamp(generated_at),
        report.reviewer().unwrap_or("")
    )
}

pub fn render_report(report: &Report, ctx: &RenderContext) -> String {
    let reviewer = report.reviewer().unwrap_or("");
    let mut out = format!(
        "{HEADER_RULE}\n\
         REVIEW RECORD\n\
         \n\
         Id:               {id}\n\
         Printout time:    {time}\n\
         Reviewer:         {reviewer}\n\
         \n\
         Path used:        {path}\n\
         {BODY_RULE}\n\
         \n\
         Reviewed revisions:\n\
         \n",
        id = report_id(report, &ctx.generated_at),
        time = ctx.generated_at.format("%Y-%m-%d %H:%M:%S %z"),
        path = ctx.source_path,
    );

    for commit in report.commits() {
        out.push_str(&render_commit(commit));
    }

    out.push_str("\nReviewer signature: ______________________________\n");
    out.push_str(&format!("                    ({reviewer})\n"));
    out
}

fn render_commit(commit: &CommitRecord) -> String {
    let mut block = format!(
        "{}\t{}\t{}\t{}\n",
        commit.revision(),
        commit.author(),
        commit.date(),
        commit.reviewer().unwrap_or("")
    );
    for path in commit.changed_paths() {
        block.push_str(&format!("\t\t\t{}\n", path.trim()));
    }
    block.push_str(&format!(
        "\t\tNumber of changed files: {}\n\t\t{}\n",
        commit.changed_file_count(),
        collapse_escaped_newlines(commit.message())
    ));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::MetadataExtractor;
    use crate::model::ReviewCriteria;
    use chrono::TimeZone;

    fn ctx() -> RenderContext<'static> {
        RenderContext {
            generated_at: Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
            source_path: "https://svn.example.org/repo/trunk",
        }
    }

    fn report(project: Option<&str>) -> Report {
        let message = r"reviewed by <bob> [PJ9] fix bug\nsecond line";
        let commit = CommitRecord::new(
            "12".to_string(),
            "jdoe".to_string(),
            "2024-01-29T15:30:00.000000Z".to_string(),
            vec!["M /src/a.rb".to_string(), "A /src/b.rb".to_string()],
            message.to_string(),
            MetadataExtractor::new().unwrap().extract(Some(message)),
        );
        let mut criteria = ReviewCriteria::new().with_reviewer("bob");
        criteria.project = project.map(str::to_string);
        Report::new(criteria, vec![commit])
    }

    #[test]
    fn id_uses_project_stamp_and_reviewer() {
        let c = ctx();
        assert_eq!(report_id(&report(Some("Pj117")), &c.generated_at), "Pj117-CIR-20240506_070809-bob");
        assert_eq!(report_id(&report(None), &c.generated_at), "-CIR-20240506_070809-bob");
    }

    #[test]
    fn header_and_footer() {
        let text = render_report(&report(Some("9")), &ctx());
        assert!(text.starts_with(HEADER_RULE));
        assert!(text.contains("Id:               9-CIR-20240506_070809-bob\n"));
        assert!(text.contains("Printout time:    2024-05-06 07:08:09 "));
        assert!(text.contains("Reviewer:         bob\n"));
        assert!(text.contains("Path used:        https://svn.example.org/repo/trunk\n"));
        assert!(text.ends_with("Reviewer signature: ______________________________\n                    (bob)\n"));
    }

    #[test]
    fn commit_block() {
        let text = render_report(&report(Some("9")), &ctx());
        let expected = "12\tjdoe\t2024-01-29T15:30:00.000000Z\tbob\n\
                        \t\t\tM /src/a.rb\n\
                        \t\t\tA /src/b.rb\n\
                        \t\tNumber of changed files: 2\n\
                        \t\treviewed by <bob> [PJ9] fix bug second line\n";
        assert!(text.contains(expected), "{text}");
    }

    #[test]
    fn empty_report_still_has_signature() {
        let empty = Report::new(ReviewCriteria::new().with_reviewer("carol"), Vec::new());
        let text = render_report(&empty, &ctx());
        assert!(text.contains("Reviewed revisions:\n\n\nReviewer signature"));
        assert!(text.contains("(carol)"));
    }

    #[test]
    fn header_lines_are_exact() {
        let text = render_report(&report(Some("9")), &ctx());
        let lines: Vec<&str> = text.lines().take(12).collect();
        assert_eq!(lines[0], HEADER_RULE);
        assert_eq!(lines[1], "REVIEW RECORD");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Id:               9-CIR-20240506_070809-bob");
        assert!(lines[4].starts_with("Printout time:    2024-05-06 07:08:09 "));
        assert_eq!(lines[5], "Reviewer:         bob");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Path used:        https://svn.example.org/repo/trunk");
        assert_eq!(lines[8], BODY_RULE);
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "Reviewed revisions:");
        assert_eq!(lines[11], "");
    }

    #[test]
    fn commit_without_paths() {
        let commit = CommitRecord::new(
            "7".to_string(),
            "asmith".to_string(),
            "2024-01-01T00:00:00.000000Z".to_string(),
            Vec::new(),
            "<bob> tidy".to_string(),
            MetadataExtractor::new().unwrap().extract(Some("<bob> tidy")),
        );
        assert_eq!(
            render_commit(&commit),
            "7\tasmith\t2024-01-01T00:00:00.000000Z\tbob\n\t\tNumber of changed files: 0\n\t\t<bob> tidy\n"
        );
    }
}
