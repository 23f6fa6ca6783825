use pretty_assertions::assert_eq;
use review_record::error::{Result, ReviewError};
use review_record::extract::MetadataExtractor;
use review_record::filter::filter_commits;
use review_record::model::ReviewCriteria;
use review_record::report::ReportJob;
use review_record::svn::{fetch_commits, parse_log, LogSource};
use std::cell::RefCell;

const LOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<log>
<logentry revision="2">
<author>jdoe</author>
<date>2024-01-29T15:30:00.000000Z</date>
<paths>
<path action="M" kind="file">/src/a.rb</path>
</paths>
<msg>reviewed by &lt;bob&gt; [PJ9] fix bug</msg>
</logentry>
<logentry revision="1">
<author>jdoe</author>
<date>2024-01-28T15:30:00.000000Z</date>
<paths/>
<msg>no tags here</msg>
</logentry>
</log>
"#;

#[derive(Default)]
struct RecordingSource {
    requests: RefCell<Vec<(String, Option<String>)>>,
}

impl LogSource for RecordingSource {
    fn fetch(&self, location: &str, revisions: Option<&str>) -> Result<String> {
        self.requests
            .borrow_mut()
            .push((location.to_string(), revisions.map(str::to_string)));
        Ok(LOG.to_string())
    }
}

struct GarbageSource;

impl LogSource for GarbageSource {
    fn fetch(&self, _location: &str, _revisions: Option<&str>) -> Result<String> {
        Ok("svn: warning: W155010: not a working copy".to_string())
    }
}

#[test]
fn two_entry_scenario() {
    let extractor = MetadataExtractor::new().unwrap();
    let commits = parse_log(LOG, &extractor).unwrap();
    assert_eq!(commits.len(), 2);

    let a = &commits[0];
    assert_eq!(a.reviewer(), Some("bob"));
    assert_eq!(a.project(), Some("9"));
    assert_eq!(a.changed_paths(), ["M /src/a.rb"]);
    assert!(commits[1].changed_paths().is_empty());

    let bob = ReviewCriteria::new().with_reviewer("bob").with_project("9");
    assert_eq!(filter_commits(&commits, &bob), vec![a.clone()]);

    let carol = ReviewCriteria::new().with_reviewer("carol");
    assert!(filter_commits(&commits, &carol).is_empty());

    assert_eq!(filter_commits(&commits, &ReviewCriteria::new()), vec![commits[1].clone()]);
}

#[test]
fn parsing_is_idempotent() {
    let extractor = MetadataExtractor::new().unwrap();
    assert_eq!(
        parse_log(LOG, &extractor).unwrap(),
        parse_log(LOG, &extractor).unwrap()
    );
}

#[test]
fn job_passes_location_and_range_once() {
    let source = RecordingSource::default();
    let extractor = MetadataExtractor::new().unwrap();
    let job = ReportJob {
        location: "svn://host/repo/trunk".to_string(),
        revisions: Some("1:2".to_string()),
        reviewers: vec!["bob".to_string(), "BOB".to_string(), "carol".to_string()],
        project: Some("9".to_string()),
        work_package: None,
    };

    let outcome = job.run(&source, &extractor).unwrap();

    assert_eq!(
        *source.requests.borrow(),
        vec![("svn://host/repo/trunk".to_string(), Some("1:2".to_string()))]
    );
    let counts: Vec<usize> = outcome.reports.iter().map(|r| r.commits().len()).collect();
    assert_eq!(counts, vec![1, 1, 0]);
    assert_eq!(outcome.reports[1].reviewer(), Some("BOB"));
}

#[test]
fn unparsable_output_is_malformed() {
    let extractor = MetadataExtractor::new().unwrap();
    let err = fetch_commits(&GarbageSource, "trunk", None, &extractor).unwrap_err();
    assert!(err.is_malformed_log());
    assert!(matches!(err, ReviewError::Xml(_)));
}
