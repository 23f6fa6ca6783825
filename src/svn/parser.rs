//! `svn log -v --xml` documents.
//!
//! ```xml
//! <log>
//!   <logentry revision="42">
//!     <author>jdoe</author>
//!     <date>2024-01-29T15:30:00.000000Z</date>
//!     <paths>
//!       <path action="M" kind="file">/trunk/src/a.rb</path>
//!     </paths>
//!     <msg>fix <bob> [pj9]</msg>
//!   </logentry>
//! </log>
//! ```

use crate::error::{Result, ReviewError};
use crate::extract::MetadataExtractor;
use crate::model::CommitRecord;
use roxmltree::{Document, Node};

/// Parse log text into commits, keeping document order.
pub fn parse_log(xml: &str, extractor: &MetadataExtractor) -> Result<Vec<CommitRecord>> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if !root.has_tag_name("log") {
        return Err(ReviewError::MalformedLog(format!(
            "expected <log> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    root.children()
        .filter(|n| n.has_tag_name("logentry"))
        .map(|entry| parse_entry(entry, extractor))
        .collect()
}

fn parse_entry(entry: Node, extractor: &MetadataExtractor) -> Result<CommitRecord> {
    let revision = entry
        .attribute("revision")
        .ok_or_else(|| ReviewError::MalformedLog("log entry without revision".to_string()))?
        .to_string();

    let author = required_text(entry, &revision, "author")?;
    let date = required_text(entry, &revision, "date")?;
    let message = required_text(entry, &revision, "msg")?;
    let changed_paths = changed_paths(entry, &revision)?;
    let metadata = extractor.extract(Some(&message));

    Ok(CommitRecord::new(
        revision,
        author,
        date,
        changed_paths,
        message,
        metadata,
    ))
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// Element text with entities resolved; an empty element gives "".
fn text_of(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn required_text(entry: Node, revision: &str, name: &str) -> Result<String> {
    child(entry, name)
        .map(text_of)
        .ok_or_else(|| ReviewError::missing_field(revision, name))
}

fn changed_paths(entry: Node, revision: &str) -> Result<Vec<String>> {
    let Some(paths) = child(entry, "paths") else {
        return Ok(Vec::new());
    };

    paths
        .children()
        .filter(|n| n.has_tag_name("path"))
        .map(|path| {
            let action = path.attribute("action").ok_or_else(|| {
                ReviewError::MalformedLog(format!("path in r{revision} has no action"))
            })?;
            Ok(format!("{} {}", action, text_of(path).trim()))
        })
        .collect()
}
