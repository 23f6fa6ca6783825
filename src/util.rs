use chrono::{DateTime, TimeZone};

pub fn file_stamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%Y%m%d_%H%M%S").to_string()
}

/// svn messages sometimes carry a literal backslash-n instead of a line break.
pub fn collapse_escaped_newlines(message: &str) -> String {
    message.replace("\\n", " ")
}

pub fn expand_tabs(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = width - column % width;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}
