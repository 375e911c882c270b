// External crates
use chrono::Utc;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

// Standard library imports
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::group::Group;
use crate::result::Status;
use crate::sanitize::{cdata, sanitize};

// Constants for report output
pub const XML_VERSION: &str = "1.0";
pub const XML_ENCODING: &str = "utf-8";
pub const TAG_TESTSUITE: &str = "testsuite";
pub const TAG_TESTCASE: &str = "testcase";
pub const TAG_SKIPPED: &str = "skipped";
pub const TAG_FAILURE: &str = "failure";
pub const FAILURE_MESSAGE: &str = "failure";
// Historical spelling; report consumers match on this exact value.
pub const FAILURE_TYPE: &str = "falure";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Returns the current UTC time in the report timestamp format.
pub fn timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Renders one closed group as a complete JUnit XML document.
pub fn write_group_report<W: Write>(group: &Group, writer: &mut Writer<W>) -> io::Result<()> {
    writer
        .write_event(Event::Decl(BytesDecl::new(
            XML_VERSION,
            Some(XML_ENCODING),
            None,
        )))
        .map_err(io::Error::other)?;

    let mut suite = BytesStart::new(TAG_TESTSUITE);
    suite.push_attribute(("errors", "0"));
    suite.push_attribute(("name", sanitize(Some(group.full_description())).as_str()));
    suite.push_attribute(("failures", group.failures_count().to_string().as_str()));
    suite.push_attribute(("skipped", group.skipped_count().to_string().as_str()));
    suite.push_attribute(("tests", group.tests_count().to_string().as_str()));
    suite.push_attribute(("time", group.duration().to_string().as_str()));
    suite.push_attribute(("timestamp", timestamp().as_str()));
    writer
        .write_event(Event::Start(suite))
        .map_err(io::Error::other)?;

    // Results in recorded order
    for result in group.results() {
        let mut case = BytesStart::new(TAG_TESTCASE);
        case.push_attribute(("name", sanitize(Some(result.description.as_str())).as_str()));
        case.push_attribute(("time", result.run_time.to_string().as_str()));

        match result.status {
            Status::Passed => {
                writer
                    .write_event(Event::Empty(case))
                    .map_err(io::Error::other)?;
            }
            Status::Pending => {
                writer
                    .write_event(Event::Start(case))
                    .map_err(io::Error::other)?;
                writer
                    .write_event(Event::Empty(BytesStart::new(TAG_SKIPPED)))
                    .map_err(io::Error::other)?;
                writer
                    .write_event(Event::End(BytesEnd::new(TAG_TESTCASE)))
                    .map_err(io::Error::other)?;
            }
            Status::Failed => {
                writer
                    .write_event(Event::Start(case))
                    .map_err(io::Error::other)?;
                let mut failure = BytesStart::new(TAG_FAILURE);
                failure.push_attribute(("message", FAILURE_MESSAGE));
                failure.push_attribute(("type", FAILURE_TYPE));
                writer
                    .write_event(Event::Start(failure))
                    .map_err(io::Error::other)?;
                // cdata() already produced the full <![CDATA[ ... ]]> block.
                let body = cdata(Some(result.failure_body().as_str()));
                writer
                    .write_event(Event::Text(BytesText::from_escaped(body.as_str())))
                    .map_err(io::Error::other)?;
                writer
                    .write_event(Event::End(BytesEnd::new(TAG_FAILURE)))
                    .map_err(io::Error::other)?;
                writer
                    .write_event(Event::End(BytesEnd::new(TAG_TESTCASE)))
                    .map_err(io::Error::other)?;
            }
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(TAG_TESTSUITE)))
        .map_err(io::Error::other)?;
    Ok(())
}

/// Writes the report for `group` to `path`, creating or truncating the file.
///
/// The handle is dropped, and therefore closed, even when a write step
/// fails partway through.
pub fn write_group_file(group: &Group, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::new_with_indent(file, b' ', 2);
    write_group_report(group, &mut writer)
}
