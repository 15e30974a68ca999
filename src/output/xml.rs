//! XML report encoding.
//!
//! Shape:
//! ```text
//! <statistics>
//!     <statistic key="1">Percentage female versus male: 50.0%.</statistic>
//!     ...
//! </statistics>
//! ```

use crate::aggregator::StatisticsReport;
use crate::utils::config::XML_INDENT;
use crate::utils::error::OutputError;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const ROOT_TAG: &str = "statistics";
const ENTRY_TAG: &str = "statistic";

/// Render a report as indented XML, without declaration or comments
///
/// **Public** - main entry point for XML output
///
/// # Errors
/// * `OutputError::XmlFailed` - writer failure or non UTF-8 output
pub fn render_xml(report: &StatisticsReport) -> Result<String, OutputError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', XML_INDENT);

    write_event(&mut writer, Event::Start(BytesStart::new(ROOT_TAG)))?;

    for (key, sentence) in report.numbered() {
        let start = BytesStart::new(ENTRY_TAG).with_attributes([("key", key.as_str())]);
        write_event(&mut writer, Event::Start(start))?;
        write_event(&mut writer, Event::Text(BytesText::new(&sentence)))?;
        write_event(&mut writer, Event::End(BytesEnd::new(ENTRY_TAG)))?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new(ROOT_TAG)))?;

    String::from_utf8(writer.into_inner()).map_err(|e| OutputError::XmlFailed(e.to_string()))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), OutputError> {
    writer
        .write_event(event)
        .map_err(|e| OutputError::XmlFailed(e.to_string()))
}
