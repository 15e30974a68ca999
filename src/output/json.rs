//! JSON report encoding.

use crate::aggregator::StatisticsReport;
use crate::utils::error::OutputError;

/// Render a report as a compact JSON object keyed "1".."7"
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn render_json(report: &StatisticsReport) -> Result<String, OutputError> {
    serde_json::to_string(&report.numbered()).map_err(OutputError::SerializationFailed)
}
