//! Plain-text report encoding.

use crate::aggregator::StatisticsReport;

/// Render a report as plain text: each sentence followed by a blank line
pub fn render_text(report: &StatisticsReport) -> String {
    report
        .sentences()
        .iter()
        .map(|sentence| format!("{}\n\n", sentence))
        .collect()
}
