//! Report renderers and writers.
//!
//! This module encodes a `StatisticsReport` in each supported format:
//! - JSON object keyed "1".."7"
//! - Plain text, one sentence per paragraph
//! - XML, one element per sentence
//!
//! and writes rendered reports to disk for the CLI.

pub mod json;
pub mod text;
pub mod writer;
pub mod xml;

use crate::aggregator::StatisticsReport;
use crate::utils::error::OutputError;

// Re-export main functions
pub use json::render_json;
pub use text::render_text;
pub use writer::write_report;
pub use xml::render_xml;

/// Supported response encodings, in server preference order
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ResponseFormat {
    Json,
    Text,
    Xml,
}

impl ResponseFormat {
    /// Preference order used during content negotiation
    pub const PREFERENCE: [ResponseFormat; 3] =
        [ResponseFormat::Json, ResponseFormat::Text, ResponseFormat::Xml];

    /// Media type this format answers to
    pub fn media_type(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Text => "text/plain",
            ResponseFormat::Xml => "application/xml",
        }
    }

    /// `Content-Type` header value for responses
    pub fn content_type(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Text => "text/plain; charset=utf-8",
            ResponseFormat::Xml => "application/xml; charset=utf-8",
        }
    }

    /// Render a report in this format
    pub fn render(&self, report: &StatisticsReport) -> Result<String, OutputError> {
        match self {
            ResponseFormat::Json => render_json(report),
            ResponseFormat::Text => Ok(render_text(report)),
            ResponseFormat::Xml => render_xml(report),
        }
    }
}
