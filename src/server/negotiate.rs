//! `Accept` header negotiation.
//!
//! The server's preference order decides, not the client's q-values: the
//! first of JSON, text, XML that the header admits wins. A type is
//! admitted when the most specific media range matching it has q > 0, so
//! `application/json;q=0, */*` rules JSON out but still admits text.

use crate::output::ResponseFormat;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
struct MediaRange {
    kind: String,
    subtype: String,
    quality: f32,
}

impl MediaRange {
    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(';');
        let (kind, subtype) = parts.next()?.trim().split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            if let Some((name, value)) = param.split_once('=') {
                if name.trim().eq_ignore_ascii_case("q") {
                    quality = value.trim().parse::<f32>().unwrap_or(0.0);
                }
            }
        }

        Some(Self {
            kind: kind.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            quality,
        })
    }

    /// 2 for an exact match, 1 for `type/*`, 0 for `*/*`
    fn specificity(&self, kind: &str, subtype: &str) -> Option<u8> {
        match (self.kind.as_str(), self.subtype.as_str()) {
            ("*", "*") => Some(0),
            (k, "*") if k == kind => Some(1),
            (k, s) if k == kind && s == subtype => Some(2),
            _ => None,
        }
    }
}

fn parse_accept(header: &str) -> Vec<MediaRange> {
    header.split(',').filter_map(MediaRange::parse).collect()
}

/// Whether the parsed header admits `media_type`
fn admits(ranges: &[MediaRange], media_type: &str) -> bool {
    let Some((kind, subtype)) = media_type.split_once('/') else {
        return false;
    };

    ranges
        .iter()
        .filter_map(|range| range.specificity(kind, subtype).map(|s| (s, range.quality)))
        .max_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)))
        .is_some_and(|(_, quality)| quality > 0.0)
}

/// Pick the response format for an `Accept` header value
///
/// **Public** - used by the statistics handler
///
/// A missing or blank header accepts anything, so JSON is chosen.
/// Returns `None` when none of the supported formats is admitted.
pub fn negotiate(accept: Option<&str>) -> Option<ResponseFormat> {
    let accept = match accept.map(str::trim) {
        None | Some("") => return Some(ResponseFormat::Json),
        Some(value) => value,
    };

    let ranges = parse_accept(accept);
    let chosen = ResponseFormat::PREFERENCE
        .into_iter()
        .find(|format| admits(&ranges, format.media_type()));

    debug!("Negotiated {:?} from Accept: {}", chosen, accept);
    chosen
}
