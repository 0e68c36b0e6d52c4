// Tracking detection on incoming URLs
// Runs on arbitrary referrer/landing URLs, so malformed input is a negative
// result rather than an error.

use serde::{Deserialize, Serialize};
use url::Url;

use super::{TIMESTAMP_PARAM, TRACK_PARAM};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub has_tracking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_id: Option<String>,
    /// qr_t value, when present and numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<i64>,
}

impl TrackingInfo {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Look for qr_track (and qr_t) in a URL's query string
pub fn detect_tracking(url: &str) -> TrackingInfo {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            log::debug!("detect_tracking: not a valid URL ({}): {}", e, url);
            return TrackingInfo::none();
        }
    };

    // First occurrence wins for both params
    let mut qr_code_id = None;
    let mut raw_timestamp: Option<String> = None;
    for (key, value) in parsed.query_pairs() {
        if key == TRACK_PARAM && qr_code_id.is_none() {
            qr_code_id = Some(value.into_owned());
        } else if key == TIMESTAMP_PARAM && raw_timestamp.is_none() {
            raw_timestamp = Some(value.into_owned());
        }
    }
    let generated_at = raw_timestamp.and_then(|t| t.parse::<i64>().ok());

    match qr_code_id {
        Some(id) if !id.is_empty() => TrackingInfo {
            has_tracking: true,
            qr_code_id: Some(id),
            generated_at,
        },
        _ => TrackingInfo::none(),
    }
}

/// Remove qr_track/qr_t from a URL, keeping every other parameter.
/// Returns None when the input is not a valid URL.
pub fn strip_tracking(url: &str) -> Option<String> {
    let mut parsed = Url::parse(url).ok()?;
    if parsed.query().is_none() {
        return Some(parsed.into());
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .into_owned()
        .filter(|(k, _)| k != TRACK_PARAM && k != TIMESTAMP_PARAM)
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(kept.iter());
    }
    Some(parsed.into())
}
