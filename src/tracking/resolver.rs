// Trackable encoding
//
// Dynamic records: the symbol holds only {base}/r/{id}, so the destination
// can change server-side without reprinting.
// Static records: http(s) payloads get qr_track/qr_t appended; anything else
// (mailto:, WIFI:, vCard, ...) is encoded as-is since it cannot carry tracking.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use super::clock::{Clock, SystemClock};
use super::{SHORT_PATH, TIMESTAMP_PARAM, TRACK_PARAM};
use crate::config::TrackingConfig;

/// Characters escaped when the record id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'|')
    .add(b'%');

#[derive(Debug, Clone)]
pub struct TrackingEncoder<C: Clock = SystemClock> {
    config: TrackingConfig,
    clock: C,
}

impl TrackingEncoder<SystemClock> {
    pub fn new(config: TrackingConfig) -> Self {
        Self { config, clock: SystemClock }
    }
}

impl<C: Clock> TrackingEncoder<C> {
    pub fn with_clock(config: TrackingConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Stable short URL for a record. Depends only on the id and base domain.
    pub fn short_url(&self, record_id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_domain(),
            SHORT_PATH,
            utf8_percent_encode(record_id, PATH_SEGMENT)
        )
    }

    /// The string handed to the QR renderer for a record
    pub fn resolve_encoding(&self, payload: &str, record_id: &str, is_static: bool) -> String {
        if !is_static {
            log::debug!("Dynamic record {}: encoding short URL", record_id);
            return self.short_url(record_id);
        }

        if !payload.starts_with("http") {
            return payload.to_string();
        }

        match add_tracking_params(payload, record_id, self.clock.now_millis()) {
            Some(tracked) => tracked,
            None => {
                log::warn!(
                    "Static record {}: payload looks like a URL but does not parse, encoding unchanged",
                    record_id
                );
                payload.to_string()
            }
        }
    }
}

fn add_tracking_params(payload: &str, record_id: &str, now_ms: i64) -> Option<String> {
    let mut url = Url::parse(payload).ok()?;

    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    set_param(&mut pairs, TRACK_PARAM, record_id);
    set_param(&mut pairs, TIMESTAMP_PARAM, &now_ms.to_string());

    url.query_pairs_mut().clear().extend_pairs(pairs.iter());
    Some(url.into())
}

/// Replace the first occurrence of `key` in place and drop later duplicates,
/// or append when absent.
pub(crate) fn set_param(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    let mut found = false;
    pairs.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        if found {
            return false;
        }
        found = true;
        *v = value.to_string();
        true
    });
    if !found {
        pairs.push((key.to_string(), value.to_string()));
    }
}
