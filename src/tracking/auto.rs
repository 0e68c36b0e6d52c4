// Auto-tracking for landing pages
//
// The host calls init_auto_tracking once at startup with the URL the visitor
// landed on. If the URL carries a qr_track annotation, a scan event is handed
// to the host's sink.

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::detect::detect_tracking;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    pub qr_code_id: String,
    /// When the tracked URL was generated (qr_t), if known
    pub generated_at: Option<i64>,
    /// When the visitor landed, epoch ms
    pub landed_at: i64,
    pub landing_url: String,
}

/// Destination for attributed scans (analytics store, queue, ...)
pub trait ScanSink {
    fn record_scan(&self, event: ScanEvent) -> Result<()>;
}

pub fn init_auto_tracking<C, S>(landing_url: &str, clock: &C, sink: &S) -> Result<Option<ScanEvent>>
where
    C: Clock + ?Sized,
    S: ScanSink + ?Sized,
{
    let info = detect_tracking(landing_url);
    let qr_code_id = match info.qr_code_id {
        Some(id) if info.has_tracking => id,
        _ => return Ok(None),
    };

    let event = ScanEvent {
        qr_code_id,
        generated_at: info.generated_at,
        landed_at: clock.now_millis(),
        landing_url: landing_url.to_string(),
    };

    log::info!("Attributed scan to QR code {}", event.qr_code_id);
    sink.record_scan(event.clone())?;
    Ok(Some(event))
}
