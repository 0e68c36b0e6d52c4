// QRTrack Library
// QR payload formatting and scan-tracking encoding

pub mod config;
pub mod error;
pub mod payload;
pub mod record;
pub mod tracking;

pub use config::TrackingConfig;
pub use error::{ConfigError, TrackError};
pub use payload::{format_payload, FieldValues, RecordType};
pub use record::{QrRecord, RecordId};
pub use tracking::{detect_tracking, init_auto_tracking, strip_tracking, TrackingEncoder, TrackingInfo};
