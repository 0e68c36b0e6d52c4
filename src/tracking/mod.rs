// Trackable-Data Resolver
// Decides what string actually goes into the printed QR symbol, and reads
// tracking annotations back off landing URLs.
//
// Query parameter convention shared with the redirect/analytics service:
//   qr_track = QR record identifier
//   qr_t     = generation time, epoch milliseconds

pub mod auto;
pub mod clock;
pub mod detect;
pub mod resolver;

pub use auto::{init_auto_tracking, ScanEvent, ScanSink};
pub use clock::{Clock, FixedClock, SystemClock};
pub use detect::{detect_tracking, strip_tracking, TrackingInfo};
pub use resolver::TrackingEncoder;

/// Query parameter carrying the record identifier
pub const TRACK_PARAM: &str = "qr_track";
/// Query parameter carrying the generation timestamp (epoch ms)
pub const TIMESTAMP_PARAM: &str = "qr_t";
/// Path segment short URLs live under
pub const SHORT_PATH: &str = "r";
