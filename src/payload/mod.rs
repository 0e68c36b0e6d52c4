// QR Payload Formatter
// Turns a typed record (URL, vCard, WiFi, ...) into the exact string a QR
// symbol encodes when scanned directly.

pub mod encoding;
pub mod fields;
pub mod formatter;
pub mod record_type;

pub use encoding::encode_uri_component;
pub use fields::FieldValues;
pub use formatter::format_payload;
pub use record_type::RecordType;
