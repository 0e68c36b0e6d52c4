// QR Record Type Registry
// A record type says what real-world thing a QR code stands for.
// Unknown tags are kept as `Other` so future types still format (as JSON).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    Url,
    Text,
    Email,
    Sms,
    Wifi,
    Location,
    Vcard,
    /// Any tag without a dedicated formatting rule
    Other(String),
}

impl RecordType {
    /// Parse a type tag. Exact lowercase match; anything else is `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "url" => RecordType::Url,
            "text" => RecordType::Text,
            "email" => RecordType::Email,
            "sms" => RecordType::Sms,
            "wifi" => RecordType::Wifi,
            "location" => RecordType::Location,
            "vcard" => RecordType::Vcard,
            other => RecordType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecordType::Url => "url",
            RecordType::Text => "text",
            RecordType::Email => "email",
            RecordType::Sms => "sms",
            RecordType::Wifi => "wifi",
            RecordType::Location => "location",
            RecordType::Vcard => "vcard",
            RecordType::Other(tag) => tag,
        }
    }

    /// Field names read by the formatter for this type, in form order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            RecordType::Url => &[fields::URL],
            RecordType::Text => &[fields::TEXT],
            RecordType::Email => &[fields::EMAIL, fields::SUBJECT, fields::BODY],
            RecordType::Sms => &[fields::PHONE, fields::MESSAGE],
            RecordType::Wifi => &[fields::SSID, fields::PASSWORD, fields::ENCRYPTION],
            RecordType::Location => &[fields::LATITUDE, fields::LONGITUDE, fields::ADDRESS],
            RecordType::Vcard => &[
                fields::FIRST_NAME,
                fields::LAST_NAME,
                fields::COMPANY,
                fields::JOB_TITLE,
                fields::EMAIL,
                fields::PHONE,
                fields::WEBSITE,
            ],
            RecordType::Other(_) => &[],
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RecordType {
    fn from(tag: String) -> Self {
        RecordType::from_tag(&tag)
    }
}

impl From<RecordType> for String {
    fn from(record_type: RecordType) -> Self {
        record_type.as_str().to_string()
    }
}
