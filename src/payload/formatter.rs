// Payload Writer
// One formatting rule per record type. Output must stay byte-identical,
// since printed codes already carry these strings.

use super::encoding::encode_uri_component;
use super::fields::{self, FieldValues};
use super::record_type::RecordType;

/// Build the canonical payload for a record. Total over all inputs.
pub fn format_payload(record_type: &RecordType, values: &FieldValues) -> String {
    match record_type {
        RecordType::Url => values.get_or_empty(fields::URL).to_string(),
        RecordType::Text => values.get_or_empty(fields::TEXT).to_string(),
        RecordType::Email => format_email(values),
        RecordType::Sms => format_sms(values),
        RecordType::Wifi => format_wifi(values),
        RecordType::Location => format_location(values),
        RecordType::Vcard => format_vcard(values),
        RecordType::Other(tag) => format_fallback(tag, values),
    }
}

fn format_email(values: &FieldValues) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        values.get_or_empty(fields::EMAIL),
        encode_uri_component(values.get_or_empty(fields::SUBJECT)),
        encode_uri_component(values.get_or_empty(fields::BODY))
    )
}

fn format_sms(values: &FieldValues) -> String {
    let phone = values.get_or_empty(fields::PHONE);
    if values.is_filled(fields::MESSAGE) {
        format!(
            "sms:{}?body={}",
            phone,
            encode_uri_component(values.get_or_empty(fields::MESSAGE))
        )
    } else {
        format!("sms:{}", phone)
    }
}

fn format_wifi(values: &FieldValues) -> String {
    format!(
        "WIFI:T:{};S:{};P:{};;",
        values.get_or_empty(fields::ENCRYPTION),
        values.get_or_empty(fields::SSID),
        values.get_or_empty(fields::PASSWORD)
    )
}

fn format_location(values: &FieldValues) -> String {
    if values.is_filled(fields::LATITUDE) && values.is_filled(fields::LONGITUDE) {
        format!(
            "geo:{},{}",
            values.get_or_empty(fields::LATITUDE),
            values.get_or_empty(fields::LONGITUDE)
        )
    } else {
        values.get_or_empty(fields::ADDRESS).to_string()
    }
}

/// vCard 3.0. Every line is written even when its field is empty.
fn format_vcard(values: &FieldValues) -> String {
    let lines = [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!(
            "FN:{} {}",
            values.get_or_empty(fields::FIRST_NAME),
            values.get_or_empty(fields::LAST_NAME)
        ),
        format!("ORG:{}", values.get_or_empty(fields::COMPANY)),
        format!("TITLE:{}", values.get_or_empty(fields::JOB_TITLE)),
        format!("EMAIL:{}", values.get_or_empty(fields::EMAIL)),
        format!("TEL:{}", values.get_or_empty(fields::PHONE)),
        format!("URL:{}", values.get_or_empty(fields::WEBSITE)),
        "END:VCARD".to_string(),
    ];
    lines.join("\n")
}

fn format_fallback(tag: &str, values: &FieldValues) -> String {
    log::debug!("No formatting rule for record type '{}', using JSON", tag);
    match serde_json::to_string(values) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to serialize fields for '{}': {}", tag, e);
            "{}".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_of(pairs: &[(&str, &str)]) -> FieldValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_url() {
        let values = fields_of(&[("url", "https://example.com")]);
        assert_eq!(format_payload(&RecordType::Url, &values), "https://example.com");
    }

    #[test]
    fn test_url_and_text_empty_fields() {
        let empty = FieldValues::new();
        assert_eq!(format_payload(&RecordType::Url, &empty), "");
        assert_eq!(format_payload(&RecordType::Text, &empty), "");
    }

    #[test]
    fn test_text_verbatim() {
        let values = fields_of(&[("text", "Hello, World! & more")]);
        assert_eq!(format_payload(&RecordType::Text, &values), "Hello, World! & more");
    }

    #[test]
    fn test_email() {
        let values = fields_of(&[("email", "a@b.com"), ("subject", "Test Subject"), ("body", "")]);
        assert_eq!(
            format_payload(&RecordType::Email, &values),
            "mailto:a@b.com?subject=Test%20Subject&body="
        );
    }

    #[test]
    fn test_email_missing_subject_and_body() {
        let values = fields_of(&[("email", "a@b.com")]);
        assert_eq!(
            format_payload(&RecordType::Email, &values),
            "mailto:a@b.com?subject=&body="
        );
    }

    #[test]
    fn test_email_body_encoding() {
        let values = fields_of(&[
            ("email", "a@b.com"),
            ("subject", "Q&A"),
            ("body", "Hi there,\nsee you"),
        ]);
        assert_eq!(
            format_payload(&RecordType::Email, &values),
            "mailto:a@b.com?subject=Q%26A&body=Hi%20there%2C%0Asee%20you"
        );
    }

    #[test]
    fn test_sms_with_message() {
        let values = fields_of(&[("phone", "+1234567890"), ("message", "Hello from QR")]);
        assert_eq!(
            format_payload(&RecordType::Sms, &values),
            "sms:+1234567890?body=Hello%20from%20QR"
        );
    }

    #[test]
    fn test_sms_without_message() {
        let values = fields_of(&[("phone", "+1234567890")]);
        assert_eq!(format_payload(&RecordType::Sms, &values), "sms:+1234567890");

        let values = fields_of(&[("phone", "+1234567890"), ("message", "")]);
        assert_eq!(format_payload(&RecordType::Sms, &values), "sms:+1234567890");
    }

    #[test]
    fn test_wifi() {
        let values = fields_of(&[
            ("encryption", "WPA2"),
            ("ssid", "MyNetwork"),
            ("password", "mypassword"),
        ]);
        assert_eq!(
            format_payload(&RecordType::Wifi, &values),
            "WIFI:T:WPA2;S:MyNetwork;P:mypassword;;"
        );
    }

    #[test]
    fn test_wifi_special_characters_not_escaped() {
        let values = fields_of(&[("encryption", "WPA"), ("ssid", "My;Net"), ("password", "p:w")]);
        assert_eq!(
            format_payload(&RecordType::Wifi, &values),
            "WIFI:T:WPA;S:My;Net;P:p:w;;"
        );
        assert_eq!(format_payload(&RecordType::Wifi, &FieldValues::new()), "WIFI:T:;S:;P:;;");
    }

    #[test]
    fn test_location_geo() {
        let values = fields_of(&[("latitude", "40.7128"), ("longitude", "-74.0060")]);
        assert_eq!(format_payload(&RecordType::Location, &values), "geo:40.7128,-74.0060");
    }

    #[test]
    fn test_location_address_fallback() {
        let values = fields_of(&[("address", "123 Main St")]);
        assert_eq!(format_payload(&RecordType::Location, &values), "123 Main St");

        // Only one coordinate is not enough for geo:
        let values = fields_of(&[("latitude", "40.7128"), ("address", "123 Main St")]);
        assert_eq!(format_payload(&RecordType::Location, &values), "123 Main St");
    }

    #[test]
    fn test_vcard() {
        let values = fields_of(&[
            ("firstName", "John"),
            ("lastName", "Doe"),
            ("company", "Acme Corp"),
            ("jobTitle", "Developer"),
            ("email", "john@example.com"),
            ("phone", "+1234567890"),
            ("website", "https://johndoe.com"),
        ]);
        let expected = "BEGIN:VCARD\n\
                        VERSION:3.0\n\
                        FN:John Doe\n\
                        ORG:Acme Corp\n\
                        TITLE:Developer\n\
                        EMAIL:john@example.com\n\
                        TEL:+1234567890\n\
                        URL:https://johndoe.com\n\
                        END:VCARD";
        assert_eq!(format_payload(&RecordType::Vcard, &values), expected);
    }

    #[test]
    fn test_vcard_empty_fields_still_emitted() {
        let values = fields_of(&[("firstName", "Jane")]);
        let vcard = format_payload(&RecordType::Vcard, &values);
        let lines: Vec<&str> = vcard.split('\n').collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[2], "FN:Jane ");
        assert_eq!(lines[3], "ORG:");
        assert_eq!(lines[7], "URL:");
    }

    #[test]
    fn test_unknown_type_json_fallback() {
        let values = fields_of(&[("store", "apple"), ("appId", "123")]);
        let record_type = RecordType::from_tag("app");
        assert_eq!(
            format_payload(&record_type, &values),
            r#"{"appId":"123","store":"apple"}"#
        );
        assert_eq!(format_payload(&record_type, &FieldValues::new()), "{}");
    }
}
