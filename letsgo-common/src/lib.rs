//! Common types and client-side logic for the Let'sGo Rides web client
//!
//! Everything in here is plain Rust so it can be exercised on the host; the
//! `letsgo-web` crate only renders it and wires it to browser storage.

pub mod config;
pub mod dashboard;
pub mod session;
pub mod storage;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text for a stored JSON value as the pages show it. `null` shows nothing.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// The active ride record, stored as a single JSON object
///
/// Kept as the raw object: fields are read leniently for display and a
/// profile edit only replaces `userName` and `email`, so every other key,
/// `null`s included, is written back exactly as it was stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct BookingDetails(Map<String, Value>);

impl BookingDetails {
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(display_value)
    }

    pub fn user(&self) -> Option<String> {
        self.get("user")
    }

    pub fn user_name(&self) -> Option<String> {
        self.get("userName")
    }

    pub fn email(&self) -> Option<String> {
        self.get("email")
    }

    pub fn source(&self) -> Option<String> {
        self.get("source")
    }

    pub fn destination(&self) -> Option<String> {
        self.get("destination")
    }

    pub fn cab_model(&self) -> Option<String> {
        self.get("cabModel")
    }

    pub fn fare(&self) -> Option<String> {
        self.get("fare")
    }

    pub fn driver_name(&self) -> Option<String> {
        self.get("driverName")
    }

    /// Copy of this record with the profile-owned fields replaced
    pub fn with_profile(&self, profile: &Profile) -> Self {
        let mut fields = self.0.clone();
        fields.insert("userName".to_string(), Value::String(profile.name.clone()));
        fields.insert("email".to_string(), Value::String(profile.email.clone()));
        Self(fields)
    }
}

/// One row of the booking history, taken from an entry of the global
/// `bookings` list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRecord {
    pub id: Option<String>,
    pub date: String,
    pub source: String,
    pub destination: String,
    pub status: String,
    pub mobile_number: String,
}

impl BookingRecord {
    /// Row for `entry` when it was booked from `mobile_number`.
    ///
    /// Only a string `mobileNumber` equal to the session matches; entries of
    /// any other shape are skipped without affecting their siblings.
    pub fn for_session(entry: &Value, mobile_number: &str) -> Option<Self> {
        let fields = entry.as_object()?;
        if fields.get("mobileNumber").and_then(Value::as_str) != Some(mobile_number) {
            return None;
        }

        let text = |key: &str| fields.get(key).and_then(display_value).unwrap_or_default();

        Some(Self {
            id: fields.get("id").and_then(display_value),
            date: text("date"),
            source: text("source"),
            destination: text("destination"),
            status: text("status"),
            mobile_number: mobile_number.to_string(),
        })
    }
}

/// Editable profile fields. `address` only ever lives in component state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl Profile {
    /// Profile as shown for a stored booking record
    pub fn from_booking(details: &BookingDetails) -> Self {
        Self {
            name: details.user_name().unwrap_or_default(),
            email: details.email().unwrap_or_default(),
            address: String::new(),
        }
    }

    /// Uppercase first letter of the name, used when no avatar image is set
    pub fn initial(&self) -> Option<String> {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}

/// Client error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Local storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to write {key} to local storage: {message}")]
    StorageWrite { key: String, message: String },

    #[error("Malformed record under {key}: {source}")]
    MalformedRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read file: {0}")]
    FileRead(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(value: Value) -> BookingDetails {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_booking_details_reads_fields_leniently() {
        let details = details(json!({
            "user": 42,
            "userName": "Asha",
            "fare": 199.5,
            "cabModel": {"make": "Maruti"},
            "driverName": null
        }));

        assert_eq!(details.user().as_deref(), Some("42"));
        assert_eq!(details.user_name().as_deref(), Some("Asha"));
        assert_eq!(details.fare().as_deref(), Some("199.5"));
        assert_eq!(details.cab_model().as_deref(), Some(r#"{"make":"Maruti"}"#));
        assert_eq!(details.driver_name(), None);
        assert_eq!(details.source(), None);
    }

    #[test]
    fn test_booking_details_must_be_an_object() {
        assert!(serde_json::from_str::<BookingDetails>("[1, 2]").is_err());
        assert!(serde_json::from_str::<BookingDetails>(r#""text""#).is_err());
    }

    #[test]
    fn test_with_profile_only_touches_name_and_email() {
        let original = json!({
            "user": 42,
            "userName": "Old",
            "email": "old@example.com",
            "source": "Kollam",
            "driverName": null,
            "pickupTime": "09:30"
        });
        let profile = Profile {
            name: "New".to_string(),
            email: "new@example.com".to_string(),
            address: "ignored".to_string(),
        };

        let updated = serde_json::to_value(details(original.clone()).with_profile(&profile)).unwrap();

        let mut expected = original;
        expected["userName"] = json!("New");
        expected["email"] = json!("new@example.com");
        assert_eq!(updated, expected);
        assert_eq!(updated["driverName"], Value::Null);
        assert!(updated.get("address").is_none());
    }

    #[test]
    fn test_booking_record_for_session() {
        let entry = json!({"id": 7, "date": 20240501, "status": null, "mobileNumber": "9876543210"});

        let record = BookingRecord::for_session(&entry, "9876543210").unwrap();
        assert_eq!(record.id.as_deref(), Some("7"));
        assert_eq!(record.date, "20240501");
        assert_eq!(record.status, "");
        assert_eq!(record.source, "");

        assert!(BookingRecord::for_session(&entry, "9876543211").is_none());
        assert!(BookingRecord::for_session(&json!({"mobileNumber": 9876543210u64}), "9876543210").is_none());
        assert!(BookingRecord::for_session(&json!("9876543210"), "9876543210").is_none());
    }

    #[test]
    fn test_profile_initial() {
        let profile = Profile {
            name: "ravi".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.initial().as_deref(), Some("R"));
        assert_eq!(Profile::default().initial(), None);
    }
}
