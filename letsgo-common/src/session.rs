//! Session identifier and OTP verification
//!
//! The phone number travels between pages as the `mobileNumber` query
//! parameter and is the only session the client has.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::config::OtpConfig;

/// Query parameter carrying the session identifier
pub const MOBILE_NUMBER_PARAM: &str = "mobileNumber";

pub const OTP_VERIFIED_MESSAGE: &str = "OTP Verified! Redirecting to user dashboard...";
pub const OTP_REJECTED_MESSAGE: &str = "OTP Verification Failed: Invalid OTP. Please try again.";

/// Phone number used as the session identifier. Not validated or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

/// Serializable form for router query helpers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionQuery {
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
}

impl SessionId {
    /// Wrap a phone number. Empty strings are not a session.
    pub fn new(mobile_number: impl Into<String>) -> Option<Self> {
        let mobile_number = mobile_number.into();
        if mobile_number.is_empty() {
            None
        } else {
            Some(Self(mobile_number))
        }
    }

    /// Extract `mobileNumber` from a URL query string, with or without the
    /// leading `?`. The first occurrence wins.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);

        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .find(|(key, _)| key == MOBILE_NUMBER_PARAM)
            .and_then(|(_, value)| Self::new(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `mobileNumber=<percent-encoded number>`
    pub fn to_query_string(&self) -> String {
        format!("{}={}", MOBILE_NUMBER_PARAM, urlencoding::encode(&self.0))
    }

    pub fn query(&self) -> SessionQuery {
        SessionQuery {
            mobile_number: self.0.clone(),
        }
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn decode_component(raw: &str) -> String {
    let plus_as_space = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(plus_as_space.as_bytes())).into_owned()
}

/// Result of an OTP attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpOutcome {
    Verified,
    Rejected,
}

impl OtpOutcome {
    /// Text shown in the blocking alert after an attempt
    pub fn message(&self) -> &'static str {
        match self {
            Self::Verified => OTP_VERIFIED_MESSAGE,
            Self::Rejected => OTP_REJECTED_MESSAGE,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

/// Checks entered codes against the configured one. Attempts are unlimited.
#[derive(Debug, Clone)]
pub struct OtpVerifier {
    expected: String,
}

impl OtpVerifier {
    pub fn new(config: &OtpConfig) -> Self {
        Self {
            expected: config.code.clone(),
        }
    }

    /// Compare `input` verbatim; whitespace is significant
    pub fn verify(&self, input: &str) -> OtpOutcome {
        if bool::from(input.as_bytes().ct_eq(self.expected.as_bytes())) {
            tracing::debug!("OTP accepted");
            OtpOutcome::Verified
        } else {
            tracing::warn!(length = input.len(), "OTP rejected");
            OtpOutcome::Rejected
        }
    }
}

impl Default for OtpVerifier {
    fn default() -> Self {
        Self::new(&OtpConfig::default())
    }
}
