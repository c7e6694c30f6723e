//! Client configuration
//!
//! Loaded from TOML. Every section and field has a default, so an empty
//! document yields the stock configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Main configuration struct for the web client
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// OTP verification
    pub otp: OtpConfig,
    /// Local storage key names
    pub storage: StorageKeys,
    /// Placeholder cab tracking panel
    pub tracking: TrackingConfig,
    /// Presentation settings
    pub ui: UiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OtpConfig {
    /// The only code the verifier accepts
    pub code: String,
}

/// Local storage key names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageKeys {
    pub auth_token: String,
    pub booking_details: String,
    pub profile_image: String,
    pub bookings: String,
}

/// Fixed values shown by the "Track Cab" panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackingConfig {
    pub map_embed_url: String,
    pub location: String,
    pub vehicle_number: String,
    pub driver: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub brand: String,
    /// How long toast notices stay on screen
    pub notice_timeout_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code: "123456".to_string(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            auth_token: "authToken".to_string(),
            booking_details: "bookingDetails".to_string(),
            profile_image: "profileImage".to_string(),
            bookings: "bookings".to_string(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m14!1m12!1m3!1d15764.868434407826!2d76.9127246!3d9.0344791".to_string(),
            location: "Punalur, Kerala".to_string(),
            vehicle_number: "KL01AB1234".to_string(),
            driver: "Anoop".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: "Let'sGo Rides".to_string(),
            notice_timeout_ms: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.otp.code.is_empty() {
            return Err(Error::InvalidConfig("otp.code must not be empty".to_string()));
        }

        let keys = [
            &self.storage.auth_token,
            &self.storage.booking_details,
            &self.storage.profile_image,
            &self.storage.bookings,
        ];
        if keys.iter().any(|k| k.is_empty()) {
            return Err(Error::InvalidConfig("storage keys must not be empty".to_string()));
        }

        Ok(())
    }
}
