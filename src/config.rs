// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Config entry of a `VSmart` account.
//!
//! The serialized field names are the `CONF_*` constants so the entry reads
//! and writes the same keys the host stores. Persisting the entry is the
//! host's job.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::ParseError;
use crate::types::Region;

/// Account configuration.
///
/// # Examples
///
/// ```
/// use vsmart_lib::config::VSmartConfig;
/// use vsmart_lib::types::Region;
///
/// let config = VSmartConfig::new("user@example.com", "secret")
///     .with_region(Region::UnitedStates);
///
/// assert_eq!(config.api_root(), "https://usapi.gizwits.com");
/// assert!(!format!("{config:?}").contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VSmartConfig {
    /// Account user name.
    pub username: String,

    /// Account password.
    pub password: String,

    /// Regional cloud, stored as its API root URL.
    #[serde(rename = "apiroot", default)]
    pub region: Region,

    /// Cached user token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,

    /// Expiry of the cached user token, as unix seconds.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_seconds_option"
    )]
    pub user_token_expiry: Option<DateTime<Utc>>,
}

impl VSmartConfig {
    /// Creates a configuration for the default region without a token.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            region: Region::default(),
            user_token: None,
            user_token_expiry: None,
        }
    }

    /// Sets the regional cloud.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Sets a cached user token and its expiry.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, expiry: DateTime<Utc>) -> Self {
        self.user_token = Some(token.into());
        self.user_token_expiry = Some(expiry);
        self
    }

    /// Returns the API root URL of the configured region.
    #[must_use]
    pub fn api_root(&self) -> &'static str {
        self.region.api_root()
    }

    /// Returns `true` if a cached token exists and has not expired at `now`.
    #[must_use]
    pub fn has_valid_token(&self, now: DateTime<Utc>) -> bool {
        match (&self.user_token, self.user_token_expiry) {
            (Some(token), Some(expiry)) => !token.is_empty() && now < expiry,
            _ => false,
        }
    }

    /// Parses a config entry from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the entry is malformed or names an
    /// unknown API root.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Serializes the config entry to JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string(self).map_err(Into::into)
    }
}

impl fmt::Debug for VSmartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VSmartConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("region", &self.region)
            .field("user_token", &self.user_token.as_ref().map(|_| "<redacted>"))
            .field("user_token_expiry", &self.user_token_expiry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        CONF_API_ROOT, CONF_PASSWORD, CONF_USER_TOKEN, CONF_USER_TOKEN_EXPIRY, CONF_USERNAME,
    };

    use chrono::TimeZone;

    fn expiry() -> DateTime<Utc> {
        Utc.timestamp_opt(1_800_000_000, 0).unwrap()
    }

    #[test]
    fn serialized_keys_match_constants() {
        let config = VSmartConfig::new("user", "pass")
            .with_region(Region::China)
            .with_token("tok", expiry());
        let value: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

        assert_eq!(value[CONF_USERNAME], "user");
        assert_eq!(value[CONF_PASSWORD], "pass");
        assert_eq!(value[CONF_API_ROOT], "https://api.vaillant.com.cn");
        assert_eq!(value[CONF_USER_TOKEN], "tok");
        assert_eq!(value[CONF_USER_TOKEN_EXPIRY], 1_800_000_000);
    }

    #[test]
    fn parse_minimal_entry() {
        let config = VSmartConfig::from_json(r#"{"username":"u","password":"p"}"#).unwrap();
        assert_eq!(config.region, Region::Europe);
        assert!(config.user_token.is_none());
        assert!(config.user_token_expiry.is_none());
    }

    #[test]
    fn parse_rejects_unknown_api_root() {
        let result = VSmartConfig::from_json(
            r#"{"username":"u","password":"p","apiroot":"https://example.com"}"#,
        );
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn token_validity() {
        let config = VSmartConfig::new("u", "p");
        assert!(!config.has_valid_token(expiry()));

        let config = config.with_token("tok", expiry());
        let before = Utc.timestamp_opt(1_799_999_999, 0).unwrap();
        let after = Utc.timestamp_opt(1_800_000_001, 0).unwrap();
        assert!(config.has_valid_token(before));
        assert!(!config.has_valid_token(after));
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = VSmartConfig::new("user", "hunter2").with_token("abc123", expiry());
        let debug = format!("{config:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("abc123"));
    }
}
