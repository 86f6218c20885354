// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cloud API regions.
//!
//! Accounts live in one of three regional clouds, each with a fixed API
//! root. Config entries store the root URL itself.

use std::fmt;
use std::str::FromStr;

use crate::constants::{API_ROOT_CN, API_ROOT_EU, API_ROOT_US};
use crate::error::ValueError;

/// Regional cloud an account is registered with.
///
/// # Examples
///
/// ```
/// use vsmart_lib::types::Region;
///
/// assert_eq!(Region::Europe.api_root(), "https://euapi.gizwits.com");
/// assert_eq!(Region::from_locale("zh-CN"), Region::China);
/// assert_eq!("us".parse::<Region>().unwrap(), Region::UnitedStates);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Region {
    /// Mainland China.
    China,
    /// Europe.
    #[default]
    Europe,
    /// United States.
    UnitedStates,
}

impl Region {
    /// All known regions.
    pub const ALL: [Self; 3] = [Self::China, Self::Europe, Self::UnitedStates];

    /// Returns the API root URL for this region.
    #[must_use]
    pub const fn api_root(&self) -> &'static str {
        match self {
            Self::China => API_ROOT_CN,
            Self::Europe => API_ROOT_EU,
            Self::UnitedStates => API_ROOT_US,
        }
    }

    /// Returns the short region code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::China => "cn",
            Self::Europe => "eu",
            Self::UnitedStates => "us",
        }
    }

    /// Looks up the region owning an API root URL.
    ///
    /// A trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownRegion` if the URL is not a known root.
    pub fn from_api_root(url: &str) -> Result<Self, ValueError> {
        let trimmed = url.trim().trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|region| region.api_root().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValueError::UnknownRegion(url.to_string()))
    }

    /// Picks a default region from a locale such as `zh-CN` or `en_US`.
    ///
    /// Chinese and US locales map to their own clouds, everything else
    /// falls back to Europe. Script subtags are skipped, so `zh-Hans-CN`
    /// resolves like `zh-CN`.
    #[must_use]
    pub fn from_locale(locale: &str) -> Self {
        let mut parts = locale.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_lowercase();
        let country = parts
            .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_uppercase);
        match country.as_deref() {
            Some("CN") => Self::China,
            Some("US") => Self::UnitedStates,
            Some(_) => Self::Europe,
            None if language == "zh" => Self::China,
            None => Self::Europe,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cn" | "china" => Ok(Self::China),
            "eu" | "europe" => Ok(Self::Europe),
            "us" | "usa" | "united_states" => Ok(Self::UnitedStates),
            _ => Self::from_api_root(s),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for &'static str {
    fn from(region: Region) -> Self {
        region.api_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_roots() {
        assert_eq!(Region::China.api_root(), "https://api.vaillant.com.cn");
        assert_eq!(Region::Europe.api_root(), "https://euapi.gizwits.com");
        assert_eq!(Region::UnitedStates.api_root(), "https://usapi.gizwits.com");
    }

    #[test]
    fn from_api_root_ignores_trailing_slash() {
        assert_eq!(
            Region::from_api_root("https://usapi.gizwits.com/").unwrap(),
            Region::UnitedStates
        );
        assert!(Region::from_api_root("https://example.com").is_err());
    }

    #[test]
    fn from_locale() {
        assert_eq!(Region::from_locale("zh-CN"), Region::China);
        assert_eq!(Region::from_locale("zh"), Region::China);
        assert_eq!(Region::from_locale("zh-Hans-CN"), Region::China);
        assert_eq!(Region::from_locale("zh_Hans"), Region::China);
        assert_eq!(Region::from_locale("zh-Hant-TW"), Region::Europe);
        assert_eq!(Region::from_locale("en-Latn-US"), Region::UnitedStates);
        assert_eq!(Region::from_locale("en_US"), Region::UnitedStates);
        assert_eq!(Region::from_locale("de-DE"), Region::Europe);
        assert_eq!(Region::from_locale("en"), Region::Europe);
        assert_eq!(Region::from_locale(""), Region::Europe);
    }

    #[test]
    fn from_str_accepts_codes_and_urls() {
        assert_eq!("CN".parse::<Region>().unwrap(), Region::China);
        assert_eq!(
            "https://euapi.gizwits.com".parse::<Region>().unwrap(),
            Region::Europe
        );
        assert!(matches!(
            "mars".parse::<Region>(),
            Err(ValueError::UnknownRegion(_))
        ));
    }

    #[test]
    fn serializes_as_api_root() {
        let json = serde_json::to_string(&Region::China).unwrap();
        assert_eq!(json, "\"https://api.vaillant.com.cn\"");
        let region: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(region, Region::China);
    }
}
