// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative constants for the `VSmart` integration.

/// Integration domain name.
pub const DOMAIN: &str = "vsmart";

/// Config field holding the account user name.
pub const CONF_USERNAME: &str = "username";

/// Config field holding the account password.
pub const CONF_PASSWORD: &str = "password";

/// Config field holding the selected API root URL.
pub const CONF_API_ROOT: &str = "apiroot";

/// Config field holding the cached user token.
pub const CONF_USER_TOKEN: &str = "user_token";

/// Config field holding the cached user token expiry.
pub const CONF_USER_TOKEN_EXPIRY: &str = "user_token_expiry";

/// API root for accounts registered in mainland China.
pub const API_ROOT_CN: &str = "https://api.vaillant.com.cn";

/// API root for accounts registered in Europe.
pub const API_ROOT_EU: &str = "https://euapi.gizwits.com";

/// API root for accounts registered in the United States.
pub const API_ROOT_US: &str = "https://usapi.gizwits.com";

/// Domestic hot water "on" literal.
pub const DHW_ON: &str = "ON";

/// Domestic hot water "off" literal.
pub const DHW_OFF: &str = "OFF";
