// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `VSmart` library.
//!
//! Failures from the remote command API are carried through unmodified; the
//! thermostat adds no retry or recovery on top of them. A refresh failure
//! after a command is only logged by the thermostat.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A remote command failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The coordinator failed to refresh device statuses.
    #[error("refresh error: {0}")]
    Refresh(#[from] RefreshError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing a status or configuration payload.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors reported by a [`ThermostatApi`](crate::api::ThermostatApi) implementation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Request(String),

    /// The cloud API answered with an error code.
    #[error("command rejected ({code}): {message}")]
    Rejected {
        /// Error code returned by the API.
        code: i64,
        /// Error message returned by the API.
        message: String,
    },

    /// The user token was refused.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

/// Errors reported by a [`Coordinator`](crate::coordinator::Coordinator) refresh.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// Fetching the statuses from the cloud API failed.
    #[error("fetching statuses failed: {0}")]
    Api(#[from] ApiError),

    /// A fetched status could not be parsed.
    #[error("invalid status payload: {0}")]
    Parse(#[from] ParseError),

    /// Any other coordinator failure.
    #[error("{0}")]
    Failed(String),
}

/// Errors related to parsing literal values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An unknown HVAC mode literal was provided.
    #[error("invalid HVAC mode: {0}")]
    InvalidHvacMode(String),

    /// An unknown HVAC action literal was provided.
    #[error("invalid HVAC action: {0}")]
    InvalidHvacAction(String),

    /// An unknown temperature unit was provided.
    #[error("invalid temperature unit: {0}")]
    InvalidTemperatureUnit(String),

    /// An invalid domestic hot water state was provided.
    #[error("invalid hot water state: {0}")]
    InvalidDhwState(String),

    /// The region or API root is not one of the known endpoints.
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}

/// Errors related to parsing payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
