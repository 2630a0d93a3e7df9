// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that can go wrong, and how far it's allowed to travel.
//!
//! Only `AnalysisError` crosses the library boundary. `RomanizationError` is
//! caught inside the scorer and turned into "compare without bridging";
//! empty intersections and zero coverage are results, not errors.

use thiserror::Error;

/// Failure of a whole analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Every supplied group was empty after parsing. The caller should ask for
    /// at least one non-empty list.
    #[error("at least one group must contain data")]
    NoData,

    /// A similarity threshold outside `0..=100`.
    #[error("{name} must be between 0 and 100, got {value}")]
    InvalidThreshold { name: &'static str, value: u32 },

    /// The request body didn't have the expected shape.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The request body wasn't valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Is this the caller's fault for supplying nothing to analyze?
    ///
    /// Everything else is an unexpected failure.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AnalysisError::NoData)
    }

    /// HTTP-style status for a boundary layer: 400 for input errors, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        if self.is_input_error() {
            400
        } else {
            500
        }
    }
}

/// Hangul that can't be transliterated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanizationError {
    /// A jamo that didn't compose into a syllable.
    #[error("cannot romanize standalone jamo {ch:?} at char offset {offset}")]
    UnsupportedJamo { ch: char, offset: usize },
}
