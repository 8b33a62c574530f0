// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BolideError {
    #[error("Invalid {name}: {value} (expected {requirement})")]
    Validation {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog record unusable: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BolideResult<T> = Result<T, BolideError>;

/// Reject non-finite or non-positive values.
pub fn require_positive(name: &'static str, value: f64) -> BolideResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BolideError::Validation {
            name,
            value,
            requirement: "finite and > 0",
        })
    }
}

/// Reject non-finite values or values outside `[min, max]`.
pub fn require_in_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
    requirement: &'static str,
) -> BolideResult<f64> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(BolideError::Validation {
            name,
            value,
            requirement,
        })
    }
}

/// Reject non-finite values, e.g. an intermediate result that overflowed.
pub fn require_finite(name: &'static str, value: f64) -> BolideResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BolideError::Validation {
            name,
            value,
            requirement: "a finite result; inputs too large",
        })
    }
}
