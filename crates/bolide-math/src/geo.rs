// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Great-Circle Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Haversine distance on a spherical Earth.

use bolide_types::constants::EARTH_RADIUS_KM;
use bolide_types::error::BolideResult;
use bolide_types::params::{validate_latitude, validate_longitude};

/// Great-circle distance [km] between two (lat, lon) pairs in degrees.
///
/// Callers must reject out-of-range coordinates first; see
/// [`checked_haversine_km`].
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Validating wrapper around [`haversine_km`].
pub fn checked_haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> BolideResult<f64> {
    validate_latitude("lat1", lat1)?;
    validate_longitude("lon1", lon1)?;
    validate_latitude("lat2", lat2)?;
    validate_longitude("lon2", lon2)?;
    Ok(haversine_km(lat1, lon1, lat2, lon2))
}
