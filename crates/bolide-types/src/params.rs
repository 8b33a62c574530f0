// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Request Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-request input value objects.
//!
//! Every engine calls `validate()` on entry, so invalid input is rejected
//! before any stage runs. Nothing here is coerced to zero.

use crate::constants::DEFAULT_COUPLING_EFFICIENCY;
use crate::error::{require_in_range, require_positive, BolideResult};
use serde::{Deserialize, Serialize};

/// Physical description of the impactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidParameters {
    /// Diameter [m].
    pub diameter_m: f64,
    /// Bulk density [kg/m³].
    pub density_kg_m3: f64,
    /// Impact velocity [m/s].
    pub velocity_mps: f64,
    /// Impact angle from horizontal [deg], 0..=90.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_angle_deg: Option<f64>,
    /// Fraction of kinetic energy coupled into the target (default 0.3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupling_efficiency: Option<f64>,
}

impl AsteroidParameters {
    /// Checked constructor.
    pub fn new(diameter_m: f64, density_kg_m3: f64, velocity_mps: f64) -> BolideResult<Self> {
        let params = Self {
            diameter_m,
            density_kg_m3,
            velocity_mps,
            impact_angle_deg: None,
            coupling_efficiency: None,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_impact_angle(mut self, angle_deg: f64) -> BolideResult<Self> {
        self.impact_angle_deg = Some(angle_deg);
        self.validate()?;
        Ok(self)
    }

    pub fn with_coupling_efficiency(mut self, efficiency: f64) -> BolideResult<Self> {
        self.coupling_efficiency = Some(efficiency);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> BolideResult<()> {
        require_positive("diameter_m", self.diameter_m)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        require_positive("velocity_mps", self.velocity_mps)?;
        if let Some(angle) = self.impact_angle_deg {
            require_in_range("impact_angle_deg", angle, 0.0, 90.0, "within [0, 90] degrees")?;
        }
        if let Some(eff) = self.coupling_efficiency {
            // Finite values outside [0, 1] are clamped by the coupling stage.
            require_in_range("coupling_efficiency", eff, f64::MIN, f64::MAX, "finite")?;
        }
        Ok(())
    }

    /// Coupling efficiency clamped to [0, 1], defaulting to 0.3.
    pub fn effective_coupling(&self) -> f64 {
        self.coupling_efficiency
            .unwrap_or(DEFAULT_COUPLING_EFFICIENCY)
            .clamp(0.0, 1.0)
    }
}

pub fn validate_latitude(name: &'static str, lat: f64) -> BolideResult<f64> {
    require_in_range(name, lat, -90.0, 90.0, "within [-90, 90] degrees")
}

pub fn validate_longitude(name: &'static str, lon: f64) -> BolideResult<f64> {
    require_in_range(name, lon, -180.0, 180.0, "within [-180, 180] degrees")
}

/// Oceanic impact description for the tsunami pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsunamiInput {
    pub asteroid: AsteroidParameters,
    /// Ocean depth at the impact site [m].
    pub ocean_depth_m: f64,
    pub impact_lat: f64,
    pub impact_lon: f64,
    /// Beach slope (rise/run) at the observation coast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beach_slope: Option<f64>,
}

impl TsunamiInput {
    pub fn new(
        asteroid: AsteroidParameters,
        ocean_depth_m: f64,
        impact_lat: f64,
        impact_lon: f64,
    ) -> BolideResult<Self> {
        let input = Self {
            asteroid,
            ocean_depth_m,
            impact_lat,
            impact_lon,
            beach_slope: None,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn with_beach_slope(mut self, slope: f64) -> BolideResult<Self> {
        self.beach_slope = Some(slope);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> BolideResult<()> {
        self.asteroid.validate()?;
        require_positive("ocean_depth_m", self.ocean_depth_m)?;
        validate_latitude("impact_lat", self.impact_lat)?;
        validate_longitude("impact_lon", self.impact_lon)?;
        if let Some(slope) = self.beach_slope {
            require_positive("beach_slope", slope)?;
        }
        Ok(())
    }
}

/// Observation point for a tsunami estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TsunamiPointQuery {
    pub lat: f64,
    pub lon: f64,
}

impl TsunamiPointQuery {
    pub fn new(lat: f64, lon: f64) -> BolideResult<Self> {
        let query = Self { lat, lon };
        query.validate()?;
        Ok(query)
    }

    pub fn validate(&self) -> BolideResult<()> {
        validate_latitude("query_lat", self.lat)?;
        validate_longitude("query_lon", self.lon)?;
        Ok(())
    }
}

/// Tsunami estimate at one observation point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsunamiPointResult {
    pub distance_km: f64,
    pub arrival_time_s: f64,
    pub wave_height_m: f64,
    /// Present only with a beach slope and a configured run-up stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runup_m: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BolideError;

    fn asteroid() -> AsteroidParameters {
        AsteroidParameters::new(1000.0, 3000.0, 20_000.0).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(AsteroidParameters::new(0.0, 3000.0, 20_000.0).is_err());
        assert!(AsteroidParameters::new(100.0, -1.0, 20_000.0).is_err());
        assert!(AsteroidParameters::new(100.0, 3000.0, f64::NAN).is_err());
    }

    #[test]
    fn test_error_names_offending_field() {
        match AsteroidParameters::new(100.0, 3000.0, 0.0) {
            Err(BolideError::Validation { name, .. }) => assert_eq!(name, "velocity_mps"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_impact_angle_range() {
        assert!(asteroid().with_impact_angle(90.0).is_ok());
        assert!(asteroid().with_impact_angle(0.0).is_ok());
        assert!(asteroid().with_impact_angle(91.0).is_err());
        assert!(asteroid().with_impact_angle(-5.0).is_err());
    }

    #[test]
    fn test_coupling_default_and_clamp() {
        assert!((asteroid().effective_coupling() - 0.3).abs() < 1e-15);
        let hot = asteroid().with_coupling_efficiency(1.7).unwrap();
        assert_eq!(hot.effective_coupling(), 1.0);
        let cold = asteroid().with_coupling_efficiency(-0.2).unwrap();
        assert_eq!(cold.effective_coupling(), 0.0);
        assert!(asteroid().with_coupling_efficiency(f64::NAN).is_err());
    }

    #[test]
    fn test_tsunami_input_validation() {
        assert!(TsunamiInput::new(asteroid(), 4000.0, 0.0, 0.0).is_ok());
        assert!(TsunamiInput::new(asteroid(), 0.0, 0.0, 0.0).is_err());
        assert!(TsunamiInput::new(asteroid(), 4000.0, 90.5, 0.0).is_err());
        assert!(TsunamiInput::new(asteroid(), 4000.0, 0.0, -180.5).is_err());
        let input = TsunamiInput::new(asteroid(), 4000.0, 10.0, 20.0).unwrap();
        assert!(input.with_beach_slope(0.0).is_err());
        assert!(input.with_beach_slope(0.02).is_ok());
    }

    #[test]
    fn test_query_validation() {
        assert!(TsunamiPointQuery::new(-90.0, 180.0).is_ok());
        assert!(TsunamiPointQuery::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = r#"{"diameterM": 50.0, "densityKgM3": 2600.0, "velocityMps": 17000.0}"#;
        let params: AsteroidParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.diameter_m, 50.0);
        assert!(params.impact_angle_deg.is_none());
        assert!(params.validate().is_ok());
    }
}
