// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Dust Residence Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use bolide_types::config::ResidenceBaseDays;
use serde::{Deserialize, Serialize};

/// Injection height at which base residence times apply [km].
const REFERENCE_HEIGHT_KM: f64 = 10.0;

/// Lower bound of the altitude scale factor.
const MIN_SCALE: f64 = 0.5;

/// Atmospheric residence time per particle class [days].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidenceDays {
    pub coarse: f64,
    pub fine: f64,
    pub aerosol: f64,
}

pub trait ResidenceModel: Send + Sync {
    fn scaled_days(&self, injection_km: f64, base: &ResidenceBaseDays) -> ResidenceDays;
}

/// Linear scaling with injection height; coarse dust never stays longer
/// than its base time.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltitudeResidenceModel;

impl ResidenceModel for AltitudeResidenceModel {
    fn scaled_days(&self, injection_km: f64, base: &ResidenceBaseDays) -> ResidenceDays {
        let scale = (injection_km / REFERENCE_HEIGHT_KM).max(MIN_SCALE);
        ResidenceDays {
            coarse: base.coarse * scale.min(1.0),
            fine: base.fine * scale,
            aerosol: base.aerosol * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_height_returns_base() {
        let base = ResidenceBaseDays::default();
        let days = AltitudeResidenceModel.scaled_days(10.0, &base);
        assert_eq!(days.coarse, 3.0);
        assert_eq!(days.fine, 90.0);
        assert_eq!(days.aerosol, 360.0);
    }

    #[test]
    fn test_high_injection_caps_coarse() {
        let days = AltitudeResidenceModel.scaled_days(50.0, &ResidenceBaseDays::default());
        assert_eq!(days.coarse, 3.0);
        assert!((days.fine - 450.0).abs() < 1e-9);
        assert!((days.aerosol - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_injection_floor() {
        let days = AltitudeResidenceModel.scaled_days(1.0, &ResidenceBaseDays::default());
        assert!((days.coarse - 1.5).abs() < 1e-12);
        assert!((days.aerosol - 180.0).abs() < 1e-12);
    }
}
