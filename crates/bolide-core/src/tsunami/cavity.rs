// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Tsunami Cavity Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use bolide_types::constants::{STANDARD_GRAVITY, WATER_DENSITY};

/// Transient water cavity and the wave it launches.
pub trait CavityModel: Send + Sync {
    fn cavity_radius_m(&self, coupled_energy_j: f64, ocean_depth_m: f64) -> f64;
    fn initial_wave_height_m(&self, cavity_radius_m: f64, ocean_depth_m: f64) -> f64;
}

/// `Rc = min(k · cbrt(E / (ρ g)), limiter · depth)`, `H0 = f · min(Rc, depth)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicCavityModel {
    pub cavity_k: f64,
    /// Cavity radius cap in multiples of ocean depth.
    pub depth_limiter: f64,
    /// Initial wave height as a fraction of the smaller length scale.
    pub height_fraction: f64,
}

impl Default for HeuristicCavityModel {
    fn default() -> Self {
        HeuristicCavityModel {
            cavity_k: 0.9,
            depth_limiter: 5.0,
            height_fraction: 0.25,
        }
    }
}

impl CavityModel for HeuristicCavityModel {
    fn cavity_radius_m(&self, coupled_energy_j: f64, ocean_depth_m: f64) -> f64 {
        let base = (coupled_energy_j.max(0.0) / (WATER_DENSITY * STANDARD_GRAVITY)).cbrt();
        (self.cavity_k * base).min(self.depth_limiter * ocean_depth_m)
    }

    fn initial_wave_height_m(&self, cavity_radius_m: f64, ocean_depth_m: f64) -> f64 {
        self.height_fraction * cavity_radius_m.min(ocean_depth_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_energy_unlimited() {
        let m = HeuristicCavityModel::default();
        let e = 1000.0 * 9.80665 * 1e6; // cbrt(E/ρg) = 100 m
        let rc = m.cavity_radius_m(e, 4000.0);
        assert!((rc - 90.0).abs() < 1e-9, "got {rc}");
        assert!((m.initial_wave_height_m(rc, 4000.0) - 22.5).abs() < 1e-9);
    }

    #[test]
    fn test_depth_limits_cavity_and_wave() {
        let m = HeuristicCavityModel::default();
        let rc = m.cavity_radius_m(1e22, 100.0);
        assert_eq!(rc, 500.0);
        assert_eq!(m.initial_wave_height_m(rc, 100.0), 25.0);
    }
}
