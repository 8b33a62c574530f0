// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Dust Optics Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use bolide_types::constants::EARTH_RADIUS_M;
use std::f64::consts::PI;

/// Column burden and initial optical depth of stratospheric aerosol.
pub trait OpticsModel: Send + Sync {
    fn column_burden_kg_m2(&self, strat_mass_kg: f64, distribute_globally: bool) -> f64;
    fn initial_tau(&self, column_burden_kg_m2: f64, optical_k_per_kg: f64) -> f64;
}

/// Uniform spread over the globe (4πR²) or one hemisphere (2πR²).
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnOpticsModel;

impl OpticsModel for ColumnOpticsModel {
    fn column_burden_kg_m2(&self, strat_mass_kg: f64, distribute_globally: bool) -> f64 {
        let solid_angle = if distribute_globally { 4.0 * PI } else { 2.0 * PI };
        strat_mass_kg / (solid_angle * EARTH_RADIUS_M * EARTH_RADIUS_M)
    }

    fn initial_tau(&self, column_burden_kg_m2: f64, optical_k_per_kg: f64) -> f64 {
        (optical_k_per_kg * column_burden_kg_m2).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_doubles_burden() {
        let m = ColumnOpticsModel;
        let global = m.column_burden_kg_m2(1e15, true);
        let hemi = m.column_burden_kg_m2(1e15, false);
        assert!((hemi / global - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_global_area() {
        let m = ColumnOpticsModel;
        let area = 4.0 * PI * 6_371_000.0_f64.powi(2);
        let b = m.column_burden_kg_m2(area, true);
        assert!((b - 1.0).abs() < 1e-12, "got {b}");
        assert!((m.initial_tau(b, 5.0) - 5.0).abs() < 1e-12);
    }
}
