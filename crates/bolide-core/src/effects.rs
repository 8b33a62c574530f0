// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Surface Effects
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thermal ignition and blast devastation radii.
//!
//! Both are compact 0D estimates driven by impact energy alone.

use crate::impactor::ImpactorPhysicsResult;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Fraction of kinetic energy radiated thermally.
const THERMAL_EFFICIENCY: f64 = 0.3;

/// Radiant exposure that ignites forest cover [J/m²].
const IGNITION_THRESHOLD_J_M2: f64 = 400_000.0;

/// Tunguska reference yield [Mt].
const TUNGUSKA_ENERGY_MT: f64 = 12.0;

/// Tunguska flattened-forest area [km²].
const TUNGUSKA_AREA_KM2: f64 = 2150.0;

/// Radius within which thermal radiation ignites fires [m].
///
/// Isotropic point source: `R = sqrt(E_th / (4π F_ign))`.
pub fn ignition_radius_m(energy_j: f64) -> f64 {
    let thermal = energy_j.max(0.0) * THERMAL_EFFICIENCY;
    (thermal / (4.0 * PI * IGNITION_THRESHOLD_J_M2)).sqrt()
}

/// Devastation radius scaled from Tunguska [km].
///
/// Area scales as `(E/E_ref)^(2/3)`.
pub fn devastation_radius_km(energy_mt: f64) -> f64 {
    let ratio = energy_mt.max(0.0) / TUNGUSKA_ENERGY_MT;
    let area = TUNGUSKA_AREA_KM2 * ratio.powf(2.0 / 3.0);
    (area / PI).sqrt()
}

/// Surface hazard radii derived from impactor physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceEffects {
    pub ignition_radius_km: f64,
    pub devastation_radius_km: f64,
}

impl SurfaceEffects {
    pub fn from_physics(physics: &ImpactorPhysicsResult) -> Self {
        SurfaceEffects {
            ignition_radius_km: ignition_radius_m(physics.energy_j) / 1000.0,
            devastation_radius_km: devastation_radius_km(physics.tnt_equivalent_mt()),
        }
    }
}
