// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Tsunami Propagation Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use bolide_types::constants::STANDARD_GRAVITY;

/// Distance floor guarding the `1/sqrt(d)` decay [km].
const MIN_DISTANCE_KM: f64 = 1e-3;

/// Depth floor for the wave celerity [m].
const MIN_DEPTH_M: f64 = 1.0;

/// Offshore wave height and arrival time versus distance.
pub trait PropagationModel: Send + Sync {
    fn wave_height_at(&self, distance_km: f64, initial_height_m: f64, ocean_depth_m: f64) -> f64;
    fn travel_time_s(&self, distance_km: f64, ocean_depth_m: f64) -> f64;
}

/// `H = H0 / sqrt(d)`, `c = sqrt(g h)`.
///
/// The amplitude decay is a heuristic and does not conserve energy;
/// near the source it is only bounded by the distance floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShallowWaterPropagation;

impl PropagationModel for ShallowWaterPropagation {
    fn wave_height_at(&self, distance_km: f64, initial_height_m: f64, _ocean_depth_m: f64) -> f64 {
        initial_height_m / distance_km.max(MIN_DISTANCE_KM).sqrt()
    }

    fn travel_time_s(&self, distance_km: f64, ocean_depth_m: f64) -> f64 {
        let celerity = (STANDARD_GRAVITY * ocean_depth_m.max(MIN_DEPTH_M)).sqrt();
        distance_km * 1000.0 / celerity
    }
}
