// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Mean Earth radius (m).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Mean Earth radius (km), used by great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Standard gravity (m/s²) for ocean wave dynamics.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Surface gravity (m/s²) used by the crater scaling law.
pub const CRATER_GRAVITY: f64 = 9.81;

/// Seawater density (kg/m³), rounded as in the cavity heuristic.
pub const WATER_DENSITY: f64 = 1000.0;

/// Typical crustal rock density (kg/m³) for crater scaling.
pub const CRUST_DENSITY: f64 = 2750.0;

/// Joules released by one tonne of TNT.
/// NOTE: `ImpactorPhysicsResult::tnt_equivalent_kt` divides by this value,
/// the blast-radius heuristic is calibrated on that figure.
pub const JOULES_PER_TON_TNT: f64 = 4.184e9;

/// Joules released by one megaton of TNT.
pub const JOULES_PER_MEGATON_TNT: f64 = 4.184e15;

/// Default bulk density (kg/m³) when no catalog estimate exists.
pub const DEFAULT_ASTEROID_DENSITY: f64 = 3000.0;

/// Default fraction of kinetic energy coupled into the target medium.
pub const DEFAULT_COUPLING_EFFICIENCY: f64 = 0.3;
