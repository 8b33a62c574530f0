// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Scaling Primitives
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sphere mass and kinetic energy, plus the interpolation helpers used by
//! the empirical stage models.

use std::f64::consts::PI;

/// Volume of a sphere of diameter `d` [m³].
pub fn sphere_volume(diameter_m: f64) -> f64 {
    let r = diameter_m / 2.0;
    (4.0 / 3.0) * PI * r.powi(3)
}

/// Mass of a homogeneous sphere [kg].
pub fn sphere_mass(diameter_m: f64, density_kg_m3: f64) -> f64 {
    sphere_volume(diameter_m) * density_kg_m3
}

/// `E = ½ m v²` [J].
pub fn kinetic_energy(mass_kg: f64, velocity_mps: f64) -> f64 {
    0.5 * mass_kg * velocity_mps * velocity_mps
}

/// Kinetic energy of a homogeneous spherical impactor [J].
pub fn impactor_energy(diameter_m: f64, velocity_mps: f64, density_kg_m3: f64) -> f64 {
    kinetic_energy(sphere_mass(diameter_m, density_kg_m3), velocity_mps)
}

/// Map `x` from `[x0, x1]` onto `[y0, y1]`, clamping outside the domain.
pub fn lerp_clamped(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + t * (y1 - y0)
}

/// `log10(x + 1)` clamped to `[lo, hi]`; finite for every `x >= 0`.
pub fn log10_clamped(x: f64, lo: f64, hi: f64) -> f64 {
    (x + 1.0).log10().clamp(lo, hi)
}
