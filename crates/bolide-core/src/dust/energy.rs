// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Dust Energy Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use bolide_math::scaling::impactor_energy;

/// Impact kinetic energy from bulk parameters.
pub trait EnergyModel: Send + Sync {
    fn energy_j(&self, diameter_m: f64, velocity_mps: f64, density_kg_m3: f64) -> f64;
}

/// `E = ½ · (4/3)π(d/2)³ρ · v²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KineticEnergyModel;

impl EnergyModel for KineticEnergyModel {
    fn energy_j(&self, diameter_m: f64, velocity_mps: f64, density_kg_m3: f64) -> f64 {
        impactor_energy(diameter_m, velocity_mps, density_kg_m3)
    }
}
