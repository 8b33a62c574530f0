// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Tsunami Coupling Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use bolide_math::scaling::{kinetic_energy, sphere_mass};
use bolide_types::params::AsteroidParameters;

/// Energy mechanically coupled into the water column.
pub trait CouplingModel: Send + Sync {
    fn coupled_energy_j(&self, asteroid: &AsteroidParameters) -> f64;
}

/// `KE · clamp(efficiency, 0, 1)`, efficiency defaulting to 0.3.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCouplingModel;

impl CouplingModel for SimpleCouplingModel {
    fn coupled_energy_j(&self, asteroid: &AsteroidParameters) -> f64 {
        let mass = sphere_mass(asteroid.diameter_m, asteroid.density_kg_m3);
        kinetic_energy(mass, asteroid.velocity_mps) * asteroid.effective_coupling()
    }
}
