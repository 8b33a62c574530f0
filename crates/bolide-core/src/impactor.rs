// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Impactor Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Crater and blast scaling for a spherical impactor.
//!
//! Crater diameter follows the competent-rock scaling law
//! `D = 1.161 (ρ_i/ρ_t)^(1/3) L^0.78 v^0.44 g^(-0.22) sin(θ)^(1/3)`,
//! the only crater law used anywhere in this workspace.
//! Blast radius is the cube-root heuristic `100 · W^(1/3)` with `W` in
//! units of `JOULES_PER_TON_TNT`.

use bolide_math::scaling::{kinetic_energy, sphere_mass};
use bolide_types::constants::{
    CRATER_GRAVITY, CRUST_DENSITY, JOULES_PER_MEGATON_TNT, JOULES_PER_TON_TNT,
};
use bolide_types::error::{require_finite, require_in_range, require_positive, BolideResult};
use bolide_types::params::AsteroidParameters;
use serde::{Deserialize, Serialize};

/// Scaling-law prefactor.
const CRATER_PREFACTOR: f64 = 1.161;

/// Blast radius coefficient [m per yield^(1/3)].
const BLAST_COEFFICIENT_M: f64 = 100.0;

/// Default effective impact angle [deg].
const DEFAULT_IMPACT_ANGLE_DEG: f64 = 45.0;

/// Crater and blast estimates for one impactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactorPhysicsResult {
    pub mass_kg: f64,
    pub energy_j: f64,
    /// Energy divided by `JOULES_PER_TON_TNT`.
    pub tnt_equivalent_kt: f64,
    pub blast_radius_m: f64,
    pub crater_diameter_m: f64,
}

impl ImpactorPhysicsResult {
    pub fn crater_radius_m(&self) -> f64 {
        self.crater_diameter_m / 2.0
    }

    /// Yield in megatons of TNT.
    pub fn tnt_equivalent_mt(&self) -> f64 {
        self.energy_j / JOULES_PER_MEGATON_TNT
    }
}

/// Crater/blast model with overridable target properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactorPhysics {
    /// Target rock density [kg/m³].
    pub target_density_kg_m3: f64,
    /// Surface gravity [m/s²].
    pub gravity_mps2: f64,
    /// Impact angle used when the request does not carry one [deg].
    pub impact_angle_deg: f64,
}

impl Default for ImpactorPhysics {
    fn default() -> Self {
        ImpactorPhysics {
            target_density_kg_m3: CRUST_DENSITY,
            gravity_mps2: CRATER_GRAVITY,
            impact_angle_deg: DEFAULT_IMPACT_ANGLE_DEG,
        }
    }
}

impl ImpactorPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> BolideResult<()> {
        require_positive("target_density_kg_m3", self.target_density_kg_m3)?;
        require_positive("gravity_mps2", self.gravity_mps2)?;
        require_in_range(
            "impact_angle_deg",
            self.impact_angle_deg,
            0.0,
            90.0,
            "within [0, 90] degrees",
        )?;
        Ok(())
    }

    /// Evaluate a validated request. A request angle overrides the model's.
    pub fn compute(&self, params: &AsteroidParameters) -> BolideResult<ImpactorPhysicsResult> {
        params.validate()?;
        self.validate()?;

        let angle = params.impact_angle_deg.unwrap_or(self.impact_angle_deg);
        let mass_kg = sphere_mass(params.diameter_m, params.density_kg_m3);
        let energy_j = require_finite("energy_j", kinetic_energy(mass_kg, params.velocity_mps))?;
        let tnt_equivalent_kt = energy_j / JOULES_PER_TON_TNT;
        let blast_radius_m = BLAST_COEFFICIENT_M * tnt_equivalent_kt.cbrt();
        let crater_diameter_m = self.crater_diameter_m(
            params.diameter_m,
            params.velocity_mps,
            params.density_kg_m3,
            angle,
        );
        require_finite("crater_diameter_m", crater_diameter_m)?;

        Ok(ImpactorPhysicsResult {
            mass_kg,
            energy_j,
            tnt_equivalent_kt,
            blast_radius_m,
            crater_diameter_m,
        })
    }

    /// Convenience entry for raw (diameter, velocity, density).
    pub fn compute_raw(
        &self,
        diameter_m: f64,
        velocity_mps: f64,
        density_kg_m3: f64,
    ) -> BolideResult<ImpactorPhysicsResult> {
        let params = AsteroidParameters::new(diameter_m, density_kg_m3, velocity_mps)?;
        self.compute(&params)
    }

    /// Transient crater diameter [m].
    pub fn crater_diameter_m(
        &self,
        diameter_m: f64,
        velocity_mps: f64,
        density_kg_m3: f64,
        impact_angle_deg: f64,
    ) -> f64 {
        let density_ratio = density_kg_m3 / self.target_density_kg_m3;
        let angle_factor = impact_angle_deg.to_radians().sin().max(0.0).cbrt();
        CRATER_PREFACTOR
            * density_ratio.cbrt()
            * diameter_m.powf(0.78)
            * velocity_mps.powf(0.44)
            * self.gravity_mps2.powf(-0.22)
            * angle_factor
    }
}
