// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Dust Ejecta Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use bolide_types::config::PartitionFractions;
use serde::{Deserialize, Serialize};

/// Ejecta mass by particle class [kg].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EjectaPartition {
    pub coarse: f64,
    pub fine: f64,
    pub aerosol: f64,
    /// Aerosol mass reaching the stratosphere.
    pub aerosol_strat: f64,
}

/// Total ejected mass and its particle-size partition.
pub trait EjectaModel: Send + Sync {
    fn total_mass_kg(&self, energy_j: f64, oceanic_impact: bool) -> f64;
    fn partition(&self, total_kg: f64, fractions: &PartitionFractions) -> EjectaPartition;
}

/// Empirical power law `M = k · E^0.67`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmpiricalEjectaModel {
    pub k_oceanic: f64,
    pub k_terrestrial: f64,
    pub exponent: f64,
}

impl EmpiricalEjectaModel {
    pub fn new(k_oceanic: f64, k_terrestrial: f64) -> Self {
        EmpiricalEjectaModel {
            k_oceanic,
            k_terrestrial,
            exponent: 0.67,
        }
    }
}

impl Default for EmpiricalEjectaModel {
    fn default() -> Self {
        Self::new(1e-9, 1e-8)
    }
}

impl EjectaModel for EmpiricalEjectaModel {
    fn total_mass_kg(&self, energy_j: f64, oceanic_impact: bool) -> f64 {
        let k = if oceanic_impact {
            self.k_oceanic
        } else {
            self.k_terrestrial
        };
        k * energy_j.max(0.0).powf(self.exponent)
    }

    fn partition(&self, total_kg: f64, fractions: &PartitionFractions) -> EjectaPartition {
        let aerosol = total_kg * fractions.aerosol;
        EjectaPartition {
            coarse: total_kg * fractions.coarse,
            fine: total_kg * fractions.fine,
            aerosol,
            aerosol_strat: aerosol * fractions.strat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolide_types::config::DustConfig;

    #[test]
    fn test_terrestrial_ten_times_oceanic() {
        let m = EmpiricalEjectaModel::default();
        let ocean = m.total_mass_kg(1e20, true);
        let land = m.total_mass_kg(1e20, false);
        assert!((land / ocean - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_power_law() {
        let m = EmpiricalEjectaModel::default();
        let expected = 1e-9 * 1e20_f64.powf(0.67);
        assert!((m.total_mass_kg(1e20, true) - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn test_default_partition() {
        let m = EmpiricalEjectaModel::default();
        let parts = m.partition(1000.0, &DustConfig::default().fractions());
        assert!((parts.coarse - 600.0).abs() < 1e-9);
        assert!((parts.fine - 350.0).abs() < 1e-9);
        assert!((parts.aerosol - 50.0).abs() < 1e-9);
        assert!((parts.aerosol_strat - 40.0).abs() < 1e-9);
    }
}
