// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Dust Injection Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use bolide_math::scaling::{lerp_clamped, log10_clamped};

/// Altitude at which ejecta is injected into the atmosphere.
pub trait InjectionModel: Send + Sync {
    fn injection_height_km(&self, energy_j: f64) -> f64;
}

/// Maps `log10(E + 1)` over `[log_min, log_max]` linearly onto
/// `[min_km, max_km]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEnergyInjectionModel {
    pub min_km: f64,
    pub max_km: f64,
    pub log_min: f64,
    pub log_max: f64,
}

impl Default for LogEnergyInjectionModel {
    fn default() -> Self {
        LogEnergyInjectionModel {
            min_km: 10.0,
            max_km: 50.0,
            log_min: 12.0,
            log_max: 24.0,
        }
    }
}

impl InjectionModel for LogEnergyInjectionModel {
    fn injection_height_km(&self, energy_j: f64) -> f64 {
        let log_e = log10_clamped(energy_j.max(0.0), self.log_min, self.log_max);
        lerp_clamped(log_e, self.log_min, self.log_max, self.min_km, self.max_km)
    }
}
