// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::DEFAULT_ASTEROID_DENSITY;
use crate::error::{BolideError, BolideResult};
use serde::{Deserialize, Serialize};

/// Tolerance on the ejecta fraction sum.
const FRACTION_SUM_TOL: f64 = 1e-12;

/// Atmospheric dust pipeline configuration.
/// JSON keys are camelCase; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DustConfig {
    /// Bulk density used when only diameter and velocity are known [kg/m³].
    #[serde(default = "default_density")]
    pub density_kg_m3: f64,
    /// Selects the oceanic or terrestrial ejecta constant.
    #[serde(default = "default_true")]
    pub oceanic_impact: bool,
    #[serde(default = "default_k_ejecta_oceanic")]
    pub k_ejecta_oceanic: f64,
    #[serde(default = "default_k_ejecta_terrestrial")]
    pub k_ejecta_terrestrial: f64,
    #[serde(default = "default_frac_coarse")]
    pub frac_coarse: f64,
    #[serde(default = "default_frac_fine")]
    pub frac_fine: f64,
    #[serde(default = "default_frac_aerosol")]
    pub frac_aerosol: f64,
    /// Share of the aerosol fraction reaching the stratosphere.
    #[serde(default = "default_strat_fraction")]
    pub strat_fraction: f64,
    /// Spread over the whole globe (true) or one hemisphere (false).
    #[serde(default = "default_true")]
    pub distribute_globally: bool,
    /// Mass extinction coefficient [m²/kg].
    #[serde(default = "default_optical_k")]
    pub optical_k_per_kg: f64,
    #[serde(default = "default_severe_tau")]
    pub severe_tau: f64,
    #[serde(default = "default_partial_tau")]
    pub partial_tau: f64,
    /// Residence times at a 10 km injection height [days].
    #[serde(default)]
    pub residence_base_days: ResidenceBaseDays,
}

/// Baseline residence times per particle class [days].
/// All three values are required when the block is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResidenceBaseDays {
    pub coarse: f64,
    pub fine: f64,
    pub aerosol: f64,
}

impl Default for ResidenceBaseDays {
    fn default() -> Self {
        ResidenceBaseDays {
            coarse: 3.0,
            fine: 90.0,
            aerosol: 360.0,
        }
    }
}

/// Ejecta partition fractions handed to the ejecta stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionFractions {
    pub coarse: f64,
    pub fine: f64,
    pub aerosol: f64,
    pub strat: f64,
}

fn default_density() -> f64 {
    DEFAULT_ASTEROID_DENSITY
}
fn default_true() -> bool {
    true
}
fn default_k_ejecta_oceanic() -> f64 {
    1e-9
}
fn default_k_ejecta_terrestrial() -> f64 {
    1e-8
}
fn default_frac_coarse() -> f64 {
    0.6
}
fn default_frac_fine() -> f64 {
    0.35
}
fn default_frac_aerosol() -> f64 {
    0.05
}
fn default_strat_fraction() -> f64 {
    0.8
}
fn default_optical_k() -> f64 {
    5.0
}
fn default_severe_tau() -> f64 {
    1.0
}
fn default_partial_tau() -> f64 {
    0.3
}

impl Default for DustConfig {
    fn default() -> Self {
        DustConfig {
            density_kg_m3: default_density(),
            oceanic_impact: true,
            k_ejecta_oceanic: default_k_ejecta_oceanic(),
            k_ejecta_terrestrial: default_k_ejecta_terrestrial(),
            frac_coarse: default_frac_coarse(),
            frac_fine: default_frac_fine(),
            frac_aerosol: default_frac_aerosol(),
            strat_fraction: default_strat_fraction(),
            distribute_globally: true,
            optical_k_per_kg: default_optical_k(),
            severe_tau: default_severe_tau(),
            partial_tau: default_partial_tau(),
            residence_base_days: ResidenceBaseDays::default(),
        }
    }
}

impl DustConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> BolideResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BolideError::ConfigError(format!("Failed to parse dust config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file.
    pub fn from_file(path: &str) -> BolideResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn fractions(&self) -> PartitionFractions {
        PartitionFractions {
            coarse: self.frac_coarse,
            fine: self.frac_fine,
            aerosol: self.frac_aerosol,
            strat: self.strat_fraction,
        }
    }

    /// Ejecta scale constant for the configured impact medium.
    pub fn ejecta_constant(&self) -> f64 {
        if self.oceanic_impact {
            self.k_ejecta_oceanic
        } else {
            self.k_ejecta_terrestrial
        }
    }

    pub fn validate(&self) -> BolideResult<()> {
        check_positive("densityKgM3", self.density_kg_m3)?;
        check_non_negative("kEjectaOceanic", self.k_ejecta_oceanic)?;
        check_non_negative("kEjectaTerrestrial", self.k_ejecta_terrestrial)?;
        check_fraction("fracCoarse", self.frac_coarse)?;
        check_fraction("fracFine", self.frac_fine)?;
        check_fraction("fracAerosol", self.frac_aerosol)?;
        check_fraction("stratFraction", self.strat_fraction)?;

        let sum = self.frac_coarse + self.frac_fine + self.frac_aerosol;
        if sum > 1.0 + FRACTION_SUM_TOL {
            return Err(BolideError::ConfigError(format!(
                "ejecta fractions sum to {sum}, must not exceed 1"
            )));
        }

        check_non_negative("opticalKPerKg", self.optical_k_per_kg)?;
        check_positive("severeTau", self.severe_tau)?;
        check_positive("partialTau", self.partial_tau)?;

        let base = &self.residence_base_days;
        check_positive("residenceBaseDays.coarse", base.coarse)?;
        check_positive("residenceBaseDays.fine", base.fine)?;
        check_positive("residenceBaseDays.aerosol", base.aerosol)?;
        Ok(())
    }
}

fn check_positive(key: &str, value: f64) -> BolideResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BolideError::ConfigError(format!(
            "{key} must be finite and > 0, got {value}"
        )))
    }
}

fn check_non_negative(key: &str, value: f64) -> BolideResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BolideError::ConfigError(format!(
            "{key} must be finite and >= 0, got {value}"
        )))
    }
}

fn check_fraction(key: &str, value: f64) -> BolideResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BolideError::ConfigError(format!(
            "{key} must lie in [0, 1], got {value}"
        )))
    }
}
