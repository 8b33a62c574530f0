// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Bulk Density Estimation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bulk density from spectral taxonomy or geometric albedo.
//!
//! Class means and ranges follow published bulk-density compilations for
//! S-, C- and M-complex asteroids.

use serde::{Deserialize, Serialize};

/// Density used when neither taxonomy nor albedo is conclusive [g/cm³].
pub const FALLBACK_DENSITY_G_CM3: f64 = 3.0;

/// Albedo below which a body is treated as carbonaceous.
const DARK_ALBEDO: f64 = 0.08;

/// Albedo above which a body is treated as stony.
const BRIGHT_ALBEDO: f64 = 0.2;

const STONY: (f64, (f64, f64)) = (3.0, (2.5, 3.5));
const CARBONACEOUS: (f64, (f64, f64)) = (1.7, (1.2, 2.2));
const METALLIC: (f64, (f64, f64)) = (6.0, (5.0, 8.0));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensitySource {
    Measured,
    Taxonomy,
    Albedo,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityEstimate {
    pub rho_g_cm3: f64,
    pub source: DensitySource,
    /// Literature range [g/cm³], when the rule provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
}

impl DensityEstimate {
    fn from_class(class: (f64, (f64, f64)), source: DensitySource) -> Self {
        DensityEstimate {
            rho_g_cm3: class.0,
            source,
            range: Some(class.1),
        }
    }

    pub fn fallback() -> Self {
        DensityEstimate {
            rho_g_cm3: FALLBACK_DENSITY_G_CM3,
            source: DensitySource::Fallback,
            range: None,
        }
    }

    pub fn kg_m3(&self) -> f64 {
        self.rho_g_cm3 * 1000.0
    }
}

/// Estimate from a Bus/Tholen class string, matched on its prefix.
pub fn density_from_taxonomy(spec: &str) -> Option<DensityEstimate> {
    let s = spec.trim().to_uppercase();
    if s.is_empty() {
        return None;
    }
    if s.starts_with('S') || s.starts_with('Q') || s.starts_with('V') {
        return Some(DensityEstimate::from_class(STONY, DensitySource::Taxonomy));
    }
    if s.starts_with('C') || s.starts_with('B') {
        return Some(DensityEstimate::from_class(CARBONACEOUS, DensitySource::Taxonomy));
    }
    if s.starts_with('M') || s == "XK" || s == "XC" {
        return Some(DensityEstimate::from_class(METALLIC, DensitySource::Taxonomy));
    }
    None
}

/// Estimate from geometric albedo `pv`. Intermediate albedos are ambiguous.
pub fn density_from_albedo(pv: f64) -> Option<DensityEstimate> {
    if !pv.is_finite() {
        return None;
    }
    if pv < DARK_ALBEDO {
        Some(DensityEstimate::from_class(CARBONACEOUS, DensitySource::Albedo))
    } else if pv > BRIGHT_ALBEDO {
        Some(DensityEstimate::from_class(STONY, DensitySource::Albedo))
    } else {
        None
    }
}

/// Measured density, then taxonomy, then albedo, then the fallback.
pub fn estimate_density(
    measured_g_cm3: Option<f64>,
    taxonomy: Option<&str>,
    albedo: Option<f64>,
) -> DensityEstimate {
    if let Some(rho) = measured_g_cm3.filter(|r| r.is_finite() && *r > 0.0) {
        return DensityEstimate {
            rho_g_cm3: rho,
            source: DensitySource::Measured,
            range: None,
        };
    }
    let estimate = taxonomy
        .and_then(density_from_taxonomy)
        .or_else(|| albedo.and_then(density_from_albedo))
        .unwrap_or_else(DensityEstimate::fallback);
    log::debug!(
        "density: {:.2} g/cm³ from {:?} (taxonomy={taxonomy:?}, albedo={albedo:?})",
        estimate.rho_g_cm3,
        estimate.source
    );
    estimate
}
