// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — NEO Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Near-Earth-object feed records and their conversion to impactor inputs.
//!
//! Only the fields the engines consume are modelled; everything else in a
//! feed record is ignored.

use crate::density::{estimate_density, DensityEstimate};
use bolide_types::error::{BolideError, BolideResult};
use bolide_types::params::AsteroidParameters;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NeoRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default)]
    pub kilometers: Option<DiameterRange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    #[serde(default)]
    pub estimated_diameter_min: Option<f64>,
    #[serde(default)]
    pub estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub relative_velocity: Option<RelativeVelocity>,
    #[serde(default)]
    pub orbiting_body: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub epoch_date_close_approach: Option<i64>,
}

/// Feed velocities arrive as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    #[serde(default)]
    pub kilometers_per_second: Option<String>,
}

impl CloseApproach {
    fn is_earth(&self) -> bool {
        self.orbiting_body
            .as_deref()
            .is_some_and(|b| b.eq_ignore_ascii_case("earth"))
    }

    pub fn velocity_mps(&self) -> Option<f64> {
        let kms: f64 = self
            .relative_velocity
            .as_ref()?
            .kilometers_per_second
            .as_deref()?
            .trim()
            .parse()
            .ok()?;
        (kms.is_finite() && kms > 0.0).then_some(kms * 1000.0)
    }
}

impl NeoRecord {
    pub fn from_json(json: &str) -> BolideResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn label(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.id.clone())
            .unwrap_or_else(|| "unnamed".to_string())
    }

    /// Mean of the min/max estimate, or whichever bound is present [m].
    pub fn diameter_m(&self) -> Option<f64> {
        let km = self.estimated_diameter.as_ref()?.kilometers.as_ref()?;
        let valid = |v: Option<f64>| v.filter(|d| d.is_finite() && *d > 0.0);
        let d_km = match (valid(km.estimated_diameter_min), valid(km.estimated_diameter_max)) {
            (Some(lo), Some(hi)) => 0.5 * (lo + hi),
            (Some(d), None) | (None, Some(d)) => d,
            (None, None) => return None,
        };
        Some(d_km * 1000.0)
    }

    /// Velocity of the most recent Earth approach, else of the first listed
    /// approach [m/s].
    pub fn velocity_mps(&self) -> Option<f64> {
        let latest_earth = self
            .close_approach_data
            .iter()
            .filter(|a| a.is_earth())
            .filter_map(|a| Some((a.epoch_date_close_approach?, a.velocity_mps()?)))
            .max_by_key(|(epoch, _)| *epoch)
            .map(|(_, v)| v);
        latest_earth.or_else(|| self.close_approach_data.first()?.velocity_mps())
    }
}

/// One entry of a small-body database `phys_par` list.
#[derive(Debug, Clone, Deserialize)]
pub struct PhysParEntry {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Physical parameters relevant to the density estimate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalParameters {
    pub spec_b: Option<String>,
    pub spec_t: Option<String>,
    pub albedo: Option<f64>,
    /// Measured bulk density [g/cm³].
    pub density_g_cm3: Option<f64>,
}

impl PhysicalParameters {
    pub fn from_phys_par(entries: &[PhysParEntry]) -> Self {
        let mut out = PhysicalParameters::default();
        for entry in entries {
            let Some(value) = entry.value.as_deref().map(str::trim).filter(|v| !v.is_empty())
            else {
                continue;
            };
            match entry.name.as_str() {
                "spec_B" => out.spec_b = Some(value.to_string()),
                "spec_T" => out.spec_t = Some(value.to_string()),
                "albedo" => out.albedo = value.parse().ok(),
                "density" => out.density_g_cm3 = value.parse().ok(),
                _ => {}
            }
        }
        out
    }

    /// Bus class when present, otherwise Tholen.
    pub fn taxonomy(&self) -> Option<&str> {
        self.spec_b.as_deref().or(self.spec_t.as_deref())
    }

    pub fn density(&self) -> DensityEstimate {
        estimate_density(self.density_g_cm3, self.taxonomy(), self.albedo)
    }
}

/// Catalog body reduced to the quantities the engines need.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogAsteroid {
    pub name: String,
    pub diameter_m: f64,
    pub velocity_mps: f64,
    pub density: DensityEstimate,
    pub potentially_hazardous: bool,
}

impl CatalogAsteroid {
    pub fn from_record(record: &NeoRecord, physical: &PhysicalParameters) -> BolideResult<Self> {
        let name = record.label();
        let diameter_m = record
            .diameter_m()
            .ok_or_else(|| BolideError::Catalog(format!("{name}: no usable diameter estimate")))?;
        let velocity_mps = record
            .velocity_mps()
            .ok_or_else(|| BolideError::Catalog(format!("{name}: no usable approach velocity")))?;
        let density = physical.density();
        log::debug!(
            "catalog {name}: d={diameter_m:.1} m, v={velocity_mps:.0} m/s, rho={:.2} g/cm³ ({:?})",
            density.rho_g_cm3,
            density.source
        );
        Ok(CatalogAsteroid {
            name,
            diameter_m,
            velocity_mps,
            density,
            potentially_hazardous: record.is_potentially_hazardous_asteroid,
        })
    }

    pub fn to_parameters(&self) -> BolideResult<AsteroidParameters> {
        AsteroidParameters::new(self.diameter_m, self.density.kg_m3(), self.velocity_mps)
    }
}
