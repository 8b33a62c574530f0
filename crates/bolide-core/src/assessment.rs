// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Impact Assessment
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Runs every applicable pipeline for one impact scenario.
//!
//! The pipelines stay independent: none reads another's output.
//! Batches are evaluated in parallel with Rayon.

use crate::dust::{AtmosphericDustEngine, DustSummary};
use crate::effects::SurfaceEffects;
use crate::impactor::{ImpactorPhysics, ImpactorPhysicsResult};
use crate::tsunami::TsunamiEngine;
use bolide_types::config::DustConfig;
use bolide_types::error::BolideResult;
use bolide_types::params::{AsteroidParameters, TsunamiInput, TsunamiPointQuery, TsunamiPointResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Oceanic impact site and the coastal points to evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsunamiSite {
    pub ocean_depth_m: f64,
    pub impact_lat: f64,
    pub impact_lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beach_slope: Option<f64>,
    #[serde(default)]
    pub queries: Vec<TsunamiPointQuery>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactScenario {
    pub asteroid: AsteroidParameters,
    /// Present for oceanic impacts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsunami_site: Option<TsunamiSite>,
}

impl ImpactScenario {
    /// A scenario with a tsunami site is an ocean impact.
    pub fn is_oceanic(&self) -> bool {
        self.tsunami_site.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAssessment {
    pub physics: ImpactorPhysicsResult,
    pub effects: SurfaceEffects,
    pub dust: DustSummary,
    /// One entry per site query, in query order. Empty on land.
    pub tsunami: Vec<TsunamiPointResult>,
}

pub struct Assessor {
    pub physics: ImpactorPhysics,
    pub dust: AtmosphericDustEngine,
    pub tsunami: TsunamiEngine,
}

impl Assessor {
    pub fn new(physics: ImpactorPhysics, dust: AtmosphericDustEngine, tsunami: TsunamiEngine) -> Self {
        Assessor {
            physics,
            dust,
            tsunami,
        }
    }

    /// Default stages everywhere, dust driven by `config`.
    pub fn with_dust_config(config: DustConfig) -> BolideResult<Self> {
        Ok(Self::new(
            ImpactorPhysics::default(),
            AtmosphericDustEngine::with_defaults(config)?,
            TsunamiEngine::default(),
        ))
    }

    pub fn assess(&self, scenario: &ImpactScenario) -> BolideResult<ImpactAssessment> {
        let asteroid = &scenario.asteroid;
        let tsunami_input = scenario
            .tsunami_site
            .as_ref()
            .map(|site| tsunami_input(asteroid, site))
            .transpose()?;

        let physics = self.physics.compute(asteroid)?;
        let effects = SurfaceEffects::from_physics(&physics);
        // The scenario decides the ejecta medium, not the dust config.
        let dust = self.dust.summarize_for_medium(asteroid, scenario.is_oceanic())?;
        let tsunami = match (&scenario.tsunami_site, tsunami_input) {
            (Some(site), Some(input)) => self.tsunami.simulate_points(&input, &site.queries)?,
            _ => Vec::new(),
        };

        log::debug!(
            "assessment: d={} m, E={:.3e} J, crater={:.0} m, tau0={:.4}, {} tsunami points",
            asteroid.diameter_m,
            physics.energy_j,
            physics.crater_diameter_m,
            dust.tau0,
            tsunami.len()
        );

        Ok(ImpactAssessment {
            physics,
            effects,
            dust,
            tsunami,
        })
    }

    /// Assess independent scenarios in parallel, preserving order.
    /// On failure the error of the earliest failing scenario is returned.
    pub fn assess_batch(&self, scenarios: &[ImpactScenario]) -> BolideResult<Vec<ImpactAssessment>> {
        let results: Vec<BolideResult<ImpactAssessment>> =
            scenarios.par_iter().map(|s| self.assess(s)).collect();
        results.into_iter().collect()
    }
}

fn tsunami_input(asteroid: &AsteroidParameters, site: &TsunamiSite) -> BolideResult<TsunamiInput> {
    let input = TsunamiInput::new(*asteroid, site.ocean_depth_m, site.impact_lat, site.impact_lon)?;
    match site.beach_slope {
        Some(slope) => input.with_beach_slope(slope),
        None => Ok(input),
    }
}
