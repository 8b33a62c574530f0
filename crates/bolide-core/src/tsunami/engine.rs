// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Tsunami Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-point tsunami estimates.

use super::cavity::{CavityModel, HeuristicCavityModel};
use super::coupling::{CouplingModel, SimpleCouplingModel};
use super::propagation::{PropagationModel, ShallowWaterPropagation};
use super::runup::{RunupModel, SimpleRunupModel};
use bolide_math::geo::haversine_km;
use bolide_types::error::{require_finite, BolideResult};
use bolide_types::params::{TsunamiInput, TsunamiPointQuery, TsunamiPointResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Wave source at the impact site, shared by every query point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveSource {
    pub coupled_energy_j: f64,
    pub cavity_radius_m: f64,
    pub initial_wave_height_m: f64,
}

/// Stage implementations. Run-up is the only optional stage.
pub struct TsunamiStages {
    pub coupling: Box<dyn CouplingModel>,
    pub cavity: Box<dyn CavityModel>,
    pub propagation: Box<dyn PropagationModel>,
    pub runup: Option<Box<dyn RunupModel>>,
}

impl TsunamiStages {
    pub fn with_coupling(mut self, stage: impl CouplingModel + 'static) -> Self {
        self.coupling = Box::new(stage);
        self
    }

    pub fn with_cavity(mut self, stage: impl CavityModel + 'static) -> Self {
        self.cavity = Box::new(stage);
        self
    }

    pub fn with_propagation(mut self, stage: impl PropagationModel + 'static) -> Self {
        self.propagation = Box::new(stage);
        self
    }

    pub fn with_runup(mut self, stage: impl RunupModel + 'static) -> Self {
        self.runup = Some(Box::new(stage));
        self
    }

    pub fn without_runup(mut self) -> Self {
        self.runup = None;
        self
    }
}

impl Default for TsunamiStages {
    fn default() -> Self {
        TsunamiStages {
            coupling: Box::new(SimpleCouplingModel),
            cavity: Box::new(HeuristicCavityModel::default()),
            propagation: Box::new(ShallowWaterPropagation),
            runup: Some(Box::new(SimpleRunupModel::default())),
        }
    }
}

pub struct TsunamiEngine {
    stages: TsunamiStages,
}

impl TsunamiEngine {
    pub fn new(stages: TsunamiStages) -> Self {
        TsunamiEngine { stages }
    }

    /// Coupled energy, cavity radius and initial height for `input`.
    pub fn source(&self, input: &TsunamiInput) -> BolideResult<WaveSource> {
        input.validate()?;
        self.build_source(input)
    }

    pub fn simulate_point(
        &self,
        input: &TsunamiInput,
        query: &TsunamiPointQuery,
    ) -> BolideResult<TsunamiPointResult> {
        input.validate()?;
        query.validate()?;
        let source = self.build_source(input)?;
        Ok(self.propagate(input, &source, query))
    }

    /// Evaluate many observation points in parallel, preserving order.
    /// Every query is validated before any is evaluated.
    pub fn simulate_points(
        &self,
        input: &TsunamiInput,
        queries: &[TsunamiPointQuery],
    ) -> BolideResult<Vec<TsunamiPointResult>> {
        input.validate()?;
        for query in queries {
            query.validate()?;
        }
        let source = self.build_source(input)?;
        Ok(queries
            .par_iter()
            .map(|query| self.propagate(input, &source, query))
            .collect())
    }

    /// Expects a validated input; only overflow is checked here.
    fn build_source(&self, input: &TsunamiInput) -> BolideResult<WaveSource> {
        let s = &self.stages;
        let coupled_energy_j =
            require_finite("coupled_energy_j", s.coupling.coupled_energy_j(&input.asteroid))?;
        let cavity_radius_m = s.cavity.cavity_radius_m(coupled_energy_j, input.ocean_depth_m);
        let initial_wave_height_m = s
            .cavity
            .initial_wave_height_m(cavity_radius_m, input.ocean_depth_m);
        require_finite("initial_wave_height_m", initial_wave_height_m)?;

        log::debug!(
            "tsunami source: E_c={coupled_energy_j:.3e} J, Rc={cavity_radius_m:.1} m, \
             H0={initial_wave_height_m:.2} m, depth={:.0} m",
            input.ocean_depth_m
        );

        Ok(WaveSource {
            coupled_energy_j,
            cavity_radius_m,
            initial_wave_height_m,
        })
    }

    fn propagate(
        &self,
        input: &TsunamiInput,
        source: &WaveSource,
        query: &TsunamiPointQuery,
    ) -> TsunamiPointResult {
        let s = &self.stages;
        let distance_km = haversine_km(input.impact_lat, input.impact_lon, query.lat, query.lon);
        let wave_height_m =
            s.propagation
                .wave_height_at(distance_km, source.initial_wave_height_m, input.ocean_depth_m);
        let arrival_time_s = s.propagation.travel_time_s(distance_km, input.ocean_depth_m);

        let runup_m = match (&s.runup, input.beach_slope) {
            (Some(runup), Some(slope)) => Some(runup.runup_m(wave_height_m, slope)),
            _ => None,
        };

        log::trace!(
            "tsunami point ({:.3}, {:.3}): d={distance_km:.1} km, t={arrival_time_s:.0} s, \
             H={wave_height_m:.3} m, runup={runup_m:?}",
            query.lat,
            query.lon
        );

        TsunamiPointResult {
            distance_km,
            arrival_time_s,
            wave_height_m,
            runup_m,
        }
    }
}

impl Default for TsunamiEngine {
    fn default() -> Self {
        Self::new(TsunamiStages::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolide_types::error::BolideError;
    use bolide_types::params::AsteroidParameters;

    fn input() -> TsunamiInput {
        let asteroid = AsteroidParameters::new(200.0, 3000.0, 18_000.0).unwrap();
        TsunamiInput::new(asteroid, 4000.0, 0.0, 0.0).unwrap()
    }

    #[test]
    fn test_query_at_impact_point() {
        let engine = TsunamiEngine::default();
        let q = TsunamiPointQuery::new(0.0, 0.0).unwrap();
        let r = engine.simulate_point(&input(), &q).unwrap();
        assert_eq!(r.distance_km, 0.0);
        assert_eq!(r.arrival_time_s, 0.0);
        let h0 = engine.source(&input()).unwrap().initial_wave_height_m;
        assert!(r.wave_height_m.is_finite());
        assert!((r.wave_height_m - h0 / 1e-3_f64.sqrt()).abs() <= r.wave_height_m * 1e-12);
        assert!(r.runup_m.is_none(), "no beach slope, no run-up");
    }

    #[test]
    fn test_far_field_values() {
        let engine = TsunamiEngine::default();
        let src = engine.source(&input()).unwrap();
        let q = TsunamiPointQuery::new(0.0, 10.0).unwrap();
        let r = engine.simulate_point(&input(), &q).unwrap();
        let d = haversine_km(0.0, 0.0, 0.0, 10.0);
        assert!((r.distance_km - d).abs() < 1e-9);
        assert!((r.wave_height_m - src.initial_wave_height_m / d.sqrt()).abs() < 1e-9);
        let c = (9.80665_f64 * 4000.0).sqrt();
        assert!((r.arrival_time_s - d * 1000.0 / c).abs() < 1e-6);
    }

    #[test]
    fn test_runup_requires_slope_and_stage() {
        let with_slope = input().with_beach_slope(0.02).unwrap();
        let q = TsunamiPointQuery::new(5.0, 5.0).unwrap();

        let r = TsunamiEngine::default().simulate_point(&with_slope, &q).unwrap();
        let runup = r.runup_m.expect("runup with slope and stage");
        assert!((runup - 1.1 * r.wave_height_m / 0.02_f64.sqrt()).abs() < 1e-9);

        let bare = TsunamiEngine::new(TsunamiStages::default().without_runup());
        assert!(bare.simulate_point(&with_slope, &q).unwrap().runup_m.is_none());
    }

    #[test]
    fn test_batch_matches_single_points() {
        let engine = TsunamiEngine::default();
        let queries: Vec<TsunamiPointQuery> = (0..16)
            .map(|i| TsunamiPointQuery::new(i as f64 * 2.0, -(i as f64) * 3.0).unwrap())
            .collect();
        let batch = engine.simulate_points(&input(), &queries).unwrap();
        assert_eq!(batch.len(), queries.len());
        for (q, r) in queries.iter().zip(&batch) {
            assert_eq!(*r, engine.simulate_point(&input(), q).unwrap());
        }
    }

    #[test]
    fn test_batch_rejects_bad_query() {
        let engine = TsunamiEngine::default();
        let queries = [
            TsunamiPointQuery { lat: 0.0, lon: 1.0 },
            TsunamiPointQuery { lat: 120.0, lon: 1.0 },
        ];
        let err = engine.simulate_points(&input(), &queries).unwrap_err();
        assert!(matches!(err, BolideError::Validation { name: "query_lat", .. }));
    }

    #[test]
    fn test_unvalidated_input_rejected() {
        let mut bad = input();
        bad.ocean_depth_m = -10.0;
        let q = TsunamiPointQuery { lat: 0.0, lon: 0.0 };
        assert!(TsunamiEngine::default().simulate_point(&bad, &q).is_err());
    }

    #[test]
    fn test_shallow_water_caps_source() {
        let asteroid = AsteroidParameters::new(1000.0, 3000.0, 20_000.0).unwrap();
        let shallow = TsunamiInput::new(asteroid, 50.0, 10.0, 10.0).unwrap();
        let src = TsunamiEngine::default().source(&shallow).unwrap();
        assert_eq!(src.cavity_radius_m, 250.0);
        assert_eq!(src.initial_wave_height_m, 12.5);
    }

    #[test]
    fn test_overflowing_source_rejected() {
        let asteroid = AsteroidParameters::new(1e200, 3000.0, 20_000.0).unwrap();
        let input = TsunamiInput::new(asteroid, 4000.0, 0.0, 0.0).unwrap();
        let q = TsunamiPointQuery::new(1.0, 1.0).unwrap();
        let engine = TsunamiEngine::default();
        assert!(matches!(
            engine.source(&input),
            Err(BolideError::Validation { name: "coupled_energy_j", .. })
        ));
        assert!(engine.simulate_points(&input, &[q]).is_err());
    }
}
