// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Atmospheric Dust Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dust pipeline orchestration.

use super::block_time::{BlockTimeModel, ExponentialBlockTimeModel};
use super::ejecta::{EjectaModel, EmpiricalEjectaModel};
use super::energy::{EnergyModel, KineticEnergyModel};
use super::injection::{InjectionModel, LogEnergyInjectionModel};
use super::optics::{ColumnOpticsModel, OpticsModel};
use super::residence::{AltitudeResidenceModel, ResidenceDays, ResidenceModel};
use bolide_types::config::DustConfig;
use bolide_types::error::{require_finite, require_positive, BolideResult};
use bolide_types::params::AsteroidParameters;
use serde::{Deserialize, Serialize};

/// Optical-depth thresholds echoed into the summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TauThresholds {
    pub severe_tau: f64,
    pub partial_tau: f64,
}

/// Sunlight-blocking durations [days].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDurations {
    pub severe_block: f64,
    pub partial_block: f64,
}

/// Complete dust pipeline result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustSummary {
    pub diameter_m: f64,
    pub velocity_mps: f64,
    pub impact_energy_j: f64,
    pub ejecta_mass_kg: f64,
    pub injection_height_km: f64,
    pub aerosol_mass_strat_kg: f64,
    /// Initial optical depth.
    pub tau0: f64,
    pub residence_days: ResidenceDays,
    pub thresholds: TauThresholds,
    pub durations_days: BlockDurations,
}

/// One implementation per stage. Every stage is required.
/// Built from the engine's own config so the ejecta constants agree.
pub struct DustStages {
    pub energy: Box<dyn EnergyModel>,
    pub ejecta: Box<dyn EjectaModel>,
    pub injection: Box<dyn InjectionModel>,
    pub optics: Box<dyn OpticsModel>,
    pub residence: Box<dyn ResidenceModel>,
    pub block: Box<dyn BlockTimeModel>,
}

impl DustStages {
    /// Default stages; the ejecta constants come from `config`.
    pub fn from_config(config: &DustConfig) -> Self {
        DustStages {
            energy: Box::new(KineticEnergyModel),
            ejecta: Box::new(EmpiricalEjectaModel::new(
                config.k_ejecta_oceanic,
                config.k_ejecta_terrestrial,
            )),
            injection: Box::new(LogEnergyInjectionModel::default()),
            optics: Box::new(ColumnOpticsModel),
            residence: Box::new(AltitudeResidenceModel),
            block: Box::new(ExponentialBlockTimeModel),
        }
    }

    pub fn with_energy(mut self, stage: impl EnergyModel + 'static) -> Self {
        self.energy = Box::new(stage);
        self
    }

    pub fn with_ejecta(mut self, stage: impl EjectaModel + 'static) -> Self {
        self.ejecta = Box::new(stage);
        self
    }

    pub fn with_injection(mut self, stage: impl InjectionModel + 'static) -> Self {
        self.injection = Box::new(stage);
        self
    }

    pub fn with_optics(mut self, stage: impl OpticsModel + 'static) -> Self {
        self.optics = Box::new(stage);
        self
    }

    pub fn with_residence(mut self, stage: impl ResidenceModel + 'static) -> Self {
        self.residence = Box::new(stage);
        self
    }

    pub fn with_block(mut self, stage: impl BlockTimeModel + 'static) -> Self {
        self.block = Box::new(stage);
        self
    }
}

/// Energy → ejecta → injection → optics → residence → block time.
pub struct AtmosphericDustEngine {
    config: DustConfig,
    stages: DustStages,
}

impl AtmosphericDustEngine {
    /// Build with explicit stages. The config is validated here.
    pub fn new(config: DustConfig, stages: DustStages) -> BolideResult<Self> {
        config.validate()?;
        Ok(AtmosphericDustEngine { config, stages })
    }

    pub fn with_defaults(config: DustConfig) -> BolideResult<Self> {
        let stages = DustStages::from_config(&config);
        Self::new(config, stages)
    }

    pub fn config(&self) -> &DustConfig {
        &self.config
    }

    /// Summarize using the configured bulk density.
    pub fn summarize(&self, diameter_m: f64, velocity_mps: f64) -> BolideResult<DustSummary> {
        require_positive("diameter_m", diameter_m)?;
        require_positive("velocity_mps", velocity_mps)?;
        self.run(
            diameter_m,
            velocity_mps,
            self.config.density_kg_m3,
            self.config.oceanic_impact,
        )
    }

    /// Summarize using the asteroid's own density.
    pub fn summarize_asteroid(&self, asteroid: &AsteroidParameters) -> BolideResult<DustSummary> {
        self.summarize_for_medium(asteroid, self.config.oceanic_impact)
    }

    /// As `summarize_asteroid`, with the impact medium given by the caller
    /// instead of `oceanicImpact`.
    pub fn summarize_for_medium(
        &self,
        asteroid: &AsteroidParameters,
        oceanic_impact: bool,
    ) -> BolideResult<DustSummary> {
        asteroid.validate()?;
        self.run(
            asteroid.diameter_m,
            asteroid.velocity_mps,
            asteroid.density_kg_m3,
            oceanic_impact,
        )
    }

    fn run(
        &self,
        diameter_m: f64,
        velocity_mps: f64,
        density_kg_m3: f64,
        oceanic_impact: bool,
    ) -> BolideResult<DustSummary> {
        let cfg = &self.config;
        let s = &self.stages;

        let energy = s.energy.energy_j(diameter_m, velocity_mps, density_kg_m3);
        require_finite("impact_energy_j", energy)?;
        let ejecta_mass = s.ejecta.total_mass_kg(energy, oceanic_impact);
        require_finite("ejecta_mass_kg", ejecta_mass)?;
        let height_km = s.injection.injection_height_km(energy);
        let parts = s.ejecta.partition(ejecta_mass, &cfg.fractions());

        let burden = s
            .optics
            .column_burden_kg_m2(parts.aerosol_strat, cfg.distribute_globally);
        let tau0 = s.optics.initial_tau(burden, cfg.optical_k_per_kg);
        require_finite("tau0", tau0)?;

        let residence = s.residence.scaled_days(height_km, &cfg.residence_base_days);
        let severe = s
            .block
            .time_to_drop_below(tau0, cfg.severe_tau, residence.aerosol);
        let partial = s
            .block
            .time_to_drop_below(tau0, cfg.partial_tau, residence.aerosol);
        require_finite("severe_block", severe)?;
        require_finite("partial_block", partial)?;

        log::debug!(
            "dust: E={energy:.3e} J, ejecta={ejecta_mass:.3e} kg, h={height_km:.1} km, \
             strat={:.3e} kg, tau0={tau0:.4}, severe={severe:.1} d, partial={partial:.1} d",
            parts.aerosol_strat
        );

        Ok(DustSummary {
            diameter_m,
            velocity_mps,
            impact_energy_j: energy,
            ejecta_mass_kg: ejecta_mass,
            injection_height_km: height_km,
            aerosol_mass_strat_kg: parts.aerosol_strat,
            tau0,
            residence_days: residence,
            thresholds: TauThresholds {
                severe_tau: cfg.severe_tau,
                partial_tau: cfg.partial_tau,
            },
            durations_days: BlockDurations {
                severe_block: severe,
                partial_block: partial,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolide_types::error::BolideError;

    fn engine() -> AtmosphericDustEngine {
        AtmosphericDustEngine::with_defaults(DustConfig::default()).unwrap()
    }

    /// Energy stage returning a fixed value.
    struct FixedEnergy(f64);

    impl EnergyModel for FixedEnergy {
        fn energy_j(&self, _: f64, _: f64, _: f64) -> f64 {
            self.0
        }
    }

    /// Injection stage pinned to one altitude.
    struct FixedInjection(f64);

    impl InjectionModel for FixedInjection {
        fn injection_height_km(&self, _: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_kilometre_impactor_defaults() {
        let s = engine().summarize(1000.0, 20_000.0).unwrap();
        assert!((10.0..=50.0).contains(&s.injection_height_km));
        let expected_strat = s.ejecta_mass_kg * 0.05 * 0.8;
        assert!(
            (s.aerosol_mass_strat_kg - expected_strat).abs() <= expected_strat * 1e-12,
            "strat={} expected={}",
            s.aerosol_mass_strat_kg,
            expected_strat
        );
        assert!(s.tau0 >= 0.0);
        assert_eq!(s.thresholds.severe_tau, 1.0);
        assert_eq!(s.thresholds.partial_tau, 0.3);
    }

    #[test]
    fn test_durations_zero_when_already_clear() {
        // 10 m impactor: tau0 is tiny, nothing is blocked.
        let s = engine().summarize(10.0, 15_000.0).unwrap();
        assert!(s.tau0 < 0.3, "tau0={}", s.tau0);
        assert_eq!(s.durations_days.severe_block, 0.0);
        assert_eq!(s.durations_days.partial_block, 0.0);
    }

    #[test]
    fn test_severe_shorter_than_partial() {
        let cfg = DustConfig {
            optical_k_per_kg: 1e12,
            ..DustConfig::default()
        };
        let s = AtmosphericDustEngine::with_defaults(cfg)
            .unwrap()
            .summarize(5000.0, 25_000.0)
            .unwrap();
        assert!(s.tau0 > 1.0, "tau0={}", s.tau0);
        assert!(s.durations_days.severe_block > 0.0);
        assert!(s.durations_days.partial_block > s.durations_days.severe_block);
        let expected = s.residence_days.aerosol * (s.tau0 / 1.0).ln();
        assert!((s.durations_days.severe_block - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn test_config_density_vs_asteroid_density() {
        let e = engine();
        let by_config = e.summarize(100.0, 20_000.0).unwrap();
        let asteroid = AsteroidParameters::new(100.0, 1500.0, 20_000.0).unwrap();
        let by_asteroid = e.summarize_asteroid(&asteroid).unwrap();
        assert!((by_config.impact_energy_j / by_asteroid.impact_energy_j - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_terrestrial_ejecta_larger() {
        let land = AtmosphericDustEngine::with_defaults(DustConfig {
            oceanic_impact: false,
            ..DustConfig::default()
        })
        .unwrap();
        let ocean = engine();
        let a = land.summarize(500.0, 20_000.0).unwrap();
        let b = ocean.summarize(500.0, 20_000.0).unwrap();
        assert!((a.ejecta_mass_kg / b.ejecta_mass_kg - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_stages_are_used() {
        let stages = DustStages::from_config(&DustConfig::default())
            .with_energy(FixedEnergy(1e18))
            .with_injection(FixedInjection(20.0));
        let e = AtmosphericDustEngine::new(DustConfig::default(), stages).unwrap();
        let s = e.summarize(1.0, 1.0).unwrap();
        assert_eq!(s.impact_energy_j, 1e18);
        assert_eq!(s.injection_height_km, 20.0);
        assert!((s.residence_days.aerosol - 720.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let e = engine();
        assert!(e.summarize(-1.0, 20_000.0).is_err());
        assert!(e.summarize(100.0, f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = DustConfig {
            frac_aerosol: 0.5,
            ..DustConfig::default()
        };
        match AtmosphericDustEngine::with_defaults(cfg) {
            Err(BolideError::ConfigError(msg)) => assert!(msg.contains("sum"), "{msg}"),
            Err(other) => panic!("unexpected error {other:?}"),
            Ok(_) => panic!("config with fractions above 1 must be rejected"),
        }
    }

    #[test]
    fn test_idempotent() {
        let e = engine();
        let a = e.summarize(800.0, 18_000.0).unwrap();
        let b = e.summarize(800.0, 18_000.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_stage_override_keeps_config_ejecta_constants() {
        let cfg = DustConfig {
            k_ejecta_oceanic: 5e-9,
            k_ejecta_terrestrial: 4e-8,
            ..DustConfig::default()
        };
        let stages = DustStages::from_config(&cfg).with_energy(FixedEnergy(1e18));
        let custom = AtmosphericDustEngine::new(cfg.clone(), stages).unwrap();
        let s = custom.summarize(1.0, 1.0).unwrap();
        let expected = 5e-9 * 1e18_f64.powf(0.67);
        assert!(
            (s.ejecta_mass_kg - expected).abs() <= expected * 1e-12,
            "ejecta={} expected={}",
            s.ejecta_mass_kg,
            expected
        );

        let stock = AtmosphericDustEngine::with_defaults(cfg.clone()).unwrap();
        let a = stock.summarize(1000.0, 20_000.0).unwrap();
        let rebuilt = AtmosphericDustEngine::new(cfg.clone(), DustStages::from_config(&cfg))
            .unwrap()
            .summarize(1000.0, 20_000.0)
            .unwrap();
        assert_eq!(a, rebuilt);
    }

    #[test]
    fn test_medium_argument_overrides_config() {
        let e = engine();
        let asteroid = AsteroidParameters::new(1000.0, 3000.0, 20_000.0).unwrap();
        let ocean = e.summarize_for_medium(&asteroid, true).unwrap();
        let land = e.summarize_for_medium(&asteroid, false).unwrap();
        let k_land = land.ejecta_mass_kg / land.impact_energy_j.powf(0.67);
        let k_ocean = ocean.ejecta_mass_kg / ocean.impact_energy_j.powf(0.67);
        assert!((k_land - 1e-8).abs() <= 1e-8 * 1e-9, "k_land={k_land}");
        assert!((k_ocean - 1e-9).abs() <= 1e-9 * 1e-9, "k_ocean={k_ocean}");
        assert_eq!(e.summarize_asteroid(&asteroid).unwrap(), ocean);
    }

    #[test]
    fn test_overflowing_inputs_rejected() {
        match engine().summarize(1e200, 20_000.0) {
            Err(BolideError::Validation { name, value, .. }) => {
                assert_eq!(name, "impact_energy_j");
                assert!(value.is_infinite());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
