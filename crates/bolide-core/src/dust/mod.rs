// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Atmospheric Dust
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Atmospheric dust injection and sunlight blocking.
//!
//! Six stages, each behind a trait with one default implementation:
//! energy → ejecta → injection → optics → residence → block time.
//! `AtmosphericDustEngine` chains them.

pub mod block_time;
pub mod ejecta;
pub mod energy;
pub mod engine;
pub mod injection;
pub mod optics;
pub mod residence;

pub use block_time::{BlockTimeModel, ExponentialBlockTimeModel};
pub use ejecta::{EjectaModel, EjectaPartition, EmpiricalEjectaModel};
pub use energy::{EnergyModel, KineticEnergyModel};
pub use engine::{AtmosphericDustEngine, BlockDurations, DustStages, DustSummary, TauThresholds};
pub use injection::{InjectionModel, LogEnergyInjectionModel};
pub use optics::{ColumnOpticsModel, OpticsModel};
pub use residence::{AltitudeResidenceModel, ResidenceDays, ResidenceModel};
