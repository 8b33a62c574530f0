// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Tsunami
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tsunami generation and propagation for oceanic impacts.
//!
//! coupling → cavity → great-circle distance → propagation → (run-up).

pub mod cavity;
pub mod coupling;
pub mod engine;
pub mod propagation;
pub mod runup;

pub use cavity::{CavityModel, HeuristicCavityModel};
pub use coupling::{CouplingModel, SimpleCouplingModel};
pub use engine::{TsunamiEngine, TsunamiStages, WaveSource};
pub use propagation::{PropagationModel, ShallowWaterPropagation};
pub use runup::{RunupModel, SimpleRunupModel};
