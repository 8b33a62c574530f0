// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Impact Pipelines
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Impact-consequence pipelines.
//!
//! - `impactor`: mass, energy, TNT yield, blast radius, crater diameter
//! - `effects`: thermal ignition and devastation radii
//! - `dust`: atmospheric dust injection and sunlight-blocking durations
//! - `tsunami`: wave height, arrival time and run-up at query points
//! - `assessment`: runs every applicable pipeline for a scenario

pub mod assessment;
pub mod dust;
pub mod effects;
pub mod impactor;
pub mod tsunami;
