// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Bolide Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared value types for the impact-consequence engine.
//!
//! Constants, the error taxonomy, request parameters and dust configuration.

pub mod config;
pub mod constants;
pub mod error;
pub mod params;
