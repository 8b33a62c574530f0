// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Bolide Catalog
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Adapters from catalog records to engine inputs.
//!
//! The host fetches the records; this crate only interprets them.

pub mod density;
pub mod neo;
