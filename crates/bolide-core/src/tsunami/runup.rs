// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Tsunami Run-up Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Smallest slope the empirical relation accepts.
const MIN_SLOPE: f64 = 1e-4;

/// Onshore run-up from offshore wave height.
pub trait RunupModel: Send + Sync {
    fn runup_m(&self, wave_height_offshore_m: f64, beach_slope: f64) -> f64;
}

/// `R = k · H / sqrt(slope)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleRunupModel {
    pub k: f64,
}

impl Default for SimpleRunupModel {
    fn default() -> Self {
        SimpleRunupModel { k: 1.1 }
    }
}

impl RunupModel for SimpleRunupModel {
    fn runup_m(&self, wave_height_offshore_m: f64, beach_slope: f64) -> f64 {
        self.k * wave_height_offshore_m / beach_slope.max(MIN_SLOPE).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gentle_beach_amplifies() {
        let r = SimpleRunupModel::default().runup_m(2.0, 0.01);
        assert!((r - 22.0).abs() < 1e-9, "got {r}");
    }

    #[test]
    fn test_tiny_slope_floored() {
        let m = SimpleRunupModel::default();
        assert_eq!(m.runup_m(1.0, 1e-9), m.runup_m(1.0, 1e-4));
    }
}
