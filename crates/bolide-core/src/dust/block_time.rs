// ─────────────────────────────────────────────────────────────────────
// Bolide Impact Core — Dust Block-Time Stage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Time for optical depth to decay below a blocking threshold.
pub trait BlockTimeModel: Send + Sync {
    fn time_to_drop_below(&self, tau0: f64, threshold: f64, residence_days: f64) -> f64;
}

/// `τ(t) = τ0 · exp(-t / t_res)` inverted for `τ(t) = τ_t`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialBlockTimeModel;

impl BlockTimeModel for ExponentialBlockTimeModel {
    fn time_to_drop_below(&self, tau0: f64, threshold: f64, residence_days: f64) -> f64 {
        if tau0 <= threshold {
            return 0.0;
        }
        residence_days * (tau0 / threshold).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_is_zero() {
        assert_eq!(ExponentialBlockTimeModel.time_to_drop_below(0.5, 1.0, 360.0), 0.0);
        assert_eq!(ExponentialBlockTimeModel.time_to_drop_below(1.0, 1.0, 360.0), 0.0);
    }

    #[test]
    fn test_one_e_folding() {
        let t = ExponentialBlockTimeModel.time_to_drop_below(std::f64::consts::E, 1.0, 200.0);
        assert!((t - 200.0).abs() < 1e-9, "got {t}");
    }
}
