// Excitement scoring engine
//
// Audio energy is the excitement proxy: loud sustained crowd noise,
// whistles and cheering push all three metrics up. The combined metric is
// mapped to a 1-5 score through fixed thresholds.

pub mod audio;

use serde::{Deserialize, Serialize};

use crate::constants::{
    SCORE_THRESHOLD_2, SCORE_THRESHOLD_3, SCORE_THRESHOLD_4, SCORE_THRESHOLD_5,
    WEIGHT_DYNAMIC_RANGE, WEIGHT_PEAK_WINDOW_RMS, WEIGHT_RMS,
};

/// Audio metrics for one clip, all normalized to [0, 1].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioMetrics {
    /// RMS energy over the whole clip
    pub rms: f64,
    /// Maximum absolute sample
    pub peak: f64,
    /// Loudest 100ms-window RMS
    pub peak_window_rms: f64,
    /// Spread between the loudest and quietest window RMS
    pub dynamic_range: f64,
}

/// Weighted combination of the metrics. Higher = more exciting.
pub fn combined_energy(metrics: &AudioMetrics) -> f64 {
    metrics.peak_window_rms * WEIGHT_PEAK_WINDOW_RMS
        + metrics.dynamic_range * WEIGHT_DYNAMIC_RANGE
        + metrics.rms * WEIGHT_RMS
}

/// Convert audio metrics to a 1-5 excitement score.
pub fn score_excitement(metrics: &AudioMetrics) -> u8 {
    let combined = combined_energy(metrics);

    if combined > SCORE_THRESHOLD_5 {
        5
    } else if combined > SCORE_THRESHOLD_4 {
        4
    } else if combined > SCORE_THRESHOLD_3 {
        3
    } else if combined > SCORE_THRESHOLD_2 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SCORE_MAX, SCORE_MIN};

    fn metrics(rms: f64, peak_window_rms: f64, dynamic_range: f64) -> AudioMetrics {
        AudioMetrics {
            rms,
            peak: peak_window_rms,
            peak_window_rms,
            dynamic_range,
        }
    }

    #[test]
    fn test_silent_clip_scores_floor() {
        assert_eq!(score_excitement(&AudioMetrics::default()), 1);
    }

    #[test]
    fn test_loud_clip_scores_ceiling() {
        let m = metrics(0.5, 0.8, 0.4);
        assert_eq!(score_excitement(&m), 5);
    }

    #[test]
    fn test_mid_energy_scores_mid() {
        // combined = 0.5*0.15 + 0.3*0.05 + 0.2*0.1 = 0.11 -> score 3
        let m = metrics(0.1, 0.15, 0.05);
        assert_eq!(score_excitement(&m), 3);
    }

    #[test]
    fn test_score_always_in_range() {
        let cases = [
            AudioMetrics::default(),
            metrics(1.0, 1.0, 1.0),
            metrics(0.04, 0.04, 0.0),
            metrics(0.0, 0.09, 0.2),
        ];
        for m in &cases {
            let s = score_excitement(m);
            assert!((SCORE_MIN..=SCORE_MAX).contains(&s), "score {} out of range", s);
        }
    }

    #[test]
    fn test_score_monotonic_in_energy() {
        let quiet = metrics(0.01, 0.02, 0.01);
        let medium = metrics(0.1, 0.12, 0.08);
        let loud = metrics(0.3, 0.4, 0.25);

        let (a, b, c) = (
            score_excitement(&quiet),
            score_excitement(&medium),
            score_excitement(&loud),
        );
        assert!(a <= b && b <= c);
        assert!(combined_energy(&quiet) < combined_energy(&medium));
        assert!(combined_energy(&medium) < combined_energy(&loud));
    }

    #[test]
    fn test_every_band_is_reachable() {
        // combined = 0.2 * rms when the windowed metrics are zero
        assert_eq!(score_excitement(&metrics(0.1, 0.0, 0.0)), 1); // 0.02
        assert_eq!(score_excitement(&metrics(0.2, 0.0, 0.0)), 2); // 0.04
        assert_eq!(score_excitement(&metrics(0.5, 0.0, 0.0)), 3); // 0.10
        assert_eq!(score_excitement(&metrics(0.0, 0.32, 0.0)), 4); // 0.16
        assert_eq!(score_excitement(&metrics(0.0, 0.52, 0.0)), 5); // 0.26
    }
}
