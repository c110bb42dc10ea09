// anim/wave.rs
//
// Periodic signals built on the easing helpers.
// Used to turn elapsed seconds into held-then-ramped motion.

use super::easing::{ease_in_out_cubic, linear_step};

/// Triangular wave of period `2 * radius`, ranging over `[0, height]`.
///
/// Symmetric about zero (uses `|x|`). Rises from 0 to `height` at
/// `x == radius`, then the falling term pulls it back to 0 at `2 * radius`.
///
/// Precondition: `radius != 0`.
#[inline]
pub fn sawtooth(x: f64, radius: f64, height: f64) -> f64 {
    let x = x.abs() / radius;
    let rising = x % 2.0;
    let falling = (rising * 2.0 - 2.0).max(0.0);
    (rising - falling) * height
}

/// [`sawtooth`] with unit radius and height.
#[inline]
pub fn sawtooth_unit(x: f64) -> f64 {
    sawtooth(x, 1.0, 1.0)
}

/// Split `x` into a whole cycle count and the offset inside that cycle.
#[inline]
fn cycle_split(x: f64, period: f64) -> (f64, f64) {
    let cycle = (x / period).floor();
    (cycle, x - cycle * period)
}

/// Stepped ramp: holds for `downtime` at the start of each `period`,
/// then ramps linearly by one before the next cycle starts.
///
/// Output is `cycle + linear_step(x mod period, downtime, period)`, so it
/// is continuous and non-decreasing for `downtime < period`.
///
/// Precondition: `period != 0`.
#[inline]
pub fn stop_go(x: f64, downtime: f64, period: f64) -> f64 {
    let (cycle, tween) = cycle_split(x, period);
    cycle + linear_step(tween, downtime, period)
}

/// Same as [`stop_go`] with the in-cycle ramp passed through
/// [`ease_in_out_cubic`].
#[inline]
pub fn stop_go_eased(x: f64, downtime: f64, period: f64) -> f64 {
    let (cycle, tween) = cycle_split(x, period);
    cycle + ease_in_out_cubic(linear_step(tween, downtime, period))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn sawtooth_starts_at_zero() {
        assert_eq!(sawtooth_unit(0.0), 0.0);
        assert_eq!(sawtooth(0.0, 3.0, 7.0), 0.0);
    }

    #[test]
    fn sawtooth_peaks_at_radius() {
        assert!((sawtooth(2.5, 2.5, 4.0) - 4.0).abs() < EPS);
        assert!((sawtooth_unit(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn sawtooth_falls_back_after_peak() {
        assert!((sawtooth_unit(1.5) - 0.5).abs() < EPS);
        assert!(sawtooth_unit(1.999) < 0.01);
        // next cycle
        assert!((sawtooth_unit(2.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn sawtooth_is_symmetric() {
        for i in 0..40 {
            let x = i as f64 * 0.173;
            assert_eq!(sawtooth(x, 1.3, 2.0), sawtooth(-x, 1.3, 2.0));
        }
    }

    #[test]
    fn sawtooth_bounded_by_height() {
        for i in 0..500 {
            let y = sawtooth(i as f64 * 0.031, 0.7, 3.0);
            assert!((0.0..=3.0 + EPS).contains(&y), "out of range: {}", y);
        }
    }

    #[test]
    fn stop_go_holds_then_ramps() {
        assert_eq!(stop_go(0.0, 2.0, 4.0), 0.0);
        assert_eq!(stop_go(1.5, 2.0, 4.0), 0.0);
        assert!((stop_go(3.0, 2.0, 4.0) - 0.5).abs() < EPS);
        assert!((stop_go(4.0, 2.0, 4.0) - 1.0).abs() < EPS);
        assert!((stop_go(7.0, 2.0, 4.0) - 1.5).abs() < EPS);
    }

    #[test]
    fn stop_go_is_continuous_across_cycle_boundary() {
        let below = stop_go(4.0 - 1e-9, 2.0, 4.0);
        let above = stop_go(4.0 + 1e-9, 2.0, 4.0);
        assert!((above - below).abs() < 1e-6, "jump: {} -> {}", below, above);
    }

    #[test]
    fn stop_go_is_monotonic() {
        let mut prev = stop_go(0.0, 1.0, 3.0);
        for i in 1..2000 {
            let y = stop_go(i as f64 * 0.005, 1.0, 3.0);
            assert!(y + EPS >= prev, "decreased at {}: {} < {}", i, y, prev);
            prev = y;
        }
    }

    #[test]
    fn stop_go_eased_matches_composition() {
        for &x in &[0.0_f64, 1.0, 2.0, 2.5, 3.0, 3.75, 5.0, 6.2, 11.9] {
            let (d, p): (f64, f64) = (2.0, 4.0);
            let expected = (x / p).floor() + ease_in_out_cubic(linear_step(x % p, d, p));
            assert!((stop_go_eased(x, d, p) - expected).abs() < EPS, "x = {}", x);
        }
        assert_eq!(stop_go_eased(0.0, 2.0, 4.0), 0.0);
        assert!(
            (stop_go_eased(3.0, 2.0, 4.0) - ease_in_out_cubic(linear_step(3.0, 2.0, 4.0))).abs()
                < EPS
        );
    }

    #[test]
    fn negative_time_counts_cycles_downwards() {
        // floor, not truncation: -1 s sits 3 s into cycle -1
        assert!((stop_go(-1.0, 2.0, 4.0) - (-1.0 + linear_step(3.0, 2.0, 4.0))).abs() < EPS);
        assert!((stop_go(-1.0, 2.0, 4.0) + 0.5).abs() < EPS);
        assert_eq!(stop_go_eased(-4.0, 2.0, 4.0), -1.0);
        assert_eq!(stop_go_eased(-3.0, 2.0, 4.0), -1.0);
    }

    #[test]
    fn monotonic_across_zero() {
        let mut prev = stop_go_eased(-8.0, 2.0, 4.0);
        for i in 1..=3200 {
            let x = -8.0 + i as f64 * 0.005;
            let y = stop_go_eased(x, 2.0, 4.0);
            assert!(y + EPS >= prev, "decreased at x = {}: {} < {}", x, y, prev);
            prev = y;
        }
        assert!((prev - 2.0).abs() < EPS);
        let below = stop_go(-1e-9, 2.0, 4.0);
        let above = stop_go(1e-9, 2.0, 4.0);
        assert!((above - below).abs() < 1e-6, "jump: {} -> {}", below, above);
    }

    #[test]
    fn stop_go_eased_sampling_scenario() {
        let samples: Vec<f64> = (0..=5).map(|x| stop_go_eased(x as f64, 2.0, 4.0)).collect();
        // downtime
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[1], 0.0);
        // eased ramp
        assert!(samples[2].abs() < EPS);
        assert!((samples[3] - 0.5).abs() < EPS);
        assert!(stop_go_eased(3.999, 2.0, 4.0) > 0.99);
        // next cycle, held at +1
        assert!((samples[4] - 1.0).abs() < EPS);
        assert!((samples[5] - 1.0).abs() < EPS);
    }

    #[test]
    fn zero_period_propagates_nan() {
        assert!(!stop_go(1.0, 0.0, 0.0).is_finite());
    }
}
