// anim/crystal.rs
//
// The floating crystal in the diorama: pulsing glow, gentle bob,
// and a held-then-eased full turn every cycle.

use std::f64::consts::TAU;

use super::wave::stop_go_eased;

/// Seconds the crystal holds still at the start of each turn.
pub const CRYSTAL_DOWNTIME: f64 = 2.0;
/// Length of one turn cycle in seconds.
pub const CRYSTAL_PERIOD: f64 = 4.0;
/// Resting height above the floor.
pub const CRYSTAL_BASE_Y: f64 = 0.7;
/// Vertical bob amplitude.
pub const CRYSTAL_BOB: f64 = 0.05;

/// Animated parameters applied to the crystal mesh each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystalPose {
    /// Material emissive intensity in [0, 1].
    pub emissive_intensity: f64,
    pub position_y: f64,
    /// Rotation about Y in radians (grows by 2π per cycle, not wrapped).
    pub rotation_y: f64,
}

impl Default for CrystalPose {
    fn default() -> Self {
        Self {
            emissive_intensity: 0.5,
            position_y: CRYSTAL_BASE_Y,
            rotation_y: 0.0,
        }
    }
}

impl CrystalPose {
    /// Sample the pose at `t` seconds since the scene started.
    pub fn at(t: f64) -> Self {
        Self {
            emissive_intensity: (t * 3.0).sin() * 0.5 + 0.5,
            position_y: CRYSTAL_BASE_Y + (t * 2.0).sin() * CRYSTAL_BOB,
            rotation_y: stop_go_eased(t, CRYSTAL_DOWNTIME, CRYSTAL_PERIOD) * TAU,
        }
    }

    /// Turns so far, fractional mid-ramp.
    pub fn turns(&self) -> f64 {
        self.rotation_y / TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn at_zero_matches_default() {
        let pose = CrystalPose::at(0.0);
        assert_eq!(pose, CrystalPose::default());
    }

    #[test]
    fn holds_still_during_downtime() {
        assert_eq!(CrystalPose::at(0.5).rotation_y, 0.0);
        assert_eq!(CrystalPose::at(1.9).rotation_y, 0.0);
    }

    #[test]
    fn half_turn_midway_through_ramp() {
        let pose = CrystalPose::at(3.0);
        assert!((pose.rotation_y - TAU / 2.0).abs() < EPS);
    }

    #[test]
    fn completes_one_turn_per_cycle() {
        assert!((CrystalPose::at(4.0).turns() - 1.0).abs() < EPS);
        assert!((CrystalPose::at(9.0).turns() - 2.0).abs() < EPS);
    }

    #[test]
    fn turns_are_fractional_mid_ramp() {
        assert!((CrystalPose::at(7.0).turns() - 1.5).abs() < EPS);
    }

    #[test]
    fn glow_and_bob_stay_in_range() {
        for i in 0..400 {
            let pose = CrystalPose::at(i as f64 * 0.05);
            assert!((0.0..=1.0).contains(&pose.emissive_intensity));
            assert!((pose.position_y - CRYSTAL_BASE_Y).abs() <= CRYSTAL_BOB + EPS);
        }
    }
}
