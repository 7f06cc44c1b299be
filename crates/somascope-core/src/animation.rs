//! Playback state machine and looping figure animation
//!
//! The animation is a single 6-second loop: the head bobs along the
//! superior axis while the torso twists gently about it, both driven by
//! the same sine phase. Pose computation is a pure function of elapsed
//! time since the playback epoch, so the loop is drift-free and
//! continuous across the wrap (sin 0 == sin 2π).

use crate::anatomy::{HEAD_REST, TORSO_REST};

/// Loop period in seconds.
pub const PERIOD_SECS: f64 = 6.0;

/// Peak head displacement along +Z from the rest position.
pub const HEAD_LIFT_AMPLITUDE: f32 = 30.0;

/// Peak torso twist about +Z, in radians.
pub const TORSO_TWIST_AMPLITUDE: f32 = 0.05;

/// Animation playback state.
///
/// `Playing` records the clock reading at the moment playback started;
/// all phase computation is relative to that epoch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Playback {
    #[default]
    Stopped,
    Playing { epoch: f64 },
}

impl Playback {
    /// Start playing with `now` as the epoch. Playing while already
    /// playing re-arms the epoch, restarting the loop.
    pub fn play(&mut self, now: f64) {
        *self = Playback::Playing { epoch: now };
    }

    /// Stop playback. A no-op when already stopped.
    pub fn stop(&mut self) {
        *self = Playback::Stopped;
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Playback::Playing { .. })
    }

    /// The pose the figure should hold at clock reading `now`.
    pub fn pose(&self, now: f64) -> FigurePose {
        match *self {
            Playback::Stopped => rest_pose(),
            Playback::Playing { epoch } => pose_at(now - epoch),
        }
    }
}

/// Computed pose for the head/torso proxy pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigurePose {
    pub head_position: [f32; 3],
    pub torso_position: [f32; 3],
    /// Torso rotation about the superior (+Z) axis, radians.
    pub torso_twist: f32,
}

/// Phase in [0, 2π) for a given elapsed time, wrapping every period.
pub fn phase_at(elapsed: f64) -> f32 {
    let cycle = elapsed.rem_euclid(PERIOD_SECS) / PERIOD_SECS;
    (cycle * std::f64::consts::TAU) as f32
}

/// Pose after `elapsed` seconds of playback.
pub fn pose_at(elapsed: f64) -> FigurePose {
    let s = phase_at(elapsed).sin();
    FigurePose {
        head_position: [
            HEAD_REST[0],
            HEAD_REST[1],
            HEAD_REST[2] + HEAD_LIFT_AMPLITUDE * s,
        ],
        torso_position: TORSO_REST,
        torso_twist: TORSO_TWIST_AMPLITUDE * s,
    }
}

/// The pose restored whenever playback stops.
pub fn rest_pose() -> FigurePose {
    FigurePose {
        head_position: HEAD_REST,
        torso_position: TORSO_REST,
        torso_twist: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pose_eq(a: FigurePose, b: FigurePose, eps: f32) {
        for i in 0..3 {
            assert!((a.head_position[i] - b.head_position[i]).abs() < eps);
            assert!((a.torso_position[i] - b.torso_position[i]).abs() < eps);
        }
        assert!((a.torso_twist - b.torso_twist).abs() < eps);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut playback = Playback::default();
        assert!(!playback.is_playing());

        playback.stop();
        assert_eq!(playback, Playback::Stopped);
        assert_pose_eq(playback.pose(123.4), rest_pose(), 0.0);
    }

    #[test]
    fn test_play_rearms_epoch() {
        let mut playback = Playback::default();
        playback.play(1.0);
        assert_eq!(playback, Playback::Playing { epoch: 1.0 });

        // Play while already playing restarts the loop.
        playback.play(4.0);
        assert_eq!(playback, Playback::Playing { epoch: 4.0 });
        assert_pose_eq(playback.pose(4.0), pose_at(0.0), 1e-6);
    }

    #[test]
    fn test_pose_is_periodic() {
        for t in [0.0, 0.7, 1.5, 2.9, 5.999] {
            for k in [1, 2, 7] {
                let wrapped = t + PERIOD_SECS * k as f64;
                assert_pose_eq(pose_at(t), pose_at(wrapped), 1e-4);
            }
        }
    }

    #[test]
    fn test_pose_is_continuous_at_wrap() {
        let eps = 1e-6;
        let before = pose_at(PERIOD_SECS - eps);
        let after = pose_at(PERIOD_SECS + eps);
        assert_pose_eq(before, after, 1e-3);
        assert_pose_eq(pose_at(PERIOD_SECS), rest_pose(), 1e-4);
    }

    #[test]
    fn test_quarter_phase_is_peak_displacement() {
        // At t = period/4 the sine is 1: maximum head lift and twist.
        let pose = pose_at(PERIOD_SECS / 4.0);
        assert!((pose.head_position[2] - (crate::anatomy::HEAD_REST[2] + HEAD_LIFT_AMPLITUDE)).abs() < 1e-3);
        assert!((pose.torso_twist - TORSO_TWIST_AMPLITUDE).abs() < 1e-6);

        // Head never exceeds the peak anywhere in the cycle.
        for i in 0..600 {
            let t = i as f64 * 0.01;
            let z = pose_at(t).head_position[2];
            assert!(z <= crate::anatomy::HEAD_REST[2] + HEAD_LIFT_AMPLITUDE + 1e-3);
            assert!(z >= crate::anatomy::HEAD_REST[2] - HEAD_LIFT_AMPLITUDE - 1e-3);
        }
    }

    #[test]
    fn test_stop_after_play_returns_rest() {
        // End-to-end: play at t=0, check peak at t=1.5, stop, expect rest.
        let mut playback = Playback::default();
        playback.play(0.0);

        let pose = playback.pose(1.5);
        assert!((pose.head_position[2] - 110.0).abs() < 1e-3);

        playback.stop();
        assert_pose_eq(playback.pose(1.5), rest_pose(), 0.0);
    }

    #[test]
    fn test_negative_elapsed_wraps() {
        // rem_euclid keeps the phase in range even for clocks that start
        // behind the epoch.
        let phase = phase_at(-1.5);
        assert!((0.0..std::f64::consts::TAU as f32).contains(&phase));
        assert_pose_eq(pose_at(-1.5), pose_at(PERIOD_SECS - 1.5), 1e-4);
    }
}
