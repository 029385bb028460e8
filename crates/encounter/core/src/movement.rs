//! Movement pattern selection and geometry while chasing.

use strum::{EnumIter, IntoStaticStr};

use crate::animation::Clip;
use crate::config::MovementConfig;
use crate::math::Vec3;
use crate::phase::{Phase, SpeedProfile};
use crate::rng::RandomSource;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MovementPattern {
    #[default]
    Approach,
    StrafeLeft,
    StrafeRight,
    Backpedal,
}

impl MovementPattern {
    /// Draws the next pattern.
    ///
    /// One roll `r` decides: `r < strafe_chance` strafes (coin flip for the
    /// side), the next `backpedal_margin` band backpedals from phase 2 on,
    /// anything else approaches.
    pub fn select(rng: &mut dyn RandomSource, phase: Phase, config: &MovementConfig) -> Self {
        if !config.use_dynamic_movement {
            return Self::Approach;
        }

        let roll = rng.unit();
        if roll < config.strafe_chance {
            if rng.coin() {
                Self::StrafeLeft
            } else {
                Self::StrafeRight
            }
        } else if roll < config.strafe_chance + config.backpedal_margin && phase >= Phase::Two {
            Self::Backpedal
        } else {
            Self::Approach
        }
    }

    pub const fn clip(self) -> Clip {
        match self {
            Self::Approach => Clip::Run,
            Self::StrafeLeft => Clip::StrafeLeft,
            Self::StrafeRight => Clip::StrafeRight,
            Self::Backpedal => Clip::WalkBack,
        }
    }

    pub fn speed(self, speeds: &SpeedProfile) -> f32 {
        match self {
            Self::Approach => speeds.run,
            Self::StrafeLeft | Self::StrafeRight => speeds.strafe,
            Self::Backpedal => speeds.walk,
        }
    }

    /// Whether the destination follows the target every tick.
    pub const fn tracks_target(self) -> bool {
        matches!(self, Self::Approach)
    }

    /// Point the agent should head for.
    ///
    /// Strafe and backpedal offsets are measured on the horizontal plane
    /// from the boss, relative to the boss-to-target heading.
    pub fn destination(self, boss: Vec3, target: Vec3, config: &MovementConfig) -> Vec3 {
        let heading = boss.heading_to(target);
        match self {
            Self::Approach => target,
            Self::StrafeLeft => boss + heading.cross(Vec3::UP) * config.strafe_distance,
            Self::StrafeRight => boss + Vec3::UP.cross(heading) * config.strafe_distance,
            Self::Backpedal => boss - heading * config.backpedal_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn roll_bands_select_patterns() {
        let config = MovementConfig::default();
        let mut rng = ScriptedRandom::new([0.1, 0.2]);
        assert_eq!(
            MovementPattern::select(&mut rng, Phase::One, &config),
            MovementPattern::StrafeLeft
        );

        let mut rng = ScriptedRandom::new([0.1, 0.7]);
        assert_eq!(
            MovementPattern::select(&mut rng, Phase::One, &config),
            MovementPattern::StrafeRight
        );

        let mut rng = ScriptedRandom::new([0.35]);
        assert_eq!(
            MovementPattern::select(&mut rng, Phase::Two, &config),
            MovementPattern::Backpedal
        );

        let mut rng = ScriptedRandom::new([0.9]);
        assert_eq!(
            MovementPattern::select(&mut rng, Phase::Two, &config),
            MovementPattern::Approach
        );
    }

    #[test]
    fn backpedal_needs_phase_two() {
        let config = MovementConfig::default();
        let mut rng = ScriptedRandom::new([0.35]);
        assert_eq!(
            MovementPattern::select(&mut rng, Phase::One, &config),
            MovementPattern::Approach
        );
    }

    #[test]
    fn static_movement_always_approaches() {
        let config = MovementConfig {
            use_dynamic_movement: false,
            ..MovementConfig::default()
        };
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(
            MovementPattern::select(&mut rng, Phase::Three, &config),
            MovementPattern::Approach
        );
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn destinations_are_perpendicular_or_opposite() {
        let config = MovementConfig::default();
        let boss = Vec3::new(0.0, 1.0, 0.0);
        let target = Vec3::new(0.0, 0.0, 10.0);

        let left = MovementPattern::StrafeLeft.destination(boss, target, &config);
        let right = MovementPattern::StrafeRight.destination(boss, target, &config);
        let back = MovementPattern::Backpedal.destination(boss, target, &config);

        assert!(approx(left, Vec3::new(-5.0, 1.0, 0.0)));
        assert!(approx(right, Vec3::new(5.0, 1.0, 0.0)));
        assert!(approx(back, Vec3::new(0.0, 1.0, -5.0)));
        assert_eq!(
            MovementPattern::Approach.destination(boss, target, &config),
            target
        );
    }

    #[test]
    fn each_pattern_has_its_own_speed_and_clip() {
        let speeds = SpeedProfile {
            walk: 1.0,
            run: 3.0,
            strafe: 2.0,
        };
        assert_eq!(MovementPattern::Approach.speed(&speeds), 3.0);
        assert_eq!(MovementPattern::StrafeLeft.speed(&speeds), 2.0);
        assert_eq!(MovementPattern::Backpedal.speed(&speeds), 1.0);
        assert_eq!(MovementPattern::Backpedal.clip(), Clip::WalkBack);
    }
}
