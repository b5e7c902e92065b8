//! Dice-related types and components
//!
//! This module contains the placed die marker, the random roll draw and the
//! rotate-by animation state applied to a die after a roll.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Fewest quarter-turns a roll may apply about one axis.
pub const MIN_QUARTER_TURNS: u32 = 1;
/// Most quarter-turns a roll may apply about one axis.
pub const MAX_QUARTER_TURNS: u32 = 4;

/// Marker component attached to each placed die entity
#[derive(Component)]
pub struct PlacedDie;

/// Tunables for the roll animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollSettings {
    /// Multiplies the drawn angle so the die visibly spins before landing.
    #[serde(default = "default_spin_multiplier")]
    pub spin_multiplier: f32,

    #[serde(default = "default_roll_duration_secs")]
    pub duration_secs: f32,
}

fn default_spin_multiplier() -> f32 {
    5.0
}

fn default_roll_duration_secs() -> f32 {
    0.5
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            spin_multiplier: default_spin_multiplier(),
            duration_secs: default_roll_duration_secs(),
        }
    }
}

/// One random roll: quarter-turn counts about X and Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollRotation {
    pub quarter_turns_x: u32,
    pub quarter_turns_z: u32,
    pub spin_multiplier: f32,
}

impl RollRotation {
    /// Draw both axes independently and uniformly from `[1, 4]`.
    pub fn random(rng: &mut impl Rng, spin_multiplier: f32) -> Self {
        Self {
            quarter_turns_x: rng.gen_range(MIN_QUARTER_TURNS..=MAX_QUARTER_TURNS),
            quarter_turns_z: rng.gen_range(MIN_QUARTER_TURNS..=MAX_QUARTER_TURNS),
            spin_multiplier,
        }
    }

    pub fn angle_x(&self) -> f32 {
        self.quarter_turns_x as f32 * FRAC_PI_2 * self.spin_multiplier
    }

    pub fn angle_z(&self) -> f32 {
        self.quarter_turns_z as f32 * FRAC_PI_2 * self.spin_multiplier
    }
}

/// In-flight rotate-by animation.
///
/// `start` is captured on the first animated frame. A roll that replaces an
/// unfinished one starts from where the replaced roll would have landed, so
/// rotations compose and the die always rests on a face.
#[derive(Component, Debug, Clone)]
pub struct RollAnimation {
    pub angle_x: f32,
    pub angle_z: f32,
    pub duration: f32,
    pub elapsed: f32,
    pub start: Option<Quat>,
    /// Rotation owed by replaced rolls that never got a frame.
    pub carried: Quat,
}

impl RollAnimation {
    pub fn new(rotation: RollRotation, duration: f32) -> Self {
        Self {
            angle_x: rotation.angle_x(),
            angle_z: rotation.angle_z(),
            duration,
            elapsed: 0.0,
            start: None,
            carried: Quat::IDENTITY,
        }
    }

    /// Take over from an unfinished roll on the same die.
    pub fn replacing(mut self, previous: &RollAnimation) -> Self {
        match previous.start {
            Some(start) => self.start = Some(previous.orientation_at(start, 1.0)),
            None => self.carried = (previous.delta(1.0) * previous.carried).normalize(),
        }
        self
    }

    /// Start orientation, captured from `current` on the first call.
    pub fn start_from(&mut self, current: Quat) -> Quat {
        let carried = self.carried;
        *self
            .start
            .get_or_insert_with(|| (carried * current).normalize())
    }

    fn delta(&self, progress: f32) -> Quat {
        Quat::from_rotation_x(self.angle_x * progress)
            * Quat::from_rotation_z(self.angle_z * progress)
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Orientation after rotating `start` by the given fraction of both angles.
    pub fn orientation_at(&self, start: Quat, progress: f32) -> Quat {
        (self.delta(progress) * start).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_rotation_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_x = [false; 4];
        let mut seen_z = [false; 4];

        for _ in 0..2000 {
            let roll = RollRotation::random(&mut rng, 5.0);
            assert!((MIN_QUARTER_TURNS..=MAX_QUARTER_TURNS).contains(&roll.quarter_turns_x));
            assert!((MIN_QUARTER_TURNS..=MAX_QUARTER_TURNS).contains(&roll.quarter_turns_z));
            seen_x[(roll.quarter_turns_x - 1) as usize] = true;
            seen_z[(roll.quarter_turns_z - 1) as usize] = true;
        }

        // Both ends of the range are reachable.
        assert!(seen_x.iter().all(|s| *s));
        assert!(seen_z.iter().all(|s| *s));
    }

    #[test]
    fn test_roll_angles_include_spin_multiplier() {
        let roll = RollRotation {
            quarter_turns_x: 2,
            quarter_turns_z: 4,
            spin_multiplier: 5.0,
        };
        assert!((roll.angle_x() - std::f32::consts::PI * 5.0).abs() < 1e-4);
        assert!((roll.angle_z() - std::f32::consts::TAU * 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_roll_settings_default() {
        let settings = RollSettings::default();
        assert_eq!(settings.spin_multiplier, 5.0);
        assert_eq!(settings.duration_secs, 0.5);
    }

    #[test]
    fn test_roll_animation_progress() {
        let roll = RollRotation {
            quarter_turns_x: 1,
            quarter_turns_z: 1,
            spin_multiplier: 1.0,
        };
        let mut anim = RollAnimation::new(roll, 0.5);
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_finished());

        anim.elapsed = 0.25;
        assert!((anim.progress() - 0.5).abs() < 1e-6);

        anim.elapsed = 0.75;
        assert_eq!(anim.progress(), 1.0);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_roll_animation_zero_duration_finishes_immediately() {
        let roll = RollRotation {
            quarter_turns_x: 3,
            quarter_turns_z: 2,
            spin_multiplier: 5.0,
        };
        let anim = RollAnimation::new(roll, 0.0);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_orientation_at_endpoints() {
        let roll = RollRotation {
            quarter_turns_x: 1,
            quarter_turns_z: 0,
            spin_multiplier: 1.0,
        };
        let anim = RollAnimation::new(roll, 0.5);
        let start = Quat::IDENTITY;

        let begin = anim.orientation_at(start, 0.0);
        assert!(begin.abs_diff_eq(start, 1e-5));

        // A quarter turn about X maps +Y onto +Z.
        let end = anim.orientation_at(start, 1.0);
        let up = end * Vec3::Y;
        assert!(up.abs_diff_eq(Vec3::Z, 1e-5));
    }

    /// Every basis axis lands on a (signed) basis axis.
    fn is_face_aligned(rotation: Quat) -> bool {
        [Vec3::X, Vec3::Y, Vec3::Z].iter().all(|axis| {
            let v = rotation * *axis;
            let a = v.abs();
            let max = a.max_element();
            (max - 1.0).abs() < 1e-3 && (a.x + a.y + a.z - 1.0).abs() < 1e-3
        })
    }

    fn roll(x: u32, z: u32) -> RollRotation {
        RollRotation {
            quarter_turns_x: x,
            quarter_turns_z: z,
            spin_multiplier: 5.0,
        }
    }

    #[test]
    fn test_reroll_mid_flight_lands_on_a_face() {
        let mut first = RollAnimation::new(roll(1, 1), 0.5);
        let start = first.start_from(Quat::IDENTITY);
        first.elapsed = 0.25;

        // Half way through the die is tilted off every face.
        assert!(!is_face_aligned(first.orientation_at(start, first.progress())));

        let mut second = RollAnimation::new(roll(3, 2), 0.5).replacing(&first);
        let second_start = second.start_from(first.orientation_at(start, first.progress()));
        assert!(is_face_aligned(second_start));
        assert!(is_face_aligned(second.orientation_at(second_start, 1.0)));
    }

    #[test]
    fn test_reroll_before_first_frame_keeps_both_rotations() {
        let current = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let first = RollAnimation::new(roll(1, 2), 0.5);
        let mut second = RollAnimation::new(roll(2, 1), 0.5).replacing(&first);

        let start = second.start_from(current);
        let expected = first.orientation_at(current, 1.0);
        assert!(start.abs_diff_eq(expected, 1e-4) || start.abs_diff_eq(-expected, 1e-4));
        assert!(is_face_aligned(second.orientation_at(start, 1.0)));

        // Captured once.
        assert_eq!(second.start_from(Quat::IDENTITY), start);
    }
}
