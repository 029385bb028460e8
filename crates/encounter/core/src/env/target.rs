use crate::math::Vec3;

/// The player-side opponent. Queried, never owned.
pub trait TargetOracle {
    fn position(&self) -> Vec3;

    /// Horizontal facing direction, normalized.
    fn forward(&self) -> Vec3;

    /// While active the boss does not reflect damage back.
    fn is_insta_kill_active(&self) -> bool {
        false
    }

    fn receive_damage(&mut self, amount: f32);
}
