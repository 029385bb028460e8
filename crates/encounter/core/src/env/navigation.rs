use crate::math::Vec3;

/// Pathfinding agent attached to the boss.
///
/// Destinations are steered along walkable terrain by the implementation;
/// the core only chooses where to go and how fast.
pub trait NavigationOracle {
    /// Current agent position.
    fn position(&self) -> Vec3;

    fn set_destination(&mut self, point: Vec3);

    fn velocity(&self) -> Vec3;

    fn is_path_pending(&self) -> bool;

    /// Stops the agent in place. Destinations are kept until resumed.
    fn halt(&mut self);

    fn resume(&mut self);

    fn is_halted(&self) -> bool;

    /// Nearest navigable point within `radius` of `near`, if any.
    fn sample_navigable_point(&self, near: Vec3, radius: f32) -> Option<Vec3>;

    /// Moves the agent instantly. `point` must already be navigable.
    fn warp(&mut self, point: Vec3);

    /// Turns the agent to look along `direction` on the horizontal plane.
    fn face(&mut self, direction: Vec3);

    fn speed(&self) -> f32;

    fn set_speed(&mut self, speed: f32);

    fn set_collision_enabled(&mut self, enabled: bool);

    /// Permanently disables the agent.
    fn disable(&mut self);
}
