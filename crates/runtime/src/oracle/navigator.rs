use serde::{Deserialize, Serialize};

use encounter_core::{NavigationOracle, Vec3};

/// Circular walkable floor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec3,
    pub radius: f32,
}

impl Arena {
    /// Slack for points clamped onto the edge.
    const EDGE_TOLERANCE: f32 = 1e-4;

    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Horizontal containment; height is ignored.
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).flat().length() <= self.radius + Self::EDGE_TOLERANCE
    }

    /// Nearest point on the floor, keeping the height of `point`.
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        let offset = (point - self.center).flat();
        if offset.length() <= self.radius + Self::EDGE_TOLERANCE {
            return point;
        }
        let edge = self.center + offset.normalize_or_zero() * self.radius;
        edge.with_y(point.y)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 30.0)
    }
}

/// In-memory navigation agent that walks straight lines inside an [`Arena`].
#[derive(Clone, Debug)]
pub struct ArenaNavigator {
    arena: Arena,
    position: Vec3,
    destination: Option<Vec3>,
    velocity: Vec3,
    speed: f32,
    facing: Vec3,
    halted: bool,
    disabled: bool,
    collision: bool,
    warps: u32,
}

impl ArenaNavigator {
    pub fn new(arena: Arena, spawn: Vec3, speed: f32) -> Self {
        Self {
            arena,
            position: arena.clamp(spawn),
            destination: None,
            velocity: Vec3::ZERO,
            speed,
            facing: Vec3::FORWARD,
            halted: false,
            disabled: false,
            collision: true,
            warps: 0,
        }
    }

    /// Moves toward the destination for `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.velocity = Vec3::ZERO;
        if self.halted || self.disabled {
            return;
        }
        let Some(destination) = self.destination else {
            return;
        };

        let offset = (destination - self.position).flat();
        let remaining = offset.length();
        if remaining <= 1e-3 {
            return;
        }
        let direction = offset.normalize_or_zero();
        let travel = (self.speed * dt).min(remaining);
        self.position = self.arena.clamp(self.position + direction * travel);
        self.velocity = direction * self.speed;
        self.facing = direction;
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    pub fn warps(&self) -> u32 {
        self.warps
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn collision_enabled(&self) -> bool {
        self.collision
    }
}

impl NavigationOracle for ArenaNavigator {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_destination(&mut self, point: Vec3) {
        if self.disabled {
            return;
        }
        self.destination = Some(self.arena.clamp(point));
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn is_path_pending(&self) -> bool {
        false
    }

    fn halt(&mut self) {
        self.halted = true;
    }

    fn resume(&mut self) {
        self.halted = false;
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn sample_navigable_point(&self, near: Vec3, radius: f32) -> Option<Vec3> {
        let clamped = self.arena.clamp(near);
        (clamped.distance(near) <= radius).then_some(clamped)
    }

    fn warp(&mut self, point: Vec3) {
        self.position = self.arena.clamp(point);
        self.destination = None;
        self.warps += 1;
    }

    fn face(&mut self, direction: Vec3) {
        let flat = direction.flat().normalize_or_zero();
        if flat != Vec3::ZERO {
            self.facing = flat;
        }
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision = enabled;
    }

    fn disable(&mut self) {
        self.disabled = true;
        self.destination = None;
    }
}
