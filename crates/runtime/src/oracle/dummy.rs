use serde::{Deserialize, Serialize};

use encounter_core::{GameTime, TargetOracle, Vec3};

/// Scripted opponent behavior for headless duels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSpec {
    pub max_health: f32,
    /// Distance from the arena center the player circles at.
    pub orbit_radius: f32,
    /// Radians per second; negative circles clockwise.
    pub angular_speed: f32,
    pub shot_damage: f32,
    pub fire_interval: f32,
    pub weapon_range: f32,
    /// Seconds between insta-kill power-ups; `0` disables them.
    pub insta_kill_every: f32,
    pub insta_kill_duration: f32,
    /// Shot damage multiplier while insta-kill is active.
    pub insta_kill_multiplier: f32,
}

impl Default for PlayerSpec {
    fn default() -> Self {
        Self {
            max_health: 600.0,
            orbit_radius: 12.0,
            angular_speed: 0.4,
            shot_damage: 20.0,
            fire_interval: 0.5,
            weapon_range: 25.0,
            insta_kill_every: 30.0,
            insta_kill_duration: 5.0,
            insta_kill_multiplier: 3.0,
        }
    }
}

/// The boss's target: circles the arena center and shoots on a cadence.
#[derive(Clone, Debug)]
pub struct TrainingDummy {
    spec: PlayerSpec,
    center: Vec3,
    angle: f32,
    position: Vec3,
    forward: Vec3,
    health: f32,
    received: Vec<f32>,
    next_shot: GameTime,
    insta_kill: bool,
}

impl TrainingDummy {
    pub fn new(spec: PlayerSpec, center: Vec3) -> Self {
        let position = center + Vec3::FORWARD * spec.orbit_radius;
        Self {
            health: spec.max_health,
            spec,
            center,
            angle: 0.0,
            position,
            forward: -Vec3::FORWARD,
            received: Vec::new(),
            next_shot: GameTime::ZERO,
            insta_kill: false,
        }
    }

    /// Moves along the orbit, turns toward the boss and updates the
    /// insta-kill window.
    pub fn advance(&mut self, now: GameTime, dt: f32, boss: Vec3) {
        if !self.is_alive() {
            return;
        }
        self.angle += self.spec.angular_speed * dt;
        let (sin, cos) = self.angle.sin_cos();
        self.position = self.center + Vec3::new(sin, 0.0, cos) * self.spec.orbit_radius;

        let heading = self.position.heading_to(boss);
        if heading != Vec3::ZERO {
            self.forward = heading;
        }

        let every = self.spec.insta_kill_every;
        let active = every > 0.0 && now.as_secs() % every >= every - self.spec.insta_kill_duration;
        if active != self.insta_kill {
            tracing::debug!(active, "insta-kill toggled");
            self.insta_kill = active;
        }
    }

    /// Damage of a shot fired at `now`, if the player can shoot the boss.
    pub fn try_fire(&mut self, now: GameTime, boss: Vec3) -> Option<f32> {
        if !self.is_alive() || now < self.next_shot {
            return None;
        }
        if self.position.distance(boss) > self.spec.weapon_range {
            return None;
        }
        self.next_shot = now + self.spec.fire_interval;
        let multiplier = if self.insta_kill {
            self.spec.insta_kill_multiplier
        } else {
            1.0
        };
        Some(self.spec.shot_damage * multiplier)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn damage_taken(&self) -> f32 {
        self.received.iter().sum()
    }

    pub fn hits_taken(&self) -> usize {
        self.received.len()
    }

    pub fn spec(&self) -> &PlayerSpec {
        &self.spec
    }
}

impl TargetOracle for TrainingDummy {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn is_insta_kill_active(&self) -> bool {
        self.insta_kill
    }

    fn receive_damage(&mut self, amount: f32) {
        if !self.is_alive() {
            return;
        }
        self.received.push(amount);
        self.health = (self.health - amount).max(0.0);
        tracing::debug!(amount, health = self.health, "player hit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PlayerSpec {
        PlayerSpec {
            insta_kill_every: 10.0,
            insta_kill_duration: 2.0,
            ..PlayerSpec::default()
        }
    }

    #[test]
    fn fires_on_cadence_within_range() {
        let mut dummy = TrainingDummy::new(spec(), Vec3::ZERO);
        assert_eq!(dummy.try_fire(GameTime(0.0), Vec3::ZERO), Some(20.0));
        assert_eq!(dummy.try_fire(GameTime(0.2), Vec3::ZERO), None);
        assert_eq!(dummy.try_fire(GameTime(0.5), Vec3::ZERO), Some(20.0));
        assert_eq!(
            dummy.try_fire(GameTime(1.0), Vec3::new(0.0, 0.0, -20.0)),
            None
        );
    }

    #[test]
    fn insta_kill_window_boosts_shots() {
        let mut dummy = TrainingDummy::new(spec(), Vec3::ZERO);
        dummy.advance(GameTime(8.5), 0.0, Vec3::ZERO);
        assert!(dummy.is_insta_kill_active());
        assert_eq!(dummy.try_fire(GameTime(8.5), Vec3::ZERO), Some(60.0));

        dummy.advance(GameTime(10.5), 0.0, Vec3::ZERO);
        assert!(!dummy.is_insta_kill_active());
    }

    #[test]
    fn dead_player_stops_shooting() {
        let mut dummy = TrainingDummy::new(spec(), Vec3::ZERO);
        dummy.receive_damage(1000.0);
        assert_eq!(dummy.health(), 0.0);
        assert_eq!(dummy.try_fire(GameTime(0.0), Vec3::ZERO), None);
    }
}
