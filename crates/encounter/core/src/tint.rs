//! Display tint and the long-running tint continuations.
//!
//! A [`TintChannel`] is the single owner of the boss's material color. It
//! holds at most one pulse and at most one flash; the flash overrides the
//! pulse until it is ended. Starting a pulse cancels the previous one, so two
//! effects never fight over the same color field.

use crate::config::PulseConfig;
use crate::time::GameTime;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Scales the RGB channels, keeping alpha.
    pub fn scale_rgb(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Fade from `from` to `to`, then pulse `to` between full and slightly
/// darker, forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TintPulse {
    pub from: Color,
    pub to: Color,
    pub started_at: GameTime,
    pub fade_duration: f32,
    pub magnitude: f32,
    pub frequency: f32,
}

impl TintPulse {
    pub fn new(from: Color, to: Color, started_at: GameTime, config: &PulseConfig) -> Self {
        Self {
            from,
            to,
            started_at,
            fade_duration: config.fade_duration,
            magnitude: config.magnitude,
            frequency: config.frequency,
        }
    }

    pub fn sample(&self, now: GameTime) -> Color {
        let elapsed = now.since(self.started_at);
        if elapsed < self.fade_duration {
            return self.from.lerp(self.to, elapsed / self.fade_duration);
        }
        let wave = (now.as_secs() * self.frequency).sin() * self.magnitude;
        self.to.scale_rgb(wave + (1.0 - self.magnitude))
    }
}

/// Owner of the tint field.
#[derive(Clone, Debug, Default)]
pub struct TintChannel {
    pulse: Option<TintPulse>,
    flash: Option<Color>,
    restore_pending: bool,
    last_written: Option<Color>,
}

impl TintChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new pulse, cancelling the running one.
    ///
    /// Returns `true` if a pulse was cancelled.
    pub fn start_pulse(&mut self, pulse: TintPulse) -> bool {
        let cancelled = self.pulse.replace(pulse).is_some();
        if cancelled {
            tracing::debug!("tint pulse replaced at {}", pulse.started_at);
        }
        cancelled
    }

    /// Overrides the tint with `color` until [`end_flash`](Self::end_flash).
    pub fn flash(&mut self, color: Color) {
        self.flash = Some(color);
    }

    /// Ends the flash. The pulse, or the base tint, shows again.
    pub fn end_flash(&mut self) {
        if self.flash.take().is_some() {
            self.restore_pending = true;
        }
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_some()
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    /// Last color written to the material, if any.
    pub fn current(&self) -> Option<Color> {
        self.last_written
    }

    /// Drops every running tint effect, leaving the last color in place.
    pub fn cancel_all(&mut self) {
        self.pulse = None;
        self.flash = None;
        self.restore_pending = false;
    }

    /// Color to write this frame, or `None` when nothing changed.
    pub fn frame(&mut self, now: GameTime, base: Color) -> Option<Color> {
        let desired = if let Some(color) = self.flash {
            color
        } else if let Some(pulse) = self.pulse {
            pulse.sample(now)
        } else if std::mem::take(&mut self.restore_pending) {
            base
        } else {
            return None;
        };
        self.restore_pending = false;

        if self.last_written == Some(desired) {
            return None;
        }
        self.last_written = Some(desired);
        Some(desired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse(from: Color, to: Color, at: f32) -> TintPulse {
        TintPulse::new(from, to, GameTime(at), &PulseConfig::default())
    }

    #[test]
    fn pulse_fades_then_oscillates_below_target() {
        let p = pulse(Color::WHITE, Color::RED, 0.0);
        let halfway = p.sample(GameTime(1.0));
        assert!((halfway.g - 0.5).abs() < 1e-5);

        for step in 0..100 {
            let c = p.sample(GameTime(2.0 + step as f32 * 0.05));
            assert!(c.r <= 1.0 + 1e-5 && c.r >= 0.6 - 1e-5);
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn starting_a_pulse_cancels_the_old_one() {
        let mut channel = TintChannel::new();
        assert!(!channel.start_pulse(pulse(Color::WHITE, Color::RED, 0.0)));
        assert!(channel.start_pulse(pulse(Color::RED, Color::GREEN, 5.0)));

        // Only the newest pulse drives the color.
        let color = channel.frame(GameTime(5.0), Color::WHITE).unwrap();
        assert_eq!(color, Color::RED);
    }

    #[test]
    fn flash_overrides_then_restores_base() {
        let mut channel = TintChannel::new();
        channel.flash(Color::GREEN);
        assert_eq!(channel.frame(GameTime(0.5), Color::WHITE), Some(Color::GREEN));
        assert_eq!(channel.frame(GameTime(0.6), Color::WHITE), None);

        channel.end_flash();
        assert_eq!(channel.frame(GameTime(1.0), Color::WHITE), Some(Color::WHITE));
        assert_eq!(channel.frame(GameTime(2.0), Color::WHITE), None);
    }

    #[test]
    fn flash_overrides_a_running_pulse() {
        let mut channel = TintChannel::new();
        channel.start_pulse(pulse(Color::WHITE, Color::RED, 0.0));
        channel.flash(Color::GREEN);
        assert_eq!(channel.frame(GameTime(0.1), Color::WHITE), Some(Color::GREEN));

        channel.end_flash();
        let color = channel.frame(GameTime(1.0), Color::WHITE).unwrap();
        assert!((color.g - 0.5).abs() < 1e-5);
    }
}
