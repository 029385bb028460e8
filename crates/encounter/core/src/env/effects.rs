use strum::{EnumIter, IntoStaticStr};

use crate::math::Vec3;
use crate::tint::Color;

/// One-shot visual effects the boss spawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    TeleportOrigin,
    TeleportArrival,
    Shockwave,
    Heal,
    Dodge,
    Reflect,
}

/// Visual effects and material tint.
pub trait EffectsOracle {
    fn spawn_effect(&mut self, kind: EffectKind, position: Vec3);

    /// Sets the display tint immediately.
    fn set_tint(&mut self, color: Color);

    /// Tint the material had before any effect touched it.
    fn base_tint(&self) -> Color {
        Color::WHITE
    }
}
