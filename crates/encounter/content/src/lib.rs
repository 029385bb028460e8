//! Data-driven boss tunables.
//!
//! This crate ships the bundled boss presets and the loaders that turn
//! TOML/RON content files into a validated [`encounter_core::BossConfig`].
//! Files only list the values they change; everything else keeps the
//! defaults documented on the config types.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigFormat, ConfigLoader, LoadResult, Preset};
