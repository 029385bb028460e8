//! Executors for each arbiter decision.
//!
//! Every action is an `impl BossController` block working on the
//! controller's own state plus the collaborators in [`EncounterEnv`].
//! Actions that can be refused return [`ActionError`]; the caller logs the
//! refusal and the boss does nothing else this tick.
//!
//! [`EncounterEnv`]: crate::env::EncounterEnv
//! [`ActionError`]: crate::error::ActionError

mod area;
mod chase;
mod heal;
mod melee;
mod teleport;
mod transition;
