//! Motion clips the boss can request from the animation collaborator.

use arrayvec::ArrayVec;
use strum::{EnumCount, EnumIter, IntoStaticStr};

/// Maximum number of clips in one query set.
pub const MAX_CLIP_SET: usize = 12;

/// Fixed-capacity set of clips passed to [`AnimationOracle::is_playing_any_of`].
///
/// [`AnimationOracle::is_playing_any_of`]: crate::env::AnimationOracle::is_playing_any_of
pub type ClipSet = ArrayVec<Clip, MAX_CLIP_SET>;

/// Named motion clip.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Clip {
    #[strum(serialize = "attack1")]
    Attack1,
    #[strum(serialize = "attack2")]
    Attack2,
    #[strum(serialize = "attack3")]
    Attack3,
    #[strum(serialize = "attack4")]
    Attack4,
    #[strum(serialize = "getHit1")]
    GetHit1,
    #[strum(serialize = "getHit2")]
    GetHit2,
    #[strum(serialize = "getHit3")]
    GetHit3,
    Death1,
    Death2,
    Death3,
    Rage,
    Run,
    Idle1,
    #[strum(serialize = "walkBack")]
    WalkBack,
    StrafeLeft,
    StrafeRight,
}

impl Clip {
    pub const ATTACKS: [Clip; 4] = [Clip::Attack1, Clip::Attack2, Clip::Attack3, Clip::Attack4];
    pub const HITS: [Clip; 3] = [Clip::GetHit1, Clip::GetHit2, Clip::GetHit3];
    pub const DEATHS: [Clip; 3] = [Clip::Death1, Clip::Death2, Clip::Death3];

    /// Clips during which movement and new attacks are suppressed.
    pub fn uninterruptible() -> ClipSet {
        let mut set = ClipSet::new();
        set.extend(Self::ATTACKS);
        set.extend(Self::HITS);
        set.extend(Self::DEATHS);
        set.push(Clip::Rage);
        set
    }

    pub fn is_uninterruptible(self) -> bool {
        !self.is_locomotion()
    }

    pub const fn is_locomotion(self) -> bool {
        matches!(
            self,
            Clip::Run | Clip::Idle1 | Clip::WalkBack | Clip::StrafeLeft | Clip::StrafeRight
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn uninterruptible_set_matches_predicate() {
        let set = Clip::uninterruptible();
        for clip in Clip::iter() {
            assert_eq!(set.contains(&clip), clip.is_uninterruptible(), "{clip}");
        }
        assert_eq!(set.len(), Clip::COUNT - 5);
    }

    #[test]
    fn clip_names_match_asset_names() {
        assert_eq!(Clip::GetHit2.to_string(), "getHit2");
        assert_eq!(Clip::WalkBack.to_string(), "walkBack");
        assert_eq!(Clip::Death3.to_string(), "Death3");
    }
}
