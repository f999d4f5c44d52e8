//! Stake level for the hand being played.

/// The points at stake for the current hand.
///
/// Hands start at one point and escalate truco (3), six, nine, twelve as
/// players raise. Who may raise, accept, or run is table orchestration and
/// lives outside this crate; this type only carries the current level as
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StakeLevel {
    /// Plain hand, one point.
    #[default]
    One,
    /// Truco called, three points.
    Three,
    /// Raised to six.
    Six,
    /// Raised to nine.
    Nine,
    /// Raised to twelve.
    Twelve,
}

impl StakeLevel {
    /// Returns the points the hand is worth at this level.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Nine => 9,
            Self::Twelve => 12,
        }
    }

    /// Returns the next level in the 1, 3, 6, 9, 12 progression, or `None`
    /// once the hand is already worth twelve.
    #[must_use]
    pub const fn raised(self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Three),
            Self::Three => Some(Self::Six),
            Self::Six => Some(Self::Nine),
            Self::Nine => Some(Self::Twelve),
            Self::Twelve => None,
        }
    }
}
