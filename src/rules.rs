//! Ruleset configuration.

use crate::card::{Rank, Suit};

/// Rank and suit precedence tables for a truco variant.
///
/// The default value is the Truco Paulista ruleset. Regional variants with a
/// different ladder or manilha suit order substitute their own tables through
/// the builder methods without touching the derivation or resolution logic:
///
/// ```
/// use trucors::{Ruleset, Suit};
///
/// let variant = Ruleset::default()
///     .with_trump_suits([Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds]);
/// assert_eq!(variant.trump_suits[0], Suit::Spades);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruleset {
    /// Baseline rank ladder, weakest to strongest. Must mention every rank
    /// exactly once.
    pub rank_ladder: [Rank; 10],
    /// Manilha suit precedence, strongest first. Must mention every suit
    /// exactly once.
    pub trump_suits: [Suit; 4],
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            rank_ladder: [
                Rank::Four,
                Rank::Five,
                Rank::Six,
                Rank::Seven,
                Rank::Jack,
                Rank::Queen,
                Rank::King,
                Rank::Ace,
                Rank::Two,
                Rank::Three,
            ],
            trump_suits: [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds],
        }
    }
}

impl Ruleset {
    /// Sets the baseline rank ladder, weakest to strongest.
    ///
    /// # Example
    ///
    /// ```
    /// use trucors::{Rank, Ruleset};
    ///
    /// let mut ladder = Ruleset::default().rank_ladder;
    /// ladder.swap(4, 5); // queen below jack
    /// let variant = Ruleset::default().with_rank_ladder(ladder);
    /// assert_eq!(variant.rank_ladder[4], Rank::Queen);
    /// ```
    #[must_use]
    pub const fn with_rank_ladder(mut self, ladder: [Rank; 10]) -> Self {
        self.rank_ladder = ladder;
        self
    }

    /// Sets the manilha suit precedence, strongest first.
    ///
    /// # Example
    ///
    /// ```
    /// use trucors::{Ruleset, Suit};
    ///
    /// let variant = Ruleset::default()
    ///     .with_trump_suits([Suit::Hearts, Suit::Clubs, Suit::Spades, Suit::Diamonds]);
    /// assert_eq!(variant.trump_suits[0], Suit::Hearts);
    /// ```
    #[must_use]
    pub const fn with_trump_suits(mut self, suits: [Suit; 4]) -> Self {
        self.trump_suits = suits;
        self
    }

    /// Returns the baseline strength of a rank: its 1-based position in the
    /// ladder. Manilha strengths start above the top of this range.
    #[must_use]
    pub fn baseline_strength(&self, rank: Rank) -> u8 {
        self.rank_ladder
            .iter()
            .position(|&r| r == rank)
            .map_or(0, |at| at as u8 + 1)
    }
}
