//! Trick play records and winner resolution.

use core::cmp::Ordering;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::TrickError;

/// One entry of a trick's play record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Identifier of the player who played the card.
    pub player: String,
    /// The card as played, annotated for the current hand.
    pub card: Card,
}

impl Play {
    /// Creates a play record entry.
    #[must_use]
    pub fn new(player: impl Into<String>, card: Card) -> Self {
        Self {
            player: player.into(),
            card,
        }
    }
}

/// The ordered record of cards played in one trick.
///
/// Entries must be recorded in actual play order, not player identity
/// order: play order is what breaks ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trick {
    plays: Vec<Play>,
}

impl Trick {
    /// Creates an empty trick.
    #[must_use]
    pub const fn new() -> Self {
        Self { plays: Vec::new() }
    }

    /// Records that `player` played `card`.
    pub fn play(&mut self, player: impl Into<String>, card: Card) {
        self.plays.push(Play::new(player, card));
    }

    /// Returns the play record so far, in play order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Returns the number of cards played so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns whether no card has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Returns the player whose card takes the trick.
    ///
    /// A later play takes the trick only by comparing strictly greater than
    /// the running best, so among equally strong cards the earliest play
    /// wins. That tie policy only surfaces between plain cards of the same
    /// rank; manilhas are totally ordered.
    ///
    /// # Errors
    ///
    /// Returns an error if no card has been played, or if the played cards
    /// do not all carry the same trump derivation (mixing hands would
    /// silently mis-order the cards, so it is rejected instead).
    pub fn winner(&self) -> Result<&str, TrickError> {
        let (first, rest) = self.plays.split_first().ok_or(TrickError::Empty)?;

        if rest
            .iter()
            .any(|play| play.card.derived_trump() != first.card.derived_trump())
        {
            return Err(TrickError::StaleDerivation);
        }

        let mut best = first;
        for play in rest {
            if play.card.strength_cmp(&best.card) == Ordering::Greater {
                best = play;
            }
        }

        Ok(&best.player)
    }
}

impl From<Vec<Play>> for Trick {
    fn from(plays: Vec<Play>) -> Self {
        Self { plays }
    }
}
