//! Trump (manilha) derivation.
//!
//! Turning the vira decides which rank is trump for the hand. Strength is
//! not intrinsic to a card: every derived field is rewritten here, and only
//! here, so there is no stale state to carry between hands.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::rules::Ruleset;

impl Ruleset {
    /// Returns the trump rank for a hand whose vira has the given rank.
    ///
    /// The trump rank is the vira's successor along the baseline ladder,
    /// wrapping from the strongest rank back to the weakest: a King vira
    /// makes Aces trump, and a 3 vira makes 4s trump.
    #[must_use]
    pub fn trump_rank(&self, vira: Rank) -> Rank {
        let at = self
            .rank_ladder
            .iter()
            .position(|&rank| rank == vira)
            .unwrap_or(0);
        self.rank_ladder[(at + 1) % self.rank_ladder.len()]
    }

    /// Returns `card` with its derived fields rewritten for the given trump
    /// rank.
    ///
    /// Plain cards get their baseline ladder strength. Manilhas get a
    /// strength above every baseline value, descending along the trump suit
    /// order, so the four manilhas beat every plain card and never tie with
    /// each other.
    #[must_use]
    pub fn derive_card(&self, card: Card, trump: Rank) -> Card {
        let is_trump = card.rank == trump;
        let strength = if is_trump {
            self.trump_strength(card.suit)
        } else {
            self.baseline_strength(card.rank)
        };
        card.annotated(is_trump, strength, Some(trump))
    }

    /// Re-derives every card in `deck` for the hand determined by `vira`.
    ///
    /// Idempotent: deriving twice under the same vira yields the same deck,
    /// and deriving under a new vira fully overwrites the previous
    /// annotation. The vira itself is not part of the returned deck; pass it
    /// through [`Ruleset::derive_card`] if its derived fields will be
    /// inspected.
    #[must_use]
    pub fn derive_trump(&self, deck: &[Card], vira: Card) -> Vec<Card> {
        let trump = self.trump_rank(vira.rank);
        deck.iter()
            .map(|&card| self.derive_card(card, trump))
            .collect()
    }

    /// Strength of the manilha of `suit`: above the whole baseline range,
    /// highest for the strongest suit in the trump suit order.
    fn trump_strength(&self, suit: Suit) -> u8 {
        let at = self
            .trump_suits
            .iter()
            .position(|&s| s == suit)
            .unwrap_or(self.trump_suits.len() - 1);
        let baseline_max = self.rank_ladder.len() as u8;
        baseline_max + (self.trump_suits.len() - at) as u8
    }
}
