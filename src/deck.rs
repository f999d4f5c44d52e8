//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Suit};
use crate::rules::Ruleset;

/// Number of cards in a truco deck.
pub const DECK_SIZE: usize = 40;

impl Ruleset {
    /// Builds the 40-card truco deck in canonical order.
    ///
    /// Every `(suit, rank)` combination appears exactly once. Cards start
    /// plain (no manilhas) with their baseline ladder strength; apply
    /// [`Ruleset::derive_trump`] once a vira has been turned.
    #[must_use]
    pub fn build_deck(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in self.rank_ladder {
                let strength = self.baseline_strength(rank);
                cards.push(Card::new(suit, rank).annotated(false, strength, None));
            }
        }

        cards
    }
}

/// Returns a uniformly shuffled copy of `deck`.
///
/// The input is left untouched so callers may keep the canonical order
/// around. This is the only operation in the crate that consumes
/// randomness; comparison and resolution stay deterministic.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
