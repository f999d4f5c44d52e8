//! Seeded dealing front-end: shuffle, deal, turn the vira.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank};
use crate::deck::shuffle;
use crate::error::DealError;
use crate::rules::Ruleset;

/// Cards dealt to each player per hand.
pub const HAND_SIZE: usize = 3;

/// Deals truco hands from a seeded deck.
///
/// The dealer owns the only random state in the crate. Callers that bring
/// their own source of randomness can skip it and use [`shuffle`] and
/// [`Ruleset::derive_trump`] directly.
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Ruleset hands are dealt under.
    rules: Ruleset,
    /// Random number generator.
    rng: ChaCha8Rng,
}

/// A fully dealt hand: every card annotated under the same vira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Three cards per seated player, in deal order.
    pub hands: Vec<Vec<Card>>,
    /// The face-up card that decided the trump rank, itself annotated.
    pub vira: Card,
    /// The trump rank for this hand.
    pub trump_rank: Rank,
    /// Undealt remainder of the deck, annotated.
    pub stock: Vec<Card>,
}

impl Dealer {
    /// Creates a dealer for `rules` with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use trucors::{Dealer, Ruleset};
    ///
    /// let mut dealer = Dealer::new(Ruleset::default(), 42);
    /// let deal = dealer.deal(4).expect("four players seat a valid game");
    /// assert_eq!(deal.hands.len(), 4);
    /// ```
    #[must_use]
    pub fn new(rules: Ruleset, seed: u64) -> Self {
        Self {
            rules,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the ruleset this dealer deals under.
    #[must_use]
    pub const fn rules(&self) -> &Ruleset {
        &self.rules
    }

    /// Deals a fresh hand to `players` players.
    ///
    /// Builds and shuffles a new 40-card deck, deals three cards to each
    /// player one at a time around the table, turns the next card as the
    /// vira, and derives trump over every hand, the stock, and the vira
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns an error unless 2 to 4 players are seated.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a 40-card deck always covers four 3-card hands plus the vira"
    )]
    pub fn deal(&mut self, players: usize) -> Result<Deal, DealError> {
        if !(2..=4).contains(&players) {
            return Err(DealError::InvalidPlayerCount(players));
        }

        let deck = shuffle(&self.rules.build_deck(), &mut self.rng);
        let mut top = deck.into_iter();

        let mut hands: Vec<Vec<Card>> = alloc::vec![Vec::with_capacity(HAND_SIZE); players];
        for _ in 0..HAND_SIZE {
            for hand in &mut hands {
                if let Some(card) = top.next() {
                    hand.push(card);
                }
            }
        }

        let vira = top.next().expect("deck holds more than 13 cards");
        let stock: Vec<Card> = top.collect();
        let trump_rank = self.rules.trump_rank(vira.rank);

        Ok(Deal {
            hands: hands
                .iter()
                .map(|hand| self.rules.derive_trump(hand, vira))
                .collect(),
            vira: self.rules.derive_card(vira, trump_rank),
            trump_rank,
            stock: self.rules.derive_trump(&stock, vira),
        })
    }
}
