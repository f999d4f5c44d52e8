//! A Truco Paulista rules engine with optional `no_std` support.
//!
//! The crate models the 40-card truco deck, derives the manilhas (trump
//! cards) from the face-up vira, and resolves which play takes a trick.
//! Everything around the rules, like lobbies, chat, and transport, is the
//! caller's concern.
//!
//! # Example
//!
//! ```
//! use trucors::{Dealer, Ruleset, Trick};
//!
//! let mut dealer = Dealer::new(Ruleset::default(), 42);
//! let deal = dealer.deal(2).expect("two players seat a valid game");
//!
//! let mut trick = Trick::new();
//! trick.play("p1", deal.hands[0][0]);
//! trick.play("p2", deal.hands[1][0]);
//! let winner = trick.winner().expect("two cards were played");
//! assert!(winner == "p1" || winner == "p2");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod rules;
pub mod stake;
pub mod trick;
pub mod trump;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use dealer::{Deal, Dealer, HAND_SIZE};
pub use deck::{DECK_SIZE, shuffle};
pub use error::{CardError, DealError, TrickError};
pub use rules::Ruleset;
pub use stake::StakeLevel;
pub use trick::{Play, Trick};
