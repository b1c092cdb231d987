// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. A five cards hand is
//! rated by counting its ranks into a fixed table and checking the hand
//! categories from the strongest to the weakest, the resulting [HandRating]
//! holds the hand category and the kickers used to break ties. Larger hands
//! are rated by taking the best rating of all their five cards subsets.
//!
//! To use the evaluator create a hand and compare the ratings:
//!
//! ```
//! # use showdown_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let r1 = HandRating::rate(&cards[0..5]);
//! let r2 = HandRating::rate(&cards[5..]);
//! assert!(r2 > r1);
//! assert_eq!(r2.category(), HandCategory::StraightFlush);
//! ```
//!
//! A seven cards hand is rated by the best of its 21 five cards subsets:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = ["AS", "AH", "AD", "AC", "KS", "2D", "7H"]
//!     .into_iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//! let rating = HandRating::best_five(&cards);
//! assert_eq!(rating.category(), HandCategory::FourOfAKind);
//! assert_eq!(rating.kickers(), [Rank::Ace, Rank::King]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod best;
pub use best::SEVEN_CHOOSE_FIVE;

mod rating;
pub use rating::{HandCategory, HandRating, Kickers, compare};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, StartingPair, Suit};
