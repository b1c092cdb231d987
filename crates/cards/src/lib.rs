// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [Deck] type for shuffling, dealing, and iterating cards in the deck, the
//! deck takes the random generator as a parameter so that deals can be
//! reproduced with a seeded generator:
//!
//! ```
//! # use showdown_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
//! let mut d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
//! assert_eq!(d1.deal_pair(), d2.deal_pair());
//! ```
//!
//! and the [StartingPair] key used to group two cards holdings:
//!
//! ```
//! # use showdown_cards::{Card, StartingPair};
//! let hole1 = StartingPair::new("AH".parse().unwrap(), "KH".parse().unwrap());
//! let hole2 = StartingPair::new("KS".parse().unwrap(), "AS".parse().unwrap());
//! assert_eq!(hole1, hole2);
//! assert_eq!(hole1.to_string(), "AKs");
//! ```
//!
//! To iterate through all 3 cards hands:
//!
//! ```
//! # use showdown_cards::{Deck, combinations::nck};
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, nck(52, 3));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combinations;

mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};

mod pair;
pub use pair::StartingPair;
