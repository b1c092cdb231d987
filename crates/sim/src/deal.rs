// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A dealt hand and its showdown.
use serde::{Deserialize, Serialize};

use showdown_cards::{Card, Deck, Rank, StartingPair, Suit};
use showdown_eval::HandRating;

/// A player result at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player has the best hand or is tied for the best hand.
    Win,
    /// Some other player has a better hand.
    Loss,
}

/// The community cards and the hole cards of each player.
///
/// The hole cards and ratings buffers are reused when dealing a new hand
/// from a deck so that a simulation loop doesn't allocate.
#[derive(Debug, Clone)]
pub struct Deal {
    board: [Card; 5],
    holes: Vec<[Card; 2]>,
    ratings: Vec<HandRating>,
}

impl Deal {
    /// Creates a deal with the given community and hole cards.
    ///
    /// Panics if a card is used more than once.
    pub fn new(board: [Card; 5], holes: Vec<[Card; 2]>) -> Self {
        let mut seen = 0u64;
        for card in board.iter().chain(holes.iter().flatten()) {
            let bit = 1u64 << card.id();
            assert!(seen & bit == 0, "Duplicate card {card} in deal");
            seen |= bit;
        }

        let ratings = Vec::with_capacity(holes.len());
        Self {
            board,
            holes,
            ratings,
        }
    }

    /// Deals the community cards followed by two cards for each player.
    ///
    /// Panics if the deck doesn't have enough cards.
    pub fn from_deck(deck: &mut Deck, players: usize) -> Self {
        let mut deal = Self {
            board: [Card::new(Rank::Deuce, Suit::Clubs); 5],
            holes: Vec::with_capacity(players),
            ratings: Vec::with_capacity(players),
        };

        deal.redeal(deck, players);
        deal
    }

    /// Replaces the cards of this deal with new cards from the deck.
    ///
    /// Panics if the deck doesn't have enough cards.
    pub fn redeal(&mut self, deck: &mut Deck, players: usize) {
        for card in self.board.iter_mut() {
            *card = deck.deal();
        }

        self.holes.clear();
        for _ in 0..players {
            self.holes.push(deck.deal_pair());
        }
    }

    /// The community cards.
    pub fn board(&self) -> &[Card; 5] {
        &self.board
    }

    /// The hole cards for each player.
    pub fn holes(&self) -> &[[Card; 2]] {
        &self.holes
    }

    /// Rates each player hand and returns each player starting hand and its
    /// showdown outcome in player order.
    ///
    /// All players tied for the best hand win.
    pub fn showdown(&mut self) -> impl Iterator<Item = (StartingPair, Outcome)> + '_ {
        let mut hand = [self.board[0]; 7];
        hand[..5].copy_from_slice(&self.board);

        self.ratings.clear();
        for hole in &self.holes {
            hand[5..].copy_from_slice(hole);
            self.ratings.push(HandRating::best_five(&hand));
        }

        let best = self.ratings.iter().max().copied();
        self.holes
            .iter()
            .zip(&self.ratings)
            .map(move |(hole, rating)| {
                let outcome = if best.is_some_and(|best| *rating >= best) {
                    Outcome::Win
                } else {
                    Outcome::Loss
                };

                (StartingPair::new(hole[0], hole[1]), outcome)
            })
    }

    /// The ratings computed by the last showdown.
    pub fn ratings(&self) -> &[HandRating] {
        &self.ratings
    }
}
