// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation config.
use serde::{Deserialize, Serialize};

use showdown_cards::Deck;

use crate::{Error, Result};

/// Simulation config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The number of hands to deal.
    pub trials: u64,
    /// The number of players at the table.
    pub players: usize,
    /// The random generator seed.
    pub seed: u64,
}

impl Config {
    /// The number of community cards.
    pub const BOARD_SIZE: usize = 5;

    /// The largest number of players the deck can deal to.
    pub const MAX_PLAYERS: usize = (Deck::SIZE - Self::BOARD_SIZE) / 2;

    /// The number of cards dealt in each trial.
    pub fn cards_per_trial(&self) -> usize {
        self.players.saturating_mul(2).saturating_add(Self::BOARD_SIZE)
    }

    /// Checks that each trial can be dealt from one deck.
    pub fn validate(&self) -> Result<()> {
        if self.players == 0 {
            return Err(Error::NoPlayers);
        }

        let needed = self.cards_per_trial();
        if needed > Deck::SIZE {
            return Err(Error::TooManyPlayers {
                players: self.players,
                needed,
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 100_000,
            players: 8,
            seed: 0,
        }
    }
}
