// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation errors.
use thiserror::Error;

use showdown_cards::Deck;

/// Simulation configuration errors.
///
/// These are detected before running any trial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The simulation has no players.
    #[error("At least one player is needed")]
    NoPlayers,
    /// The players need more cards than there are in the deck.
    #[error("{players} players need {needed} cards but the deck has {} cards", Deck::SIZE)]
    TooManyPlayers {
        /// The number of players.
        players: usize,
        /// The number of cards dealt in each trial.
        needed: usize,
    },
    /// The parallel simulation has no tasks.
    #[error("At least one task is needed")]
    NoTasks,
}

/// Simulation result type.
pub type Result<T> = std::result::Result<T, Error>;
