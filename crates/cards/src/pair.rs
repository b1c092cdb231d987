// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Rank};

/// A starting hand key.
///
/// All two cards holdings with the same ranks and that are either suited or
/// offsuit map to the same key, the suits themselves are discarded. The high
/// rank is always greater or equal to the low rank so the key doesn't depend
/// on the order the cards were dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StartingPair {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl StartingPair {
    /// Number of distinct starting hands: 13 pairs, 78 suited, 78 offsuit.
    pub const COUNT: usize = 169;

    /// Creates the key for the hole cards `a` and `b`.
    pub fn new(a: Card, b: Card) -> Self {
        let (high, low) = if a.rank() >= b.rank() {
            (a.rank(), b.rank())
        } else {
            (b.rank(), a.rank())
        };

        Self {
            high,
            low,
            suited: a.suit() == b.suit(),
        }
    }

    /// The higher rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lower rank.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// Checks if the two cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// Checks if the two cards have the same rank.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Number of two cards holdings that map to this key.
    pub fn combos(&self) -> usize {
        if self.is_pair() {
            6
        } else if self.suited {
            4
        } else {
            12
        }
    }

    /// Returns all the starting hands.
    ///
    /// Keys are returned in chart order: one row per rank from ace down with
    /// suited hands above the diagonal, pairs on it, and offsuit below.
    pub fn all() -> impl Iterator<Item = StartingPair> {
        Rank::ranks().rev().flat_map(|r1| {
            Rank::ranks().rev().map(move |r2| {
                if r1 > r2 {
                    Self {
                        high: r1,
                        low: r2,
                        suited: true,
                    }
                } else {
                    Self {
                        high: r2,
                        low: r1,
                        suited: false,
                    }
                }
            })
        })
    }
}

impl fmt::Display for StartingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pair() {
            write!(f, "{}{}", self.high, self.low)
        } else if self.suited {
            write!(f, "{}{}s", self.high, self.low)
        } else {
            write!(f, "{}{}o", self.high, self.low)
        }
    }
}
