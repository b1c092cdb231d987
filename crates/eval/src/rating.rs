// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand rating.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash};

use crate::{Card, Rank};

/// The hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandCategory {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; 9] = {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
    };

    /// The number of kickers a rating of this category carries.
    pub const fn kickers_len(&self) -> usize {
        match self {
            HandCategory::HighCard | HandCategory::Flush => 5,
            HandCategory::Pair => 4,
            HandCategory::TwoPair | HandCategory::ThreeOfAKind => 3,
            HandCategory::FullHouse | HandCategory::FourOfAKind => 2,
            HandCategory::Straight | HandCategory::StraightFlush => 1,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "One Pair",
            HandCategory::TwoPair => "Two Pairs",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        f.write_str(s)
    }
}

/// The ranks used to break ties, most significant first.
///
/// Kickers are stored inline, slots past `len` are always set to a deuce so
/// that two kickers with the same ranks are identical.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kickers {
    ranks: [Rank; 5],
    len: u8,
}

impl Kickers {
    fn push(&mut self, rank: Rank) {
        assert!(self.len < 5, "Too many kickers");
        self.ranks[self.len as usize] = rank;
        self.len += 1;
    }

    /// The kickers ranks.
    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }

    /// The number of kickers.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Checks if there are no kickers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the kickers numeric values (2..=14).
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_slice().iter().map(Rank::value)
    }
}

impl Default for Kickers {
    fn default() -> Self {
        Self {
            ranks: [Rank::Deuce; 5],
            len: 0,
        }
    }
}

impl PartialEq for Kickers {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Kickers {}

impl PartialOrd for Kickers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kickers {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl hash::Hash for Kickers {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

/// A hand rating.
///
/// Ratings are ordered by category first and then by kickers so that a
/// greater rating is a stronger hand and two equal ratings are a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandRating {
    category: HandCategory,
    kickers: Kickers,
}

impl HandRating {
    /// Rates a five cards hand.
    ///
    /// The cards don't need to be sorted. Panics if the hand doesn't have
    /// exactly five cards.
    pub fn rate(cards: &[Card]) -> HandRating {
        assert_eq!(cards.len(), 5, "Rating needs 5 cards got {}", cards.len());

        // Ranks are in 2..=14 so they can index the counts directly.
        let mut counts = [0u8; 15];
        let mut ranks = [Rank::Deuce; 5];

        let suit = cards[0].suit();
        let mut flush = true;

        for (slot, card) in ranks.iter_mut().zip(cards) {
            *slot = card.rank();
            counts[card.rank() as usize] += 1;
            flush &= card.suit() == suit;
        }

        ranks.sort_unstable_by(|a, b| b.cmp(a));

        // The wheel A-2-3-4-5 is the only straight where the ace plays low.
        use Rank::*;
        let straight = if ranks == [Ace, Five, Four, Trey, Deuce] {
            Some(Five)
        } else if ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1) {
            Some(ranks[0])
        } else {
            None
        };

        let mut pair1 = None;
        let mut pair2 = None;
        let mut triple = None;
        let mut quadruple = None;

        for rank in Rank::ranks().rev() {
            match counts[rank as usize] {
                2 if pair1.is_none() => pair1 = Some(rank),
                2 => pair2 = Some(rank),
                3 => triple = Some(rank),
                4 => quadruple = Some(rank),
                _ => {}
            }
        }

        use HandCategory::*;
        let (category, kickers) = match (straight, quadruple, triple, pair1, pair2) {
            (Some(top), ..) if flush => (StraightFlush, build_kickers(&[top], &[])),
            (_, Some(quad), ..) => (FourOfAKind, build_kickers(&[quad], &ranks)),
            (_, _, Some(trips), Some(pair), _) => (FullHouse, build_kickers(&[trips, pair], &ranks)),
            _ if flush => (Flush, build_kickers(&[], &ranks)),
            (Some(top), ..) => (Straight, build_kickers(&[top], &[])),
            (_, _, Some(trips), ..) => (ThreeOfAKind, build_kickers(&[trips], &ranks)),
            (_, _, _, Some(high), Some(low)) => (TwoPair, build_kickers(&[high, low], &ranks)),
            (_, _, _, Some(pair), None) => (Pair, build_kickers(&[pair], &ranks)),
            _ => (HighCard, build_kickers(&[], &ranks)),
        };

        assert_eq!(
            kickers.len(),
            category.kickers_len(),
            "Invalid kickers {kickers:?} for {category}"
        );

        HandRating { category, kickers }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The ranks used to break ties between hands of the same category.
    pub fn kickers(&self) -> &[Rank] {
        self.kickers.as_slice()
    }
}

/// Builds the kickers with the primary ranks first followed by the rest of
/// the ranks in descending order.
fn build_kickers(primary: &[Rank], ranks_desc: &[Rank]) -> Kickers {
    let mut kickers = Kickers::default();
    for &rank in primary {
        kickers.push(rank);
    }

    for &rank in ranks_desc {
        if !primary.contains(&rank) {
            kickers.push(rank);
        }
    }

    kickers
}

/// Compares two ratings, a greater rating is a stronger hand.
#[inline]
pub fn compare(a: &HandRating, b: &HandRating) -> Ordering {
    a.cmp(b)
}

impl fmt::Display for HandRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (idx, rank) in self.kickers().iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rank}")?;
        }
        f.write_str(")")
    }
}
