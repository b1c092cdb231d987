// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand out of six or seven cards.
use showdown_cards::combinations::for_each_ksubset;

use crate::{Card, HandRating};

/// Generates the 21 five cards subsets of a seven cards hand in lexicographic
/// order.
const fn seven_choose_five() -> [[usize; 5]; 21] {
    let mut table = [[0usize; 5]; 21];
    let mut subset = [0, 1, 2, 3, 4];
    let mut n = 0;

    loop {
        table[n] = subset;
        n += 1;

        if n == table.len() {
            break;
        }

        // Find the rightmost position that can still move right.
        let mut i = 4;
        while subset[i] == i + 2 {
            i -= 1;
        }

        subset[i] += 1;

        let mut j = i + 1;
        while j < 5 {
            subset[j] = subset[j - 1] + 1;
            j += 1;
        }
    }

    table
}

/// The positions of the five cards subsets of a seven cards hand.
pub const SEVEN_CHOOSE_FIVE: [[usize; 5]; 21] = seven_choose_five();

impl HandRating {
    /// Returns the rating of the best five cards out of a seven cards hand.
    ///
    /// Panics if the hand doesn't have exactly seven cards.
    pub fn best_five(cards: &[Card]) -> HandRating {
        assert_eq!(cards.len(), 7, "Best five needs 7 cards got {}", cards.len());

        let mut hand = [cards[0]; 5];
        let mut subset_rating = |subset: &[usize; 5]| {
            for (slot, &pos) in hand.iter_mut().zip(subset) {
                *slot = cards[pos];
            }

            HandRating::rate(&hand)
        };

        let mut best = subset_rating(&SEVEN_CHOOSE_FIVE[0]);
        for subset in &SEVEN_CHOOSE_FIVE[1..] {
            let rating = subset_rating(subset);
            if rating > best {
                best = rating;
            }
        }

        best
    }

    /// Evaluates a 5, 6, or 7 cards hand and returns the best five cards rating.
    ///
    /// Panics if the hand has less than 5 or more than 7 cards.
    pub fn eval(cards: &[Card]) -> HandRating {
        match cards.len() {
            5 => HandRating::rate(cards),
            7 => HandRating::best_five(cards),
            6 => {
                let mut hand = [cards[0]; 5];
                let mut best = None;

                for_each_ksubset(cards.len(), 5, |subset| {
                    for (slot, &pos) in hand.iter_mut().zip(subset) {
                        *slot = cards[pos];
                    }

                    let rating = HandRating::rate(&hand);
                    if best.is_none_or(|b| rating > b) {
                        best = Some(rating);
                    }
                });

                best.unwrap_or_else(|| unreachable!("Six cards have five cards subsets"))
            }
            n => panic!("Eval needs 5 to 7 cards got {n}"),
        }
    }
}
