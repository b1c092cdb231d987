// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::combinations::for_each_ksubset;

/// A Poker card.
///
/// A card is packed in a single byte with the rank value (2..=14) in the high
/// bits and the suit (0..=3) in the two low bits:
///
/// ```text
///   +--------+
///   |xrrrrss |
///   +--------+
///   r = rank of card (deuce=2,trey=3,...,king=13,ace=14)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        let value = self.0 >> 2;
        Rank::from_value(value).unwrap_or_else(|| panic!("Invalid rank 0x{:x}", self.0))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank part is not one of `2..9`, `T`, `J`, `Q`, `K`, `A`.
    #[error("invalid rank in card {0:?}")]
    Rank(String),
    /// The suit part is not one of `C`, `D`, `H`, `S`.
    #[error("invalid suit in card {0:?}")]
    Suit(String),
    /// The text is not a rank followed by a suit.
    #[error("invalid card {0:?}, expected rank and suit like AS or 7d")]
    Format(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(suit_char) = s.chars().last() else {
            return Err(ParseCardError::Format(s.to_string()));
        };

        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "" => return Err(ParseCardError::Format(s.to_string())),
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };

        let suit = match suit_char.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(ParseCardError::Suit(s.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks from deuce to ace.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for a numeric value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            2..=14 => Some(Self::ALL[value as usize - 2]),
            _ => None,
        }
    }

    /// The numeric value of this rank, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// All suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }
}

/// A cards Deck.
///
/// The deck always holds the 52 cards, dealing advances a pointer so that
/// cards are consumed in order without replacement.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; Deck::SIZE],
    next: usize,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles all the cards and puts back the dealt ones.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.next = 0;
    }

    /// Deals a card from the deck.
    ///
    /// Panics if all cards have been dealt.
    pub fn deal(&mut self) -> Card {
        assert!(self.next < Self::SIZE, "Deal from an empty deck");
        let card = self.cards[self.next];
        self.next += 1;
        card
    }

    /// Deals two cards from the deck.
    pub fn deal_pair(&mut self) -> [Card; 2] {
        [self.deal(), self.deal()]
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.next == Self::SIZE
    }

    /// Number of cards left in the deck.
    pub fn count(&self) -> usize {
        Self::SIZE - self.next
    }

    /// The cards left in the deck in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Calls the `f` closure for each k-cards hand of the cards left in the deck.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let cards = self.cards();
        if k > cards.len() {
            return;
        }

        let mut h = [cards[0]; 7];
        for_each_ksubset(cards.len(), k, |positions| {
            for (slot, &pos) in h.iter_mut().zip(positions) {
                *slot = cards[pos];
            }

            f(&h[..k]);
        });
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = std::array::from_fn(|i| Card::new(Rank::ALL[i % 13], Suit::ALL[i / 13]));
        Self { cards, next: 0 }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::iter::Skip<std::array::IntoIter<Card, 52>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter().skip(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::nck;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.deal();
            assert_eq!(card.id() >> 2, card.rank().value());
            assert_eq!(card.id() & 0x3, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().to_lowercase().parse::<Card>(), Ok(card));
        }

        assert_eq!("10h".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert!(matches!("1H".parse::<Card>(), Err(ParseCardError::Rank(_))));
        assert!(matches!("AX".parse::<Card>(), Err(ParseCardError::Suit(_))));
        assert!(matches!("S".parse::<Card>(), Err(ParseCardError::Format(_))));
        assert!(matches!("".parse::<Card>(), Err(ParseCardError::Format(_))));
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::from_value(12), Some(Rank::Queen));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
        assert!(Rank::ranks().zip(Rank::ranks().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn deck_default_order() {
        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(cards[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[13], Card::new(Rank::Deuce, Suit::Diamonds));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(cards, Deck::default().into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn deck_shuffle_is_seeded() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(43));
        assert_eq!(d1.cards(), d2.cards());
        assert_ne!(d1.cards(), d3.cards());

        let unique = d1.cards().iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn deck_deal() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let top = deck.cards()[..3].to_vec();

        assert_eq!(deck.deal(), top[0]);
        assert_eq!(deck.deal_pair(), [top[1], top[2]]);
        assert_eq!(deck.count(), Deck::SIZE - 3);

        deck.shuffle(&mut rng);
        assert_eq!(deck.count(), Deck::SIZE);
    }

    #[test]
    #[should_panic(expected = "empty deck")]
    fn deck_deal_exhausted() {
        let mut deck = Deck::default();
        for _ in 0..=Deck::SIZE {
            deck.deal();
        }
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len() as u64, nck(52, 2));

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len() as u64, nck(52, 3));
    }

    #[test]
    fn deck_for_each_dealt() {
        let mut deck = Deck::default();
        deck.deal_pair();

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, nck(50, 5));
    }
}
