//! The single-deck shoe the dealer draws from.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Builds all 52 cards and shuffles them with `rng`.
///
/// The deck is built suit by suit, Ace to King, then shuffled with a
/// Fisher–Yates pass from the last index down to 1: each step draws one index
/// from `0..=i` and swaps it into place.
pub fn new_shoe(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }

    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
    cards
}

/// A self-replenishing shoe holding one shuffled deck.
///
/// Cards are drawn from the end. When the shoe runs dry, a fresh shuffled deck
/// replaces it, so drawing never fails.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
    reshuffles: usize,
}

impl Shoe {
    /// Creates a shuffled shoe from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = new_shoe(&mut rng);

        Self {
            cards,
            rng,
            reshuffles: 0,
        }
    }

    /// Removes and returns the next card, reshuffling a new deck first if
    /// the shoe is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.refill();
        }
    }

    fn refill(&mut self) {
        self.cards = new_shoe(&mut self.rng);
        self.reshuffles += 1;
        tracing::debug!(reshuffles = self.reshuffles, "shoe exhausted, reshuffled");
    }

    /// Replaces the shoe contents so the next draws return `draws` in order.
    ///
    /// Once the stacked cards run out, the shoe reshuffles as usual.
    pub fn stack(&mut self, draws: &[Card]) {
        let mut cards = draws.to_vec();
        cards.reverse();
        self.cards = cards;
    }

    /// Returns the number of cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns how many times the shoe has been replenished.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}
