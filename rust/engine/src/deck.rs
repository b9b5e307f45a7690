use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::rules::DRAW_SIZE;

/// Cards not yet dealt. Draws are uniformly random and without replacement.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Refills the deck with the whole universe, keeping the RNG stream.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    /// Removes and returns one random card, or `None` once the deck is empty.
    pub fn draw_one(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let i = self.rng.random_range(0..self.cards.len());
        let card = self.cards.swap_remove(i);
        tracing::trace!(?card, remaining = self.cards.len(), "drew card");
        Some(card)
    }

    /// Draws exactly three cards, or nothing at all when fewer than three remain.
    pub fn draw_three(&mut self) -> Option<[Card; DRAW_SIZE]> {
        if self.cards.len() < DRAW_SIZE {
            return None;
        }
        let a = self.draw_one()?;
        let b = self.draw_one()?;
        let c = self.draw_one()?;
        Some([a, b, c])
    }

    /// Takes a specific card out of the deck. Returns `false` if it was not present.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(i) => {
                self.cards.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }
}
