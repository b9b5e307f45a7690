use std::collections::HashSet;

use setgame_engine::cards::{Card, UNIVERSE_SIZE};
use setgame_engine::deck::Deck;
use setgame_engine::rules::STANDARD_TABLE_SIZE;

#[test]
fn deck_draws_81_unique_cards_then_none() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..UNIVERSE_SIZE {
        let c = deck.draw_one().expect("should have 81 cards");
        assert!(set.insert(c), "card {:?} duplicated at draw {}", c, i);
    }
    assert!(deck.is_empty());
    assert!(deck.draw_one().is_none(), "empty deck must yield none");
    assert!(deck.draw_three().is_none());
}

#[test]
fn deck_is_exhausted_after_dealing_past_opening_table() {
    let mut deck = Deck::new_with_seed(8);
    for _ in 0..STANDARD_TABLE_SIZE {
        deck.draw_one().unwrap();
    }
    for _ in 0..UNIVERSE_SIZE - STANDARD_TABLE_SIZE {
        assert!(deck.draw_one().is_some());
    }
    assert_eq!(deck.remaining(), 0);
    assert!(deck.draw_one().is_none());
}

#[test]
fn same_seed_draws_same_sequence() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = (0..10).map(|_| d1.draw_one().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw_one().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn different_seeds_draw_different_sequences() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a: Vec<Card> = (0..10).map(|_| d1.draw_one().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw_one().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn draw_three_takes_exactly_three() {
    let mut deck = Deck::new_with_seed(77);
    let drawn = deck.draw_three().unwrap();
    assert_eq!(deck.remaining(), UNIVERSE_SIZE - 3);
    for c in &drawn {
        assert!(!deck.contains(c));
    }
}
