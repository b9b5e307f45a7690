use std::collections::HashSet;

use proptest::prelude::*;
use setgame_engine::cards::{full_deck, is_set, Attribute as A, Card, UNIVERSE_SIZE};
use setgame_engine::game::SetGame;
use setgame_engine::rules::GameConfig;

#[test]
fn universe_covers_every_attribute_combination_once() {
    let game = SetGame::new(GameConfig::with_seed(2024)).unwrap();
    let deck_cards: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !game.table().contains(c))
        .collect();
    assert_eq!(deck_cards.len(), game.deck_remaining());

    let mut all = HashSet::new();
    for c in game.table().iter().chain(&deck_cards) {
        assert!(all.insert(*c), "card {:?} duplicated", c);
    }
    assert_eq!(all.len(), UNIVERSE_SIZE);
    for n in 0..3 {
        for s in 0..3 {
            for sh in 0..3 {
                for c in 0..3 {
                    let card = Card::from_ordinals([n, s, sh, c]).unwrap();
                    assert!(all.contains(&card));
                }
            }
        }
    }
    assert_eq!(game.check_invariants(), Ok(()));
}

#[test]
fn identical_attributes_except_color_form_a_set() {
    let cards = [
        Card::new(A::First, A::First, A::First, A::First),
        Card::new(A::First, A::First, A::First, A::Second),
        Card::new(A::First, A::First, A::First, A::Third),
    ];
    assert!(is_set(&cards));
}

#[test]
fn two_of_a_kind_number_is_not_a_set() {
    let cards = [
        Card::new(A::First, A::First, A::First, A::First),
        Card::new(A::Second, A::First, A::First, A::First),
        Card::new(A::Second, A::Second, A::First, A::First),
    ];
    assert!(!is_set(&cards));
}

#[test]
fn every_attribute_distinct_is_a_set() {
    let cards = [
        Card::new(A::First, A::Third, A::Second, A::First),
        Card::new(A::Second, A::Second, A::Second, A::Second),
        Card::new(A::Third, A::First, A::Second, A::Third),
    ];
    assert!(is_set(&cards));
}

fn any_card() -> impl Strategy<Value = Card> {
    (0u8..3, 0u8..3, 0u8..3, 0u8..3)
        .prop_map(|(n, s, sh, c)| Card::from_ordinals([n, s, sh, c]).unwrap())
}

proptest! {
    #[test]
    fn is_set_ignores_card_order(a in any_card(), b in any_card(), c in any_card()) {
        let expected = is_set(&[a, b, c]);
        for perm in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            prop_assert_eq!(is_set(&perm), expected);
        }
    }

    #[test]
    fn is_set_matches_same_or_all_different_rule(a in any_card(), b in any_card(), c in any_card()) {
        let rule = (0..4).all(|i| {
            let (x, y, z) = (a.ordinals()[i], b.ordinals()[i], c.ordinals()[i]);
            (x == y && y == z) || (x != y && y != z && x != z)
        });
        prop_assert_eq!(is_set(&[a, b, c]), rule);
    }
}
