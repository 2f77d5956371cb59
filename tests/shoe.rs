//! Shoe shuffling and replenishment tests.

use std::collections::HashSet;

use bjround::shoe::new_shoe;
use bjround::{Card, DECK_SIZE, Shoe, Suit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn fresh_shoe_holds_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let cards = new_shoe(&mut rng);

    assert_eq!(cards.len(), DECK_SIZE);
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            assert!(unique.contains(&Card::new(suit, rank)));
        }
    }
}

#[test]
fn shuffle_swaps_downward_one_draw_per_step() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut expected_rng = rng.clone();

    let mut expected: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| (1..=13).map(move |rank| Card::new(suit, rank)))
        .collect();
    for i in (1..expected.len()).rev() {
        let j = expected_rng.random_range(0..=i);
        expected.swap(i, j);
    }

    assert_eq!(new_shoe(&mut rng), expected);
    assert_eq!(rng.random::<u64>(), expected_rng.random::<u64>());
}

#[test]
fn no_repeats_within_one_cycle() {
    let mut shoe = Shoe::new(5);
    let drawn: HashSet<Card> = (0..DECK_SIZE).map(|_| shoe.draw()).collect();

    assert_eq!(drawn.len(), DECK_SIZE);
    assert_eq!(shoe.remaining(), 0);
    assert_eq!(shoe.reshuffles(), 0);
}

#[test]
fn empty_shoe_reshuffles_transparently() {
    let mut shoe = Shoe::new(5);
    for _ in 0..DECK_SIZE {
        shoe.draw();
    }

    let _ = shoe.draw();
    assert_eq!(shoe.reshuffles(), 1);
    assert_eq!(shoe.remaining(), DECK_SIZE - 1);

    for _ in 0..DECK_SIZE * 3 {
        shoe.draw();
    }
    assert_eq!(shoe.reshuffles(), 4);
}

#[test]
fn same_seed_same_sequence() {
    let mut first = Shoe::new(77);
    let mut second = Shoe::new(77);
    let a: Vec<Card> = (0..100).map(|_| first.draw()).collect();
    let b: Vec<Card> = (0..100).map(|_| second.draw()).collect();
    assert_eq!(a, b);
}

#[test]
fn stacked_cards_come_out_in_order() {
    let mut shoe = Shoe::new(1);
    let stacked = [
        Card::new(Suit::Hearts, 1),
        Card::new(Suit::Clubs, 2),
        Card::new(Suit::Spades, 3),
    ];
    shoe.stack(&stacked);

    assert_eq!(shoe.remaining(), 3);
    for expected in stacked {
        assert_eq!(shoe.draw(), expected);
    }

    let _ = shoe.draw();
    assert_eq!(shoe.reshuffles(), 1);
}

#[test]
fn card_positions_are_uniform() {
    const TRIALS: usize = 5200;
    let target = Card::new(Suit::Spades, 1);
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut counts = [0usize; DECK_SIZE];

    for _ in 0..TRIALS {
        let cards = new_shoe(&mut rng);
        let position = cards.iter().position(|card| *card == target).unwrap();
        counts[position] += 1;
    }

    let expected = TRIALS as f64 / DECK_SIZE as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // 51 degrees of freedom; p = 0.0001 sits near 95.
    assert!(chi_square < 95.0, "chi-square {chi_square}");
}
