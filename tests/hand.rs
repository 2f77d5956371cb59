//! Hand valuation tests.

use bjround::{Card, DealerHand, Hand, Suit, card_value, hand_total};
use proptest::prelude::*;
use proptest::test_runner::Config;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

#[test]
fn card_values() {
    assert_eq!(card_value(1), 11);
    for rank in 2..=10 {
        assert_eq!(card_value(rank), rank);
    }
    assert_eq!(card_value(11), 10);
    assert_eq!(card_value(12), 10);
    assert_eq!(card_value(13), 10);
}

#[test]
fn known_totals() {
    assert_eq!(hand_total(&[]), 0);
    assert_eq!(hand_total(&cards(&[1, 1])), 12);
    assert_eq!(hand_total(&cards(&[1, 13])), 21);
    assert_eq!(hand_total(&cards(&[1, 1, 9])), 21);
    assert_eq!(hand_total(&cards(&[10, 9, 5])), 24);
    assert_eq!(hand_total(&cards(&[1, 1, 1, 1])), 14);
    assert_eq!(hand_total(&cards(&[13, 12, 1, 1])), 22);
}

#[test]
fn totals_stay_exact_for_oversized_hands() {
    let deck: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| (1..=13).map(move |rank| card(suit, rank)))
        .collect();
    assert_eq!(hand_total(&deck), 380 - 40);

    assert_eq!(hand_total(&cards(&[10; 26])), 260);

    let mut kings_and_ace = vec![13; 25];
    kings_and_ace.push(1);
    assert_eq!(hand_total(&cards(&kings_and_ace)), 251);

    let mut hand = Hand::new();
    for card in deck.iter().chain(deck.iter()).copied() {
        hand.add_card(card);
    }
    assert_eq!(hand.value(), 680);
    assert!(hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn hand_flags() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 13));
    assert_eq!(hand.value(), 21);
    assert!(hand.is_natural());
    assert!(hand.is_soft());
    assert!(!hand.is_bust());

    hand.add_card(card(Suit::Clubs, 5));
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_natural());
    assert!(!hand.is_soft());

    hand.add_card(card(Suit::Diamonds, 10));
    assert_eq!(hand.value(), 26);
    assert!(hand.is_bust());

    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);
}

#[test]
fn three_card_21_is_not_natural() {
    let mut hand = Hand::new();
    for rank in [7, 7, 7] {
        hand.add_card(card(Suit::Hearts, rank));
    }
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_natural());
}

#[test]
fn dealer_hole_card_hidden_until_revealed() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 1));
    dealer.add_card(card(Suit::Clubs, 6));

    assert_eq!(dealer.hole_card(), Some(&card(Suit::Hearts, 1)));
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 6);
    assert_eq!(dealer.value(), 17);
    assert!(dealer.is_soft());

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 0);
}

#[test]
fn card_display_uses_symbols() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "A♠");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10♥");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Q♦");
    assert_eq!(card(Suit::Clubs, 7).to_string(), "7♣");
}

/// Best total by trying every number of reduced aces.
fn reference_total(ranks: &[u8]) -> u16 {
    let raw: u32 = ranks.iter().map(|&rank| u32::from(card_value(rank))).sum();
    let aces = ranks.iter().filter(|&&rank| rank == 1).count() as u32;

    (0..=aces)
        .map(|reduced| raw - 10 * reduced)
        .filter(|total| *total <= 21)
        .max()
        .unwrap_or(raw - 10 * aces) as u16
}

proptest! {
    #![proptest_config(Config::with_cases(512))]
    #[test]
    fn total_matches_best_reduction(ranks in prop::collection::vec(1_u8..=13, 0..12)) {
        let total = hand_total(&cards(&ranks));
        prop_assert_eq!(total, reference_total(&ranks));
    }

    #[test]
    fn total_under_22_whenever_reachable(ranks in prop::collection::vec(1_u8..=13, 0..12)) {
        let total = hand_total(&cards(&ranks));
        let hard: u32 = ranks
            .iter()
            .map(|&rank| if rank == 1 { 1 } else { u32::from(card_value(rank)) })
            .sum();
        prop_assert_eq!(total <= 21, hard <= 21);
        if hard > 21 {
            prop_assert_eq!(u32::from(total), hard);
        }
    }
}
