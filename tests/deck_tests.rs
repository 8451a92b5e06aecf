//! Тесты колоды: состав, выдача сверху, нехватка карт, равномерность перемешивания.

use std::collections::{HashMap, HashSet};

use poker_dealer::domain::card::{CardData, Rank, Suit};
use poker_dealer::domain::deck::{shuffle, Deck, EmptyDeckError, DECK_SIZE};
use poker_dealer::infra::DeterministicRng;

/// Хи-квадрат по наблюдённым частотам при равномерном ожидании.
fn chi_square(counts: &[u32], total: u32) -> f64 {
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn reset_builds_all_52_unique_combinations() {
    let mut rng = DeterministicRng::from_u64(1);
    let mut deck = Deck::default();
    deck.reset(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<CardData> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let n = deck
                .cards
                .iter()
                .filter(|c| c.rank == rank && c.suit == suit)
                .count();
            assert_eq!(n, 1, "{rank}{suit} must appear exactly once");
        }
    }
}

#[test]
fn reset_discards_previous_state() {
    let mut rng = DeterministicRng::from_u64(2);
    let mut deck = Deck::default();
    deck.reset(&mut rng);
    for _ in 0..30 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.len(), 22);

    deck.reset(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn reset_actually_shuffles() {
    let mut rng = DeterministicRng::from_u64(3);
    let mut deck = Deck::default();
    deck.reset(&mut rng);
    assert_ne!(deck.cards, Deck::standard_52().cards);
}

#[test]
fn drawing_52_cards_empties_deck_and_53rd_fails() {
    let mut rng = DeterministicRng::from_u64(4);
    let mut deck = Deck::default();
    deck.reset(&mut rng);

    let mut seen = HashSet::new();
    for i in 0..DECK_SIZE {
        let card = deck.draw().expect("deck must still have cards");
        assert!(seen.insert(card), "duplicate card {card} at draw {i}");
        assert_eq!(deck.len(), DECK_SIZE - i - 1);
    }
    assert!(deck.is_empty());

    assert_eq!(
        deck.draw(),
        Err(EmptyDeckError {
            requested: 1,
            remaining: 0
        })
    );
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::standard_52();
    let top = *deck.cards.last().unwrap();
    assert_eq!(deck.draw().unwrap(), top);
    assert_eq!(top, CardData::new(Rank::Ace, Suit::Diamonds));
}

#[test]
fn draw_many_matches_sequential_draws() {
    let mut rng = DeterministicRng::from_u64(5);
    let mut a = Deck::default();
    a.reset(&mut rng);
    let mut b = a.clone();

    let batch = a.draw_many(5).unwrap();
    let one_by_one: Vec<CardData> = (0..5).map(|_| b.draw().unwrap()).collect();

    assert_eq!(batch, one_by_one);
    assert_eq!(a, b);
}

#[test]
fn draw_many_is_all_or_nothing() {
    let mut deck = Deck {
        cards: vec![
            CardData::new(Rank::Two, Suit::Clubs),
            CardData::new(Rank::Three, Suit::Clubs),
        ],
    };

    let err = deck.draw_many(3).unwrap_err();
    assert_eq!(
        err,
        EmptyDeckError {
            requested: 3,
            remaining: 2
        }
    );
    assert_eq!(deck.len(), 2, "a failed batch must not remove anything");
}

#[test]
fn shuffle_reaches_every_permutation_uniformly() {
    // 3 элемента → 6 перестановок; считаем частоты и проверяем хи-квадрат.
    let mut rng = DeterministicRng::from_u64(42);
    let trials = 60_000u32;
    let mut counts: HashMap<[u8; 3], u32> = HashMap::new();

    for _ in 0..trials {
        let mut v = [0u8, 1, 2];
        shuffle(&mut v, &mut rng);
        *counts.entry(v).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "all 3! permutations must be reachable");

    let freq: Vec<u32> = counts.values().copied().collect();
    // 5 степеней свободы; 20.5 – порог p = 0.001, берём с запасом.
    let stat = chi_square(&freq, trials);
    assert!(stat < 30.0, "chi-square too large: {stat}");
}

#[test]
fn reset_places_a_given_card_uniformly_over_positions() {
    let mut rng = DeterministicRng::from_u64(2024);
    let probe = CardData::new(Rank::Ace, Suit::Spades);
    let trials = 26_000u32;
    let mut counts = vec![0u32; DECK_SIZE];

    let mut deck = Deck::default();
    for _ in 0..trials {
        deck.reset(&mut rng);
        let pos = deck.cards.iter().position(|c| *c == probe).unwrap();
        counts[pos] += 1;
    }

    assert!(counts.iter().all(|&c| c > 0));
    // 51 степень свободы: среднее ~51, порог p = 1e-6 около 110.
    let stat = chi_square(&counts, trials);
    assert!(stat < 120.0, "chi-square too large: {stat}");
}

#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        CardData::new(Rank::Ace, Suit::Spades),
        CardData::new(Rank::Ten, Suit::Hearts),
        CardData::new(Rank::Two, Suit::Clubs),
        CardData::new(Rank::Queen, Suit::Diamonds),
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: CardData = s.parse().expect("parse CardData from Display string");
        assert_eq!(parsed, card);
    }

    assert_eq!(CardData::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");

    assert!("".parse::<CardData>().is_err());
    assert!("1♠".parse::<CardData>().is_err());
    assert!("Ax".parse::<CardData>().is_err());
}
