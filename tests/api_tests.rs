//! Тесты слоя кнопок и снимка стола.

use poker_dealer::api::{apply_ui_action, build_round_view, primary_button_label, UiAction};
use poker_dealer::domain::card::{CardData, Rank, Suit};
use poker_dealer::domain::phase::{RoundPhase, READY_STATUS};
use poker_dealer::infra::RngSeed;
use poker_dealer::scene::{shared_back_texture, CardAssets, ProceduralAssets};
use poker_dealer::RoundStateMachine;

fn seeded(seed: u64) -> RoundStateMachine {
    RoundStateMachine::standard().with_seed(RngSeed::from_u64(seed))
}

#[test]
fn button_label_depends_on_phase() {
    assert_eq!(primary_button_label(RoundPhase::Idle), "Deal New Hand");
    for phase in [
        RoundPhase::Preflop,
        RoundPhase::Flop,
        RoundPhase::Turn,
        RoundPhase::River,
    ] {
        assert_eq!(primary_button_label(phase), "Bet");
    }
}

#[test]
fn check_behaves_exactly_like_bet() {
    let mut by_bet = seeded(21);
    let mut by_check = seeded(21);

    for _ in 0..5 {
        let a = apply_ui_action(&mut by_bet, UiAction::Bet).unwrap();
        let b = apply_ui_action(&mut by_check, UiAction::Check).unwrap();
        assert_eq!(a, b);
    }
    assert_eq!(by_bet.history(), by_check.history());
}

#[test]
fn fold_button_closes_round_and_is_safe_when_idle() {
    let mut m = seeded(22);

    assert!(apply_ui_action(&mut m, UiAction::Fold).unwrap().is_ignored());

    apply_ui_action(&mut m, UiAction::Bet).unwrap();
    apply_ui_action(&mut m, UiAction::Bet).unwrap();
    assert_eq!(m.phase(), RoundPhase::Flop);

    let tr = apply_ui_action(&mut m, UiAction::Fold).unwrap();
    assert_eq!(tr.phase(), RoundPhase::Idle);
}

#[test]
fn round_view_reflects_table() {
    let mut m = seeded(23);

    let idle = build_round_view(&m);
    assert_eq!(idle.round_id, 0);
    assert_eq!(idle.primary_label, "Deal New Hand");
    assert_eq!(idle.status, READY_STATUS, "nothing was dealt yet");
    assert!(idle.seats.iter().all(|s| s.cards.is_empty()));
    assert!(!idle.animating);

    m.deal_hole_cards().unwrap();
    m.deal_flop().unwrap();

    let view = build_round_view(&m);
    assert_eq!(view.round_id, 1);
    assert_eq!(view.phase, RoundPhase::Flop);
    assert_eq!(view.status, "Le Flop");
    assert_eq!(view.primary_label, "Bet");
    assert_eq!(view.deck_remaining, 37);
    assert_eq!(view.seats.len(), 6);
    assert!(view.seats.iter().all(|s| s.cards.len() == 2));
    assert!(view.seats[0].cards.iter().all(|c| c.face_up));
    assert!(view.seats[1..]
        .iter()
        .all(|s| s.cards.iter().all(|c| !c.face_up)));
    assert_eq!(view.board.len(), 3);
    assert!(view.animating);

    for card in &view.board {
        let parsed: CardData = card.card.parse().unwrap();
        assert!(card.face_texture.contains(&parsed.to_string()));
    }

    // DTO уходит наружу в JSON.
    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"Flop\""));
}

#[test]
fn every_card_shares_one_back_texture() {
    let mut m = seeded(24);
    m.deal_hole_cards().unwrap();
    m.deal_flop().unwrap();

    let back = shared_back_texture();
    for card in m.drawn() {
        assert!(card.visual.back.same_instance(&back));
    }
}

#[test]
fn face_textures_are_cached_per_card() {
    let mut assets = ProceduralAssets::new();
    let ace = CardData::new(Rank::Ace, Suit::Hearts);
    let king = CardData::new(Rank::King, Suit::Spades);

    let first = assets.face(ace);
    let again = assets.face(ace);
    assert!(first.same_instance(&again));
    assert_eq!(assets.generated_faces(), 1);

    let other = assets.face(king);
    assert!(!other.same_instance(&first));
    assert_eq!(assets.generated_faces(), 2);

    assert!(first.name().contains("#ff0055"), "red suit tint");
    assert!(other.name().contains("#00ccff"), "black suit tint");
}

#[test]
fn round_view_status_tracks_published_text() {
    let mut m = seeded(25);
    assert_eq!(build_round_view(&m).status, READY_STATUS);

    for _ in 0..5 {
        apply_ui_action(&mut m, UiAction::Bet).unwrap();
    }
    assert_eq!(m.phase(), RoundPhase::Idle);
    assert_eq!(build_round_view(&m).status, "Fin de manche. Relancez !");

    // Лишний Fold в IDLE статус не трогает.
    apply_ui_action(&mut m, UiAction::Fold).unwrap();
    assert_eq!(m.status(), "Fin de manche. Relancez !");
}
