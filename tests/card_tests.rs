//! Тесты хореографии отдельной карты: ход, поворот, переворот, показ герою.

use std::f32::consts::{FRAC_PI_2, PI};

use poker_dealer::anim::{AnimationScheduler, FlipRules, TweenScheduler};
use poker_dealer::domain::card::{CardData, Rank, Suit};
use poker_dealer::domain::geometry::{Transform, Vec3};
use poker_dealer::engine::{flip_twist, Card, RandomSource};
use poker_dealer::infra::DeterministicRng;
use poker_dealer::scene::{CardAssets, ProceduralAssets};

const EPS: f32 = 1e-4;
/// Высота поверхности, на которой лежит карта в этих тестах.
const REST: f32 = 0.1;

/// Источник с фиксированным значением – для предсказуемого дребезга.
struct FixedRng(f32);

impl RandomSource for FixedRng {
    fn index_below(&mut self, _upper: usize) -> usize {
        0
    }

    fn unit_f32(&mut self) -> f32 {
        self.0
    }
}

fn card_on_table(s: &mut TweenScheduler, rest_height: f32) -> Card {
    let data = CardData::new(Rank::King, Suit::Hearts);
    let entity = s.spawn(Transform::new(
        Vec3::new(0.0, rest_height, 0.0),
        Vec3::new(-FRAC_PI_2, 0.0, 0.0),
    ));
    let visual = ProceduralAssets::new().visual_for(data);
    Card::new(entity, data, visual)
}

fn settle(s: &mut TweenScheduler) {
    for _ in 0..1_000 {
        if s.is_idle() {
            return;
        }
        s.advance(1.0 / 60.0);
    }
    panic!("animations did not settle");
}

#[test]
fn new_card_is_face_down() {
    let mut s = TweenScheduler::new();
    let card = card_on_table(&mut s, REST);
    assert!(!card.is_face_up);
}

#[test]
fn flip_twice_restores_face_down() {
    let mut s = TweenScheduler::new();
    let rules = FlipRules::standard();
    let mut jitter = DeterministicRng::from_u64(1);
    let mut card = card_on_table(&mut s, REST);

    card.flip(&mut s, &mut jitter, &rules, REST, 0.0);
    assert!(card.is_face_up, "flip toggles immediately, not at animation end");

    card.flip(&mut s, &mut jitter, &rules, REST, 0.0);
    assert!(!card.is_face_up);
}

#[test]
fn flip_lands_face_up_with_bounded_twist() {
    let mut s = TweenScheduler::new();
    let rules = FlipRules::standard();
    let mut card = card_on_table(&mut s, REST);

    // unit = 0.75 → twist = (0.75 * 2 - 1) * 0.1 = 0.05
    let schedule = card.flip(&mut s, &mut FixedRng(0.75), &rules, REST, 0.3);
    assert!((schedule.twist - 0.05).abs() < EPS);

    settle(&mut s);
    let t = card.transform(&s).unwrap();
    assert!(t.rotation.approx_eq(&Vec3::new(-FRAC_PI_2, PI, 0.05), EPS));
    assert!((t.position.y - REST).abs() < EPS, "card must come back down");
}

#[test]
fn flip_back_returns_to_face_down_orientation() {
    let mut s = TweenScheduler::new();
    let rules = FlipRules::standard();
    let mut jitter = FixedRng(0.5); // twist = 0
    let mut card = card_on_table(&mut s, REST);

    card.flip(&mut s, &mut jitter, &rules, REST, 0.0);
    settle(&mut s);
    card.flip(&mut s, &mut jitter, &rules, REST, 0.0);
    settle(&mut s);

    let t = card.transform(&s).unwrap();
    assert!(t.rotation.approx_eq(&rules.face_down_rotation, EPS));
}

#[test]
fn flip_lifts_before_descending() {
    let mut s = TweenScheduler::new();
    let rules = FlipRules::standard();
    let mut card = card_on_table(&mut s, REST);

    card.flip(&mut s, &mut FixedRng(0.5), &rules, REST, 0.0);

    // Конец подъёма: карта на вершине прыжка.
    s.advance(rules.lift_duration);
    let peak = card.transform(&s).unwrap().position.y;
    assert!((peak - (REST + rules.lift_height)).abs() < EPS);

    s.advance(rules.lift_duration);
    let down = card.transform(&s).unwrap().position.y;
    assert!((down - REST).abs() < EPS);
}

#[test]
fn flip_duration_is_fixed_and_delay_only_shifts_it() {
    let mut s = TweenScheduler::new();
    let rules = FlipRules::standard();
    let mut jitter = FixedRng(0.5);
    let mut a = card_on_table(&mut s, REST);
    let mut b = card_on_table(&mut s, REST);

    let early = a.flip(&mut s, &mut jitter, &rules, REST, 0.0);
    let late = b.flip(&mut s, &mut jitter, &rules, REST, 2.0);

    assert!((early.ends_at - early.starts_at - rules.total_duration()).abs() < EPS);
    assert!((late.ends_at - late.starts_at - rules.total_duration()).abs() < EPS);
    assert!((late.starts_at - 2.0).abs() < EPS);
    assert!((rules.total_duration() - 0.5).abs() < EPS);
}

#[test]
fn move_and_rotate_target_the_card_entity() {
    let mut s = TweenScheduler::new();
    let card = card_on_table(&mut s, REST);

    card.move_to(&mut s, Vec3::new(3.0, 0.2, -5.0), 0.1, 0.6);
    card.rotate_to(&mut s, Vec3::new(-FRAC_PI_2, 1.0, 0.0), 0.1, 0.6);
    assert_eq!(s.pending_for(card.entity), 2);

    settle(&mut s);
    let t = card.transform(&s).unwrap();
    assert_eq!(t.position, Vec3::new(3.0, 0.2, -5.0));
    assert_eq!(t.rotation, Vec3::new(-FRAC_PI_2, 1.0, 0.0));
}

#[test]
fn reveal_to_viewer_sets_rather_than_toggles() {
    let mut s = TweenScheduler::new();
    let mut card = card_on_table(&mut s, 0.2);
    let pose = Vec3::new(-PI / 4.0, PI, 0.0);

    card.reveal_to_viewer(&mut s, pose, 0.0, 0.5);
    card.reveal_to_viewer(&mut s, pose, 0.0, 0.5);
    assert!(card.is_face_up);

    settle(&mut s);
    assert_eq!(card.transform(&s).unwrap().rotation, pose);
}

#[test]
fn flip_twist_stays_within_amplitude() {
    let mut rng = DeterministicRng::from_u64(77);
    for _ in 0..5_000 {
        let t = flip_twist(&mut rng, 0.1);
        assert!((-0.1..0.1).contains(&t), "twist out of range: {t}");
    }
}

#[test]
fn flip_lands_on_the_given_surface_height() {
    let mut s = TweenScheduler::new();
    let rules = FlipRules::standard();
    let raised = 0.75;
    let mut card = card_on_table(&mut s, raised);

    card.flip(&mut s, &mut FixedRng(0.5), &rules, raised, 0.0);
    settle(&mut s);

    let y = card.transform(&s).unwrap().position.y;
    assert!((y - raised).abs() < EPS, "card landed at {y}");
}
