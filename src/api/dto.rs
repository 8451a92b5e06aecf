use serde::{Deserialize, Serialize};

use crate::anim::AnimationScheduler;
use crate::domain::geometry::Vec3;
use crate::domain::layout::{SeatIndex, SEAT_COUNT};
use crate::domain::phase::RoundPhase;
use crate::domain::RoundId;
use crate::engine::{Card, RoundStateMachine};

use super::commands::primary_button_label;

/// DTO одной карты на столе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardViewDto {
    /// Вид `A♠`, `10♥`.
    pub card: String,
    pub face_up: bool,
    pub face_texture: String,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// DTO одного места.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SeatViewDto {
    pub seat: SeatIndex,
    pub cards: Vec<CardViewDto>,
}

/// Снимок стола для рендера/UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundViewDto {
    pub round_id: RoundId,
    pub phase: RoundPhase,
    pub status: String,
    pub primary_label: String,
    pub deck_remaining: usize,
    pub seats: Vec<SeatViewDto>,
    pub board: Vec<CardViewDto>,
    /// Идут ли ещё анимации.
    pub animating: bool,
}

fn card_view<S: AnimationScheduler>(machine: &RoundStateMachine<S>, card: &Card) -> CardViewDto {
    let transform = machine.transform_of(card).unwrap_or_default();
    CardViewDto {
        card: card.data.to_string(),
        face_up: card.is_face_up,
        face_texture: card.visual.face.name().to_string(),
        position: transform.position,
        rotation: transform.rotation,
    }
}

/// Собрать снимок текущего состояния раунда.
pub fn build_round_view<S: AnimationScheduler>(machine: &RoundStateMachine<S>) -> RoundViewDto {
    let seats = (0..SEAT_COUNT)
        .map(|seat| SeatViewDto {
            seat,
            cards: machine
                .hand(seat)
                .unwrap_or_default()
                .into_iter()
                .map(|c| card_view(machine, c))
                .collect(),
        })
        .collect();

    RoundViewDto {
        round_id: machine.round_id(),
        phase: machine.phase(),
        status: machine.status().to_string(),
        primary_label: primary_button_label(machine.phase()).to_string(),
        deck_remaining: machine.deck().len(),
        seats,
        board: machine
            .board()
            .into_iter()
            .map(|c| card_view(machine, c))
            .collect(),
        animating: !machine.scheduler().is_idle(),
    }
}
