use serde::{Deserialize, Serialize};

use crate::anim::EntityId;
use crate::domain::card::CardData;
use crate::domain::layout::SeatIndex;
use crate::domain::phase::RoundPhase;
use crate::domain::RoundId;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Колода пересобрана, раунд начался.
    RoundStarted { round_id: RoundId },

    /// Игрок получил карманную карту.
    HoleCardDealt {
        seat: SeatIndex,
        card: CardData,
        entity: EntityId,
        /// Задержка старта анимации относительно вызова.
        delay: f32,
    },

    /// Открыта общая карта.
    BoardCardDealt {
        phase: RoundPhase,
        slot: usize,
        card: CardData,
        entity: EntityId,
        delay: f32,
    },

    PhaseChanged { from: RoundPhase, to: RoundPhase },

    /// Раунд закрыт (по риверу или фолдом).
    RoundEnded { round_id: RoundId, folded: bool },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// История одного раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    /// Места в том порядке, в каком им сдавались карманные карты.
    pub fn hole_deal_order(&self) -> Vec<SeatIndex> {
        self.events
            .iter()
            .filter_map(|e| match e.kind {
                RoundEventKind::HoleCardDealt { seat, .. } => Some(seat),
                _ => None,
            })
            .collect()
    }
}
