//! Внешние соавторы движка раздачи: сцена, статусная строка, ассеты карт.
//!
//! Движок знает о них только через эти трейты. Отсутствие сцены или статуса
//! допустимо: раздача идёт дальше, просто без побочного эффекта.

pub mod assets;
pub mod recording;

pub use assets::{shared_back_texture, ProceduralAssets, TextureHandle};
pub use recording::{RecordingScene, RecordingStatus, SceneLog, TracingStatus};

use crate::anim::EntityId;
use crate::domain::card::CardData;

/// Визуал карты: лицо под конкретную карту + общая рубашка.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVisual {
    pub face: TextureHandle,
    pub back: TextureHandle,
}

/// Сцена: движок добавляет карту один раз при взятии из колоды и убирает
/// при полном сбросе раунда.
pub trait SceneSurface {
    fn add(&mut self, entity: EntityId, visual: &CardVisual);
    fn remove(&mut self, entity: EntityId);
}

/// Приёмник человекочитаемого статуса ("Le Flop" и т.п.).
pub trait StatusSink {
    fn set_status(&mut self, text: &str);
}

/// Поставщик текстур. Ранг и масть передаются непрозрачно.
pub trait CardAssets {
    fn face(&mut self, card: CardData) -> TextureHandle;
    fn back(&mut self) -> TextureHandle;

    fn visual_for(&mut self, card: CardData) -> CardVisual {
        CardVisual {
            face: self.face(card),
            back: self.back(),
        }
    }
}
