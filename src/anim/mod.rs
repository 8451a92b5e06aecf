// src/anim/mod.rs
//! Планировщик анимаций карт (контракт + табличный адаптер на общем тике).
//!
//! Здесь собираем:
//! - кривые плавности (`Easing`);
//! - декларативные запросы (`TweenRequest`);
//! - правила хореографии раздачи (`ChoreographyRules`, `FlipRules`);
//! - контракт `AnimationScheduler` и его реализацию `TweenScheduler`.
//!
//! Движок раздачи только подаёт запросы и сразу возвращается. Всё изменение
//! позиции/поворота карт происходит внутри `advance(dt)` планировщика.

pub mod easing;
pub mod rules;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use rules::{ChoreographyRules, FlipRules};
pub use scheduler::TweenScheduler;
pub use tween::{Channel, Target, TweenRequest};

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Transform;

/// Идентификатор анимируемой сущности (карты на сцене).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Идентификатор поданного твина.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Событие анимации, возвращаемое из `advance`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnimationEvent {
    /// Истекла задержка, твин зафиксировал стартовые значения.
    Started { tween: TweenId, entity: EntityId },
    /// Твин дошёл до цели и удалён.
    Completed { tween: TweenId, entity: EntityId },
}

/// Контракт анимационной подложки.
///
/// Запросы не блокируют вызывающего: `submit` только ставит твин в очередь.
/// Время двигает внешний цикл кадров через `advance(dt)`; все активные твины
/// всех сущностей обновляются за один проход.
pub trait AnimationScheduler {
    /// Завести сущность с начальным трансформом.
    fn spawn(&mut self, initial: Transform) -> EntityId;

    /// Убрать сущность вместе со всеми её твинами.
    fn despawn(&mut self, entity: EntityId);

    /// Текущий (интерполированный) трансформ сущности.
    fn transform(&self, entity: EntityId) -> Option<Transform>;

    /// Поставить твин. Старт = текущее время планировщика + `request.delay`.
    fn submit(&mut self, entity: EntityId, request: TweenRequest) -> TweenId;

    /// Продвинуть общий такт на `dt` секунд.
    fn advance(&mut self, dt: f32) -> Vec<AnimationEvent>;

    /// Время планировщика (секунды с создания).
    fn now(&self) -> f64;

    /// Сколько твинов ещё не завершилось (включая ждущие задержку).
    fn active_count(&self) -> usize;

    fn is_idle(&self) -> bool {
        self.active_count() == 0
    }
}
