//! Движок раздачи: колода → карты → хореография, по фазам раунда.
//!
//! Высокоуровневый объект: `RoundStateMachine`
//! Основные операции:
//!   - `deal_hole_cards` / `deal_flop` / `deal_turn` / `deal_river` – раздача по фазам
//!   - `end_round` / `fold` – закрыть раунд
//!   - `advance` – тот переход, который допустим сейчас
//!   - `tick` – продвинуть анимации

pub mod card;
pub mod errors;
pub mod round;
pub mod round_history;

pub use card::{flip_twist, Card, FlipSchedule};
pub use errors::EngineError;
pub use round::{RoundStateMachine, Transition, HOLE_CARDS};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};

/// RNG интерфейс для движка.
///
/// Колода и косметика (наклоны, дребезг переворота) получают разные экземпляры,
/// так что тесты подменяют одно, не трогая другое.
pub trait RandomSource {
    /// Равномерное целое из [0, upper). `upper` > 0.
    fn index_below(&mut self, upper: usize) -> usize;

    /// Равномерное число из [0, 1).
    fn unit_f32(&mut self) -> f32;
}
