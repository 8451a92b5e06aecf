use thiserror::Error;

use crate::domain::deck::EmptyDeckError;
use crate::domain::layout::SeatIndex;

/// Ошибки движка раздачи.
///
/// Недопустимый переход между фазами сюда не входит: такой вызов просто
/// игнорируется (см. `Transition::Ignored`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Колоды не хватило на раздачу – дефект логики, а не ошибка игрока.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),
}
