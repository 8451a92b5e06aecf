//! Доменная модель раздачи: карты, колода, геометрия стола, фазы раунда.

pub mod card;
pub mod deck;
pub mod geometry;
pub mod layout;
pub mod phase;

// Идентификатор раунда (сквозной счётчик раздач).
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Deck и т.п.
pub use card::*;
pub use deck::*;
pub use geometry::*;
pub use layout::*;
pub use phase::*;
