//! Внешний API движка раздачи.
//!
//! Здесь описываются:
//! - команды (commands.rs) – кнопки Bet / Check / Fold;
//! - DTO (dto.rs) – снимок стола для рендера и статусной строки.

pub mod commands;
pub mod dto;

pub use commands::*;
pub use dto::*;
