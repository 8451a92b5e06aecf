//! Раздатчик для стола на шесть мест.
//!
//! Колода, конечный автомат раунда (IDLE → PREFLOP → FLOP → TURN → RIVER)
//! и хореография каждой сданной карты (ход, поворот, переворот) поверх
//! планировщика анимаций с общим тактом.

pub mod anim;
pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod scene;

pub use config::{ConfigError, DealerConfig};
pub use engine::{EngineError, RoundStateMachine, Transition};
