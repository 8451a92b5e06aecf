use core::fmt;

use serde::{Deserialize, Serialize};

/// Статус стола, который ещё ни разу не сдавал.
pub const READY_STATUS: &str = "Prêt à distribuer";

/// Фаза раунда раздачи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Стол ждёт новой раздачи.
    #[default]
    Idle,
    Preflop,
    Flop,
    Turn,
    River,
}

impl RoundPhase {
    /// Текст статуса, который показывается после входа в фазу.
    pub fn status_text(self) -> &'static str {
        match self {
            RoundPhase::Idle => "Fin de manche. Relancez !",
            RoundPhase::Preflop => "Distribution...",
            RoundPhase::Flop => "Le Flop",
            RoundPhase::Turn => "Le Turn",
            RoundPhase::River => "La River",
        }
    }

    /// Идёт ли раздача (любая фаза кроме Idle).
    pub fn in_round(self) -> bool {
        !matches!(self, RoundPhase::Idle)
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundPhase::Idle => "IDLE",
            RoundPhase::Preflop => "PREFLOP",
            RoundPhase::Flop => "FLOP",
            RoundPhase::Turn => "TURN",
            RoundPhase::River => "RIVER",
        };
        f.write_str(s)
    }
}
