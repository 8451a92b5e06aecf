use serde::{Deserialize, Serialize};

use crate::anim::AnimationScheduler;
use crate::domain::phase::RoundPhase;
use crate::engine::{EngineError, RoundStateMachine, Transition};

/// Кнопки под столом.
///
/// Ставок как таковых нет: Bet и Check просто двигают раунд дальше,
/// Fold закрывает раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum UiAction {
    Bet,
    /// То же самое, что Bet.
    Check,
    Fold,
}

/// Применить нажатие кнопки. Повторные/лишние нажатия безопасны – они игнорируются.
pub fn apply_ui_action<S: AnimationScheduler>(
    machine: &mut RoundStateMachine<S>,
    action: UiAction,
) -> Result<Transition, EngineError> {
    match action {
        UiAction::Bet | UiAction::Check => machine.advance(),
        UiAction::Fold => machine.fold(),
    }
}

/// Подпись главной кнопки для фазы.
pub fn primary_button_label(phase: RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Idle => "Deal New Hand",
        _ => "Bet",
    }
}
