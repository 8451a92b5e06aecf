// src/anim/easing.rs
//! Функции плавности для твинов.

use serde::{Deserialize, Serialize};

/// Кривая плавности: отображает линейный прогресс [0, 1] в "визуальный".
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum Easing {
    Linear,
    /// Квадратичное замедление к концу.
    Power1Out,
    /// Кубическое замедление к концу – основной ход карт.
    #[default]
    Power2Out,
    /// Замедление с перелётом цели на `overshoot` и возвратом.
    BackOut(f32),
}

impl Easing {
    /// Значение кривой в точке `t`. Вне [0, 1] аргумент зажимается,
    /// на концах результат ровно 0 и 1.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Easing::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}
