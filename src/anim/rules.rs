// src/anim/rules.rs
//! Конфигурация хореографии раздачи.
//!
//! Здесь описываем только "правила" (тайминги, углы, амплитуды), без
//! состояния и без привязки к конкретному столу.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Vec3;

use super::Easing;

/// Правила составного переворота карты (подъём + поворот + опускание).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlipRules {
    /// Насколько карта подпрыгивает по вертикали.
    pub lift_height: f32,
    /// Длительность подъёма; опускание длится столько же и стартует после подъёма.
    pub lift_duration: f32,
    pub lift_easing: Easing,
    pub rotate_duration: f32,
    pub rotate_easing: Easing,
    /// Амплитуда косметического "кривого" поворота по оси Z: результат в [-a, a).
    pub twist_jitter: f32,
    /// Ориентация "лицом вверх" на столе.
    pub face_up_rotation: Vec3,
    /// Ориентация "рубашкой вверх" на столе.
    pub face_down_rotation: Vec3,
}

impl FlipRules {
    /// Стандартный переворот: прыжок на 1.0 за 0.2 с туда и 0.2 с обратно,
    /// поворот за 0.5 с с перелётом 1.2.
    pub fn standard() -> Self {
        Self {
            lift_height: 1.0,
            lift_duration: 0.2,
            lift_easing: Easing::Power1Out,
            rotate_duration: 0.5,
            rotate_easing: Easing::BackOut(1.2),
            twist_jitter: 0.1,
            face_up_rotation: Vec3::new(-FRAC_PI_2, PI, 0.0),
            face_down_rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        }
    }

    /// Полная длительность переворота; от задержки не зависит.
    pub fn total_duration(&self) -> f32 {
        (2.0 * self.lift_duration).max(self.rotate_duration)
    }
}

impl Default for FlipRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Тайминги и позы раздачи по фазам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChoreographyRules {
    /// Шаг задержки между соседними картами при раздаче карманных карт.
    pub deal_step: f32,
    pub move_duration: f32,
    pub rotate_duration: f32,
    /// Сдвиг первой/второй карманной карты вдоль оси X (−/+).
    pub hole_card_offset: f32,
    /// Наклон карт героя к камере (ось X).
    pub hero_tilt_x: f32,
    /// Поза, в которой герой видит свои карты.
    pub hero_reveal_rotation: Vec3,
    /// Насколько позже хода стартует открытие карты героя.
    pub hero_reveal_delay: f32,
    pub hero_reveal_duration: f32,
    /// Наклон закрытых карт ботов (плашмя).
    pub bot_tilt_x: f32,
    /// Разнос по времени между картами флопа.
    pub board_stagger: f32,
    /// На сколько переворот карты борда отстаёт от начала её хода.
    pub board_flip_lead: f32,
    /// Максимальный косметический поворот карты в колоде (ось Z).
    pub spawn_twist_max: f32,
    pub flip: FlipRules,
}

impl ChoreographyRules {
    pub fn standard() -> Self {
        Self {
            deal_step: 0.1,
            move_duration: 0.6,
            rotate_duration: 0.6,
            hole_card_offset: 0.7,
            hero_tilt_x: -FRAC_PI_3,
            hero_reveal_rotation: Vec3::new(-FRAC_PI_4, PI, 0.0),
            hero_reveal_delay: 0.5,
            hero_reveal_duration: 0.5,
            bot_tilt_x: -FRAC_PI_2,
            board_stagger: 0.2,
            board_flip_lead: 0.6,
            spawn_twist_max: 0.2,
            flip: FlipRules::standard(),
        }
    }

    /// Задержка n-й карты в круговой раздаче (n = круг × мест + место).
    pub fn stagger_delay(&self, order: usize) -> f32 {
        order as f32 * self.deal_step
    }
}

impl Default for ChoreographyRules {
    fn default() -> Self {
        Self::standard()
    }
}
