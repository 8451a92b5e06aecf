use serde::{Deserialize, Serialize};

use crate::anim::{
    AnimationScheduler, Channel, EntityId, FlipRules, Target, TweenId, TweenRequest,
};
use crate::domain::card::CardData;
use crate::domain::geometry::{Axis, Transform, Vec3};
use crate::engine::RandomSource;
use crate::scene::CardVisual;

/// Сданная карта: данные + флаг "лицом вверх" + ссылки на визуал.
///
/// Позицией и поворотом владеет планировщик: после подачи запроса
/// движок их напрямую не трогает.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub entity: EntityId,
    pub data: CardData,
    pub is_face_up: bool,
    pub visual: CardVisual,
}

/// Твины одного переворота и его окно во времени (относительно подачи).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FlipSchedule {
    pub lift: TweenId,
    pub rotate: TweenId,
    pub descent: TweenId,
    pub starts_at: f32,
    pub ends_at: f32,
    /// Какой косметический поворот по Z выпал.
    pub twist: f32,
}

impl Card {
    /// Новая карта всегда рубашкой вверх.
    pub fn new(entity: EntityId, data: CardData, visual: CardVisual) -> Self {
        Self {
            entity,
            data,
            is_face_up: false,
            visual,
        }
    }

    /// Переместить карту в `target`. Не блокирует; ход и поворот независимы.
    pub fn move_to<S: AnimationScheduler + ?Sized>(
        &self,
        scheduler: &mut S,
        target: Vec3,
        delay: f32,
        duration: f32,
    ) -> TweenId {
        scheduler.submit(
            self.entity,
            TweenRequest::to(Channel::Position, target)
                .delay(delay)
                .duration(duration),
        )
    }

    /// Повернуть карту в `target` (углы Эйлера).
    pub fn rotate_to<S: AnimationScheduler + ?Sized>(
        &self,
        scheduler: &mut S,
        target: Vec3,
        delay: f32,
        duration: f32,
    ) -> TweenId {
        scheduler.submit(
            self.entity,
            TweenRequest::to(Channel::Rotation, target)
                .delay(delay)
                .duration(duration),
        )
    }

    /// Перевернуть карту.
    ///
    /// Составная хореография: подъём и поворот на противоположную сторону
    /// стартуют вместе через `delay`, опускание на высоту `rest_height` – после подъёма.
    /// `is_face_up` переключается сразу, при каждом вызове.
    pub fn flip<S, R>(
        &mut self,
        scheduler: &mut S,
        jitter: &mut R,
        rules: &FlipRules,
        rest_height: f32,
        delay: f32,
    ) -> FlipSchedule
    where
        S: AnimationScheduler + ?Sized,
        R: RandomSource + ?Sized,
    {
        self.is_face_up = !self.is_face_up;

        let twist = flip_twist(jitter, rules.twist_jitter);
        let side = if self.is_face_up {
            rules.face_up_rotation
        } else {
            rules.face_down_rotation
        };

        let lift = scheduler.submit(
            self.entity,
            TweenRequest::axis(Channel::Position, Axis::Y, Target::Relative(rules.lift_height))
                .delay(delay)
                .duration(rules.lift_duration)
                .easing(rules.lift_easing),
        );
        let rotate = scheduler.submit(
            self.entity,
            TweenRequest::to(Channel::Rotation, Vec3::new(side.x, side.y, side.z + twist))
                .delay(delay)
                .duration(rules.rotate_duration)
                .easing(rules.rotate_easing),
        );
        let descent = scheduler.submit(
            self.entity,
            TweenRequest::axis(Channel::Position, Axis::Y, Target::Absolute(rest_height))
                .delay(delay + rules.lift_duration)
                .duration(rules.lift_duration)
                .easing(rules.lift_easing),
        );

        FlipSchedule {
            lift,
            rotate,
            descent,
            starts_at: delay,
            ends_at: delay + rules.total_duration(),
            twist,
        }
    }

    /// Показать карту держащему её игроку: поворот в позу "в руке лицом к себе".
    /// В отличие от `flip`, флаг не переключается, а выставляется.
    pub fn reveal_to_viewer<S: AnimationScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        rotation: Vec3,
        delay: f32,
        duration: f32,
    ) -> TweenId {
        self.is_face_up = true;
        self.rotate_to(scheduler, rotation, delay, duration)
    }

    pub fn transform<S: AnimationScheduler + ?Sized>(&self, scheduler: &S) -> Option<Transform> {
        scheduler.transform(self.entity)
    }
}

/// Косметический поворот по Z для переворота: равномерно в [-amplitude, amplitude).
pub fn flip_twist<R: RandomSource + ?Sized>(rng: &mut R, amplitude: f32) -> f32 {
    (rng.unit_f32() * 2.0 - 1.0) * amplitude
}
