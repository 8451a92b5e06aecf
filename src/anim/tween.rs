// src/anim/tween.rs
//! Декларативный запрос на анимацию: "свойство → цель, через delay, за duration".

use serde::{Deserialize, Serialize};

use crate::domain::geometry::{Axis, Transform, Vec3};

use super::Easing;

/// Какую часть трансформа двигает твин.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Channel {
    Position,
    Rotation,
}

impl Channel {
    pub fn select_mut(self, transform: &mut Transform) -> &mut Vec3 {
        match self {
            Channel::Position => &mut transform.position,
            Channel::Rotation => &mut transform.rotation,
        }
    }
}

/// Цель по одной оси.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum Target {
    /// Абсолютное значение.
    Absolute(f32),
    /// Смещение от значения, которое будет у свойства в момент старта твина.
    Relative(f32),
}

impl Target {
    pub fn resolve(self, from: f32) -> f32 {
        match self {
            Target::Absolute(v) => v,
            Target::Relative(dv) => from + dv,
        }
    }
}

/// Запрос на один твин. Оси без цели (`None`) твин не трогает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TweenRequest {
    pub channel: Channel,
    pub targets: [Option<Target>; 3],
    /// Задержка старта относительно момента подачи запроса.
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl TweenRequest {
    pub const DEFAULT_DURATION: f32 = 0.6;

    /// Твин всех трёх осей к абсолютной цели.
    pub fn to(channel: Channel, target: Vec3) -> Self {
        Self {
            channel,
            targets: [
                Some(Target::Absolute(target.x)),
                Some(Target::Absolute(target.y)),
                Some(Target::Absolute(target.z)),
            ],
            delay: 0.0,
            duration: Self::DEFAULT_DURATION,
            easing: Easing::default(),
        }
    }

    /// Твин одной оси.
    pub fn axis(channel: Channel, axis: Axis, target: Target) -> Self {
        let mut targets = [None; 3];
        targets[axis_slot(axis)] = Some(target);
        Self {
            channel,
            targets,
            delay: 0.0,
            duration: Self::DEFAULT_DURATION,
            easing: Easing::default(),
        }
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self, axis: Axis) -> Option<Target> {
        self.targets[axis_slot(axis)]
    }
}

pub(crate) fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}
