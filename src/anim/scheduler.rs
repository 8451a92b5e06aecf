// src/anim/scheduler.rs
//! Табличный планировщик твинов на общем такте.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::geometry::{Axis, Transform};
use crate::infra::ids::IdGenerator;

use super::tween::axis_slot;
use super::{AnimationEvent, AnimationScheduler, EntityId, TweenId, TweenRequest};

/// Разрешённые значения оси: (откуда, куда).
type ResolvedAxes = [Option<(f32, f32)>; 3];

#[derive(Clone, Debug)]
struct ActiveTween {
    id: TweenId,
    entity: EntityId,
    request: TweenRequest,
    /// Абсолютное время старта по часам планировщика.
    start_at: f64,
    /// Заполняется в первый такт после истечения задержки.
    resolved: Option<ResolvedAxes>,
}

/// Планировщик, который сам владеет трансформами сущностей.
///
/// Пересекающиеся твины одной сущности не отменяют друг друга: каждый
/// доигрывает до конца, стартуя от живого значения свойства, а внутри
/// одного такта побеждает запись твина, поданного позже.
///
/// Часы в `f64`: растут всю сессию, а кадр в 1/60 с должен оставаться различимым.
#[derive(Debug, Default)]
pub struct TweenScheduler {
    now: f64,
    transforms: HashMap<EntityId, Transform>,
    /// Порядок = порядок подачи.
    active: Vec<ActiveTween>,
    ids: IdGenerator,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сколько сущностей сейчас живёт.
    pub fn entity_count(&self) -> usize {
        self.transforms.len()
    }

    /// Сколько твинов висит на сущности.
    pub fn pending_for(&self, entity: EntityId) -> usize {
        self.active.iter().filter(|t| t.entity == entity).count()
    }

    /// Момент, когда закончится последний из поставленных твинов.
    pub fn settles_at(&self) -> f64 {
        self.active
            .iter()
            .map(|t| t.start_at + f64::from(t.request.duration))
            .fold(self.now, f64::max)
    }
}

impl AnimationScheduler for TweenScheduler {
    fn spawn(&mut self, initial: Transform) -> EntityId {
        let id = self.ids.next_entity_id();
        self.transforms.insert(id, initial);
        id
    }

    fn despawn(&mut self, entity: EntityId) {
        self.transforms.remove(&entity);
        let before = self.active.len();
        self.active.retain(|t| t.entity != entity);
        let dropped = before - self.active.len();
        if dropped > 0 {
            trace!(%entity, dropped, "despawn dropped pending tweens");
        }
    }

    fn transform(&self, entity: EntityId) -> Option<Transform> {
        self.transforms.get(&entity).copied()
    }

    fn submit(&mut self, entity: EntityId, request: TweenRequest) -> TweenId {
        let id = self.ids.next_tween_id();
        let start_at = self.now + f64::from(request.delay);
        trace!(
            tween = id.0,
            %entity,
            channel = ?request.channel,
            start_at,
            duration = request.duration,
            "tween queued"
        );
        self.active.push(ActiveTween {
            id,
            entity,
            request,
            start_at,
            resolved: None,
        });
        id
    }

    fn advance(&mut self, dt: f32) -> Vec<AnimationEvent> {
        if dt > 0.0 {
            self.now += f64::from(dt);
        }
        let now = self.now;
        let mut events = Vec::new();

        let Self {
            transforms, active, ..
        } = self;

        active.retain_mut(|tween| {
            let Some(transform) = transforms.get_mut(&tween.entity) else {
                return false;
            };
            let elapsed = now - tween.start_at;
            if elapsed < 0.0 {
                return true;
            }
            // Отсчёт внутри твина мал, ему хватает f32.
            let local = elapsed as f32;

            let channel = tween.request.channel.select_mut(transform);

            let resolved = match tween.resolved {
                Some(r) => r,
                None => {
                    let mut r: ResolvedAxes = [None; 3];
                    for axis in Axis::ALL {
                        if let Some(target) = tween.request.target(axis) {
                            let from = channel.get(axis);
                            r[axis_slot(axis)] = Some((from, target.resolve(from)));
                        }
                    }
                    tween.resolved = Some(r);
                    trace!(tween = tween.id.0, entity = %tween.entity, "tween started");
                    events.push(AnimationEvent::Started {
                        tween: tween.id,
                        entity: tween.entity,
                    });
                    r
                }
            };

            let progress = if tween.request.duration <= 0.0 {
                1.0
            } else {
                (local / tween.request.duration).min(1.0)
            };
            let finished = progress >= 1.0;
            let eased = tween.request.easing.apply(progress);

            for axis in Axis::ALL {
                if let Some((from, to)) = resolved[axis_slot(axis)] {
                    let value = if finished {
                        to
                    } else {
                        from + (to - from) * eased
                    };
                    channel.set(axis, value);
                }
            }

            if finished {
                trace!(tween = tween.id.0, entity = %tween.entity, "tween completed");
                events.push(AnimationEvent::Completed {
                    tween: tween.id,
                    entity: tween.entity,
                });
            }
            !finished
        });

        events
    }

    fn now(&self) -> f64 {
        self.now
    }

    fn active_count(&self) -> usize {
        self.active.len()
    }
}
