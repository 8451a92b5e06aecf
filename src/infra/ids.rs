use std::sync::atomic::{AtomicU64, Ordering};

use crate::anim::{EntityId, TweenId};
use crate::domain::RoundId;

/// Простая генерация ID на основе монотонных счётчиков.
#[derive(Debug)]
pub struct IdGenerator {
    entity_counter: AtomicU64,
    tween_counter: AtomicU64,
    round_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            entity_counter: AtomicU64::new(1),
            tween_counter: AtomicU64::new(1),
            round_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_entity_id(&self) -> EntityId {
        EntityId(self.entity_counter.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn next_tween_id(&self) -> TweenId {
        TweenId(self.tween_counter.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn next_round_id(&self) -> RoundId {
        self.round_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
