use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::anim::EntityId;

use super::{CardVisual, SceneSurface, StatusSink};

/// Что сцена видела: добавления и удаления по порядку.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneLog {
    pub added: Vec<EntityId>,
    pub removed: Vec<EntityId>,
}

impl SceneLog {
    /// Сущности, которые добавлены и ещё не убраны.
    pub fn live(&self) -> Vec<EntityId> {
        self.added
            .iter()
            .copied()
            .filter(|id| !self.removed.contains(id))
            .collect()
    }
}

/// Сцена-заглушка для тестов и dev-CLI.
/// Клоны делят один журнал, так что копию можно оставить себе для проверок.
#[derive(Clone, Debug, Default)]
pub struct RecordingScene {
    log: Rc<RefCell<SceneLog>>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SceneLog {
        self.log.borrow().clone()
    }
}

impl SceneSurface for RecordingScene {
    fn add(&mut self, entity: EntityId, _visual: &CardVisual) {
        self.log.borrow_mut().added.push(entity);
    }

    fn remove(&mut self, entity: EntityId) {
        self.log.borrow_mut().removed.push(entity);
    }
}

/// Статус, который копит все строки (клоны делят журнал).
#[derive(Clone, Debug, Default)]
pub struct RecordingStatus {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }
}

impl StatusSink for RecordingStatus {
    fn set_status(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

/// Статус в лог.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingStatus;

impl StatusSink for TracingStatus {
    fn set_status(&mut self, text: &str) {
        info!(status = text, "table status");
    }
}
