use core::fmt;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::domain::card::CardData;

use super::CardAssets;

/// Непрозрачная ссылка на текстуру, которой владеет рендерер.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(Arc<str>);

impl TextureHandle {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Один и тот же ли это объект (а не просто одинаковое имя).
    pub fn same_instance(&self, other: &TextureHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static SHARED_BACK: OnceLock<TextureHandle> = OnceLock::new();

/// Общая на процесс рубашка: создаётся при первом обращении и дальше только читается.
pub fn shared_back_texture() -> TextureHandle {
    SHARED_BACK
        .get_or_init(|| TextureHandle::new("back:neon-circuit"))
        .clone()
}

/// Процедурные "неоновые" лица карт: красные масти – розовые, чёрные – циановые.
#[derive(Debug, Default)]
pub struct ProceduralAssets {
    faces: HashMap<CardData, TextureHandle>,
}

impl ProceduralAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сколько уникальных лиц уже сгенерировано.
    pub fn generated_faces(&self) -> usize {
        self.faces.len()
    }
}

impl CardAssets for ProceduralAssets {
    fn face(&mut self, card: CardData) -> TextureHandle {
        self.faces
            .entry(card)
            .or_insert_with(|| {
                let tint = if card.suit.is_red() { "#ff0055" } else { "#00ccff" };
                TextureHandle::new(format!("face:{card}:{tint}"))
            })
            .clone()
    }

    fn back(&mut self) -> TextureHandle {
        shared_back_texture()
    }
}
