use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{CardData, Rank, Suit};
use crate::engine::RandomSource;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Попытка взять карту из пустой колоды.
///
/// В корректной раздаче такого быть не может (за раунд уходит максимум
/// 2×6 + 5 = 17 карт), так что это нарушение контракта, а не пользовательская ошибка.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("колода пуста: нужно {requested} карт, осталось {remaining}")]
pub struct EmptyDeckError {
    pub requested: usize,
    pub remaining: usize,
}

/// Колода карт: стек, верх колоды – конец вектора.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<CardData>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// ♠ 2..A, ♥ 2..A, ♣ 2..A, ♦ 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(CardData::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Пересобрать все 52 комбинации и перемешать на месте.
    /// Предыдущее содержимое колоды выбрасывается.
    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::standard_52();
        shuffle(&mut self.cards, rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw(&mut self) -> Result<CardData, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError {
            requested: 1,
            remaining: 0,
        })
    }

    /// Взять n карт сверху – всё или ничего.
    /// Если карт меньше n, колода не меняется.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<CardData>, EmptyDeckError> {
        if self.cards.len() < n {
            return Err(EmptyDeckError {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let split = self.cards.len() - n;
        let mut taken = self.cards.split_off(split);
        // Порядок выдачи как у последовательных draw(): сначала верхняя.
        taken.reverse();
        Ok(taken)
    }
}

/// Несмещённое перемешивание Фишера–Йетса:
/// для i от последнего индекса до 1 меняем i с равновероятным j из [0, i].
pub fn shuffle<T, R: RandomSource + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.index_below(i + 1);
        slice.swap(i, j);
    }
}
