use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Vec3;

/// Индекс места за столом (0..SEAT_COUNT-1). Место 0 – игрок перед экраном.
pub type SeatIndex = usize;

/// Сколько мест за столом.
pub const SEAT_COUNT: usize = 6;
/// Сколько слотов под общие карты (3 флоп + тёрн + ривер).
pub const BOARD_SLOTS: usize = 5;
/// Место "героя", которому карты открываются сразу.
pub const HERO_SEAT: SeatIndex = 0;

/// Высота, на которой лежат карты борда (чуть выше сукна, Y = 0).
pub const BOARD_HEIGHT: f32 = 0.1;
/// Высота карманных карт у мест.
pub const SEAT_HEIGHT: f32 = 0.2;

/// Геометрия стола: фиксированные точки мест и слотов борда.
///
/// Позиции задаются снаружи и на время жизни стола не меняются;
/// движок раздачи их только читает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableLayout {
    /// Точки для карманных карт, индекс = SeatIndex.
    pub seats: [Vec3; SEAT_COUNT],
    /// Слоты борда 0..4: 0–2 флоп, 3 тёрн, 4 ривер.
    pub board_slots: [Vec3; BOARD_SLOTS],
    /// Откуда вылетают карты (колода).
    pub deck_position: Vec3,
    /// Центр стола – на него "смотрят" закрытые карты ботов.
    pub center: Vec3,
}

impl TableLayout {
    /// Ширина/глубина стола-"стадиона".
    pub const WIDTH: f32 = 30.0;
    pub const DEPTH: f32 = 16.0;

    /// Стандартный стол 30×16 на шесть мест.
    ///
    /// Карты ложатся на эллипс внутри сукна; углы мест идут от игрока (низ
    /// экрана) против часовой стрелки.
    pub fn standard() -> Self {
        let card_place_x = Self::WIDTH / 2.0 - 4.0;
        let card_place_z = Self::DEPTH / 2.0 - 3.0;

        let angles = [
            PI / 2.0,
            PI / 6.0,
            -PI / 6.0,
            -PI / 2.0,
            -5.0 * PI / 6.0,
            5.0 * PI / 6.0,
        ];
        let seats = angles.map(|a| {
            Vec3::new(a.cos() * card_place_x, SEAT_HEIGHT, a.sin() * card_place_z)
        });

        let mut board_slots = [Vec3::ZERO; BOARD_SLOTS];
        for (i, slot) in board_slots.iter_mut().enumerate() {
            *slot = Vec3::new((i as f32 - 2.0) * 3.0, BOARD_HEIGHT, 0.0);
        }

        Self {
            seats,
            board_slots,
            deck_position: Vec3::new(-10.0, 2.0, 0.0),
            center: Vec3::ZERO,
        }
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::standard()
    }
}
