//! RngSeed – доменный seed для RNG раздачи.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32] или u64 для тестов)
//!   - выводить независимые потоки через хэш:
//!         new = H(domain || old || stream || round_id)
//!   - создавать DeterministicRng из seed
//!
//! Колода и косметический "дребезг" переворота берут разные потоки,
//! поэтому подмена одного никак не влияет на другой.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::RoundId;
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Поток для перемешивания колоды.
    pub const DECK_STREAM: &'static [u8] = b"DECK";
    /// Поток для косметики (наклоны в колоде, дребезг переворота).
    pub const JITTER_STREAM: &'static [u8] = b"FLIP_JITTER";

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение: отдельный seed на поток и раунд.
    pub fn derive(&self, stream: &[u8], round_id: RoundId) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"POKER_DEALER_RNG_V1");
        hasher.update(self.bytes);
        // Длина потока, чтобы "AB"+"C" не совпало с "A"+"BC".
        hasher.update((stream.len() as u64).to_le_bytes());
        hasher.update(stream);
        hasher.update(round_id.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
