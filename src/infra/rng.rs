use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// RNG на системной энтропии (thread_rng) – для реальной игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn index_below(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }

    fn unit_f32(&mut self) -> f32 {
        rand::thread_rng().gen::<f32>()
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn index_below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    fn unit_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }
}
