//! Инфраструктурный слой вокруг движка раздачи:
//! - генерация ID;
//! - RNG-реализации для колоды и косметики.

pub mod ids;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use rng::*;
pub use rng_seed::RngSeed;
