//! Конфиг стола-раздатчика в TOML.
//!
//! Все поля необязательны: чего нет в файле – берётся из `standard()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anim::ChoreographyRules;
use crate::infra::RngSeed;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("битый TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DealerConfig {
    /// Фиксированный seed для воспроизводимых раздач; None – системная энтропия.
    pub seed: Option<u64>,
    pub choreography: ChoreographyRules,
}

impl DealerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn rng_seed(&self) -> Option<RngSeed> {
        self.seed.map(RngSeed::from_u64)
    }
}
