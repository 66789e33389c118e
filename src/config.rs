use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::dynamics::state::{Rocket, SimConfig};
use crate::error::Result;

/// Everything a run needs. Tables and keys left out of the file keep their
/// defaults.
///
/// ```toml
/// [sim]
/// dt = 0.01
/// t_max = 10.0
///
/// [rocket]
/// mass = 50.0
/// thrust = 500.0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub sim: SimConfig,
    pub rocket: Rocket,
}

impl RunConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.sim.validate()?;
        self.rocket.validate()
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let text = fs::read_to_string(path)?;
    RunConfig::from_toml(&text)
}
