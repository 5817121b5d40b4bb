use std::{fs, path::Path};

use log::{info, warn};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

pub mod tree;
pub mod world;

pub use tree::{RubberTreeConfig, TreeDefinition};
pub use world::WorldConfig;

pub const CONFIG_FILE_NAME: &str = "terrestria.toml";

#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("failed to write default config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TerrestriaConfig {
    pub world: WorldConfig,
    pub rubber_tree: RubberTreeConfig,
}

impl LoadConfiguration for TerrestriaConfig {
    fn get_path() -> &'static Path {
        Path::new(CONFIG_FILE_NAME)
    }

    fn validate(&self) -> Result<(), LoadConfigError> {
        self.world.validate()?;
        self.rubber_tree.validate(&self.world)
    }
}

pub trait LoadConfiguration {
    /// Reads the config from `config_dir`, writing the defaults first when the file is missing.
    fn load(config_dir: &Path) -> Result<Self, LoadConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path)?;
            toml::from_str(&file_content)?
        } else {
            let content = Self::default();
            fs::create_dir_all(config_dir)?;
            fs::write(&path, toml::to_string(&content)?)?;
            info!("Wrote default configuration to {}", path.display());
            content
        };

        if let Err(err) = config.validate() {
            warn!("Rejecting configuration {}: {err}", path.display());
            return Err(err);
        }
        Ok(config)
    }

    /// Parses a config from TOML text without touching the filesystem.
    fn from_toml(content: &str) -> Result<Self, LoadConfigError>
    where
        Self: Sized + DeserializeOwned,
    {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), LoadConfigError>;
}
