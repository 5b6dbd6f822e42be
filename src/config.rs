use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::LaunchDashError;
use crate::dataset::DEFAULT_DATASET_FILE;
use crate::layout::DEFAULT_PAYLOAD_STEP;

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_DIR_NAME: &str = "launchdash";
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub payload_step: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_FILE),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            payload_step: DEFAULT_PAYLOAD_STEP,
        }
    }
}

impl DashboardConfig {
    pub fn default_path() -> Result<PathBuf, LaunchDashError> {
        Ok(dirs::config_dir()
            .ok_or(LaunchDashError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Reads the config from the user's config directory, if one was saved there.
    pub fn from_local_file() -> Result<Option<Self>, LaunchDashError> {
        let config_path = match dirs::config_dir() {
            Some(dir) => dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
            None => return Ok(None),
        };

        if config_path.exists() {
            Self::from_file(&config_path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn from_file(config_path: &Path) -> Result<Self, LaunchDashError> {
        let file = std::fs::File::open(config_path)
            .map_err(|e| LaunchDashError::ConfigIOError { source: e })?;
        let config: Self = serde_json::from_reader(file)
            .map_err(|e| LaunchDashError::ConfigSerializeError { source: e })?;
        config.validate()?;

        info!("Loaded dashboard config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self, config_path: &Path) -> Result<(), LaunchDashError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LaunchDashError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| LaunchDashError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| LaunchDashError::ConfigSerializeError { source: e })
    }

    pub fn validate(&self) -> Result<(), LaunchDashError> {
        if !self.payload_step.is_finite() || self.payload_step <= 0. {
            return Err(LaunchDashError::InvalidConfig {
                field: "payload_step".to_string(),
                reason: format!("must be a positive number, got {}", self.payload_step),
            });
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
