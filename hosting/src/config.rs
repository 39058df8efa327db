use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Seconds between automatic saves.
    pub autosave_interval: f32,
    pub database: String,
    /// Knowledge JSON replacing the reference data.
    pub knowledge: Option<String>,
    /// Seconds to run before shutting down, forever when missing.
    pub duration: Option<f32>,
    pub seed: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            autosave_interval: 30.0,
            database: "farmhand.sqlite".to_string(),
            knowledge: None,
            duration: None,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigurationError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for ConfigurationError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error)
    }
}

impl Configuration {
    pub fn from_file(path: &str) -> Result<Self, ConfigurationError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: Configuration = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn frame(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}
