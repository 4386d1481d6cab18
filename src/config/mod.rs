mod error;

pub use error::{ConfigError, ConfigResult};

use crate::console::VerbosityLevel;
use crate::list::DragTolerance;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const CONFIG_KEYS: &[&str] = &[
    "verbosity",
    "list.item_count",
    "list.item_height",
    "list.wheel_step",
    "drag.vertical_tolerance",
    "drag.horizontal_tolerance",
];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_item_count")]
    pub item_count: usize,
    /// Rows per item in the terminal view.
    #[serde(default = "default_item_height")]
    pub item_height: f64,
    /// Items moved per mouse wheel notch.
    #[serde(default = "default_wheel_step")]
    pub wheel_step: usize,
}

fn default_item_count() -> usize {
    10_000
}

fn default_item_height() -> f64 {
    1.0
}

fn default_wheel_step() -> usize {
    3
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            item_height: default_item_height(),
            wheel_step: default_wheel_step(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DragConfig {
    #[serde(default = "default_vertical_tolerance")]
    pub vertical_tolerance: f64,
    #[serde(default = "default_horizontal_tolerance")]
    pub horizontal_tolerance: f64,
}

fn default_vertical_tolerance() -> f64 {
    DragTolerance::default().vertical
}

fn default_horizontal_tolerance() -> f64 {
    DragTolerance::default().horizontal
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            vertical_tolerance: default_vertical_tolerance(),
            horizontal_tolerance: default_horizontal_tolerance(),
        }
    }
}

impl DragConfig {
    pub fn tolerance(&self) -> DragTolerance {
        DragTolerance {
            vertical: self.vertical_tolerance,
            horizontal: self.horizontal_tolerance,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub verbosity: Option<String>,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub drag: DragConfig,
}

impl AppConfig {
    /// Loads `path`, creating it with defaults if it does not exist yet.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::read(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Reads and validates an existing config file.
    pub fn read(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(ref verbosity) = self.verbosity {
            if VerbosityLevel::parse(verbosity).is_none() {
                return Err(invalid("verbosity", verbosity));
            }
        }
        // the terminal view draws whole rows
        if !(self.list.item_height.is_finite() && self.list.item_height >= 1.0) {
            return Err(invalid("list.item_height", self.list.item_height));
        }
        for (field, value) in [
            ("drag.vertical_tolerance", self.drag.vertical_tolerance),
            ("drag.horizontal_tolerance", self.drag.horizontal_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, value));
            }
        }
        Ok(())
    }

    /// Updates one dotted key (see [`CONFIG_KEYS`]) from its string form.
    pub fn set_value(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let mut updated = self.clone();
        match key {
            "verbosity" => updated.verbosity = Some(value.to_string()),
            "list.item_count" => updated.list.item_count = parse_field(key, value)?,
            "list.item_height" => updated.list.item_height = parse_field(key, value)?,
            "list.wheel_step" => updated.list.wheel_step = parse_field(key, value)?,
            "drag.vertical_tolerance" => updated.drag.vertical_tolerance = parse_field(key, value)?,
            "drag.horizontal_tolerance" => {
                updated.drag.horizontal_tolerance = parse_field(key, value)?
            }
            _ => {
                return Err(ConfigError::UnknownConfigKey {
                    key: key.to_string(),
                });
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Get the configured verbosity level, falling back to Normal if not set
    pub fn get_verbosity(&self) -> VerbosityLevel {
        self.verbosity
            .as_deref()
            .and_then(VerbosityLevel::parse)
            .unwrap_or(VerbosityLevel::Normal)
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = Some(verbosity.to_string());
    }

    pub fn config_path() -> ConfigResult<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| ConfigError::NoHomeDirectory)?;
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("virtlist");
        path.push("config.toml");
        Ok(path)
    }
}

fn invalid(field: &str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| invalid(field, value))
}

#[cfg(test)]
mod tests;
