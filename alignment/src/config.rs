use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::observer::{ObserverLocation, parse_coordinate};
use crate::reticle::ReticleOrientation;

pub const CONFIG_PATH_ENV: &str = "POLARFINDER_CONFIG";

const APP_DIR_NAME: &str = "polarfinder";
const CONFIG_FILE_NAME: &str = "polarfinder.ini";

const OBSERVER_SECTION: &str = "observer";
const LATITUDE_KEY: &str = "latitude";
const LONGITUDE_KEY: &str = "longitude";

const DISPLAY_SECTION: &str = "display";
const INVERTED_KEY: &str = "inverted";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },
    #[error("failed to create config directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    pub observer: ObserverLocation,
    pub orientation: ReticleOrientation,
}

/// `POLARFINDER_CONFIG` if set, otherwise `<config dir>/polarfinder/polarfinder.ini`.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|path| !path.is_empty()) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// INI file holding the observer record. Every read goes to disk, every
/// write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(default_config_path())
    }
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file, section or keys all load as 0.0.
    pub fn load(&self) -> ObserverLocation {
        self.load_config().observer
    }

    pub fn load_config(&self) -> Config {
        let Some(ini) = self.read_ini() else {
            return Config::default();
        };

        let observer = ObserverLocation {
            latitude: self.read_coordinate(&ini, LATITUDE_KEY),
            longitude: self.read_coordinate(&ini, LONGITUDE_KEY),
        };

        let orientation = match ini
            .section(Some(DISPLAY_SECTION))
            .and_then(|section| section.get(INVERTED_KEY))
            .map(parse_bool)
        {
            Some(Some(false)) => ReticleOrientation::Direct,
            Some(Some(true)) | None => ReticleOrientation::Inverted,
            Some(None) => {
                tracing::warn!(
                    "Ignoring malformed '{INVERTED_KEY}' in {}",
                    self.path.display()
                );
                ReticleOrientation::default()
            }
        };

        Config {
            observer,
            orientation,
        }
    }

    /// Overwrites the observer record, creating the file and section when
    /// absent. Other sections are kept.
    pub fn save(&self, location: &ObserverLocation) -> Result<(), ConfigError> {
        self.update(|ini| {
            ini.with_section(Some(OBSERVER_SECTION))
                .set(LATITUDE_KEY, location.latitude.to_string())
                .set(LONGITUDE_KEY, location.longitude.to_string());
        })?;

        tracing::debug!("Saved observer {location} to {}", self.path.display());

        Ok(())
    }

    pub fn save_orientation(&self, orientation: ReticleOrientation) -> Result<(), ConfigError> {
        let inverted = orientation == ReticleOrientation::Inverted;
        self.update(|ini| {
            ini.with_section(Some(DISPLAY_SECTION))
                .set(INVERTED_KEY, inverted.to_string());
        })
    }

    /// Fails with [`ConfigError::Read`] when an existing file cannot be read
    /// or parsed; the file is left untouched.
    fn update(&self, apply: impl FnOnce(&mut Ini)) -> Result<(), ConfigError> {
        let mut ini = self
            .try_read_ini()
            .map_err(|source| ConfigError::Read {
                path: self.path.clone(),
                source,
            })?
            .unwrap_or_default();
        apply(&mut ini);

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        ini.write_to_file(&self.path)
            .map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })
    }

    fn read_ini(&self) -> Option<Ini> {
        self.try_read_ini().unwrap_or_else(|err| {
            tracing::warn!(
                "Failed to read config {}, using defaults: {err}",
                self.path.display()
            );
            None
        })
    }

    fn try_read_ini(&self) -> Result<Option<Ini>, ini::Error> {
        match Ini::load_from_file(&self.path) {
            Ok(ini) => Ok(Some(ini)),
            Err(ini::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn read_coordinate(&self, ini: &Ini, key: &str) -> f64 {
        let Some(text) = ini
            .section(Some(OBSERVER_SECTION))
            .and_then(|section| section.get(key))
        else {
            return 0.0;
        };

        parse_coordinate(text).unwrap_or_else(|err| {
            tracing::warn!("Invalid {key} in {}: {err}", self.path.display());
            0.0
        })
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
