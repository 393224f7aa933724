use std::{path::PathBuf, time::Duration};

use color_eyre::eyre::{bail, Result, WrapErr};
use config::ConfigError;
use serde::Deserialize;

use crate::{
    core::state::clock::{ClockFaceModel, ClockState},
    domain::{
        clock::{CounterMode, TimeUnit},
        geometry::{FaceGeometry, DEFAULT_FACE_DIAMETER, DEFAULT_HAND_MARGIN_WIDTH},
    },
    infrastructure::clock_service::TimerIntervals,
    presentation::config::{KeyBindings, Theme},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Timer cadence in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntervalsConfig {
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
}

impl Default for IntervalsConfig {
    fn default() -> Self {
        let ms = |unit: TimeUnit| unit.interval().as_millis() as u64;
        Self {
            seconds: ms(TimeUnit::Seconds),
            minutes: ms(TimeUnit::Minutes),
            hours: ms(TimeUnit::Hours),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub hand_margin_width: f64,
    pub face_diameter: f64,
    pub initial: ClockState,
    pub counter_mode: CounterMode,
    pub intervals_ms: IntervalsConfig,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            hand_margin_width: DEFAULT_HAND_MARGIN_WIDTH,
            face_diameter: DEFAULT_FACE_DIAMETER,
            initial: ClockState::DEMO,
            counter_mode: CounterMode::default(),
            intervals_ms: IntervalsConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub styles: Theme,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load the user's config files on top of the embedded defaults.
    ///
    /// Unlike the embedded file, user files are optional.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
            let mut cfg = default_config;
            cfg.config = AppConfig {
                _data_dir: data_dir,
                _config_dir: config_dir,
            };
            return Ok(cfg);
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.keybindings.merge_defaults(&default_config.keybindings);

        Ok(cfg)
    }

    /// The defaults shipped inside the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Validated face dimensions. Fails on a non-positive margin.
    pub fn face_geometry(&self) -> Result<FaceGeometry> {
        FaceGeometry::new(self.clock.face_diameter, self.clock.hand_margin_width)
            .wrap_err("invalid clock configuration")
    }

    pub fn timer_intervals(&self) -> Result<TimerIntervals> {
        let ms = self.clock.intervals_ms;
        for (unit, value) in [
            (TimeUnit::Seconds, ms.seconds),
            (TimeUnit::Minutes, ms.minutes),
            (TimeUnit::Hours, ms.hours),
        ] {
            if value == 0 {
                bail!("clock.intervals_ms.{unit} must be greater than zero");
            }
        }
        Ok(TimerIntervals {
            seconds: Duration::from_millis(ms.seconds),
            minutes: Duration::from_millis(ms.minutes),
            hours: Duration::from_millis(ms.hours),
        })
    }

    pub fn clock_model(&self) -> ClockFaceModel {
        ClockFaceModel::with_mode(self.clock.initial, self.clock.counter_mode)
    }
}
