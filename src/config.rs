//! Configuration management for colorstrip.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::colormaps::{ColorMapKind, ColorMapStyle};
use crate::error::{ColorStripError, Result};

/// Command-line arguments for colorstrip
#[derive(Parser, Debug)]
#[command(name = "colorstrip")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of the PNG file to write
    #[arg(short, long, env = "COLORSTRIP_OUTPUT", default_value = "colormap.png")]
    pub output: PathBuf,

    /// JSON grid file to take the value range from
    #[arg(short, long, env = "COLORSTRIP_GRID", conflicts_with_all = ["min", "max"])]
    pub grid: Option<PathBuf>,

    /// Lower bound of the color map
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Upper bound of the color map
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Color map kind (multicolor, two-color, unicolor)
    #[arg(short, long, env = "COLORSTRIP_KIND")]
    pub kind: Option<String>,

    /// Strip width in pixels
    #[arg(long, env = "COLORSTRIP_WIDTH")]
    pub width: Option<u32>,

    /// Strip height in pixels
    #[arg(long, env = "COLORSTRIP_HEIGHT")]
    pub height: Option<u32>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "COLORSTRIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "COLORSTRIP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Largest strip width or height in pixels
pub const MAX_STRIP_SIZE: u32 = 1 << 15;

/// Where the color map bounds come from
#[derive(Debug, Clone, PartialEq)]
pub enum RangeSource {
    /// Explicit bounds
    Bounds { min: f64, max: f64 },
    /// Full scan of a grid file
    Grid(PathBuf),
}

/// Strip rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripConfig {
    /// Strip width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Strip height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color map style
    #[serde(default)]
    pub style: ColorMapStyle,

    /// Strip configuration
    #[serde(default)]
    pub strip: StripConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Everything the command-line tool needs for one run
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub config: Config,
    pub range: RangeSource,
    pub output: PathBuf,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<RunPlan> {
        Self::from_args(Args::parse())
    }

    /// Resolve parsed arguments against the config file and defaults
    pub fn from_args(args: Args) -> Result<RunPlan> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(kind) = &args.kind {
            config.style.kind = ColorMapKind::parse_kind(kind)?;
        }
        if let Some(width) = args.width {
            config.strip.width = width;
        }
        if let Some(height) = args.height {
            config.strip.height = height;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        let range = match (args.grid, args.min, args.max) {
            (Some(path), _, _) => RangeSource::Grid(path),
            (None, min, max) => {
                let (min, max) = (min.unwrap_or(0.0), max.unwrap_or(1.0));
                if !min.is_finite() || !max.is_finite() {
                    return Err(ColorStripError::Config {
                        message: format!("Bounds must be finite, got [{}, {}]", min, max),
                    });
                }
                RangeSource::Bounds { min, max }
            }
        };

        Ok(RunPlan {
            config,
            range,
            output: args.output,
        })
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.style = other.style;
        self.strip = other.strip;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.strip.width == 0 || self.strip.height == 0 {
            return Err(ColorStripError::Config {
                message: format!(
                    "Strip size must be positive, got {}x{}",
                    self.strip.width, self.strip.height
                ),
            });
        }
        if self.strip.width > MAX_STRIP_SIZE || self.strip.height > MAX_STRIP_SIZE {
            return Err(ColorStripError::Config {
                message: format!(
                    "Strip size {}x{} exceeds the {} pixel limit",
                    self.strip.width, self.strip.height, MAX_STRIP_SIZE
                ),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ColorStripError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        self.style.validate().map_err(|e| ColorStripError::Config {
            message: e.to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: ColorMapStyle::default(),
            strip: StripConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

// Default value functions for serde
fn default_width() -> u32 {
    300
}

fn default_height() -> u32 {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}
