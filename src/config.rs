use crate::error::ConfigError;
use crate::ray::DEFAULT_MAX_TRACE_STEPS;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScreenConfig {
    /// Edge length of the square area the grid covers.
    #[serde(default = "default_dimension")]
    pub dimension: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_path")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TraceConfig {
    /// Grid lines a ray may cross per family before giving up.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_angle_step")]
    pub angle_step: f32,
    #[serde(default = "default_column_width")]
    pub column_width: f32,
    #[serde(default = "default_max_wall_height")]
    pub max_wall_height: f32,
    #[serde(default)]
    pub fisheye_correction: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_x")]
    pub x: f32,
    #[serde(default = "default_player_y")]
    pub y: f32,
    #[serde(default = "default_player_angle")]
    pub angle: f32,
    #[serde(default = "default_move_step")]
    pub move_step: f32,
    #[serde(default = "default_turn_step")]
    pub turn_step: f32,
    #[serde(default = "default_collision")]
    pub collision: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_target_fps")]
    pub target_fps: u64,
}

fn default_dimension() -> f32 { 512.0 }
fn default_map_path() -> String { "maps/level.txt".to_string() }
fn default_max_steps() -> usize { DEFAULT_MAX_TRACE_STEPS }
fn default_fov() -> f32 { 60.0 }
fn default_angle_step() -> f32 { 1.0 }
fn default_column_width() -> f32 { 6.0 }
fn default_max_wall_height() -> f32 { 256.0 }
fn default_player_x() -> f32 { 100.0 }
fn default_player_y() -> f32 { 100.0 }
fn default_player_angle() -> f32 { 90.0 }
fn default_move_step() -> f32 { 10.0 }
fn default_turn_step() -> f32 { 10.0 }
fn default_collision() -> bool { true }
fn default_title() -> String { "gridcast".to_string() }
fn default_target_fps() -> u64 { 144 }

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov: default_fov(),
            angle_step: default_angle_step(),
            column_width: default_column_width(),
            max_wall_height: default_max_wall_height(),
            fisheye_correction: false,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: default_player_x(),
            y: default_player_y(),
            angle: default_player_angle(),
            move_step: default_move_step(),
            turn_step: default_turn_step(),
            collision: default_collision(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            target_fps: default_target_fps(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            map: MapConfig::default(),
            trace: TraceConfig::default(),
            projection: ProjectionConfig::default(),
            player: PlayerConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Load configuration from file, or use defaults if it is missing or
    /// unusable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded configuration from {}", path.display());
                config
            }
            Err(ConfigError::Io(err)) => {
                log::info!("no configuration at {} ({err}), using defaults", path.display());
                Config::default()
            }
            Err(err) => {
                log::warn!("failed to load {}: {err}", path.display());
                log::warn!("using default configuration");
                Config::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let dimension = self.screen.dimension;
        if !dimension.is_finite() || dimension <= 0. {
            return Err(ConfigError::Invalid(format!(
                "screen.dimension must be positive, got {dimension}"
            )));
        }

        let projection = &self.projection;
        if !(projection.fov > 0. && projection.fov <= 360.) {
            return Err(ConfigError::Invalid(format!(
                "projection.fov must be in (0, 360], got {}",
                projection.fov
            )));
        }
        if !(projection.angle_step > 0.) || projection.angle_step > projection.fov {
            return Err(ConfigError::Invalid(format!(
                "projection.angle_step must be in (0, fov], got {}",
                projection.angle_step
            )));
        }
        if projection.fisheye_correction && projection.fov >= 180. {
            return Err(ConfigError::Invalid(format!(
                "projection.fov must be below 180 with fisheye_correction, got {}",
                projection.fov
            )));
        }
        if !(projection.max_wall_height > 0.) {
            return Err(ConfigError::Invalid(format!(
                "projection.max_wall_height must be positive, got {}",
                projection.max_wall_height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.trace.max_steps, 10);
        assert_eq!(config.projection.fov, 60.);
        assert_eq!(config.player.angle, 90.);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [trace]
            max_steps = 24

            [projection]
            fisheye_correction = true

            [player]
            x = 40.0
            "#,
        )
        .unwrap();
        assert_eq!(config.trace.max_steps, 24);
        assert!(config.projection.fisheye_correction);
        assert_eq!(config.projection.column_width, 6.);
        assert_eq!(config.player.x, 40.);
        assert_eq!(config.player.y, 100.);
        assert_eq!(config.map.path, "maps/level.txt");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_toml("[screen]\ndimension = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("[projection]\nangle_step = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("[trace]\nmax_steps = \"ten\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn fisheye_correction_needs_a_narrow_view() {
        assert!(matches!(
            Config::from_toml("[projection]\nfov = 200.0\nfisheye_correction = true"),
            Err(ConfigError::Invalid(_))
        ));
        let config = Config::from_toml("[projection]\nfov = 200.0").unwrap();
        assert_eq!(config.projection.fov, 200.);
        let config =
            Config::from_toml("[projection]\nfov = 90.0\nfisheye_correction = true").unwrap();
        assert!(config.projection.fisheye_correction);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("does/not/exist.toml");
        assert_eq!(config, Config::default());
    }
}
